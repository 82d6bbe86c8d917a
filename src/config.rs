use std::time::Duration;

use crate::modules::navigation::application::DEFAULT_MIN_DISPLAY;
use crate::modules::portfolio::adapter::outgoing::http_portfolio_query::DEFAULT_TIMEOUT;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_ENV: &str = "development";
const DEFAULT_LOCAL_SMTP_HOST: &str = "localhost";
const DEFAULT_LOCAL_SMTP_PORT: u16 = 1025;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{key}={value:?} is invalid: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmtpRelayConfig {
    pub server: String,
    pub username: String,
    pub password: String,
    pub from_email: String,
    pub to_email: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalSmtpConfig {
    pub host: String,
    pub port: u16,
    pub from_email: String,
    pub to_email: String,
}

/// Where contact messages go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactTransport {
    Noop,
    Smtp(SmtpRelayConfig),
    /// Unauthenticated SMTP, e.g. Mailpit during development.
    Local(LocalSmtpConfig),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub rust_env: String,
    /// `None` serves the dataset embedded in the binary.
    pub portfolio_api_base_url: Option<String>,
    pub portfolio_api_timeout: Duration,
    pub page_loader_min_display: Duration,
    pub contact: ContactTransport,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let portfolio_api_timeout = match get("PORTFOLIO_API_TIMEOUT_SECS") {
            Some(raw) => Duration::from_secs(parse_positive("PORTFOLIO_API_TIMEOUT_SECS", &raw)?),
            None => DEFAULT_TIMEOUT,
        };

        let page_loader_min_display = match get("PAGE_LOADER_MIN_MS") {
            Some(raw) => Duration::from_millis(parse::<u64>("PAGE_LOADER_MIN_MS", &raw)?),
            None => DEFAULT_MIN_DISPLAY,
        };

        Ok(Self {
            host: get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: match get("PORT") {
                Some(raw) => parse("PORT", &raw)?,
                None => DEFAULT_PORT,
            },
            rust_env: get("RUST_ENV").unwrap_or_else(|| DEFAULT_ENV.to_string()),
            portfolio_api_base_url: get("PORTFOLIO_API_BASE_URL")
                .map(|url| validate_base_url(&url))
                .transpose()?,
            portfolio_api_timeout,
            page_loader_min_display,
            contact: contact_transport(&get)?,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn contact_transport<G>(get: &G) -> Result<ContactTransport, ConfigError>
where
    G: Fn(&str) -> Option<String>,
{
    let require = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

    let transport = get("CONTACT_TRANSPORT").map(|t| t.to_ascii_lowercase());
    match transport.as_deref() {
        None | Some("noop") => Ok(ContactTransport::Noop),
        Some("smtp") => Ok(ContactTransport::Smtp(SmtpRelayConfig {
            server: require("SMTP_SERVER")?,
            username: require("SMTP_USERNAME")?,
            password: require("SMTP_PASSWORD")?,
            from_email: require("EMAIL_FROM")?,
            to_email: require("CONTACT_TO_EMAIL")?,
        })),
        Some("local") => Ok(ContactTransport::Local(LocalSmtpConfig {
            host: get("SMTP_HOST").unwrap_or_else(|| DEFAULT_LOCAL_SMTP_HOST.to_string()),
            port: match get("SMTP_PORT") {
                Some(raw) => parse("SMTP_PORT", &raw)?,
                None => DEFAULT_LOCAL_SMTP_PORT,
            },
            from_email: require("EMAIL_FROM")?,
            to_email: require("CONTACT_TO_EMAIL")?,
        })),
        Some(other) => Err(ConfigError::Invalid {
            key: "CONTACT_TRANSPORT",
            value: other.to_string(),
            reason: "expected one of noop, smtp, local".to_string(),
        }),
    }
}

fn parse<T>(key: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.parse().map_err(|e: T::Err| ConfigError::Invalid {
        key,
        value: raw.to_string(),
        reason: e.to_string(),
    })
}

fn parse_positive(key: &'static str, raw: &str) -> Result<u64, ConfigError> {
    match parse::<u64>(key, raw)? {
        0 => Err(ConfigError::Invalid {
            key,
            value: raw.to_string(),
            reason: "must be greater than zero".to_string(),
        }),
        n => Ok(n),
    }
}

fn validate_base_url(url: &str) -> Result<String, ConfigError> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(url.to_string())
    } else {
        Err(ConfigError::Invalid {
            key: "PORTFOLIO_API_BASE_URL",
            value: url.to_string(),
            reason: "must start with http:// or https://".to_string(),
        })
    }
}
