pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::ApiDoc;
use crate::config::{AppConfig, ContactTransport};
use crate::modules::contact::adapter::outgoing::{NoopContactSender, SmtpContactSender};
use crate::modules::contact::application::ports::incoming::use_cases::SubmitContactMessageUseCase;
use crate::modules::contact::application::ports::outgoing::ContactSender;
use crate::modules::contact::application::services::SubmitContactMessageService;
use crate::modules::navigation::application::LoadingOrchestrator;
use crate::modules::portfolio::adapter::outgoing::{HttpPortfolioQuery, StaticPortfolioQuery};
use crate::modules::portfolio::application::aggregator::PortfolioAggregator;
use crate::modules::portfolio::application::portfolio_use_cases::PortfolioUseCases;
use crate::modules::portfolio::application::ports::outgoing::PortfolioQuery;
use crate::modules::portfolio::application::services::{
    GetProjectByIdService, GetServicesService,
};
use crate::shared::api::custom_json_config;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub portfolio: PortfolioUseCases,
    pub submit_contact_message: Arc<dyn SubmitContactMessageUseCase + Send + Sync>,
    pub loading_orchestrator: Arc<LoadingOrchestrator>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Try .env.{environment} first, then fall back to .env
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let config = AppConfig::from_env().context("Invalid configuration")?;

    // Data gateway
    let query: Arc<dyn PortfolioQuery + Send + Sync> = match &config.portfolio_api_base_url {
        Some(base_url) => {
            info!(%base_url, "Using portfolio REST backend");
            Arc::new(
                HttpPortfolioQuery::new(base_url, config.portfolio_api_timeout)
                    .context("Failed to build portfolio HTTP client")?,
            )
        }
        None => {
            info!("Using embedded portfolio dataset");
            Arc::new(StaticPortfolioQuery::embedded().context("Embedded dataset is invalid")?)
        }
    };

    let aggregator = PortfolioAggregator::spawn(Arc::clone(&query));

    // Contact delivery
    let contact_sender: Arc<dyn ContactSender + Send + Sync> = match &config.contact {
        ContactTransport::Noop => {
            warn!("CONTACT_TRANSPORT is noop; contact messages are accepted but not delivered");
            Arc::new(NoopContactSender)
        }
        ContactTransport::Smtp(smtp) => Arc::new(
            SmtpContactSender::new_relay(
                &smtp.server,
                &smtp.username,
                &smtp.password,
                &smtp.from_email,
                &smtp.to_email,
            )
            .context("Failed to configure SMTP relay")?,
        ),
        ContactTransport::Local(local) => Arc::new(SmtpContactSender::new_local(
            &local.host,
            local.port,
            &local.from_email,
            &local.to_email,
        )),
    };

    let state = AppState {
        portfolio: PortfolioUseCases {
            aggregator: Arc::clone(&aggregator),
            get_project_by_id: Arc::new(GetProjectByIdService::new(Arc::clone(&query))),
            get_services: Arc::new(GetServicesService::new(query)),
        },
        submit_contact_message: Arc::new(SubmitContactMessageService::new(contact_sender)),
        loading_orchestrator: Arc::new(LoadingOrchestrator::new(config.page_loader_min_display)),
    };

    let server_url = config.bind_address();
    info!("Server run on: {}", server_url);

    let orchestrator = Arc::clone(&state.loading_orchestrator);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(custom_json_config())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
            .configure(init_routes)
    })
    .bind(&server_url)
    .with_context(|| format!("Failed to bind {server_url}"))?
    .run()
    .await?;

    aggregator.teardown().await;
    orchestrator.teardown();
    info!("Server stopped");

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::modules::contact::adapter::incoming::web::routes as contact;
    use crate::modules::navigation::adapter::incoming::web::routes as navigation;
    use crate::modules::portfolio::adapter::incoming::web::routes as portfolio;

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Portfolio
    cfg.service(portfolio::get_portfolio_handler);
    cfg.service(portfolio::refresh_portfolio_handler);
    // Pages
    cfg.service(portfolio::get_home_handler);
    cfg.service(portfolio::get_about_handler);
    cfg.service(portfolio::get_projects_handler);
    cfg.service(portfolio::get_single_project_handler);
    cfg.service(portfolio::get_services_handler);
    cfg.service(portfolio::get_contact_handler);
    // Contact
    cfg.service(contact::submit_contact_message_handler);
    // Navigation
    cfg.service(navigation::navigate_handler);
    cfg.service(navigation::get_loading_state_handler);
    cfg.service(navigation::show_loading_handler);
    cfg.service(navigation::hide_loading_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}
