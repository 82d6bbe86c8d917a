use regex::Regex;
use std::sync::OnceLock;

const DRIVE_HOST: &str = "drive.google.com";

/// Drive file ids are long runs of url-safe characters.
fn drive_file_id_regex() -> Option<&'static Regex> {
    static REGEX: OnceLock<Option<Regex>> = OnceLock::new();
    REGEX
        .get_or_init(|| Regex::new(r"[-A-Za-z0-9_]{25,}").ok())
        .as_ref()
}

/// URL to show in the full-size image viewer.
///
/// Google Drive share links cannot be embedded directly, so they are rewritten
/// to the thumbnail endpoint. Everything else is returned as given.
pub fn lightbox_url(raw: Option<&str>) -> Option<String> {
    let url = raw.filter(|u| !u.is_empty())?;

    if url.contains(DRIVE_HOST) {
        if let Some(file_id) = drive_file_id_regex().and_then(|re| re.find(url)) {
            return Some(format!(
                "https://{DRIVE_HOST}/thumbnail?id={}&sz=w1000",
                file_id.as_str()
            ));
        }
    }

    Some(url.to_string())
}
