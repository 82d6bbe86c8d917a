/// Normalizes a stored media reference into something the browser can fetch.
///
/// Absolute `http(s)` URLs, inline `data:` URIs and paths already rooted at
/// `/uploads` pass through untouched. Any other relative reference is rooted
/// at `/`. The function is total and idempotent.
pub fn resolve_media_url(raw: Option<&str>) -> String {
    let trimmed = match raw.map(str::trim) {
        Some(value) if !value.is_empty() => value,
        _ => return String::new(),
    };

    if has_http_scheme(trimmed) || trimmed.starts_with("data:") {
        return trimmed.to_string();
    }

    if trimmed.starts_with("/uploads") {
        return trimmed.to_string();
    }

    if trimmed.starts_with("uploads") || !trimmed.starts_with('/') {
        return format!("/{trimmed}");
    }

    trimmed.to_string()
}

fn has_http_scheme(value: &str) -> bool {
    ["http://", "https://"].iter().any(|scheme| {
        value
            .get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}
