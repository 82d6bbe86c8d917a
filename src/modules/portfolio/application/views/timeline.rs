use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

pub const NOT_AVAILABLE: &str = "N/A";
/// Open-ended period suffix on experience cards.
pub const ONGOING_SHORT: &str = "Now";
/// Open-ended period suffix on detail views and education entries.
pub const ONGOING_LONG: &str = "Present";
pub const NO_EXPIRATION: &str = "No Expiration";

/// Accepts RFC 3339 timestamps, `YYYY-MM-DD` and `YYYY-MM-DDTHH:MM:SS`.
pub fn parse_date(raw: Option<&str>) -> Option<NaiveDate> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

pub fn year_of(raw: Option<&str>) -> Option<i32> {
    parse_date(raw).map(|d| d.year())
}

/// `2024`, or `N/A`.
pub fn year_label(raw: Option<&str>) -> String {
    year_of(raw)
        .map(|y| y.to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// `Mar 2023`, or `N/A`.
pub fn month_year_label(raw: Option<&str>) -> String {
    parse_date(raw)
        .map(|d| d.format("%b %Y").to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// `2021 - 2023`, or `2021 - <ongoing>` when there is no effective end date.
pub fn year_period(start: Option<&str>, effective_end: Option<&str>, ongoing: &str) -> String {
    let end = match effective_end {
        Some(end) => year_label(Some(end)),
        None => ongoing.to_string(),
    };
    format!("{} - {}", year_label(start), end)
}

/// `Jun 2023 - Sep 2023`, or `Feb 2024 - Present`.
pub fn month_year_period(start: Option<&str>, effective_end: Option<&str>) -> String {
    let end = match effective_end {
        Some(end) => month_year_label(Some(end)),
        None => ONGOING_LONG.to_string(),
    };
    format!("{} - {}", month_year_label(start), end)
}

/// `Expires Nov 2025`, or `No Expiration`.
pub fn expiry_label(expire_date: Option<&str>) -> String {
    match expire_date.filter(|d| !d.trim().is_empty()) {
        Some(date) => format!("Expires {}", month_year_label(Some(date))),
        None => NO_EXPIRATION.to_string(),
    }
}

/// Splits bullet text on `•` or newlines, dropping blank lines.
pub fn bullets(description: &str) -> Vec<String> {
    description
        .split(['•', '\n'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
