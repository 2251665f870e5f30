use chrono::{DateTime, NaiveDate, NaiveDateTime};

pub struct TimeUtils;

impl TimeUtils {
    pub const STANDARD_TIME_FORMAT: &str = "%Y-%m-%d";
    pub const DISPLAY_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
}

/// Parses an upstream `last_update` stamp.
/// Accepts RFC 3339 (`2025-01-31T09:00:00+09:00`), naive ISO 8601 as written by
/// Python's `isoformat()` (`2025-01-31T09:00:00.123456`) and bare dates.
pub fn parse_timestamp(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.naive_local());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, fmt) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(text, TimeUtils::STANDARD_TIME_FORMAT)
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Display form of a `last_update` stamp. Unparseable text is shown verbatim.
pub fn format_timestamp(text: &str) -> String {
    match parse_timestamp(text) {
        Some(dt) => dt.format(TimeUtils::DISPLAY_TIME_FORMAT).to_string(),
        None => text.to_string(),
    }
}
