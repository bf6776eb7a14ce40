// Appointment date/time helpers

use chrono::{NaiveDate, NaiveDateTime};

const INPUT_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"];
const DISPLAY_FORMAT: &str = "%b %-d, %Y, %-I:%M %p";

/// Render a raw `YYYY-MM-DDTHH:MM` value as `Apr 30, 2025, 10:30 AM`.
/// Anything that does not parse is returned unchanged.
pub fn format_date_time(raw: &str) -> String {
    INPUT_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|dt| dt.format(DISPLAY_FORMAT).to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// `YYYY-MM-DD` prefix used to match appointments against a calendar date.
pub fn date_prefix(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Plain string-prefix test, no timezone handling.
pub fn falls_on(raw: &str, date: NaiveDate) -> bool {
    raw.starts_with(&date_prefix(date))
}
