//! Time utilities

use chrono::{DateTime, FixedOffset, Utc};

use crate::constants::{DATE_STRING_LENGTH, RENDERED_DATE_FORMAT};

/// Parse a datetime string in ISO 8601 format
pub fn parse_datetime(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
}

/// Render a datetime the way a browser's `Date.toString()` starts out,
/// e.g. `Mon Jan 15 2024 00:00:00 GMT+0000`
pub fn render_datetime(dt: DateTime<Utc>, offset: &FixedOffset) -> String {
    dt.with_timezone(offset)
        .format(RENDERED_DATE_FORMAT)
        .to_string()
}

/// Keep the leading "weekday month day year" part of a rendered datetime
pub fn truncate_date_string(rendered: &str) -> String {
    rendered.chars().take(DATE_STRING_LENGTH).collect()
}

/// Render and truncate in one step
pub fn date_string(dt: DateTime<Utc>, offset: &FixedOffset) -> String {
    truncate_date_string(&render_datetime(dt, offset))
}

/// Format milliseconds as a human-readable string
pub fn format_milliseconds(ms: f64) -> String {
    if ms < 1000.0 {
        format!("{}ms", ms.round() as i64)
    } else if ms < 60000.0 {
        format!("{:.2}s", ms / 1000.0)
    } else {
        let seconds = (ms / 1000.0) as i64;
        let minutes = seconds / 60;
        let remaining_seconds = seconds % 60;
        format!("{}m {}s", minutes, remaining_seconds)
    }
}
