//! Helpers for the General tab's free-form minutes/seconds fields.

use crate::sanitize_seconds;

/// Parse one numeric field. Empty, malformed, negative or non-finite text
/// counts as zero, matching what a browser number input coerces to.
pub fn parse_duration_field(input: &str) -> f64 {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().map(sanitize_seconds).unwrap_or(0.0)
}

/// Combine the minutes and seconds fields into a total in seconds.
pub fn manual_total_seconds(minutes: &str, seconds: &str) -> f64 {
    parse_duration_field(minutes) * 60.0 + parse_duration_field(seconds)
}

/// Split a whole-second duration back into field text, e.g. `90` → `("1", "30")`.
pub fn split_minutes_seconds(total_secs: f64) -> (String, String) {
    let whole = sanitize_seconds(total_secs).floor() as u64;
    ((whole / 60).to_string(), (whole % 60).to_string())
}
