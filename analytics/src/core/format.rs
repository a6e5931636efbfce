//! Formatting helpers for presenting analytics values.

use api::Fraction;
use time::macros::format_description;
use time::Date;

/// Parse a backend calendar date (`YYYY-MM-DD`); None on format drift.
pub fn parse_iso_date(raw: &str) -> Option<Date> {
    Date::parse(raw, &format_description!("[year]-[month]-[day]")).ok()
}

/// Axis label for a week start: `3/8` for 2025-03-08, `—` when unparsable.
pub fn week_label(iso: &str) -> String {
    match parse_iso_date(iso) {
        Some(date) => format!("{}/{}", date.month() as u8, date.day()),
        None => "—".to_string(),
    }
}

/// Percent points with tenth-of-a-point precision, e.g. `8.0%`.
pub fn pct_points(delta: Fraction) -> String {
    format!("{:.1}%", delta.as_percent_points())
}

/// Explicitly signed delta rounded to two decimals with trailing zeros
/// dropped: `+0.5`, `-1.25`, `+2`.
pub fn signed_trimmed(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 {
        "+0".to_string()
    } else if rounded > 0.0 {
        format!("+{rounded}")
    } else {
        format!("{rounded}")
    }
}

/// Compact period header, `2025-03-01 → 2025-03-28`.
pub fn date_range_label(start: &str, end: &str) -> String {
    format!("{start} → {end}")
}
