//! Display formatting for spreadsheet date serials and time fractions

use chrono::{Duration, NaiveDate};
use serde_json::Value;

use super::record::display_value;

const MINUTES_PER_DAY: f64 = 24.0 * 60.0;

/// Format a 1900-epoch day serial as a long en-US date
///
/// The serial is counted from 1900-01-01 with a 2-day correction, so `45726`
/// becomes "Monday, March 10, 2025". Fractional serials are truncated toward
/// zero before the correction is applied. Returns "Invalid Date" for
/// non-finite or out-of-range input.
pub fn format_date(serial: f64) -> String {
    if !serial.is_finite() {
        return "Invalid Date".to_string();
    }

    // Day 1 of the month plus (serial - 2), truncated like Date.setDate
    let offset = ((serial - 1.0).trunc() as i64).saturating_sub(1);

    NaiveDate::from_ymd_opt(1900, 1, 1)
        .zip(Duration::try_days(offset))
        .and_then(|(base, delta)| base.checked_add_signed(delta))
        .map(|date| date.format("%A, %B %-d, %Y").to_string())
        .unwrap_or_else(|| "Invalid Date".to_string())
}

/// Format a fraction of a day as `H:MM`
///
/// Hours are unpadded, minutes are zero-padded, seconds are floored away.
/// Negative fractions count back from midnight with a non-negative minute
/// part (15 minutes before midnight is `-1:45`).
pub fn format_time(serial: f64) -> String {
    if !serial.is_finite() {
        return "Invalid Time".to_string();
    }

    let minutes = (serial * MINUTES_PER_DAY).floor() as i64;
    let hours = minutes.div_euclid(60);
    let mins = minutes.rem_euclid(60);
    format!("{}:{:02}", hours, mins)
}

/// Numeric serial held by a cell, accepting numbers and numeric text
fn cell_serial(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Render a `Date` cell; non-numeric cells are shown as-is
pub fn date_cell(value: &Value) -> String {
    match cell_serial(value) {
        Some(serial) => format_date(serial),
        None => display_value(Some(value)),
    }
}

/// Render a `Time` cell; non-numeric cells are shown as-is
pub fn time_cell(value: &Value) -> String {
    match cell_serial(value) {
        Some(serial) => format_time(serial),
        None => display_value(Some(value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_date_epoch_rule() {
        // 1900-01-01 (Monday) + 43 days
        assert_eq!(format_date(45.0), "Tuesday, February 13, 1900");
        assert_eq!(format_date(2.0), "Monday, January 1, 1900");
    }

    #[test]
    fn test_format_date_modern_serial() {
        assert_eq!(format_date(45726.0), "Monday, March 10, 2025");
        assert_eq!(format_date(45658.0), "Wednesday, January 1, 2025");
    }

    #[test]
    fn test_format_date_truncates_fraction() {
        assert_eq!(format_date(45726.75), format_date(45726.0));
    }

    #[test]
    fn test_format_date_invalid() {
        assert_eq!(format_date(f64::NAN), "Invalid Date");
        assert_eq!(format_date(f64::INFINITY), "Invalid Date");
        assert_eq!(format_date(1e300), "Invalid Date");
        assert_eq!(format_date(-1e300), "Invalid Date");
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0.0), "0:00");
        assert_eq!(format_time(0.5), "12:00");
        assert_eq!(format_time(0.75), "18:00");
        // half a minute past keeps floor arithmetic away from rounding edges
        assert_eq!(format_time(5.5 / 1440.0), "0:05");
        assert_eq!(format_time(545.5 / 1440.0), "9:05");
        assert_eq!(format_time(870.5 / 1440.0), "14:30");
    }

    #[test]
    fn test_format_time_negative_and_invalid() {
        assert_eq!(format_time(-0.25), "-6:00");
        assert_eq!(format_time(-14.5 / 1440.0), "-1:45");
        assert_eq!(format_time(f64::NAN), "Invalid Time");
    }

    #[test]
    fn test_cells() {
        assert_eq!(date_cell(&json!(45726)), "Monday, March 10, 2025");
        assert_eq!(date_cell(&json!("45726")), "Monday, March 10, 2025");
        assert_eq!(date_cell(&json!("tomorrow")), "tomorrow");
        assert_eq!(time_cell(&json!(0.5)), "12:00");
        assert_eq!(time_cell(&json!("10:30")), "10:30");
    }
}
