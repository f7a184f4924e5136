//! Total conversions from raw JSON field values to scalars.
//!
//! Upstream records are often sparse or malformed, so none of these functions
//! fail: anything that does not convert cleanly becomes `None`.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use serde_json::Value;

/// Timestamps keep the offset the API reported; offset-less values are UTC.
pub type Timestamp = DateTime<FixedOffset>;

const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
];

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%m/%d/%Y %H:%M:%S",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%m-%d-%Y"];

/// Converts a number or numeric string to a finite `f64`.
pub fn safe_float(value: Option<&Value>) -> Option<f64> {
    let parsed = match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    parsed.is_finite().then_some(parsed)
}

/// Converts an integer or integer string to `i64`. JSON floats are truncated;
/// decimal strings such as `"1.5"` are rejected.
pub fn safe_int(value: Option<&Value>) -> Option<i64> {
    match value? {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

/// Reads a text field. Numbers and booleans are rendered as text since the
/// API is not consistent about quoting identifiers.
pub fn safe_string(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Parses a timestamp field; see [`parse_timestamp_str`].
pub fn parse_timestamp(value: Option<&Value>) -> Option<Timestamp> {
    match value? {
        Value::String(s) => parse_timestamp_str(s),
        _ => None,
    }
}

/// Parses the date/time forms the API emits: RFC 3339, the
/// `spaceSepToSeconds` form (`2023-01-01 12:00:00`), and bare dates.
pub fn parse_timestamp_str(input: &str) -> Option<Timestamp> {
    let s = input.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt);
    }
    for fmt in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }
    for fmt in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(naive.and_utc().fixed_offset());
        }
    }
    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            return date
                .and_hms_opt(0, 0, 0)
                .map(|naive| naive.and_utc().fixed_offset());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, Timelike};
    use serde_json::json;

    use super::*;

    #[test]
    fn float_rejects_garbage_without_panicking() {
        assert_eq!(safe_float(Some(&json!("not-a-number"))), None);
        assert_eq!(safe_float(None), None);
        assert_eq!(safe_float(Some(&Value::Null)), None);
        assert_eq!(safe_float(Some(&json!(""))), None);
        assert_eq!(safe_float(Some(&json!("NaN"))), None);
        assert_eq!(safe_float(Some(&json!(true))), None);
    }

    #[test]
    fn float_accepts_numbers_and_numeric_strings() {
        assert_eq!(safe_float(Some(&json!("543592.3"))), Some(543592.3));
        assert_eq!(safe_float(Some(&json!(" -104.9 "))), Some(-104.9));
        assert_eq!(safe_float(Some(&json!(12))), Some(12.0));
        assert_eq!(safe_float(Some(&json!(1.5e3))), Some(1500.0));
    }

    #[test]
    fn int_conversions() {
        assert_eq!(safe_int(Some(&json!("1"))), Some(1));
        assert_eq!(safe_int(Some(&json!(7))), Some(7));
        assert_eq!(safe_int(Some(&json!(7.9))), Some(7));
        assert_eq!(safe_int(Some(&json!("1.5"))), None);
        assert_eq!(safe_int(Some(&json!("abc"))), None);
        assert_eq!(safe_int(Some(&json!(""))), None);
        assert_eq!(safe_int(None), None);
    }

    #[test]
    fn string_renders_scalars() {
        assert_eq!(safe_string(Some(&json!("0100578"))).as_deref(), Some("0100578"));
        assert_eq!(safe_string(Some(&json!(42))).as_deref(), Some("42"));
        assert_eq!(safe_string(Some(&Value::Null)), None);
        assert_eq!(safe_string(Some(&json!(["a"]))), None);
    }

    #[test]
    fn timestamp_rfc3339_keeps_offset() {
        let ts = parse_timestamp(Some(&json!("2010-03-04T07:36:20+00:00"))).unwrap();
        assert_eq!(ts.year(), 2010);
        assert_eq!(ts.hour(), 7);
        assert_eq!(ts.offset().local_minus_utc(), 0);

        let ts = parse_timestamp_str("2023-06-01T12:00:00-06:00").unwrap();
        assert_eq!(ts.offset().local_minus_utc(), -6 * 3600);
    }

    #[test]
    fn timestamp_space_separated_and_dates() {
        let ts = parse_timestamp_str("2023-01-01 12:30:45").unwrap();
        assert_eq!((ts.hour(), ts.minute(), ts.second()), (12, 30, 45));

        let ts = parse_timestamp_str("2023-01-01 12:30:45.5").unwrap();
        assert_eq!(ts.second(), 45);

        let ts = parse_timestamp_str("2021-10-05").unwrap();
        assert_eq!((ts.month(), ts.day(), ts.hour()), (10, 5, 0));

        let ts = parse_timestamp_str("10/05/2021").unwrap();
        assert_eq!((ts.year(), ts.month(), ts.day()), (2021, 10, 5));
    }

    #[test]
    fn timestamp_rejects_garbage() {
        assert!(parse_timestamp_str("").is_none());
        assert!(parse_timestamp_str("yesterday").is_none());
        assert!(parse_timestamp_str("2021-13-45").is_none());
        assert!(parse_timestamp(Some(&json!(20210101))).is_none());
        assert!(parse_timestamp(None).is_none());
    }
}
