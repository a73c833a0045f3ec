//! Fixed date and date-time patterns used throughout the patient book.
//!
//! Dates are written `dd-MM-yyyy` (e.g. `01-01-2001`) and date-times
//! `dd-MM-yyyy-HH-mm` (e.g. `01-01-2001-07-00`).

use crate::error::DateFormatError;
use chrono::{NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

/// chrono format string for dates.
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// chrono format string for date-times.
pub const DATE_TIME_FORMAT: &str = "%d-%m-%Y-%H-%M";

/// Human-readable date pattern, used in messages.
pub const DATE_PATTERN: &str = "dd-MM-yyyy";

/// Human-readable date-time pattern, used in messages.
pub const DATE_TIME_PATTERN: &str = "dd-MM-yyyy-HH-mm";

/// chrono accepts single-digit fields and signed years of any width, so the
/// exact layout is checked before handing the input to chrono.
static DATE_LAYOUT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{2}-[0-9]{2}-[0-9]{4}$").expect("Failed to compile date layout regex")
});

static DATE_TIME_LAYOUT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{2}-[0-9]{2}-[0-9]{4}-[0-9]{2}-[0-9]{2}$")
        .expect("Failed to compile date-time layout regex")
});

/// Parse a date in the fixed pattern. Input is expected to be trimmed.
pub fn parse_date(input: &str) -> Result<NaiveDate, DateFormatError> {
    if !DATE_LAYOUT_REGEX.is_match(input) {
        return Err(DateFormatError::Layout(DATE_PATTERN));
    }
    Ok(NaiveDate::parse_from_str(input, DATE_FORMAT)?)
}

/// Parse a date-time in the fixed pattern. Input is expected to be trimmed.
pub fn parse_date_time(input: &str) -> Result<NaiveDateTime, DateFormatError> {
    if !DATE_TIME_LAYOUT_REGEX.is_match(input) {
        return Err(DateFormatError::Layout(DATE_TIME_PATTERN));
    }
    Ok(NaiveDateTime::parse_from_str(input, DATE_TIME_FORMAT)?)
}

pub fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn format_date_time(date_time: &NaiveDateTime) -> String {
    date_time.format(DATE_TIME_FORMAT).to_string()
}

/// Serde adapter writing a `NaiveDateTime` in the fixed date-time pattern.
///
/// Use with `#[serde(with = "crate::datetime::date_time_format")]`.
pub mod date_time_format {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_date_time(value))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        super::parse_date_time(crate::parser::trim_input(&s)).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_parse_date() {
        let date = parse_date("15-03-2024").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
    }

    #[test]
    fn test_parse_date_rejects_other_layouts() {
        assert!(parse_date("2024-03-15").is_err());
        assert!(parse_date("15/03/2024").is_err());
        assert!(parse_date("31-02-2024").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn test_parse_date_requires_full_width_fields() {
        let inputs = [
            "1-1-2001",
            "01-01-01",
            "01-01-+2001",
            "1-01-2001",
            "01-1-2001",
            "01-01-20011",
        ];
        for input in inputs {
            assert_eq!(
                parse_date(input),
                Err(DateFormatError::Layout(DATE_PATTERN)),
                "input {:?}",
                input
            );
        }
    }

    #[test]
    fn test_parse_date_impossible_day_is_chrono_error() {
        assert!(matches!(parse_date("31-02-2024"), Err(DateFormatError::Chrono(_))));
    }

    #[test]
    fn test_parse_date_time_requires_full_width_fields() {
        let inputs = [
            "1-01-2001-7-0",
            "01-01-2001-7-00",
            "01-01-01-07-00",
            "01-01-+2001-07-00",
        ];
        for input in inputs {
            assert_eq!(
                parse_date_time(input),
                Err(DateFormatError::Layout(DATE_TIME_PATTERN)),
                "input {:?}",
                input
            );
        }
    }

    #[test]
    fn test_parse_date_time() {
        let dt = parse_date_time("01-01-2001-07-30").unwrap();
        assert_eq!(dt.date(), NaiveDate::from_ymd_opt(2001, 1, 1).unwrap());
        assert_eq!(dt.hour(), 7);
        assert_eq!(dt.minute(), 30);
    }

    #[test]
    fn test_parse_date_time_rejects_date_only() {
        assert!(parse_date_time("01-01-2001").is_err());
        assert!(parse_date_time("01-01-2001-25-00").is_err());
    }

    #[test]
    fn test_format_round_trip() {
        let dt = parse_date_time("09-12-2023-18-05").unwrap();
        assert_eq!(format_date_time(&dt), "09-12-2023-18-05");

        let date = parse_date("09-12-2023").unwrap();
        assert_eq!(format_date(&date), "09-12-2023");
    }
}
