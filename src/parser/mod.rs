//! Parsing of raw field strings into validated domain values.
//!
//! Every function trims its input, checks it against the target type's
//! format, and either returns the value or a [`ParseError`] whose message is
//! the field's fixed constraint text. The functions are pure and keep no
//! state, so callers can use them from any command or form handler.

use crate::datetime::{self, DATE_PATTERN, DATE_TIME_PATTERN};
use crate::domain::{
    Address, Diagnosis, Email, Index, Medication, Name, Notes, PatientId, Phone, Tag, Ward,
};
use crate::error::{ParseError, ParseResult};
use crate::models::Appointment;
use chrono::{NaiveDate, NaiveDateTime};
use std::collections::HashSet;

pub const MESSAGE_INVALID_INDEX: &str = "Index is not a non-zero unsigned integer.";

pub const MESSAGE_INVALID_DATE: &str =
    "Invalid date format! Dates should be given as dd-MM-yyyy, e.g. 01-01-2001";

/// Strip leading and trailing ASCII control characters and spaces.
///
/// Non-ASCII whitespace such as U+00A0 is kept and left to the field's
/// format check.
pub fn trim_input(raw: &str) -> &str {
    raw.trim_matches(|c: char| c <= ' ')
}

/// Trim `raw` and hand it to `build`, logging which field rejected it.
///
/// Only the field name is logged; values may be patient data.
fn parse_field<T>(
    raw: &str,
    field: &'static str,
    build: impl FnOnce(String) -> ParseResult<T>,
) -> ParseResult<T> {
    build(trim_input(raw).to_string()).map_err(|e| {
        tracing::debug!(field, reason = %e, "Rejected field value");
        e
    })
}

/// Returns true if `s` is a base-10 integer in `1..=i32::MAX` with no sign.
fn is_non_zero_unsigned_integer(s: &str) -> bool {
    if s.starts_with('+') {
        return false;
    }
    matches!(s.parse::<i32>(), Ok(value) if value > 0)
}

/// Parse a one-based index as typed by the user.
///
/// # Errors
///
/// Fails with [`MESSAGE_INVALID_INDEX`] unless the trimmed input is a
/// non-zero unsigned integer.
pub fn parse_index(one_based_index: &str) -> ParseResult<Index> {
    let trimmed = trim_input(one_based_index);
    if !is_non_zero_unsigned_integer(trimmed) {
        tracing::debug!(field = "index", "Rejected field value");
        return Err(ParseError::invalid_format(MESSAGE_INVALID_INDEX));
    }
    trimmed
        .parse::<usize>()
        .ok()
        .and_then(Index::from_one_based)
        .ok_or_else(|| ParseError::invalid_format(MESSAGE_INVALID_INDEX))
}

pub fn parse_id(id: &str) -> ParseResult<PatientId> {
    parse_field(id, "id", PatientId::new)
}

pub fn parse_name(name: &str) -> ParseResult<Name> {
    parse_field(name, "name", Name::new)
}

pub fn parse_ward(ward: &str) -> ParseResult<Ward> {
    parse_field(ward, "ward", Ward::new)
}

pub fn parse_diagnosis(diagnosis: &str) -> ParseResult<Diagnosis> {
    parse_field(diagnosis, "diagnosis", Diagnosis::new)
}

pub fn parse_medication(medication: &str) -> ParseResult<Medication> {
    parse_field(medication, "medication", Medication::new)
}

/// Notes accept anything, including an empty string.
pub fn parse_notes(notes: &str) -> ParseResult<Notes> {
    parse_field(notes, "notes", Notes::new)
}

pub fn parse_phone(phone: &str) -> ParseResult<Phone> {
    parse_field(phone, "phone", Phone::new)
}

pub fn parse_address(address: &str) -> ParseResult<Address> {
    parse_field(address, "address", Address::new)
}

pub fn parse_email(email: &str) -> ParseResult<Email> {
    parse_field(email, "email", Email::new)
}

pub fn parse_tag(tag: &str) -> ParseResult<Tag> {
    parse_field(tag, "tag", Tag::new)
}

/// Parse a collection of tag names into a set, dropping duplicates.
///
/// # Errors
///
/// Fails on the first invalid tag with [`Tag::MESSAGE_CONSTRAINTS`].
pub fn parse_tags<I, S>(tags: I) -> ParseResult<HashSet<Tag>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tags.into_iter().map(|tag| parse_tag(tag.as_ref())).collect()
}

/// Trim an appointment description, rejecting an empty one.
pub fn parse_appointment_description(description: &str) -> ParseResult<String> {
    let trimmed = trim_input(description);
    if trimmed.is_empty() {
        tracing::debug!(field = "appointment description", "Rejected field value");
        return Err(ParseError::invalid_format(
            Appointment::MESSAGE_EMPTY_DESCRIPTION,
        ));
    }
    Ok(trimmed.to_string())
}

/// Parse a date-time written `dd-MM-yyyy-HH-mm`.
///
/// # Errors
///
/// Fails with `Invalid date-time format: <input>` when the fields are not
/// exactly two-digit day, month, hour and minute with a four-digit year, or
/// do not form a real date-time. The [`crate::DateFormatError`] is kept as
/// the source.
pub fn parse_local_date_time(date_time: &str) -> ParseResult<NaiveDateTime> {
    let trimmed = trim_input(date_time);
    datetime::parse_date_time(trimmed).map_err(|e| {
        tracing::debug!(
            field = "date-time",
            pattern = DATE_TIME_PATTERN,
            reason = %e,
            "Rejected field value"
        );
        ParseError::with_source(format!("Invalid date-time format: {}", trimmed), e)
    })
}

/// Parse a date written `dd-MM-yyyy`.
///
/// # Errors
///
/// Fails with [`MESSAGE_INVALID_DATE`] when the input is not exactly
/// `dd-MM-yyyy` or is not a real date, keeping the [`crate::DateFormatError`]
/// as the source.
pub fn parse_local_date(date: &str) -> ParseResult<NaiveDate> {
    let trimmed = trim_input(date);
    datetime::parse_date(trimmed).map_err(|e| {
        tracing::debug!(
            field = "date",
            pattern = DATE_PATTERN,
            reason = %e,
            "Rejected field value"
        );
        ParseError::with_source(MESSAGE_INVALID_DATE, e)
    })
}

/// Parse the three parts of an appointment and build it.
///
/// # Errors
///
/// Fails on the first invalid part, or if `end` is before `start`.
pub fn parse_appointment(description: &str, start: &str, end: &str) -> ParseResult<Appointment> {
    let description = parse_appointment_description(description)?;
    let start = parse_local_date_time(start)?;
    let end = parse_local_date_time(end)?;
    Appointment::new(description, start, end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_parse_index_valid() {
        assert_eq!(parse_index("1").unwrap().zero_based(), 0);
        assert_eq!(parse_index("  10  ").unwrap().zero_based(), 9);
        assert_eq!(parse_index("2147483647").unwrap().one_based(), 2147483647);
    }

    #[test]
    fn test_parse_index_invalid() {
        for input in ["0", "-1", "abc", "", "  ", "+1", "1 2", "1.0", "2147483648"] {
            let err = parse_index(input).unwrap_err();
            assert_eq!(err.message(), MESSAGE_INVALID_INDEX, "input {:?}", input);
        }
    }

    #[test]
    fn test_parse_name_trims() {
        let name = parse_name("  Rachel Walker  ").unwrap();
        assert_eq!(name.as_str(), "Rachel Walker");
    }

    #[test]
    fn test_trim_input_strips_ascii_only() {
        assert_eq!(trim_input("\t Alex Yeoh \r\n"), "Alex Yeoh");
        assert_eq!(trim_input("\u{0007}P12345\u{001F}"), "P12345");
        assert_eq!(trim_input("\u{00A0}Alex Yeoh\u{2003}"), "\u{00A0}Alex Yeoh\u{2003}");
    }

    #[test]
    fn test_parse_keeps_non_ascii_whitespace() {
        assert_eq!(
            parse_name("\u{00A0}Alex Yeoh").unwrap_err().message(),
            Name::MESSAGE_CONSTRAINTS
        );
        assert_eq!(parse_diagnosis("\u{2003}Flu").unwrap().as_str(), "\u{2003}Flu");
        assert_eq!(parse_address("\u{00A0}").unwrap().as_str(), "\u{00A0}");
    }

    #[test]
    fn test_parse_name_invalid() {
        for input in ["", "   ", "R@chel"] {
            assert_eq!(
                parse_name(input).unwrap_err().message(),
                Name::MESSAGE_CONSTRAINTS
            );
        }
    }

    #[test]
    fn test_parse_id_and_ward_are_permissive() {
        assert_eq!(parse_id(" P12345 ").unwrap().as_str(), "P12345");
        assert_eq!(parse_ward(" B1 ").unwrap().as_str(), "B1");
        assert!(parse_id("").is_ok());
    }

    #[test]
    fn test_parse_clinical_fields() {
        assert_eq!(
            parse_diagnosis(" Streptococcus Pneumoniae ").unwrap().as_str(),
            "Streptococcus Pneumoniae"
        );
        assert_eq!(
            parse_medication("Oxygen Therapy\t").unwrap().as_str(),
            "Oxygen Therapy"
        );
        assert_eq!(
            parse_diagnosis("  ").unwrap_err().message(),
            Diagnosis::MESSAGE_CONSTRAINTS
        );
        assert_eq!(
            parse_medication("").unwrap_err().message(),
            Medication::MESSAGE_CONSTRAINTS
        );
        assert!(parse_notes("   ").unwrap().is_empty());
    }

    #[test]
    fn test_parse_contact_fields() {
        assert_eq!(parse_phone(" 123456 ").unwrap().as_str(), "123456");
        assert_eq!(
            parse_phone("+651234").unwrap_err().message(),
            Phone::MESSAGE_CONSTRAINTS
        );
        assert_eq!(
            parse_address(" 123 Main Street #0505 ").unwrap().as_str(),
            "123 Main Street #0505"
        );
        assert_eq!(
            parse_address("").unwrap_err().message(),
            Address::MESSAGE_CONSTRAINTS
        );
        assert_eq!(
            parse_email(" rachel@example.com ").unwrap().as_str(),
            "rachel@example.com"
        );
        assert_eq!(
            parse_email("example.com").unwrap_err().message(),
            Email::MESSAGE_CONSTRAINTS
        );
    }

    #[test]
    fn test_parse_tags_deduplicates() {
        let tags = parse_tags(["a", "a", "b"]).unwrap();
        assert_eq!(tags.len(), 2);
        assert!(tags.contains(&Tag::new("a").unwrap()));
        assert!(tags.contains(&Tag::new("b").unwrap()));
    }

    #[test]
    fn test_parse_tags_empty() {
        let tags = parse_tags(Vec::<String>::new()).unwrap();
        assert!(tags.is_empty());
    }

    #[test]
    fn test_parse_tags_fails_on_invalid() {
        let err = parse_tags(vec!["friend".to_string(), "#friend".to_string()]).unwrap_err();
        assert_eq!(err.message(), Tag::MESSAGE_CONSTRAINTS);
    }

    #[test]
    fn test_parse_appointment_description() {
        assert_eq!(parse_appointment_description("  X-ray ").unwrap(), "X-ray");
        assert_eq!(
            parse_appointment_description(" ").unwrap_err().message(),
            "Appointment description cannot be empty."
        );
    }

    #[test]
    fn test_parse_local_date_round_trip() {
        let date = parse_local_date(" 29-02-2024 ").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert_eq!(datetime::format_date(&date), "29-02-2024");
    }

    #[test]
    fn test_parse_local_date_invalid() {
        for input in [
            "2024-02-29",
            "29-02-2023",
            "tomorrow",
            "",
            "1-1-2001",
            "01-01-01",
            "01-01-+2001",
        ] {
            let err = parse_local_date(input).unwrap_err();
            assert_eq!(err.message(), MESSAGE_INVALID_DATE);
            assert!(err.source().is_some());
        }
    }

    #[test]
    fn test_parse_local_date_time() {
        let dt = parse_local_date_time("01-01-2001-07-00").unwrap();
        assert_eq!(datetime::format_date_time(&dt), "01-01-2001-07-00");

        let err = parse_local_date_time(" 01-01-2001 07:00 ").unwrap_err();
        assert_eq!(err.message(), "Invalid date-time format: 01-01-2001 07:00");
        assert!(err.source().is_some());

        let err = parse_local_date_time("1-01-2001-7-0").unwrap_err();
        assert_eq!(err.message(), "Invalid date-time format: 1-01-2001-7-0");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_parse_appointment() {
        let appt = parse_appointment(" Surgery ", "01-01-2001-01-00", "01-01-2001-07-00").unwrap();
        assert_eq!(appt.description(), "Surgery");

        let err = parse_appointment("Surgery", "01-01-2001-07-00", "01-01-2001-01-00").unwrap_err();
        assert_eq!(err.message(), Appointment::MESSAGE_END_BEFORE_START);

        let err = parse_appointment("Surgery", "soon", "01-01-2001-01-00").unwrap_err();
        assert_eq!(err.message(), "Invalid date-time format: soon");
    }
}
