//! Clinical fields of a patient record: ward, diagnosis, medication and notes.

use crate::error::{ParseError, ParseResult};
use once_cell::sync::Lazy;
use regex::Regex;

/// The first character must not be ASCII whitespace, otherwise " " would be valid.
static NOT_BLANK_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^ \t\n\x0B\x0C\r].*$").expect("Failed to compile not-blank regex")
});

/// The ward a patient is admitted to, e.g. `A1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ward(String);

impl Ward {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Wards can take any values";

    pub fn new(ward: impl Into<String>) -> ParseResult<Self> {
        let ward = ward.into();
        if !Self::is_valid(&ward) {
            return Err(ParseError::invalid_format(Self::MESSAGE_CONSTRAINTS));
        }
        Ok(Self(ward))
    }

    /// Every string is a valid ward.
    pub fn is_valid(_test: &str) -> bool {
        true
    }
}

string_value_impls!(Ward);

/// The condition a patient is being treated for.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Diagnosis(String);

impl Diagnosis {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Diagnosis can take any values, and it should not be blank";

    pub fn new(diagnosis: impl Into<String>) -> ParseResult<Self> {
        let diagnosis = diagnosis.into();
        if !Self::is_valid(&diagnosis) {
            return Err(ParseError::invalid_format(Self::MESSAGE_CONSTRAINTS));
        }
        Ok(Self(diagnosis))
    }

    pub fn is_valid(test: &str) -> bool {
        NOT_BLANK_REGEX.is_match(test)
    }
}

string_value_impls!(Diagnosis);

/// The medication a patient is currently prescribed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Medication(String);

impl Medication {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Medication can take any values, and it should not be blank";

    pub fn new(medication: impl Into<String>) -> ParseResult<Self> {
        let medication = medication.into();
        if !Self::is_valid(&medication) {
            return Err(ParseError::invalid_format(Self::MESSAGE_CONSTRAINTS));
        }
        Ok(Self(medication))
    }

    pub fn is_valid(test: &str) -> bool {
        NOT_BLANK_REGEX.is_match(test)
    }
}

string_value_impls!(Medication);

/// Free-form notes about a patient. May be empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Notes(String);

impl Notes {
    pub fn new(notes: impl Into<String>) -> ParseResult<Self> {
        Ok(Self(notes.into()))
    }

    /// Notes with no content.
    pub fn empty() -> Self {
        Self(String::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

string_value_impls!(Notes);
