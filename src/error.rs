//! Error types for wardbook.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::PatientId;
use thiserror::Error;

/// Error returned when a raw string cannot be turned into a domain value.
///
/// There is a single kind, invalid format, carrying the human-readable
/// constraint message of the field that rejected the input. Date and
/// date-time failures keep the underlying [`DateFormatError`] as their source.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Input did not satisfy the field's format constraint
    #[error("{message}")]
    InvalidFormat {
        message: String,
        #[source]
        source: Option<DateFormatError>,
    },
}

impl ParseError {
    /// Create an invalid-format error with the given constraint message.
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::InvalidFormat {
            message: message.into(),
            source: None,
        }
    }

    /// Create an invalid-format error wrapping a date or date-time failure.
    pub fn with_source(message: impl Into<String>, source: impl Into<DateFormatError>) -> Self {
        Self::InvalidFormat {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// The constraint message shown to the user.
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidFormat { message, .. } => message,
        }
    }
}

/// Why a date or date-time string was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateFormatError {
    /// Field widths or separators do not follow the fixed pattern
    #[error("expected the pattern {0}")]
    Layout(&'static str),

    /// Layout is right but the value is not a real date or time
    #[error(transparent)]
    Chrono(#[from] chrono::ParseError),
}

/// Errors raised by the in-memory patient book.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// A patient with the same id is already recorded
    #[error("A patient with id {0} already exists in the book")]
    DuplicatePerson(PatientId),

    /// No patient with the given id
    #[error("No patient with id {0}")]
    PersonNotFound(PatientId),
}

/// Errors that can occur while seeding a book with sample patients.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeedError {
    /// A sample value failed validation
    #[error("Invalid sample data: {0}")]
    Parse(#[from] ParseError),

    /// Sample patients clash with each other
    #[error("Invalid sample data: {0}")]
    Model(#[from] ModelError),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with ParseError
pub type ParseResult<T> = Result<T, ParseError>;

/// Convenience type alias for Results with ModelError
pub type ModelResult<T> = Result<T, ModelError>;

/// Convenience type alias for Results with SeedError
pub type SeedResult<T> = Result<T, SeedError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
