//! PatientId value object.

use crate::error::{ParseError, ParseResult};

/// A hospital-issued patient identifier such as `P12345`.
///
/// Ids are currently accepted in any shape; the check is kept so that a
/// stricter format can be introduced without touching callers.
///
/// # Example
///
/// ```
/// use wardbook::domain::PatientId;
///
/// let id = PatientId::new("P12345").unwrap();
/// assert_eq!(id.as_str(), "P12345");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PatientId(String);

impl PatientId {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Ids can take any values";

    /// Create a new PatientId.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::InvalidFormat` if the id fails [`PatientId::is_valid`].
    pub fn new(id: impl Into<String>) -> ParseResult<Self> {
        let id = id.into();
        if !Self::is_valid(&id) {
            return Err(ParseError::invalid_format(Self::MESSAGE_CONSTRAINTS));
        }
        Ok(Self(id))
    }

    /// Returns true if `test` is a valid id. Every string is.
    pub fn is_valid(_test: &str) -> bool {
        true
    }
}

string_value_impls!(PatientId);
