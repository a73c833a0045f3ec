//! Phone value object.

use crate::error::{ParseError, ParseResult};
use once_cell::sync::Lazy;
use regex::Regex;

static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{3,}$").expect("Failed to compile phone regex"));

/// A contact phone number.
///
/// Only ASCII digits are accepted, at least three of them. Formatting
/// characters such as spaces or `+` are rejected rather than stripped.
///
/// # Example
///
/// ```
/// use wardbook::domain::Phone;
///
/// let phone = Phone::new("93121534").unwrap();
/// assert_eq!(phone.as_str(), "93121534");
/// assert!(Phone::new("+65 9312").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Phone numbers should only contain numbers, and it should be at least 3 digits long";

    /// Create a new Phone, validating the format.
    ///
    /// # Validation Rules
    ///
    /// - Digits only
    /// - At least 3 digits
    ///
    /// # Errors
    ///
    /// Returns `ParseError::InvalidFormat` with [`Phone::MESSAGE_CONSTRAINTS`].
    pub fn new(phone: impl Into<String>) -> ParseResult<Self> {
        let phone = phone.into();

        if !Self::is_valid(&phone) {
            return Err(ParseError::invalid_format(Self::MESSAGE_CONSTRAINTS));
        }

        Ok(Self(phone))
    }

    /// Validate phone format.
    pub fn is_valid(test: &str) -> bool {
        PHONE_REGEX.is_match(test)
    }
}

string_value_impls!(Phone);
