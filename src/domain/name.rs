//! Name value object.

use crate::error::{ParseError, ParseResult};
use once_cell::sync::Lazy;
use regex::Regex;

/// The first character must not be a space, otherwise " " would be a valid name.
static NAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[[:alnum:]][[:alnum:] ]*$").expect("Failed to compile name regex")
});

/// A patient's name.
///
/// Names are alphanumeric words separated by spaces and may not be blank.
///
/// # Example
///
/// ```
/// use wardbook::domain::Name;
///
/// let name = Name::new("Alex Yeoh").unwrap();
/// assert_eq!(name.as_str(), "Alex Yeoh");
/// assert!(Name::new("R@chel").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Names should only contain alphanumeric characters and spaces, and it should not be blank";

    /// Create a new Name, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::InvalidFormat` with [`Name::MESSAGE_CONSTRAINTS`].
    pub fn new(name: impl Into<String>) -> ParseResult<Self> {
        let name = name.into();
        if !Self::is_valid(&name) {
            return Err(ParseError::invalid_format(Self::MESSAGE_CONSTRAINTS));
        }
        Ok(Self(name))
    }

    /// Returns true if `test` is a valid name.
    pub fn is_valid(test: &str) -> bool {
        NAME_REGEX.is_match(test)
    }
}

string_value_impls!(Name);
