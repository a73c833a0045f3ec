//! Address value object.

use crate::error::{ParseError, ParseResult};
use once_cell::sync::Lazy;
use regex::Regex;

static ADDRESS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^ \t\n\x0B\x0C\r].*$").expect("Failed to compile address regex")
});

/// A postal address. Any value is accepted as long as it does not start
/// with ASCII whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address(String);

impl Address {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Addresses can take any values, and it should not be blank";

    pub fn new(address: impl Into<String>) -> ParseResult<Self> {
        let address = address.into();
        if !Self::is_valid(&address) {
            return Err(ParseError::invalid_format(Self::MESSAGE_CONSTRAINTS));
        }
        Ok(Self(address))
    }

    pub fn is_valid(test: &str) -> bool {
        ADDRESS_REGEX.is_match(test)
    }
}

string_value_impls!(Address);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_validates_format() {
        assert!(!Address::is_valid(""));
        assert!(!Address::is_valid(" "));

        assert!(Address::is_valid("Blk 456, Den Road, #01-355"));
        assert!(Address::is_valid("-"));
        assert!(Address::is_valid("Leng Inc; 1234 Market St; San Francisco CA 2349879; USA"));
    }

    #[test]
    fn test_address_rejects_with_message() {
        assert_eq!(
            Address::new("").unwrap_err().to_string(),
            Address::MESSAGE_CONSTRAINTS
        );
    }
}
