//! Email value object.

use crate::error::{ParseError, ParseResult};
use once_cell::sync::Lazy;
use regex::Regex;

const ALPHANUMERIC: &str = "[a-zA-Z0-9]+";
const SPECIAL_CHARACTERS: &str = r"+_.\-";

/// local-part `@` domain, where the last domain label is at least two
/// characters long.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    let local_part = format!("{ALPHANUMERIC}(?:[{SPECIAL_CHARACTERS}]{ALPHANUMERIC})*");
    let domain_label = format!("{ALPHANUMERIC}(?:-{ALPHANUMERIC})*");
    let pattern = format!(r"^{local_part}@(?:{domain_label}\.)*(?:{domain_label}){{2,}}$");
    Regex::new(&pattern).expect("Failed to compile email regex")
});

/// A contact email address.
///
/// # Example
///
/// ```
/// use wardbook::domain::Email;
///
/// let email = Email::new("alexyeoh@example.com").unwrap();
/// assert_eq!(email.as_str(), "alexyeoh@example.com");
/// assert!(Email::new("alexyeoh@example.c").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Emails should be of the format local-part@domain \
and adhere to the following constraints:\n\
1. The local-part should only contain alphanumeric characters and these special characters, \
excluding the parentheses, (+_.-). \
The local-part may not start or end with any special characters.\n\
2. This is followed by a '@' and then a domain name. The domain name is made up of domain labels \
separated by periods.\n\
The domain name must:\n    \
- end with a domain label at least 2 characters long\n    \
- have each domain label start and end with alphanumeric characters\n    \
- have each domain label consist of alphanumeric characters, separated only by hyphens, if any.";

    /// Create a new Email, validating the format.
    ///
    /// # Validation Rules
    ///
    /// - Local part: alphanumeric runs joined by single `+`, `_`, `.` or `-`
    /// - Exactly one '@'
    /// - Domain: labels separated by '.', each made of alphanumeric runs
    ///   joined by single hyphens; the last label has at least 2 characters
    ///
    /// # Errors
    ///
    /// Returns `ParseError::InvalidFormat` with [`Email::MESSAGE_CONSTRAINTS`].
    pub fn new(email: impl Into<String>) -> ParseResult<Self> {
        let email = email.into();

        if !Self::is_valid(&email) {
            return Err(ParseError::invalid_format(Self::MESSAGE_CONSTRAINTS));
        }

        Ok(Self(email))
    }

    /// Validate email format.
    pub fn is_valid(test: &str) -> bool {
        EMAIL_REGEX.is_match(test)
    }
}

string_value_impls!(Email);
