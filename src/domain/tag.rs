//! Tag value object.

use crate::error::{ParseError, ParseResult};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

static TAG_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[[:alnum:]]+$").expect("Failed to compile tag regex"));

/// A label attached to a patient record, e.g. `fallrisk`.
///
/// Tags are compared case-sensitively. `Display` wraps the name in square
/// brackets, as tags are shown in listings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag(String);

impl Tag {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Tags names should be alphanumeric";

    pub fn new(tag_name: impl Into<String>) -> ParseResult<Self> {
        let tag_name = tag_name.into();
        if !Self::is_valid(&tag_name) {
            return Err(ParseError::invalid_format(Self::MESSAGE_CONSTRAINTS));
        }
        Ok(Self(tag_name))
    }

    pub fn is_valid(test: &str) -> bool {
        TAG_REGEX.is_match(test)
    }

    /// The bare tag name, without brackets.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl Serialize for Tag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Tag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Tag::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0)
    }
}
