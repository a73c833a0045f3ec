//! Appointment model: a scheduled procedure or visit for a patient.

use crate::datetime::{self, date_time_format};
use crate::error::{ParseError, ParseResult};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A scheduled appointment with a description and a start/end time.
///
/// The description is non-empty and the end is never before the start.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "AppointmentRecord")]
pub struct Appointment {
    description: String,

    #[serde(with = "date_time_format")]
    start: NaiveDateTime,

    #[serde(with = "date_time_format")]
    end: NaiveDateTime,
}

/// Unchecked shape used while deserializing.
#[derive(Deserialize)]
struct AppointmentRecord {
    description: String,
    #[serde(with = "date_time_format")]
    start: NaiveDateTime,
    #[serde(with = "date_time_format")]
    end: NaiveDateTime,
}

impl TryFrom<AppointmentRecord> for Appointment {
    type Error = ParseError;

    fn try_from(record: AppointmentRecord) -> Result<Self, Self::Error> {
        Appointment::new(record.description, record.start, record.end)
    }
}

impl Appointment {
    pub const MESSAGE_EMPTY_DESCRIPTION: &'static str = "Appointment description cannot be empty.";
    pub const MESSAGE_END_BEFORE_START: &'static str =
        "Appointment end time cannot be before its start time.";

    /// Create a new appointment.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::InvalidFormat` if the description is blank or
    /// `end` is earlier than `start`.
    pub fn new(
        description: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> ParseResult<Self> {
        let description = description.into();
        if crate::parser::trim_input(&description).is_empty() {
            return Err(ParseError::invalid_format(Self::MESSAGE_EMPTY_DESCRIPTION));
        }
        if end < start {
            return Err(ParseError::invalid_format(Self::MESSAGE_END_BEFORE_START));
        }
        Ok(Self {
            description,
            start,
            end,
        })
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end
    }
}

impl fmt::Display for Appointment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} to {})",
            self.description,
            datetime::format_date_time(&self.start),
            datetime::format_date_time(&self.end)
        )
    }
}
