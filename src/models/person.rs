//! Person model representing a patient record.

use super::appointment::Appointment;
use crate::domain::{Diagnosis, Medication, Name, Notes, PatientId, Tag, Ward};
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashSet;
use std::fmt;

/// Write tags in sorted order so that serialized records are stable.
fn serialize_tags<S>(tags: &HashSet<Tag>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut sorted: Vec<&Tag> = tags.iter().collect();
    sorted.sort();
    serializer.collect_seq(sorted)
}

/// A patient on the ward.
///
/// Every field is a validated value object, so a `Person` can only be built
/// from values that already passed parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: Name,

    pub id: PatientId,

    pub ward: Ward,

    pub diagnosis: Diagnosis,

    pub medication: Medication,

    #[serde(default)]
    pub notes: Notes,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appointment: Option<Appointment>,

    #[serde(
        default,
        skip_serializing_if = "HashSet::is_empty",
        serialize_with = "serialize_tags"
    )]
    pub tags: HashSet<Tag>,
}

impl Person {
    /// Create a new patient record without appointment or tags.
    pub fn new(
        name: Name,
        id: PatientId,
        ward: Ward,
        diagnosis: Diagnosis,
        medication: Medication,
        notes: Notes,
    ) -> Self {
        Self {
            name,
            id,
            ward,
            diagnosis,
            medication,
            notes,
            appointment: None,
            tags: HashSet::new(),
        }
    }

    /// Attach an appointment, replacing any existing one.
    pub fn with_appointment(mut self, appointment: Appointment) -> Self {
        self.appointment = Some(appointment);
        self
    }

    pub fn with_tags(mut self, tags: HashSet<Tag>) -> Self {
        self.tags = tags;
        self
    }

    /// Returns true if both records describe the same patient.
    ///
    /// This is a weaker notion than equality: two records with the same id
    /// are the same patient even if other fields differ.
    pub fn is_same_person(&self, other: &Person) -> bool {
        self.id == other.id
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; Id: {}; Ward: {}; Diagnosis: {}; Medication: {}",
            self.name, self.id, self.ward, self.diagnosis, self.medication
        )?;
        if !self.notes.is_empty() {
            write!(f, "; Notes: {}", self.notes)?;
        }
        if let Some(ref appointment) = self.appointment {
            write!(f, "; Appointment: {}", appointment)?;
        }
        if !self.tags.is_empty() {
            let mut tags: Vec<&Tag> = self.tags.iter().collect();
            tags.sort();
            write!(f, "; Tags: ")?;
            for tag in tags {
                write!(f, "{}", tag)?;
            }
        }
        Ok(())
    }
}
