//! In-memory collection of patient records.

use super::person::Person;
use crate::domain::{Index, PatientId};
use crate::error::{ModelError, ModelResult};
use serde::{Deserialize, Serialize};

/// An ordered list of patients with unique ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PatientBookRecord")]
pub struct PatientBook {
    persons: Vec<Person>,
}

#[derive(Deserialize)]
struct PatientBookRecord {
    #[serde(default)]
    persons: Vec<Person>,
}

impl TryFrom<PatientBookRecord> for PatientBook {
    type Error = ModelError;

    fn try_from(record: PatientBookRecord) -> Result<Self, Self::Error> {
        let mut book = PatientBook::new();
        for person in record.persons {
            book.add_person(person)?;
        }
        Ok(book)
    }
}

impl PatientBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if a patient with the same id as `person` is recorded.
    pub fn has_person(&self, person: &Person) -> bool {
        self.persons.iter().any(|p| p.is_same_person(person))
    }

    /// Append a patient.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::DuplicatePerson` if the id is already taken.
    pub fn add_person(&mut self, person: Person) -> ModelResult<()> {
        if self.has_person(&person) {
            return Err(ModelError::DuplicatePerson(person.id));
        }
        tracing::debug!(id = %person.id, "Adding patient to book");
        self.persons.push(person);
        Ok(())
    }

    /// Replace the record with id `target` by `edited`, keeping its position.
    ///
    /// `edited` may carry a new id as long as no other patient uses it.
    pub fn set_person(&mut self, target: &PatientId, edited: Person) -> ModelResult<()> {
        let position = self
            .position_of(target)
            .ok_or_else(|| ModelError::PersonNotFound(target.clone()))?;

        if edited.id != *target && self.get(&edited.id).is_some() {
            return Err(ModelError::DuplicatePerson(edited.id));
        }

        self.persons[position] = edited;
        Ok(())
    }

    /// Remove and return the patient with the given id.
    pub fn remove_person(&mut self, id: &PatientId) -> ModelResult<Person> {
        let position = self
            .position_of(id)
            .ok_or_else(|| ModelError::PersonNotFound(id.clone()))?;
        tracing::debug!(id = %id, "Removing patient from book");
        Ok(self.persons.remove(position))
    }

    pub fn get(&self, id: &PatientId) -> Option<&Person> {
        self.persons.iter().find(|p| &p.id == id)
    }

    /// Look up a patient by its position in the list.
    pub fn get_by_index(&self, index: Index) -> Option<&Person> {
        self.persons.get(index.zero_based())
    }

    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    pub fn iter(&self) -> impl Iterator<Item = &Person> {
        self.persons.iter()
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    fn position_of(&self, id: &PatientId) -> Option<usize> {
        self.persons.iter().position(|p| &p.id == id)
    }
}
