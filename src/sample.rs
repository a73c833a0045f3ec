//! Sample patients used to seed an empty patient book.

use crate::datetime;
use crate::domain::{Diagnosis, Medication, Name, Notes, PatientId, Tag, Ward};
use crate::error::{ParseError, ParseResult, SeedResult};
use crate::models::{Appointment, PatientBook, Person};
use std::collections::HashSet;

/// Raw fields of one sample patient, before validation.
struct SamplePatient {
    name: &'static str,
    id: &'static str,
    ward: &'static str,
    diagnosis: &'static str,
    medication: &'static str,
    notes: &'static str,
    surgery: bool,
}

const SAMPLE_PATIENTS: &[SamplePatient] = &[
    SamplePatient {
        name: "Alex Yeoh",
        id: "P12345",
        ward: "A1",
        diagnosis: "A. fib (Atrial Fibrillation)",
        medication: "Metoprolol",
        notes: "Patient is allergic to Paracetemol.",
        surgery: true,
    },
    SamplePatient {
        name: "Bernice Yu",
        id: "P23456",
        ward: "B1",
        diagnosis: "Celiac Disease/Gluten Sensitivity",
        medication: "Corticosteroids",
        notes: "patient is on a strict gluten free diet",
        surgery: true,
    },
    SamplePatient {
        name: "Charlotte Oliveiro",
        id: "P34567",
        ward: "C2",
        diagnosis: "Major Depressive Disorder - Recurrent",
        medication: "Fluoxetine (Prozac)",
        notes: "",
        surgery: false,
    },
    SamplePatient {
        name: "David Li",
        id: "P45678",
        ward: "A1",
        diagnosis: "Hypertensive Heart Disease - Stage 2",
        medication: "Angiotensin-Converting Enzyme (ACE) Inhibitors",
        notes: "patient is prone to falling",
        surgery: false,
    },
    SamplePatient {
        name: "Irfan Ibrahim",
        id: "P56789",
        ward: "D1",
        diagnosis: "Acute Respiratory Distress Syndrome (ARDS) / COVID-19",
        medication: "Oxygen Therapy",
        notes: "patient required checkup every 4 hours",
        surgery: false,
    },
    SamplePatient {
        name: "Roy Balakrishnan",
        id: "P67890",
        ward: "B1",
        diagnosis: "Streptococcus Pneumoniae",
        medication: "Penicillin (Penicillin G or Penicillin V)",
        notes: "",
        surgery: false,
    },
];

const SURGERY_START: &str = "01-01-2001-01-00";
const SURGERY_END: &str = "01-01-2001-07-00";

fn sample_surgery() -> ParseResult<Appointment> {
    let start = datetime::parse_date_time(SURGERY_START)
        .map_err(|e| ParseError::with_source("Invalid sample appointment start", e))?;
    let end = datetime::parse_date_time(SURGERY_END)
        .map_err(|e| ParseError::with_source("Invalid sample appointment end", e))?;
    Appointment::new("Surgery", start, end)
}

impl SamplePatient {
    fn build(&self) -> ParseResult<Person> {
        let person = Person::new(
            Name::new(self.name)?,
            PatientId::new(self.id)?,
            Ward::new(self.ward)?,
            Diagnosis::new(self.diagnosis)?,
            Medication::new(self.medication)?,
            Notes::new(self.notes)?,
        );
        if self.surgery {
            return Ok(person.with_appointment(sample_surgery()?));
        }
        Ok(person)
    }
}

/// The six built-in sample patients.
///
/// # Errors
///
/// Only fails if a sample value no longer satisfies its field's format.
pub fn sample_persons() -> ParseResult<Vec<Person>> {
    SAMPLE_PATIENTS.iter().map(SamplePatient::build).collect()
}

/// A patient book holding [`sample_persons`].
pub fn sample_patient_book() -> SeedResult<PatientBook> {
    let mut book = PatientBook::new();
    for person in sample_persons()? {
        tracing::trace!(id = %person.id, "Seeding sample patient");
        book.add_person(person)?;
    }
    Ok(book)
}

/// Build a tag set from literal names.
pub fn tag_set(names: &[&str]) -> ParseResult<HashSet<Tag>> {
    names.iter().map(|name| Tag::new(*name)).collect()
}
