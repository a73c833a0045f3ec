//! Patient records built from parsed value objects.
//!
//! This module contains the appointment and person records, and the
//! in-memory book that holds them.

pub mod appointment;
pub mod patient_book;
pub mod person;

pub use appointment::Appointment;
pub use patient_book::PatientBook;
pub use person::Person;
