//! wardbook - patient records for a hospital ward address book.
//!
//! This library turns raw strings typed on a command line or into a form
//! into validated, immutable value objects, and holds them in patient
//! records.
//!
//! # Architecture
//!
//! - **domain**: Value objects (name, id, ward, diagnosis, email, tag, ...)
//! - **parser**: Trimming and validating `parse_*` functions over the value objects
//! - **models**: Appointment, person and patient book records
//! - **datetime**: The fixed date and date-time patterns
//! - **sample**: Sample patients for seeding an empty book
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod config;
pub mod datetime;
pub mod domain;
pub mod error;
pub mod models;
pub mod parser;
pub mod sample;

pub use config::Config;
pub use domain::{
    Address, Diagnosis, Email, Index, Medication, Name, Notes, PatientId, Phone, Tag, Ward,
};
pub use error::{ConfigError, DateFormatError, ModelError, ParseError, SeedError};
pub use models::{Appointment, PatientBook, Person};
