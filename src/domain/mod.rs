//! Domain value objects.
//!
//! Each type wraps a single string and checks its format invariant at
//! construction, so an invalid name, email or tag can never be held by a
//! patient record. Values are immutable and compare by their wrapped string.
//!
//! Constructors do not trim; trimming is the job of [`crate::parser`].

/// Shared string accessors, serde support and `Display` for single-string
/// value objects. The type must expose `fn new(String) -> ParseResult<Self>`.
macro_rules! string_value_impls {
    ($ty:ident) => {
        impl $ty {
            /// Get the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Convert into the underlying String.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        // Serde support - serialize as string
        impl serde::Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(&self.0)
            }
        }

        // Serde support - deserialize from string with validation
        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = <String as serde::Deserialize>::deserialize(deserializer)?;
                $ty::new(s).map_err(serde::de::Error::custom)
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

pub mod address;
pub mod clinical;
pub mod email;
pub mod index;
pub mod name;
pub mod patient_id;
pub mod phone;
pub mod tag;

pub use address::Address;
pub use clinical::{Diagnosis, Medication, Notes, Ward};
pub use email::Email;
pub use index::Index;
pub use name::Name;
pub use patient_id::PatientId;
pub use phone::Phone;
pub use tag::Tag;
