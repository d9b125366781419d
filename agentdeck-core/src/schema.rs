//! Schema checks for decoded payloads
//!
//! `serde` guarantees field types; the rules here cover what the type system
//! cannot, such as which optional fields must be present for a given status.

use thiserror::Error;

/// A decoded payload that violates the expected shape
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// A required string field was empty
    #[error("field `{0}` must not be empty")]
    EmptyField(&'static str),

    /// A numeric field was zero where a positive value is required
    #[error("field `{0}` must be positive")]
    NotPositive(&'static str),

    /// A field was present that the record's status forbids
    #[error("field `{field}` is not allowed while status is {status}")]
    UnexpectedField {
        field: &'static str,
        status: &'static str,
    },

    /// A field was missing that the record's status requires
    #[error("field `{field}` is required when status is {status}")]
    MissingField {
        field: &'static str,
        status: &'static str,
    },

    /// An element of a list failed validation
    #[error("item {index}: {source}")]
    Item {
        index: usize,
        #[source]
        source: Box<SchemaError>,
    },
}

/// Post-decode validation
pub trait Validate {
    /// Checks invariants that `serde` does not enforce
    fn validate(&self) -> Result<(), SchemaError>;
}

impl<T: Validate> Validate for Vec<T> {
    fn validate(&self) -> Result<(), SchemaError> {
        for (index, item) in self.iter().enumerate() {
            item.validate().map_err(|source| SchemaError::Item {
                index,
                source: Box::new(source),
            })?;
        }
        Ok(())
    }
}
