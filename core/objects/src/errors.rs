//! Errors raised while converting a raw record into a typed object.

use thiserror::Error;

use crate::nodes::Isa;

/// A record failed validation of its required fields.
///
/// These errors never abort a parse: the resolver drops the offending object
/// and continues with its siblings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[must_use = "errors must not be silently ignored"]
pub enum RecordError {
    /// The table entry is not a string-keyed map.
    #[error("object `{key}` has type {found}, expected a record")]
    NotARecord { key: String, found: &'static str },

    /// A required field is absent.
    #[error("{isa} `{key}` is missing required field `{field}`")]
    MissingField {
        key: String,
        isa: Isa,
        field: &'static str,
    },

    /// A required field is present but holds the wrong kind of value.
    #[error("{isa} `{key}` field `{field}` has type {found}, expected {expected}")]
    WrongType {
        key: String,
        isa: Isa,
        field: &'static str,
        expected: &'static str,
        found: &'static str,
    },
}

impl RecordError {
    /// Identifier of the record that failed.
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            RecordError::NotARecord { key, .. }
            | RecordError::MissingField { key, .. }
            | RecordError::WrongType { key, .. } => key,
        }
    }
}
