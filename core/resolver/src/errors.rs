//! Errors and diagnostics of graph resolution.
//!
//! [`ResolveError`] is the only condition that fails a parse. Everything the
//! resolver tolerates is recorded as a [`Diagnostic`] instead and the affected
//! object is left out of the graph.

use std::fmt::{self, Display, Formatter};

use pbxproj_objects::errors::RecordError;
use thiserror::Error;

/// Why the root record could not be turned into a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RootDefect {
    /// No entry for the root identifier in the object table.
    Missing,
    /// The entry exists but is not a record.
    NotARecord { found: &'static str },
    /// The record's discriminator is absent or is not `PBXProject`.
    NotAProject { isa: Option<String> },
}

impl Display for RootDefect {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            RootDefect::Missing => write!(f, "it is not present in the object table"),
            RootDefect::NotARecord { found } => write!(f, "it has type {found}, expected a record"),
            RootDefect::NotAProject { isa: Some(isa) } => {
                write!(f, "its isa is `{isa}`, expected `PBXProject`")
            }
            RootDefect::NotAProject { isa: None } => write!(f, "it has no isa"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[must_use = "errors must not be silently ignored"]
pub enum ResolveError {
    /// The root object cannot be resolved; no project exists for this parse.
    #[error("malformed root object `{key}`: {defect}")]
    MalformedRoot { key: String, defect: RootDefect },
}

/// A condition the resolver absorbed while building the graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
    /// A reachable record failed validation and was dropped.
    #[error("skipped malformed record: {0}")]
    MalformedRecord(#[from] RecordError),

    /// A reachable record's discriminator is absent or not modeled.
    #[error("skipped `{key}` with unknown isa {}", describe_isa(.isa.as_deref()))]
    UnknownDiscriminator { key: String, isa: Option<String> },

    /// A container lists an identifier that is not in the object table.
    #[error("`{parent}` references missing object `{key}`")]
    DanglingReference { parent: String, key: String },

    /// A container lists one of its own ancestors.
    #[error("`{parent}` references its ancestor `{key}`")]
    CyclicReference { parent: String, key: String },

    /// A record already attached elsewhere in the graph is listed again.
    #[error("`{parent}` references `{key}`, already attached under another parent")]
    DuplicateReference { parent: String, key: String },

    /// A container lists a project record.
    #[error("`{parent}` references project record `{key}`")]
    NestedProject { parent: String, key: String },
}

fn describe_isa(isa: Option<&str>) -> String {
    isa.map_or_else(|| "(none)".to_string(), |isa| format!("`{isa}`"))
}

impl Diagnostic {
    /// Identifier of the record that was left out of the graph.
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Diagnostic::MalformedRecord(error) => error.key(),
            Diagnostic::UnknownDiscriminator { key, .. }
            | Diagnostic::DanglingReference { key, .. }
            | Diagnostic::CyclicReference { key, .. }
            | Diagnostic::DuplicateReference { key, .. }
            | Diagnostic::NestedProject { key, .. } => key,
        }
    }
}
