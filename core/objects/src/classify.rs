//! Record classification by discriminator.

use crate::{
    nodes::Isa,
    value::{Record, Value},
};

/// Name of the discriminator field carried by every record.
pub const ISA_FIELD: &str = "isa";

/// Outcome of inspecting a record's discriminator.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Classification<'a> {
    Known(Isa),
    /// The discriminator names a kind this crate does not model.
    Unknown(&'a str),
    /// The record has no string discriminator at all.
    Missing,
}

impl Classification<'_> {
    #[must_use]
    pub fn isa(self) -> Option<Isa> {
        if let Classification::Known(isa) = self {
            Some(isa)
        } else {
            None
        }
    }
}

/// Classifies `record` by its `isa` field. Pure; never fails.
#[must_use]
pub fn classify(record: &Record) -> Classification<'_> {
    match record.get(ISA_FIELD).and_then(Value::as_str) {
        Some(raw) => Isa::from_isa(raw).map_or(Classification::Unknown(raw), Classification::Known),
        None => Classification::Missing,
    }
}
