//! The `objects` section of a project file.

use rustc_hash::FxHashMap;

use crate::value::{Record, Value};

/// Read-only mapping from object identifier to raw record.
///
/// Identifiers are opaque strings; the table never interprets them beyond
/// lookup. Entries that are not maps are kept so that the resolver can report
/// them as malformed instead of treating them as absent.
#[derive(Clone, Debug, Default)]
pub struct ObjectTable {
    entries: FxHashMap<String, Value>,
}

impl ObjectTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from the value of the top-level `objects` entry.
    ///
    /// Returns `None` when the value is not a map.
    #[must_use]
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Map(record) => Some(record.into_iter().collect()),
            _ => None,
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.entries.insert(key.into(), value.into());
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Returns the entry for `key` if it exists and is a record.
    #[must_use]
    pub fn record(&self, key: &str) -> Option<&Record> {
        self.get(key).and_then(Value::as_record)
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for ObjectTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}
