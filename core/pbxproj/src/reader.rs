//! Property-list readers
//!
//! A [`PropertyListReader`] turns the raw bytes of a project file into the
//! generic [`Value`] tree. [`PlistReader`] goes through the `plist` crate
//! first, which reads the OpenStep text format Xcode writes
//! (`// !$*UTF8*$!` followed by a `{ ... }` dictionary) as well as XML and
//! binary property lists. Files the `plist` crate rejects are retried as JSON,
//! the form `plutil -convert json` produces.
//!
//! Scalars with no counterpart in the tree are mapped as follows: reals become
//! their decimal string, integers beyond `i64` become strings, and dates, data
//! blobs and archiver UIDs become [`Value::Null`]. OpenStep files carry every
//! scalar as a string; the typed accessors on [`Value`] accept that encoding.

use log::debug;
use pbxproj_objects::value::{Record, Value};

use crate::errors::ReadError;

pub trait PropertyListReader {
    /// Deserializes one project file.
    ///
    /// # Errors
    ///
    /// Returns a [`ReadError`] when `bytes` are not in a format this reader
    /// understands.
    fn read(&self, bytes: &[u8]) -> Result<Value, ReadError>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct PlistReader;

impl PropertyListReader for PlistReader {
    /// # Errors
    ///
    /// When neither format accepts `bytes`, the property-list error is
    /// returned.
    fn read(&self, bytes: &[u8]) -> Result<Value, ReadError> {
        match plist::Value::from_reader(std::io::Cursor::new(bytes)) {
            Ok(value) => Ok(from_plist(value)),
            Err(plist_error) => {
                debug!("not a property list ({plist_error}), retrying as JSON");
                match serde_json::from_slice::<serde_json::Value>(bytes) {
                    Ok(value) => Ok(from_json(value)),
                    Err(_) => Err(plist_error.into()),
                }
            }
        }
    }
}

fn from_plist(value: plist::Value) -> Value {
    match value {
        plist::Value::Dictionary(dictionary) => Value::Map(
            dictionary
                .into_iter()
                .map(|(key, value)| (key, from_plist(value)))
                .collect::<Record>(),
        ),
        plist::Value::Array(items) => Value::List(items.into_iter().map(from_plist).collect()),
        plist::Value::String(string) => Value::Str(string),
        plist::Value::Boolean(flag) => Value::Bool(flag),
        plist::Value::Integer(integer) => match integer.as_signed() {
            Some(int) => Value::Int(int),
            None => integer
                .as_unsigned()
                .map_or(Value::Null, |uint| Value::Str(uint.to_string())),
        },
        plist::Value::Real(real) => Value::Str(real.to_string()),
        _ => Value::Null,
    }
}

fn from_json(value: serde_json::Value) -> Value {
    match value {
        serde_json::Value::Object(map) => Value::Map(
            map.into_iter()
                .map(|(key, value)| (key, from_json(value)))
                .collect::<Record>(),
        ),
        serde_json::Value::Array(items) => Value::List(items.into_iter().map(from_json).collect()),
        serde_json::Value::String(string) => Value::Str(string),
        serde_json::Value::Bool(flag) => Value::Bool(flag),
        serde_json::Value::Number(number) => match number.as_i64() {
            Some(int) => Value::Int(int),
            None => Value::Str(number.to_string()),
        },
        serde_json::Value::Null => Value::Null,
    }
}
