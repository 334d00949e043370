//! Archive classification and merge rules
//!
//! Pure functions over archive content; no file access happens here.

use serde_json::{Map, Value};

/// What an archive file currently holds
#[derive(Debug, Clone, PartialEq)]
pub enum ArchiveState {
    /// The file does not exist
    Absent,

    /// The file exists but holds only whitespace
    Empty,

    /// The file exists but is not valid JSON (decoder message attached)
    Corrupt(String),

    /// The file holds a decoded JSON value
    Present(Value),
}

impl ArchiveState {
    /// Classify raw file bytes
    pub fn from_bytes(bytes: &[u8]) -> Self {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return ArchiveState::Empty;
        }

        match serde_json::from_slice(bytes) {
            Ok(value) => ArchiveState::Present(value),
            Err(e) => ArchiveState::Corrupt(e.to_string()),
        }
    }

    /// The stored value, if one could be decoded
    pub fn into_value(self) -> Option<Value> {
        match self {
            ArchiveState::Present(value) => Some(value),
            _ => None,
        }
    }

    /// The stored value, or an empty object for anything unreadable
    pub fn into_value_or_empty(self) -> Value {
        self.into_value().unwrap_or_else(empty_object)
    }

    pub fn is_present(&self) -> bool {
        matches!(self, ArchiveState::Present(_))
    }
}

/// Combine an existing archive value with a new record
///
/// - array: `record` is appended
/// - anything else: becomes `[existing, record]`
pub fn merge(existing: Value, record: Value) -> Value {
    match existing {
        Value::Array(mut items) => {
            items.push(record);
            Value::Array(items)
        }
        other => Value::Array(vec![other, record]),
    }
}

pub(crate) fn empty_object() -> Value {
    Value::Object(Map::new())
}
