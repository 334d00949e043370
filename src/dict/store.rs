//! DictStore
//!
//! Saves and loads JSON records. Every call reads and rewrites the whole
//! file; nothing is cached between calls.

use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::StashConfig;
use crate::error::Result;

use super::archive::{self, ArchiveState};

/// JSON-backed store for records
///
/// The read-modify-write in `save`/`push` is not exclusive; two writers on
/// the same path can lose each other's records.
#[derive(Debug, Clone, Default)]
pub struct DictStore {
    config: StashConfig,
}

impl DictStore {
    /// Create a store with default formatting (4-space indent)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with custom formatting
    pub fn with_config(config: StashConfig) -> Self {
        Self { config }
    }

    /// Save a record
    ///
    /// - `overwrite` or no readable archive: the record becomes the file's
    ///   sole content
    /// - otherwise the record is merged into the existing content
    ///   (see [`archive::merge`])
    pub fn save<T: Serialize + ?Sized>(&self, path: &Path, record: &T, overwrite: bool) -> Result<()> {
        let record = serde_json::to_value(record)?;

        let data = if overwrite {
            debug!(path = %path.display(), "overwriting archive");
            record
        } else {
            match self.inspect(path)? {
                ArchiveState::Present(existing) => {
                    debug!(path = %path.display(), "merging record into archive");
                    archive::merge(existing, record)
                }
                ArchiveState::Corrupt(reason) => {
                    warn!(path = %path.display(), %reason, "replacing unreadable archive");
                    record
                }
                ArchiveState::Absent | ArchiveState::Empty => record,
            }
        };

        self.write_value(path, &data)
    }

    /// Append a record, keeping the archive an array from the first write
    ///
    /// Returns the number of elements now stored.
    pub fn push<T: Serialize + ?Sized>(&self, path: &Path, record: &T) -> Result<usize> {
        let record = serde_json::to_value(record)?;

        let data = match self.inspect(path)? {
            ArchiveState::Present(existing) => archive::merge(existing, record),
            ArchiveState::Corrupt(reason) => {
                warn!(path = %path.display(), %reason, "replacing unreadable archive");
                Value::Array(vec![record])
            }
            ArchiveState::Absent | ArchiveState::Empty => Value::Array(vec![record]),
        };

        let len = data.as_array().map_or(0, Vec::len);
        self.write_value(path, &data)?;
        debug!(path = %path.display(), len, "pushed record");
        Ok(len)
    }

    /// Read the archive
    ///
    /// Returns an empty object when the file is missing, empty, corrupt or
    /// cannot be read.
    pub fn read(&self, path: &Path) -> Value {
        match self.inspect(path) {
            Ok(state) => state.into_value_or_empty(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to read archive");
                archive::empty_object()
            }
        }
    }

    /// Classify what the archive currently holds
    ///
    /// Only I/O failures other than "not found" are returned as errors.
    pub fn inspect(&self, path: &Path) -> Result<ArchiveState> {
        match fs::read(path) {
            Ok(bytes) => Ok(ArchiveState::from_bytes(&bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(ArchiveState::Absent),
            Err(e) => Err(e.into()),
        }
    }

    /// Read the archive into a typed value
    ///
    /// - `Ok(None)`: nothing readable is stored
    /// - `Err(Serialization)`: content is valid JSON but does not fit `T`
    pub fn read_as<T: DeserializeOwned>(&self, path: &Path) -> Result<Option<T>> {
        match self.inspect(path)?.into_value() {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    /// Rewrite the file with pretty-printed JSON
    fn write_value(&self, path: &Path, value: &Value) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);

        let indent = self.config.indent_bytes();
        let formatter = PrettyFormatter::with_indent(&indent);
        let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);
        value.serialize(&mut serializer)?;

        writer.flush()?;
        Ok(())
    }
}
