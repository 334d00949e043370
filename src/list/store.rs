//! ListStore
//!
//! Appends rows to a CSV table and reads them back with type coercion.

use std::fs::{File, OpenOptions};
use std::io::ErrorKind;
use std::path::Path;

use tracing::{debug, error, warn};

use crate::config::StashConfig;
use crate::error::Result;

use super::Cell;

/// One decoded CSV line
pub type Row = Vec<Cell>;

/// CSV-backed store for rows
#[derive(Debug, Clone, Default)]
pub struct ListStore {
    config: StashConfig,
}

impl ListStore {
    /// Create a store with default formatting (comma, CRLF)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with custom formatting
    pub fn with_config(config: StashConfig) -> Self {
        Self { config }
    }

    /// Write one row
    ///
    /// Appends to an existing file unless `overwrite` is set; a missing file
    /// is created either way.
    ///
    /// An empty row is written as a single quoted empty field (`""`), so it
    /// reads back as `[Text("")]` rather than as an empty row.
    pub fn save(&self, path: &Path, row: &[Cell], overwrite: bool) -> Result<()> {
        let append = !overwrite && path.exists();

        let file = if append {
            OpenOptions::new().append(true).open(path)?
        } else {
            File::create(path)?
        };

        let mut writer = csv::WriterBuilder::new()
            .delimiter(self.config.csv_delimiter)
            .terminator(self.config.csv_terminator.to_csv())
            .flexible(true)
            .from_writer(file);

        writer.write_record(row.iter().map(|cell| cell.to_string()))?;
        writer.flush()?;

        debug!(path = %path.display(), cells = row.len(), append, "saved row");
        Ok(())
    }

    /// Read every row
    ///
    /// A missing or unreadable file is logged and yields no rows.
    pub fn read(&self, path: &Path) -> Vec<Row> {
        match self.try_read(path) {
            Ok(Some(rows)) => rows,
            Ok(None) => {
                warn!(path = %path.display(), "table file does not exist");
                Vec::new()
            }
            Err(e) => {
                error!(path = %path.display(), error = %e, "failed to read table");
                Vec::new()
            }
        }
    }

    /// Read the row at a zero-based position, `None` when out of range
    pub fn read_at(&self, path: &Path, index: usize) -> Option<Row> {
        self.read(path).into_iter().nth(index)
    }

    /// Read every row, distinguishing a missing file (`Ok(None)`) from a
    /// failed read (`Err`)
    pub fn try_read(&self, path: &Path) -> Result<Option<Vec<Row>>> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let mut reader = self.reader_builder().from_reader(file);
        let mut rows = Vec::new();

        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(Cell::coerce).collect());
        }

        Ok(Some(rows))
    }

    /// Truncate the table to zero rows, creating it if absent
    pub fn clear(&self, path: &Path) -> Result<()> {
        File::create(path)?;
        debug!(path = %path.display(), "cleared table");
        Ok(())
    }

    /// Number of stored rows; 0 when the file does not exist
    pub fn count(&self, path: &Path) -> Result<usize> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(e.into()),
        };

        let mut reader = self.reader_builder().from_reader(file);
        let mut count = 0;
        for record in reader.byte_records() {
            record?;
            count += 1;
        }
        Ok(count)
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    /// Reader settings: no header row, rows of any width
    fn reader_builder(&self) -> csv::ReaderBuilder {
        let mut builder = csv::ReaderBuilder::new();
        builder
            .has_headers(false)
            .flexible(true)
            .delimiter(self.config.csv_delimiter);
        builder
    }
}
