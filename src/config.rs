//! Configuration for recordstash
//!
//! Centralized configuration with sensible defaults.

use crate::error::{Result, StashError};

/// Formatting configuration shared by both stores
#[derive(Debug, Clone)]
pub struct StashConfig {
    // -------------------------------------------------------------------------
    // JSON Configuration
    // -------------------------------------------------------------------------
    /// Spaces per indentation level in pretty-printed archives
    pub json_indent: usize,

    // -------------------------------------------------------------------------
    // CSV Configuration
    // -------------------------------------------------------------------------
    /// Field delimiter byte
    pub csv_delimiter: u8,

    /// Record terminator written after every row
    pub csv_terminator: LineEnding,
}

/// Line ending used when writing CSV rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    /// `\r\n`, the conventional CSV terminator
    Crlf,

    /// `\n`
    Lf,
}

impl LineEnding {
    pub(crate) fn to_csv(self) -> csv::Terminator {
        match self {
            LineEnding::Crlf => csv::Terminator::CRLF,
            LineEnding::Lf => csv::Terminator::Any(b'\n'),
        }
    }
}

impl Default for StashConfig {
    fn default() -> Self {
        Self {
            json_indent: 4,
            csv_delimiter: b',',
            csv_terminator: LineEnding::Crlf,
        }
    }
}

impl StashConfig {
    /// Create a new config builder
    pub fn builder() -> StashConfigBuilder {
        StashConfigBuilder::default()
    }

    /// Reject delimiters the CSV quoting rules cannot express
    pub fn validate(&self) -> Result<()> {
        match self.csv_delimiter {
            b'"' | b'\r' | b'\n' => Err(StashError::Config(format!(
                "invalid CSV delimiter {:?}",
                self.csv_delimiter as char
            ))),
            _ => Ok(()),
        }
    }

    /// Indentation string for the JSON pretty printer
    pub(crate) fn indent_bytes(&self) -> Vec<u8> {
        vec![b' '; self.json_indent]
    }
}

/// Builder for StashConfig
#[derive(Default)]
pub struct StashConfigBuilder {
    config: StashConfig,
}

impl StashConfigBuilder {
    /// Set the JSON indentation width (in spaces)
    pub fn json_indent(mut self, spaces: usize) -> Self {
        self.config.json_indent = spaces;
        self
    }

    /// Set the CSV field delimiter
    pub fn csv_delimiter(mut self, delimiter: u8) -> Self {
        self.config.csv_delimiter = delimiter;
        self
    }

    /// Set the CSV line terminator
    pub fn csv_terminator(mut self, terminator: LineEnding) -> Self {
        self.config.csv_terminator = terminator;
        self
    }

    pub fn build(self) -> StashConfig {
        self.config
    }
}
