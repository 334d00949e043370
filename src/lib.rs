//! # recordstash
//!
//! Two tiny file-backed stores:
//! - `DictStore`: JSON records, one per file or accumulated into an array
//! - `ListStore`: CSV rows with integer/float/text coercion on read
//!
//! ## Architecture Overview
//!
//! ```text
//!        caller (records)                 caller (rows)
//!              │                               │
//!   ┌──────────▼──────────┐         ┌──────────▼──────────┐
//!   │      DictStore      │         │      ListStore      │
//!   │ inspect → merge →   │         │ append / overwrite  │
//!   │ rewrite whole file  │         │ coerce cells on read│
//!   └──────────┬──────────┘         └──────────┬──────────┘
//!              │                               │
//!              ▼                               ▼
//!        archive.json                     table.csv
//! ```
//!
//! The stores hold formatting configuration only. Every operation opens,
//! operates on, and closes its file.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod dict;
pub mod list;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{StashError, Result};
pub use config::{LineEnding, StashConfig};
pub use dict::{ArchiveState, DictStore};
pub use list::{Cell, ListStore, Row};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of recordstash
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
