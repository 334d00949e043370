//! Record Archive Module
//!
//! Persists JSON records to a single file.
//!
//! ## Responsibilities
//! - Write a record as the sole content of an archive (overwrite)
//! - Merge a record into an existing archive (append)
//! - Classify the on-disk archive (absent / empty / corrupt / present)
//! - Fall back to an empty object when nothing readable is stored
//!
//! ## Archive Shape
//! ```text
//!  save(R1)         save(R2)              save(R3)
//! ┌────────┐      ┌──────────────┐      ┌──────────────────┐
//! │  R1    │ ───▶ │  [R1, R2]    │ ───▶ │  [R1, R2, R3]    │
//! └────────┘      └──────────────┘      └──────────────────┘
//!  object          array                 array (never re-nested)
//! ```
//!
//! The first non-overwriting save onto a single object turns the file into
//! an array. `DictStore::push` keeps the file an array from the first write.

mod archive;
mod store;

pub use archive::{merge, ArchiveState};
pub use store::DictStore;
