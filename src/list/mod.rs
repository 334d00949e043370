//! Row Table Module
//!
//! Persists rows of scalar cells as CSV lines.
//!
//! ## Responsibilities
//! - Append (or overwrite with) one row per save
//! - Coerce every cell on read: integer, then float, then text
//! - Clear and count stored rows
//!
//! ## File Format
//! ```text
//! 1,2.5,plain text\r\n
//! 7,"quoted, with comma","say ""hi"""\r\n
//! ```
//!
//! There is no header line; every line is a row. Coercion is lossy: a text
//! cell such as `"42"` comes back as the integer 42.

mod cell;
mod store;

pub use cell::Cell;
pub use store::{ListStore, Row};
