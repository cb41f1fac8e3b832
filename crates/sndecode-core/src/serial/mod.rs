//! Serial number decoding.
//!
//! Same layering as a wire protocol decoder:
//! - `layout`: character offsets, ranges and base values (source of truth)
//! - `tables`: the two code tables of the 12-character format
//! - `reader`: bounded character access over a normalised serial
//! - `parser`: format detection and field decoding (no literal indexing)
//! - `error`: the validation error taxonomy
//!
//! Decoding is pure: no I/O, no shared mutable state.

pub mod error;
pub mod layout;
pub mod parser;
pub mod reader;
pub mod tables;

pub use error::{ErrorKind, FormatIssue, ValidationError};
pub use parser::{SerialDecoder, SerialFormat, decode};
pub use tables::{CodeTable, SEMESTER_TABLE, WEEK_TABLE};
