//! BibTeX record model, schema tables, parsing and formatting
//!
//! This crate owns the bibliography-record side of the outbib suite:
//! - Normalized entry model with the fixed entry-type enumeration
//! - Static schema table (required/optional field slots per type) and
//!   field catalog with prompting descriptions
//! - Nom-based record parser with value normalization
//! - Schema-ordered record formatter
//! - Citation key generation and uniquification

pub mod catalog;
mod entry;
mod error;
mod formatter;
pub mod key;
pub mod parser;
pub mod schema;

pub use entry::{BibEntry, EntryType, Field, ENTRY_TYPES};
pub use error::Error;
pub use formatter::{format_entries, format_entry};
pub use parser::{clean_value, parse, parse_entry};
pub use schema::{EntrySchema, FieldSpec};
