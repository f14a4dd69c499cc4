//! Outline-heading translation layer for the outbib suite
//!
//! Bridges normalized bibliography entries (from `outbib-bibtex`) and
//! outline headings with keyed property drawers:
//! - Heading mapper, both directions, with property-prefix handling and
//!   tag/keyword conversion
//! - Fleshout: completeness checking and prompter-driven filling
//! - Caller-owned staging queue between parse and write operations
//! - Batch export with halt-at-position error reporting

mod error;
pub mod export;
mod fleshout;
mod heading;
pub mod mapper;
mod options;
pub mod queue;

pub use error::Error;
pub use export::{export_heading, export_headings};
pub use fleshout::{check, fleshout, Completeness, FieldPrompter};
pub use heading::{HeadingRecord, Property};
pub use mapper::{entry_from_heading, heading_from_entry, heading_from_entry_with};
pub use options::{Options, TYPE_PROPERTY};
pub use queue::{stage, write_heading, StagingQueue};
