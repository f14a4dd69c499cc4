//! Error types for the bibliography-record side

/// Errors raised by schema lookups, formatting, and catalog queries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The entry type is not one of the fixed BibTeX enumeration.
    #[error("unknown entry type: {name}")]
    UnknownType { name: String },
    /// The field name is not in the field catalog.
    #[error("unknown field: {name}")]
    UnknownField { name: String },
}
