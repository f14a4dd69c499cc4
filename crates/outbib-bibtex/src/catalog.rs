//! Field catalog
//!
//! Registry of known field names with the prose descriptions used for
//! interactive prompting and help. The citation key and entry type are
//! structural parts of [`crate::BibEntry`] and are deliberately not listed
//! here; `type` below is the ordinary field of technical reports.

use crate::error::Error;

/// Known fields with their descriptions, alphabetical.
pub const FIELDS: &[(&str, &str)] = &[
    ("address", "Usually the address of the publisher or other institution"),
    ("annote", "An annotation"),
    ("author", "The name(s) of the author(s)"),
    ("booktitle", "Title of a book, part of which is being cited"),
    ("chapter", "A chapter (or section or whatever) number"),
    ("crossref", "The database key of the entry being cross referenced"),
    ("doi", "The digital object identifier of the work"),
    ("edition", "The edition of a book"),
    ("editor", "Name(s) of editor(s)"),
    ("howpublished", "How something strange has been published"),
    ("institution", "The sponsoring institution of a technical report"),
    ("journal", "A journal name"),
    ("keywords", "Comma-separated keywords describing the work"),
    ("month", "The month in which the work was published"),
    ("note", "Any additional information that can help the reader"),
    ("number", "The number of a journal, magazine, technical report, or of a work in a series"),
    ("organization", "The organization that sponsors a conference, or that publishes a manual"),
    ("pages", "One or more page numbers or range of numbers"),
    ("publisher", "The publisher's name"),
    ("school", "The name of the school where a thesis was written"),
    ("series", "The name of a series or set of books"),
    ("title", "The work's title"),
    ("type", "The type of a technical report"),
    ("url", "A web address where the work can be found"),
    ("volume", "The volume of a journal or multi-volume book"),
    ("year", "The year of publication"),
];

/// Whether `name` (lowercase or not) is a cataloged field.
pub fn is_field(name: &str) -> bool {
    FIELDS
        .iter()
        .any(|(field, _)| field.eq_ignore_ascii_case(name))
}

/// The description of a field, or `UnknownField` when it is not cataloged.
pub fn field_description(name: &str) -> Result<&'static str, Error> {
    FIELDS
        .iter()
        .find(|(field, _)| field.eq_ignore_ascii_case(name))
        .map(|(_, description)| *description)
        .ok_or_else(|| Error::UnknownField {
            name: name.to_string(),
        })
}
