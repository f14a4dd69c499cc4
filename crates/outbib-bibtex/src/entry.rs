//! Bibliography entry data structures

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The fixed BibTeX entry-type enumeration.
///
/// `Conference` is kept as its own member (it shares the `inproceedings`
/// field lists but round-trips under its own name).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryType {
    Article,
    Book,
    Booklet,
    Conference,
    InBook,
    InCollection,
    InProceedings,
    Manual,
    MastersThesis,
    Misc,
    PhdThesis,
    Proceedings,
    TechReport,
    Unpublished,
}

/// Every entry type, in canonical order.
pub const ENTRY_TYPES: [EntryType; 14] = [
    EntryType::Article,
    EntryType::Book,
    EntryType::Booklet,
    EntryType::Conference,
    EntryType::InBook,
    EntryType::InCollection,
    EntryType::InProceedings,
    EntryType::Manual,
    EntryType::MastersThesis,
    EntryType::Misc,
    EntryType::PhdThesis,
    EntryType::Proceedings,
    EntryType::TechReport,
    EntryType::Unpublished,
];

impl EntryType {
    /// Parse an entry type from a string (case-insensitive).
    ///
    /// There is no catch-all: anything outside the enumeration is an
    /// `UnknownType` error.
    pub fn parse(s: &str) -> Result<Self, Error> {
        match s.to_lowercase().as_str() {
            "article" => Ok(Self::Article),
            "book" => Ok(Self::Book),
            "booklet" => Ok(Self::Booklet),
            "conference" => Ok(Self::Conference),
            "inbook" => Ok(Self::InBook),
            "incollection" => Ok(Self::InCollection),
            "inproceedings" => Ok(Self::InProceedings),
            "manual" => Ok(Self::Manual),
            "mastersthesis" => Ok(Self::MastersThesis),
            "misc" => Ok(Self::Misc),
            "phdthesis" => Ok(Self::PhdThesis),
            "proceedings" => Ok(Self::Proceedings),
            "techreport" => Ok(Self::TechReport),
            "unpublished" => Ok(Self::Unpublished),
            _ => Err(Error::UnknownType { name: s.to_string() }),
        }
    }

    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Article => "article",
            Self::Book => "book",
            Self::Booklet => "booklet",
            Self::Conference => "conference",
            Self::InBook => "inbook",
            Self::InCollection => "incollection",
            Self::InProceedings => "inproceedings",
            Self::Manual => "manual",
            Self::MastersThesis => "mastersthesis",
            Self::Misc => "misc",
            Self::PhdThesis => "phdthesis",
            Self::Proceedings => "proceedings",
            Self::TechReport => "techreport",
            Self::Unpublished => "unpublished",
        }
    }
}

/// A single field (name-value pair) of an entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub value: String,
}

/// A normalized bibliography entry.
///
/// `entry_type` is kept as a lowercase string rather than an [`EntryType`]
/// because parsing never fails on unknown types; the typed check happens
/// when the entry is formatted or fleshed out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BibEntry {
    pub key: String,
    pub entry_type: String,
    pub fields: Vec<Field>,
}

impl BibEntry {
    /// Create an entry with no fields.
    pub fn new(key: impl Into<String>, entry_type: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            entry_type: entry_type.into(),
            fields: Vec::new(),
        }
    }

    /// Set a field, replacing any existing value under the same
    /// (case-insensitive) name.
    pub fn set_field(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(field) = self
            .fields
            .iter_mut()
            .find(|f| f.name.eq_ignore_ascii_case(&name))
        {
            field.value = value;
        } else {
            self.fields.push(Field { name, value });
        }
    }

    /// Get a field value by name (case-insensitive).
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name.eq_ignore_ascii_case(name))
            .map(|f| f.value.as_str())
    }

    /// Whether a field is present with a non-empty value.
    pub fn has_field(&self, name: &str) -> bool {
        self.field(name).is_some_and(|v| !v.is_empty())
    }

    /// All fields as a map from lowercase name to value.
    pub fn fields_map(&self) -> HashMap<String, String> {
        self.fields
            .iter()
            .map(|f| (f.name.to_lowercase(), f.value.clone()))
            .collect()
    }

    /// An entry with no key and no fields carries nothing worth staging.
    pub fn is_empty(&self) -> bool {
        self.key.is_empty() && self.fields.is_empty()
    }

    pub fn title(&self) -> Option<&str> {
        self.field("title")
    }

    pub fn author(&self) -> Option<&str> {
        self.field("author")
    }

    pub fn year(&self) -> Option<&str> {
        self.field("year")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_type_parsing() {
        assert_eq!(EntryType::parse("article").unwrap(), EntryType::Article);
        assert_eq!(EntryType::parse("ARTICLE").unwrap(), EntryType::Article);
        assert_eq!(
            EntryType::parse("Conference").unwrap(),
            EntryType::Conference
        );
        assert_eq!(
            EntryType::parse("webpage"),
            Err(Error::UnknownType {
                name: "webpage".to_string()
            })
        );
    }

    #[test]
    fn entry_type_round_trips_through_name() {
        for entry_type in ENTRY_TYPES {
            assert_eq!(EntryType::parse(entry_type.as_str()).unwrap(), entry_type);
        }
    }

    #[test]
    fn field_access_is_case_insensitive() {
        let mut entry = BibEntry::new("dolev83", "article");
        entry.set_field("Author", "Danny Dolev and Andrew C. Yao");
        entry.set_field("YEAR", "1983");

        assert_eq!(entry.author(), Some("Danny Dolev and Andrew C. Yao"));
        assert_eq!(entry.field("year"), Some("1983"));
        assert_eq!(entry.field("journal"), None);
    }

    #[test]
    fn set_field_replaces_existing() {
        let mut entry = BibEntry::new("k", "misc");
        entry.set_field("note", "first");
        entry.set_field("NOTE", "second");
        assert_eq!(entry.fields.len(), 1);
        assert_eq!(entry.field("note"), Some("second"));
    }

    #[test]
    fn emptiness() {
        assert!(BibEntry::new("", "misc").is_empty());
        assert!(!BibEntry::new("k", "misc").is_empty());
        let mut entry = BibEntry::new("", "misc");
        entry.set_field("note", "x");
        assert!(!entry.is_empty());
    }

    #[test]
    fn serde_round_trip() {
        let mut entry = BibEntry::new("dolev83", "article");
        entry.set_field("title", "On the security of public-key protocols");
        let json = serde_json::to_string(&entry).unwrap();
        let back: BibEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }
}
