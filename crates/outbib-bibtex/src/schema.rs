//! Static entry-type schema table
//!
//! Each entry type carries the classic BibTeX required and optional field
//! lists. Requirements where any one of several fields satisfies the slot
//! (book's editor-or-author, inbook's chapter-or-pages) are modeled as
//! [`FieldSpec::AnyOf`] rather than inferred from list shape.

use crate::entry::{BibEntry, EntryType};
use crate::error::Error;

/// A required or optional field slot in an entry schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldSpec {
    /// A single named field.
    Single(&'static str),
    /// A set of alternatives; exactly one member needs to be present.
    AnyOf(&'static [&'static str]),
}

impl FieldSpec {
    /// The member field names, in presence-check order.
    pub fn names(&self) -> Vec<&'static str> {
        match self {
            Self::Single(name) => vec![name],
            Self::AnyOf(names) => names.to_vec(),
        }
    }

    /// Whether the entry satisfies this slot (some member present and
    /// non-empty).
    pub fn is_satisfied_by(&self, entry: &BibEntry) -> bool {
        self.names().iter().any(|name| entry.has_field(name))
    }

    /// Display label, e.g. `editor|author` for an alternative set.
    pub fn label(&self) -> String {
        self.names().join("|")
    }
}

/// Schema of one entry type: description plus ordered field slots.
#[derive(Debug)]
pub struct EntrySchema {
    pub description: &'static str,
    pub required: &'static [FieldSpec],
    pub optional: &'static [FieldSpec],
}

use FieldSpec::{AnyOf, Single};

static ARTICLE: EntrySchema = EntrySchema {
    description: "An article from a journal or magazine",
    required: &[
        Single("author"),
        Single("title"),
        Single("journal"),
        Single("year"),
    ],
    optional: &[
        Single("volume"),
        Single("number"),
        Single("pages"),
        Single("month"),
        Single("note"),
    ],
};

static BOOK: EntrySchema = EntrySchema {
    description: "A book with an explicit publisher",
    required: &[
        AnyOf(&["editor", "author"]),
        Single("title"),
        Single("publisher"),
        Single("year"),
    ],
    optional: &[
        AnyOf(&["volume", "number"]),
        Single("series"),
        Single("address"),
        Single("edition"),
        Single("month"),
        Single("note"),
    ],
};

static BOOKLET: EntrySchema = EntrySchema {
    description: "A work that is printed and bound, but without a named publisher or sponsoring institution",
    required: &[Single("title")],
    optional: &[
        Single("author"),
        Single("howpublished"),
        Single("address"),
        Single("month"),
        Single("year"),
        Single("note"),
    ],
};

const PROCEEDINGS_PAPER_REQUIRED: &[FieldSpec] = &[
    Single("author"),
    Single("title"),
    Single("booktitle"),
    Single("year"),
];

const PROCEEDINGS_PAPER_OPTIONAL: &[FieldSpec] = &[
    Single("editor"),
    AnyOf(&["volume", "number"]),
    Single("series"),
    Single("pages"),
    Single("address"),
    Single("month"),
    Single("organization"),
    Single("publisher"),
    Single("note"),
];

static CONFERENCE: EntrySchema = EntrySchema {
    description: "The same as inproceedings",
    required: PROCEEDINGS_PAPER_REQUIRED,
    optional: PROCEEDINGS_PAPER_OPTIONAL,
};

static INBOOK: EntrySchema = EntrySchema {
    description: "A part of a book, which may be a chapter (or section or whatever) and/or a range of pages",
    required: &[
        AnyOf(&["editor", "author"]),
        Single("title"),
        AnyOf(&["chapter", "pages"]),
        Single("publisher"),
        Single("year"),
    ],
    optional: &[
        AnyOf(&["volume", "number"]),
        Single("series"),
        Single("type"),
        Single("address"),
        Single("edition"),
        Single("month"),
        Single("note"),
    ],
};

static INCOLLECTION: EntrySchema = EntrySchema {
    description: "A part of a book having its own title",
    required: &[
        Single("author"),
        Single("title"),
        Single("booktitle"),
        Single("publisher"),
        Single("year"),
    ],
    optional: &[
        Single("editor"),
        AnyOf(&["volume", "number"]),
        Single("series"),
        Single("type"),
        Single("chapter"),
        Single("pages"),
        Single("address"),
        Single("edition"),
        Single("month"),
        Single("note"),
    ],
};

static INPROCEEDINGS: EntrySchema = EntrySchema {
    description: "An article in a conference proceedings",
    required: PROCEEDINGS_PAPER_REQUIRED,
    optional: PROCEEDINGS_PAPER_OPTIONAL,
};

static MANUAL: EntrySchema = EntrySchema {
    description: "Technical documentation",
    required: &[Single("title")],
    optional: &[
        Single("author"),
        Single("organization"),
        Single("address"),
        Single("edition"),
        Single("month"),
        Single("year"),
        Single("note"),
    ],
};

static MASTERSTHESIS: EntrySchema = EntrySchema {
    description: "A Master's thesis",
    required: &[
        Single("author"),
        Single("title"),
        Single("school"),
        Single("year"),
    ],
    optional: &[
        Single("type"),
        Single("address"),
        Single("month"),
        Single("note"),
    ],
};

static MISC: EntrySchema = EntrySchema {
    description: "Use this type when nothing else fits",
    required: &[],
    optional: &[
        Single("author"),
        Single("title"),
        Single("howpublished"),
        Single("month"),
        Single("year"),
        Single("note"),
    ],
};

static PHDTHESIS: EntrySchema = EntrySchema {
    description: "A PhD thesis",
    required: &[
        Single("author"),
        Single("title"),
        Single("school"),
        Single("year"),
    ],
    optional: &[
        Single("type"),
        Single("address"),
        Single("month"),
        Single("note"),
    ],
};

static PROCEEDINGS: EntrySchema = EntrySchema {
    description: "The proceedings of a conference",
    required: &[Single("title"), Single("year")],
    optional: &[
        Single("editor"),
        AnyOf(&["volume", "number"]),
        Single("series"),
        Single("address"),
        Single("month"),
        Single("organization"),
        Single("publisher"),
        Single("note"),
    ],
};

static TECHREPORT: EntrySchema = EntrySchema {
    description: "A report published by a school or other institution, usually numbered within a series",
    required: &[
        Single("author"),
        Single("title"),
        Single("institution"),
        Single("year"),
    ],
    optional: &[
        Single("type"),
        Single("number"),
        Single("address"),
        Single("month"),
        Single("note"),
    ],
};

static UNPUBLISHED: EntrySchema = EntrySchema {
    description: "A document having an author and title, but not formally published",
    required: &[Single("author"), Single("title"), Single("note")],
    optional: &[Single("month"), Single("year")],
};

/// The schema of an entry type.
pub fn schema(entry_type: EntryType) -> &'static EntrySchema {
    match entry_type {
        EntryType::Article => &ARTICLE,
        EntryType::Book => &BOOK,
        EntryType::Booklet => &BOOKLET,
        EntryType::Conference => &CONFERENCE,
        EntryType::InBook => &INBOOK,
        EntryType::InCollection => &INCOLLECTION,
        EntryType::InProceedings => &INPROCEEDINGS,
        EntryType::Manual => &MANUAL,
        EntryType::MastersThesis => &MASTERSTHESIS,
        EntryType::Misc => &MISC,
        EntryType::PhdThesis => &PHDTHESIS,
        EntryType::Proceedings => &PROCEEDINGS,
        EntryType::TechReport => &TECHREPORT,
        EntryType::Unpublished => &UNPUBLISHED,
    }
}

/// Look up a schema by type name, failing on anything outside the
/// enumeration.
pub fn lookup(name: &str) -> Result<&'static EntrySchema, Error> {
    EntryType::parse(name).map(schema)
}

/// The ordered required field slots of a type.
pub fn required_fields(entry_type: EntryType) -> &'static [FieldSpec] {
    schema(entry_type).required
}

/// The ordered optional field slots of a type.
pub fn optional_fields(entry_type: EntryType) -> &'static [FieldSpec] {
    schema(entry_type).optional
}
