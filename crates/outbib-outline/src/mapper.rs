//! Heading mapper
//!
//! Translates between normalized entries and outline headings. On write,
//! fields become (prefixed, upper-cased) properties; the citation key goes
//! under the configured key property, unprefixed. On read, properties are
//! matched against the field catalog bare or behind the prefix — anchored
//! prefix match only, so an unrelated `CATEGORY` property is never mistaken
//! for a `BIB_`-prefixed field.

use lazy_static::lazy_static;
use regex::Regex;

use outbib_bibtex::{catalog, BibEntry};

use crate::heading::HeadingRecord;
use crate::options::{Options, TYPE_PROPERTY};

lazy_static! {
    static ref TAG_SPACES: Regex = Regex::new(r"[ \t]+").unwrap();
    static ref TAG_INVALID: Regex = Regex::new(r"[^[:alnum:]_@#%]").unwrap();
}

/// Reduce a keyword to tag form: spaces to underscores, anything outside
/// the conservative alphanumeric-plus-`_@#%` set dropped.
pub fn sanitize_tag(raw: &str) -> String {
    let underscored = TAG_SPACES.replace_all(raw.trim(), "_");
    TAG_INVALID.replace_all(&underscored, "").into_owned()
}

/// Write direction with the default title selection (the `title` field,
/// falling back to the key).
pub fn heading_from_entry(entry: &BibEntry, options: &Options) -> HeadingRecord {
    heading_from_entry_with(entry, options, |entry| {
        entry.title().unwrap_or(&entry.key).to_string()
    })
}

/// Write direction with a caller-supplied title selection function.
pub fn heading_from_entry_with<F>(entry: &BibEntry, options: &Options, title: F) -> HeadingRecord
where
    F: Fn(&BibEntry) -> String,
{
    let headline = title(entry);
    let mut heading = HeadingRecord::new(headline.clone());

    put_property(
        &mut heading,
        options,
        "TITLE",
        entry.title().unwrap_or(&headline),
    );
    put_property(
        &mut heading,
        options,
        TYPE_PROPERTY,
        &entry.entry_type.to_lowercase(),
    );
    if !entry.key.is_empty() {
        heading.set_property(options.key_property.clone(), entry.key.clone());
    }

    for field in &entry.fields {
        let name = field.name.to_lowercase();
        if name == "title" {
            continue;
        }
        if name == "keywords" && options.tags_are_keywords {
            for keyword in field.value.split(',') {
                heading.add_tag(sanitize_tag(keyword));
            }
        } else {
            put_property(&mut heading, options, &name, &field.value);
        }
    }

    for tag in &options.default_tags {
        heading.add_tag(tag.clone());
    }

    heading
}

/// Read direction: rebuild an entry from a heading's properties.
pub fn entry_from_heading(heading: &HeadingRecord, options: &Options) -> BibEntry {
    let mut entry = BibEntry::default();

    for property in &heading.properties {
        if property.name.eq_ignore_ascii_case(&options.key_property) {
            entry.key = property.value.trim().to_string();
            continue;
        }

        let stripped = strip_prefix(&property.name, &options.prefix);
        let base = stripped.unwrap_or(&property.name);

        if base.eq_ignore_ascii_case(TYPE_PROPERTY) {
            entry.entry_type = property.value.trim().to_lowercase();
        } else if catalog::is_field(base) {
            entry.set_field(base.to_lowercase(), property.value.trim());
        } else if options.export_arbitrary_fields && !options.prefix.is_empty() && stripped.is_some()
        {
            entry.set_field(base.to_lowercase(), property.value.trim());
        }
    }

    if entry.field("title").is_none() && options.treat_title_as_headline && !heading.title.is_empty()
    {
        entry.set_field("title", heading.title.clone());
    }

    entry
}

/// A heading's tags eligible for keywords conversion: local (plus
/// inherited when configured), minus the no-export and default lists.
pub fn exportable_tags(heading: &HeadingRecord, options: &Options) -> Vec<String> {
    heading
        .all_tags(options.inherit_tags_on_export)
        .into_iter()
        .filter(|tag| !options.no_export_tags.contains(tag) && !options.default_tags.contains(tag))
        .collect()
}

fn put_property(heading: &mut HeadingRecord, options: &Options, name: &str, value: &str) {
    heading.set_property(format!("{}{}", options.prefix, name.to_uppercase()), value);
}

/// Anchored, case-insensitive prefix strip; an empty prefix never matches.
fn strip_prefix<'a>(name: &'a str, prefix: &str) -> Option<&'a str> {
    if prefix.is_empty() || name.len() < prefix.len() {
        return None;
    }
    let (head, tail) = name.split_at(prefix.len());
    head.eq_ignore_ascii_case(prefix).then_some(tail)
}
