//! Bibliography record formatting
//!
//! Renders normalized entries back to record text. Field order follows the
//! entry's type schema: required slots first (an alternative set resolves
//! to its first present member), then optional slots, then `keywords`,
//! then — only in arbitrary-field mode — whatever else the entry carries.
//! Values are always brace-delimited.

use std::collections::HashSet;

use crate::entry::{BibEntry, EntryType};
use crate::error::Error;
use crate::schema;

/// Format one entry as record text.
///
/// `extra_keywords` (typically a heading's exportable tags) are merged into
/// any existing `keywords` value rather than overwriting it. Fails with
/// `UnknownType` when the entry's type is outside the enumeration.
pub fn format_entry(
    entry: &BibEntry,
    extra_keywords: &[String],
    export_arbitrary: bool,
) -> Result<String, Error> {
    let entry_type = EntryType::parse(&entry.entry_type)?;
    let table = schema::schema(entry_type);

    let mut used: HashSet<String> = HashSet::new();
    let mut body: Vec<String> = Vec::new();

    for spec in table.required.iter().chain(table.optional.iter()) {
        if let Some(name) = spec.names().into_iter().find(|n| entry.field(n).is_some()) {
            if used.insert(name.to_string()) {
                body.push(render_field(name, entry.field(name).unwrap_or_default()));
            }
        }
    }

    if let Some(keywords) = merged_keywords(entry, extra_keywords) {
        used.insert("keywords".to_string());
        body.push(render_field("keywords", &keywords));
    }

    if export_arbitrary {
        for field in &entry.fields {
            let name = field.name.to_lowercase();
            if used.insert(name.clone()) {
                body.push(render_field(&name, &field.value));
            }
        }
    }

    let mut out = String::new();
    out.push('@');
    out.push_str(entry_type.as_str());
    out.push('{');
    out.push_str(&entry.key);
    out.push(',');
    out.push('\n');
    if !body.is_empty() {
        out.push_str(&body.join(",\n"));
        out.push('\n');
    }
    out.push('}');
    out.push('\n');

    Ok(out)
}

/// Format a whole collection, records separated by blank lines.
pub fn format_entries(entries: &[BibEntry]) -> Result<String, Error> {
    let rendered: Vec<String> = entries
        .iter()
        .map(|entry| format_entry(entry, &[], false))
        .collect::<Result<_, _>>()?;
    Ok(rendered.join("\n"))
}

fn render_field(name: &str, value: &str) -> String {
    format!("  {name}={{{value}}}")
}

fn merged_keywords(entry: &BibEntry, extra: &[String]) -> Option<String> {
    let existing = entry.field("keywords").filter(|v| !v.is_empty());
    let added: Vec<&str> = extra
        .iter()
        .map(String::as_str)
        .filter(|k| !k.is_empty())
        .collect();

    match (existing, added.is_empty()) {
        (Some(existing), true) => Some(existing.to_string()),
        (Some(existing), false) => Some(format!("{}, {}", existing, added.join(", "))),
        (None, false) => Some(added.join(", ")),
        (None, true) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dolev83() -> BibEntry {
        let mut entry = BibEntry::new("dolev83", "article");
        entry.set_field("author", "Danny Dolev and Andrew C. Yao");
        entry.set_field("title", "On the security of public-key protocols");
        entry.set_field("journal", "IEEE Transaction on Information Theory");
        entry.set_field("year", "1983");
        entry.set_field("pages", "198--208");
        entry
    }

    #[test]
    fn formats_in_schema_order() {
        let text = format_entry(&dolev83(), &[], false).unwrap();
        assert_eq!(
            text,
            "@article{dolev83,\n  \
             author={Danny Dolev and Andrew C. Yao},\n  \
             title={On the security of public-key protocols},\n  \
             journal={IEEE Transaction on Information Theory},\n  \
             year={1983},\n  \
             pages={198--208}\n}\n"
        );
    }

    #[test]
    fn alternative_resolves_to_present_member() {
        let mut entry = BibEntry::new("k", "book");
        entry.set_field("editor", "Some Editor");
        entry.set_field("title", "T");
        entry.set_field("publisher", "P");
        entry.set_field("year", "2001");
        let text = format_entry(&entry, &[], false).unwrap();
        assert!(text.contains("editor={Some Editor}"));
        assert!(!text.contains("author"));
    }

    #[test]
    fn non_schema_fields_need_arbitrary_mode() {
        let mut entry = dolev83();
        entry.set_field("doi", "10.1109/TIT.1983.1056650");

        let plain = format_entry(&entry, &[], false).unwrap();
        assert!(!plain.contains("doi"));

        let full = format_entry(&entry, &[], true).unwrap();
        assert!(full.contains("doi={10.1109/TIT.1983.1056650}"));
    }

    #[test]
    fn keywords_survive_without_arbitrary_mode() {
        let mut entry = dolev83();
        entry.set_field("keywords", "security, protocols");
        let text = format_entry(&entry, &[], false).unwrap();
        assert!(text.contains("keywords={security, protocols}"));
    }

    #[test]
    fn tags_merge_into_existing_keywords() {
        let mut entry = dolev83();
        entry.set_field("keywords", "security");
        let text =
            format_entry(&entry, &["crypto".to_string(), "classic".to_string()], false).unwrap();
        assert!(text.contains("keywords={security, crypto, classic}"));
    }

    #[test]
    fn collection_output_reparses_in_order() {
        let mut second = BibEntry::new("k2", "misc");
        second.set_field("note", "N");
        let text = format_entries(&[dolev83(), second]).unwrap();
        let back = crate::parser::parse(&text);
        assert_eq!(back.len(), 2);
        assert_eq!(back[0].key, "dolev83");
        assert_eq!(back[1].key, "k2");
    }

    #[test]
    fn unknown_type_is_fatal() {
        let entry = BibEntry::new("k", "webpage");
        assert_eq!(
            format_entry(&entry, &[], false).unwrap_err(),
            Error::UnknownType {
                name: "webpage".to_string()
            }
        );
    }

    #[test]
    fn output_reparses() {
        let text = format_entry(&dolev83(), &[], false).unwrap();
        let back = crate::parser::parse_entry(&text).unwrap();
        assert_eq!(back.fields_map(), dolev83().fields_map());
        assert_eq!(back.key, "dolev83");
        assert_eq!(back.entry_type, "article");
    }
}
