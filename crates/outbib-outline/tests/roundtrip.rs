//! End-to-end translation scenarios across both crates.

use std::collections::HashSet;

use outbib_bibtex::{format_entry, parse_entry, BibEntry};
use outbib_outline::{
    entry_from_heading, export_headings, fleshout, heading_from_entry, stage, write_heading,
    Completeness, FieldPrompter, HeadingRecord, Options, StagingQueue,
};

const DOLEV83: &str = "@Article{dolev83, \
    author={Danny Dolev and Andrew C. Yao}, \
    title={On the security of public-key protocols}, \
    journal={IEEE Transaction on Information Theory}, \
    year=1983, \
    pages={198--208}}";

#[test]
fn dolev83_parses_to_expected_fields() {
    let entry = parse_entry(DOLEV83).unwrap();
    assert_eq!(entry.entry_type, "article");
    assert_eq!(entry.key, "dolev83");
    assert_eq!(entry.author(), Some("Danny Dolev and Andrew C. Yao"));
    assert_eq!(entry.title(), Some("On the security of public-key protocols"));
    assert_eq!(
        entry.field("journal"),
        Some("IEEE Transaction on Information Theory")
    );
    assert_eq!(entry.year(), Some("1983"));
    assert_eq!(entry.field("pages"), Some("198--208"));
}

#[test]
fn dolev83_survives_heading_round_trip() {
    let options = Options::default();
    let entry = parse_entry(DOLEV83).unwrap();

    let heading = heading_from_entry(&entry, &options);
    let back = entry_from_heading(&heading, &options);

    assert_eq!(back.entry_type, entry.entry_type);
    assert_eq!(back.key, entry.key);
    assert_eq!(back.fields_map(), entry.fields_map());
}

#[test]
fn text_round_trip_is_stable_modulo_normalization() {
    let original = "@article{k1,\n  author = \"Jane  Doe\",\n  title = {Spread\n    over lines},\n  journal={J},\n  year={2001}\n}\n";
    let first = parse_entry(original).unwrap();
    let formatted = format_entry(&first, &[], false).unwrap();
    let second = parse_entry(&formatted).unwrap();
    assert_eq!(second, first);
    assert_eq!(second.author(), Some("Jane Doe"));
    assert_eq!(second.title(), Some("Spread over lines"));
}

#[test]
fn staging_then_writing_is_most_recent_first() {
    let mut queue = StagingQueue::new();
    stage("@misc{e1, note={n}}\n@misc{e2, note={n}}", &mut queue);

    let options = Options::default();
    let first = write_heading(&mut queue, &options).unwrap();
    let second = write_heading(&mut queue, &options).unwrap();
    assert_eq!(first.property("CUSTOM_ID"), Some("e2"));
    assert_eq!(second.property("CUSTOM_ID"), Some("e1"));
    assert_eq!(
        write_heading(&mut queue, &options).unwrap_err(),
        outbib_outline::Error::EmptyStagingQueue
    );
}

#[test]
fn prefixed_headings_keep_foreign_properties_out() {
    let options = Options {
        prefix: "BIB_".to_string(),
        export_arbitrary_fields: true,
        tags_are_keywords: true,
        ..Options::default()
    };

    let entry = parse_entry(DOLEV83).unwrap();
    let mut heading = heading_from_entry(&entry, &options);
    heading.set_property("CATEGORY", "unrelated document state");

    let mut out = String::new();
    export_headings(std::slice::from_ref(&heading), &options, &mut out).unwrap();
    assert!(!out.to_lowercase().contains("category"));
    assert!(out.contains("author={Danny Dolev and Andrew C. Yao}"));
}

#[test]
fn fleshed_out_entry_exports_cleanly() {
    struct OneAnswer;
    impl FieldPrompter for OneAnswer {
        fn field_value(&mut self, field: &str, _description: Option<&str>) -> Option<String> {
            Some(match field {
                "journal" => "Annalen der Physik".to_string(),
                _ => format!("{field} value"),
            })
        }
        fn choose_alternative(&mut self, alternatives: &[&'static str]) -> Option<&'static str> {
            alternatives.first().copied()
        }
        fn citation_key(&mut self) -> Option<String> {
            None
        }
    }

    let options = Options {
        autokey: true,
        treat_title_as_headline: false,
        ..Options::default()
    };
    let mut entry = BibEntry::new("", "article");
    entry.set_field("author", "Albert Einstein");
    entry.set_field("year", "1905");

    let existing: HashSet<String> = HashSet::new();
    let state = fleshout(&mut entry, &options, &mut OneAnswer, &existing, false).unwrap();
    assert_eq!(state, Completeness::Complete);
    assert_eq!(entry.key, "einstein05");
    assert_eq!(entry.field("journal"), Some("Annalen der Physik"));

    let heading = heading_from_entry(&entry, &options);
    let record = outbib_outline::export_heading(&heading, &options).unwrap();
    let reparsed = parse_entry(&record).unwrap();
    assert_eq!(reparsed.fields_map(), entry.fields_map());
}

#[test]
fn default_tags_round_trip_without_leaking_into_keywords() {
    let options = Options {
        tags_are_keywords: true,
        default_tags: vec!["bibliography".to_string()],
        ..Options::default()
    };

    let mut entry = parse_entry(DOLEV83).unwrap();
    entry.set_field("keywords", "security, protocols");

    let heading = heading_from_entry(&entry, &options);
    assert!(heading.tags.contains(&"security".to_string()));
    assert!(heading.tags.contains(&"bibliography".to_string()));

    let record = outbib_outline::export_heading(&heading, &options).unwrap();
    assert!(record.contains("keywords={security, protocols}"));
    assert!(!record.contains("bibliography"));
}

#[test]
fn heading_record_serializes() {
    let entry = parse_entry(DOLEV83).unwrap();
    let heading = heading_from_entry(&entry, &Options::default());
    let json = serde_json::to_string(&heading).unwrap();
    let back: HeadingRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(back, heading);
}
