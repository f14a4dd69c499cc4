//! Batch export of headings to bibliography text

use outbib_bibtex::format_entry;

use crate::error::Error;
use crate::heading::HeadingRecord;
use crate::mapper;
use crate::options::Options;

/// Translate one heading to record text.
pub fn export_heading(heading: &HeadingRecord, options: &Options) -> Result<String, Error> {
    let entry = mapper::entry_from_heading(heading, options);
    let keywords = if options.tags_are_keywords {
        mapper::exportable_tags(heading, options)
    } else {
        Vec::new()
    };
    format_entry(&entry, &keywords, options.export_arbitrary_fields).map_err(Error::from)
}

/// Translate a sequence of headings, appending each record to `out`.
///
/// Export halts at the first heading that fails to translate; everything
/// already appended stays in `out`, and the error names the failing
/// position so the caller can fix that heading and resume.
pub fn export_headings(
    headings: &[HeadingRecord],
    options: &Options,
    out: &mut String,
) -> Result<(), Error> {
    for (position, heading) in headings.iter().enumerate() {
        match export_heading(heading, options) {
            Ok(record) => {
                if position > 0 {
                    out.push('\n');
                }
                out.push_str(&record);
                tracing::debug!(position, title = %heading.title, "exported heading");
            }
            Err(Error::Bibtex(source)) => {
                tracing::warn!(position, title = %heading.title, %source, "export halted");
                return Err(Error::Export { position, source });
            }
            Err(other) => return Err(other),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heading::HeadingRecord;

    fn heading(key: &str, entry_type: &str) -> HeadingRecord {
        let mut heading = HeadingRecord::new(format!("Title of {key}"));
        heading.set_property("BTYPE", entry_type);
        heading.set_property("CUSTOM_ID", key);
        heading.set_property("YEAR", "2000");
        heading
    }

    #[test]
    fn exports_every_heading() {
        let headings = vec![heading("a1", "misc"), heading("a2", "misc")];
        let mut out = String::new();
        export_headings(&headings, &Options::default(), &mut out).unwrap();
        assert!(out.contains("@misc{a1,"));
        assert!(out.contains("@misc{a2,"));
        let reparsed = outbib_bibtex::parse(&out);
        assert_eq!(reparsed.len(), 2);
    }

    #[test]
    fn halt_preserves_partial_output_and_position() {
        let headings = vec![
            heading("ok1", "misc"),
            heading("bad", "webpage"),
            heading("ok2", "misc"),
        ];
        let mut out = String::new();
        let error = export_headings(&headings, &Options::default(), &mut out).unwrap_err();

        match error {
            Error::Export { position, source } => {
                assert_eq!(position, 1);
                assert_eq!(
                    source,
                    outbib_bibtex::Error::UnknownType {
                        name: "webpage".to_string()
                    }
                );
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(out.contains("@misc{ok1,"));
        assert!(!out.contains("ok2"));
    }

    #[test]
    fn tags_fold_into_keywords_on_export() {
        let options = Options {
            tags_are_keywords: true,
            no_export_tags: vec!["noexport".to_string()],
            ..Options::default()
        };
        let mut one = heading("k1", "misc");
        one.add_tag("crypto");
        one.add_tag("noexport");

        let record = export_heading(&one, &options).unwrap();
        assert!(record.contains("keywords={crypto}"));
        assert!(!record.contains("noexport"));
    }
}
