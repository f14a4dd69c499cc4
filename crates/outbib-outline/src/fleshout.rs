//! Entry completeness checking and filling
//!
//! `check` reports where an entry stands against its type schema;
//! `fleshout` walks the unsatisfied slots, asking a [`FieldPrompter`] for
//! values, then settles the citation key. Prompting is a capability the
//! caller injects, so the translation core stays testable without a user.
//!
//! The operation works on a copy and commits only on success: an aborted
//! prompt leaves the entry exactly as it was.

use std::collections::HashSet;

use outbib_bibtex::{catalog, key, schema, BibEntry, EntryType, FieldSpec};

use crate::error::Error;
use crate::options::Options;

/// Answers a caller's questions during fleshout. Every method may return
/// `None` to abort the whole operation.
pub trait FieldPrompter {
    /// Ask for a field value; an empty answer leaves the field unset.
    fn field_value(&mut self, field: &str, description: Option<&str>) -> Option<String>;
    /// Pick which member of an alternative set to fill in.
    fn choose_alternative(&mut self, alternatives: &[&'static str]) -> Option<&'static str>;
    /// Ask for a citation key.
    fn citation_key(&mut self) -> Option<String>;
}

/// Where an entry stands in the completeness cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completeness {
    /// Required slots still unsatisfied, by label (`editor|author`).
    MissingRequired(Vec<String>),
    /// Every required slot satisfied, citation key still absent.
    MissingKey,
    Complete,
}

/// Assess an entry against its type schema without prompting.
pub fn check(entry: &BibEntry, options: &Options) -> Result<Completeness, Error> {
    let entry_type = EntryType::parse(&entry.entry_type)?;
    let missing: Vec<String> = schema::required_fields(entry_type)
        .iter()
        .filter(|spec| !satisfied(spec, entry, options))
        .map(FieldSpec::label)
        .collect();

    if !missing.is_empty() {
        return Ok(Completeness::MissingRequired(missing));
    }
    if entry.key.trim().is_empty() {
        return Ok(Completeness::MissingKey);
    }
    Ok(Completeness::Complete)
}

/// Fill unsatisfied required slots (and optional ones when asked), then
/// derive or request a citation key. Returns the resulting state; an empty
/// answer leaves its field unset, so the caller may land short of
/// `Complete` and invoke the cycle again later.
pub fn fleshout(
    entry: &mut BibEntry,
    options: &Options,
    prompter: &mut dyn FieldPrompter,
    existing_keys: &HashSet<String>,
    include_optional: bool,
) -> Result<Completeness, Error> {
    let entry_type = EntryType::parse(&entry.entry_type)?;
    let table = schema::schema(entry_type);
    let mut draft = entry.clone();

    for spec in table.required {
        fill_slot(&mut draft, spec, options, prompter)?;
    }
    if include_optional {
        for spec in table.optional {
            fill_slot(&mut draft, spec, options, prompter)?;
        }
    }

    if draft.key.trim().is_empty() {
        if options.autokey {
            let base = key::entry_key(&draft);
            if existing_keys.contains(&base) {
                tracing::warn!(key = %base, "generated citation key already in use");
            }
            draft.key = key::make_key_unique(base, existing_keys);
        } else {
            match prompter.citation_key() {
                Some(answer) => {
                    let answer = answer.trim();
                    if !answer.is_empty() {
                        draft.key = key::sanitize_key(answer);
                    }
                }
                None => return Err(Error::Aborted),
            }
        }
    }

    *entry = draft;
    check(entry, options)
}

fn fill_slot(
    draft: &mut BibEntry,
    spec: &FieldSpec,
    options: &Options,
    prompter: &mut dyn FieldPrompter,
) -> Result<(), Error> {
    if satisfied(spec, draft, options) {
        return Ok(());
    }

    let field = match spec {
        FieldSpec::Single(name) => *name,
        FieldSpec::AnyOf(names) => match prompter.choose_alternative(names) {
            Some(choice) if names.contains(&choice) => choice,
            Some(_) => return Ok(()),
            None => return Err(Error::Aborted),
        },
    };

    let description = catalog::field_description(field).ok();
    match prompter.field_value(field, description) {
        Some(answer) => {
            let answer = answer.trim();
            if !answer.is_empty() {
                draft.set_field(field, answer);
            }
            Ok(())
        }
        None => Err(Error::Aborted),
    }
}

fn satisfied(spec: &FieldSpec, entry: &BibEntry, options: &Options) -> bool {
    spec.names()
        .iter()
        .any(|name| entry.has_field(name) || (*name == "title" && options.treat_title_as_headline))
}
