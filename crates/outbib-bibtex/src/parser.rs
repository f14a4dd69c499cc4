//! Bibliography record parser
//!
//! Two layers. The grammar layer (nom-based) splits bibliography text into
//! records, handling braced and quoted values with nested braces, bare
//! numbers, `@string` abbreviation substitution, `%` line comments and
//! `@comment`/`@preamble` blocks; raw field values keep their delimiters.
//! The normalization layer then lowercases field names, strips exactly one
//! outer delimiter layer from each value, and collapses whitespace runs to
//! single spaces.
//!
//! Malformed regions are skipped with recovery at the next `@`; parsing
//! itself never raises.

use nom::{
    bytes::complete::take_while1,
    character::complete::{char, multispace0},
    IResult,
};
use std::collections::HashMap;

use crate::entry::BibEntry;

/// A record as the grammar layer sees it: values still carry delimiters.
struct RawRecord {
    entry_type: String,
    key: String,
    fields: Vec<(String, String)>,
}

enum Block {
    Record(RawRecord),
    StringDef(String, String),
    Skip,
}

/// Parse bibliography text into normalized entries.
pub fn parse(input: &str) -> Vec<BibEntry> {
    let mut entries = Vec::new();
    let mut strings: HashMap<String, String> = HashMap::new();
    let mut remaining = input;

    while !remaining.is_empty() {
        remaining = skip_to_record(remaining);
        if remaining.is_empty() {
            break;
        }

        match at_block(remaining, &strings) {
            Ok((rest, block)) => {
                match block {
                    Block::Record(raw) => entries.push(normalize(raw)),
                    Block::StringDef(name, value) => {
                        strings.insert(name, value);
                    }
                    Block::Skip => {}
                }
                remaining = rest;
            }
            Err(_) => {
                // Recover at the next record boundary.
                match remaining[1..].find('@') {
                    Some(pos) => remaining = &remaining[pos + 1..],
                    None => break,
                }
            }
        }
    }

    entries
}

/// Parse the first record of the input, if any.
pub fn parse_entry(input: &str) -> Option<BibEntry> {
    parse(input).into_iter().next()
}

/// Normalize a raw field value: trim, strip one outer layer of matching
/// `{…}` or `"…"` delimiters (not recursively), collapse whitespace runs.
pub fn clean_value(raw: &str) -> String {
    collapse_whitespace(strip_outer(raw.trim()))
}

fn normalize(raw: RawRecord) -> BibEntry {
    let mut entry = BibEntry::new(raw.key, raw.entry_type.to_lowercase());
    for (name, value) in raw.fields {
        entry.set_field(name.to_lowercase(), clean_value(&value));
    }
    entry
}

fn strip_outer(s: &str) -> &str {
    let bytes = s.as_bytes();
    if bytes.len() >= 2 {
        if bytes[0] == b'{' && bytes[bytes.len() - 1] == b'}' && brace_span(s) == Some(s.len()) {
            return &s[1..s.len() - 1];
        }
        if bytes[0] == b'"' && bytes[bytes.len() - 1] == b'"' && quote_span(s) == Some(s.len()) {
            return &s[1..s.len() - 1];
        }
    }
    s
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Skip whitespace, `%` line comments, and any junk before the next `@`.
fn skip_to_record(input: &str) -> &str {
    let mut rest = input;
    loop {
        rest = rest.trim_start();
        if let Some(comment) = rest.strip_prefix('%') {
            rest = match comment.find('\n') {
                Some(pos) => &comment[pos..],
                None => "",
            };
            continue;
        }
        break;
    }
    if rest.starts_with('@') || rest.is_empty() {
        rest
    } else {
        match rest.find('@') {
            Some(pos) => &rest[pos..],
            None => "",
        }
    }
}

fn at_block<'a>(input: &'a str, strings: &HashMap<String, String>) -> IResult<&'a str, Block> {
    let (rest, _) = char('@')(input)?;
    let (rest, _) = multispace0(rest)?;
    let (rest, kind) = take_while1(|c: char| c.is_ascii_alphanumeric())(rest)?;

    match kind.to_lowercase().as_str() {
        "string" => {
            let (rest, (name, value)) = string_definition(rest)?;
            Ok((rest, Block::StringDef(name, value)))
        }
        "comment" | "preamble" => {
            let (rest, ()) = skipped_body(rest)?;
            Ok((rest, Block::Skip))
        }
        _ => {
            let (rest, raw) = record_body(rest, kind, strings)?;
            Ok((rest, Block::Record(raw)))
        }
    }
}

/// `@string{name = value}`; the stored abbreviation text is normalized so
/// substitution inserts clean, delimiter-free text.
fn string_definition(input: &str) -> IResult<&str, (String, String)> {
    let (rest, _) = multispace0(input)?;
    let (rest, _) = char('{')(rest)?;
    let (rest, _) = multispace0(rest)?;
    let (rest, name) =
        take_while1(|c: char| c.is_ascii_alphanumeric() || c == '_' || c == '-')(rest)?;
    let (rest, _) = multispace0(rest)?;
    let (rest, _) = char('=')(rest)?;
    let (rest, _) = multispace0(rest)?;
    let (rest, raw) = raw_value(rest, &HashMap::new())?;
    let (rest, _) = multispace0(rest)?;
    let (rest, _) = char('}')(rest)?;

    Ok((rest, (name.to_lowercase(), clean_value(&raw))))
}

/// Skip a braced `@comment`/`@preamble` body, or the rest of the line when
/// there is none.
fn skipped_body(input: &str) -> IResult<&str, ()> {
    let (rest, _) = multispace0(input)?;
    if rest.starts_with('{') {
        let (rest, _) = braced_raw(rest)?;
        Ok((rest, ()))
    } else {
        let pos = rest.find('\n').unwrap_or(rest.len());
        Ok((&rest[pos..], ()))
    }
}

fn record_body<'a>(
    input: &'a str,
    entry_type: &str,
    strings: &HashMap<String, String>,
) -> IResult<&'a str, RawRecord> {
    let (rest, _) = multispace0(input)?;
    let (rest, _) = char('{')(rest)?;
    let (rest, _) = multispace0(rest)?;
    let (rest, key) =
        take_while1(|c: char| c.is_ascii_alphanumeric() || "_-:./+".contains(c))(rest)?;
    let (rest, _) = multispace0(rest)?;
    let (rest, _) = char(',')(rest)?;
    let (rest, fields) = field_list(rest, strings)?;
    let (rest, _) = multispace0(rest)?;
    let (rest, _) = char('}')(rest)?;

    Ok((
        rest,
        RawRecord {
            entry_type: entry_type.to_string(),
            key: key.to_string(),
            fields,
        },
    ))
}

fn field_list<'a>(
    input: &'a str,
    strings: &HashMap<String, String>,
) -> IResult<&'a str, Vec<(String, String)>> {
    let mut fields = Vec::new();
    let mut remaining = input;

    loop {
        let (rest, _) = multispace0(remaining)?;
        if rest.starts_with('}') {
            return Ok((rest, fields));
        }

        match single_field(rest, strings) {
            Ok((rest, field)) => {
                fields.push(field);
                let (rest, _) = multispace0(rest)?;
                remaining = rest.strip_prefix(',').unwrap_or(rest);
            }
            Err(_) => return Ok((remaining, fields)),
        }
    }
}

fn single_field<'a>(
    input: &'a str,
    strings: &HashMap<String, String>,
) -> IResult<&'a str, (String, String)> {
    let (rest, name) =
        take_while1(|c: char| c.is_ascii_alphanumeric() || c == '_' || c == '-')(input)?;
    let (rest, _) = multispace0(rest)?;
    let (rest, _) = char('=')(rest)?;
    let (rest, _) = multispace0(rest)?;
    let (rest, value) = raw_value(rest, strings)?;

    Ok((rest, (name.to_string(), value)))
}

/// A field value as written: braced or quoted text with delimiters kept,
/// a bare number, or a bare identifier resolved against `@string`
/// abbreviations.
fn raw_value<'a>(input: &'a str, strings: &HashMap<String, String>) -> IResult<&'a str, String> {
    if input.starts_with('{') {
        let (rest, raw) = braced_raw(input)?;
        return Ok((rest, raw.to_string()));
    }
    if input.starts_with('"') {
        let (rest, raw) = quoted_raw(input)?;
        return Ok((rest, raw.to_string()));
    }
    let (rest, word) =
        take_while1(|c: char| c.is_ascii_alphanumeric() || c == '_' || c == '-')(input)?;
    let resolved = strings
        .get(&word.to_lowercase())
        .cloned()
        .unwrap_or_else(|| word.to_string());
    Ok((rest, resolved))
}

/// Braced content including the outer braces, honoring nesting and
/// backslash escapes.
fn braced_raw(input: &str) -> IResult<&str, &str> {
    match brace_span(input) {
        Some(len) => Ok((&input[len..], &input[..len])),
        None => Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::Char,
        ))),
    }
}

/// Quoted content including the outer quotes; quotes inside braces do not
/// terminate the value.
fn quoted_raw(input: &str) -> IResult<&str, &str> {
    match quote_span(input) {
        Some(len) => Ok((&input[len..], &input[..len])),
        None => Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::Char,
        ))),
    }
}

/// Length of the balanced `{…}` group starting at byte 0, if complete.
fn brace_span(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    if bytes.first() != Some(&b'{') {
        return None;
    }
    let mut depth = 0usize;
    let mut pos = 0;
    while pos < bytes.len() {
        match bytes[pos] {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(pos + 1);
                }
            }
            b'\\' => pos += 1,
            _ => {}
        }
        pos += 1;
    }
    None
}

/// Length of the `"…"` group starting at byte 0, if complete.
fn quote_span(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    if bytes.first() != Some(&b'"') {
        return None;
    }
    let mut depth = 0i32;
    let mut pos = 1;
    while pos < bytes.len() {
        match bytes[pos] {
            b'{' => depth += 1,
            b'}' => depth -= 1,
            b'"' if depth == 0 => return Some(pos + 1),
            b'\\' => pos += 1,
            _ => {}
        }
        pos += 1;
    }
    None
}
