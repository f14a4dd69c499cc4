//! Citation key generation
//!
//! Autokey policy: first author's last name, lowercased and folded to
//! ASCII, plus the two-digit year (`dolev83`). When neither is available
//! the first significant title word stands in. Collisions against an
//! existing key set are resolved with letter, then numeric, suffixes.

use std::collections::HashSet;

use unicode_normalization::UnicodeNormalization;

use crate::entry::BibEntry;

const STOPWORDS: &[&str] = &[
    "a", "an", "the", "on", "in", "of", "for", "to", "and", "with", "by", "from", "at", "is",
];

/// Generate a key from author, year, and title metadata.
pub fn generate_key(author: Option<&str>, year: Option<&str>, title: Option<&str>) -> String {
    let mut key = String::new();

    if let Some(author) = author {
        if let Some(last) = first_author_last_name(author) {
            key.push_str(&normalize_for_key(&last).to_lowercase());
        }
    }

    if let Some(year) = year {
        let digits: String = year.chars().filter(char::is_ascii_digit).take(4).collect();
        if digits.len() == 4 {
            key.push_str(&digits[2..]);
        }
    }

    if key.is_empty() {
        if let Some(title) = title {
            if let Some(word) = first_significant_word(title) {
                key.push_str(&normalize_for_key(&word).to_lowercase());
            }
        }
    }

    if key.is_empty() {
        key.push_str("unknown");
    }

    key
}

/// Generate a key from an entry's own fields.
pub fn entry_key(entry: &BibEntry) -> String {
    generate_key(entry.author(), entry.year(), entry.title())
}

/// Disambiguate `base` against existing keys with `a`..`z`, then numeric,
/// suffixes.
pub fn make_key_unique(base: String, existing: &HashSet<String>) -> String {
    if !existing.contains(&base) {
        return base;
    }

    for suffix in 'a'..='z' {
        let candidate = format!("{base}{suffix}");
        if !existing.contains(&candidate) {
            return candidate;
        }
    }

    let mut counter = 2u64;
    loop {
        let candidate = format!("{base}{counter}");
        if !existing.contains(&candidate) {
            return candidate;
        }
        counter += 1;
    }
}

/// Drop characters a key cannot carry.
pub fn sanitize_key(key: &str) -> String {
    key.chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | ':' | '.'))
        .collect()
}

fn first_author_last_name(author: &str) -> Option<String> {
    let lowered = author.to_lowercase();
    let first = match lowered.find(" and ") {
        Some(pos) => author[..pos].trim(),
        None => author.trim(),
    };
    if first.is_empty() {
        return None;
    }
    // "Last, First" or "First Last"
    match first.split_once(',') {
        Some((last, _)) => Some(last.trim().to_string()),
        None => first.split_whitespace().last().map(str::to_string),
    }
}

fn first_significant_word(title: &str) -> Option<String> {
    let mut fallback = None;
    for word in title.split_whitespace() {
        let clean: String = word.chars().filter(|c| c.is_alphanumeric()).collect();
        if clean.is_empty() {
            continue;
        }
        if fallback.is_none() {
            fallback = Some(clean.clone());
        }
        if !STOPWORDS.contains(&clean.to_lowercase().as_str()) {
            return Some(clean);
        }
    }
    fallback
}

/// Fold to plain ASCII alphanumerics (NFKD, diacritics dropped).
fn normalize_for_key(s: &str) -> String {
    s.nfkd().filter(char::is_ascii_alphanumeric).collect()
}
