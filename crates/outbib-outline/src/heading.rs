//! Outline heading record

use serde::{Deserialize, Serialize};

/// A single heading property. Names are stored upper-cased and matched
/// case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    pub name: String,
    pub value: String,
}

/// An outline heading: title, tag sets, and a keyed property drawer.
///
/// `inherited_tags` are the tags the heading receives from its ancestors
/// in the surrounding document; they only participate in export when
/// configured to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingRecord {
    pub title: String,
    pub tags: Vec<String>,
    pub inherited_tags: Vec<String>,
    pub properties: Vec<Property>,
}

impl HeadingRecord {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Store a property, upper-casing the name and replacing any existing
    /// value under the same (case-insensitive) name.
    pub fn set_property(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into().to_uppercase();
        let value = value.into();
        if let Some(property) = self
            .properties
            .iter_mut()
            .find(|p| p.name.eq_ignore_ascii_case(&name))
        {
            property.value = value;
        } else {
            self.properties.push(Property { name, value });
        }
    }

    /// Look up a property value by name (case-insensitive).
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
            .map(|p| p.value.as_str())
    }

    /// Toggle a tag on; duplicates are not added.
    pub fn add_tag(&mut self, tag: impl Into<String>) {
        let tag = tag.into();
        if !tag.is_empty() && !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
    }

    /// Local tags, optionally followed by inherited ones not already
    /// present locally.
    pub fn all_tags(&self, include_inherited: bool) -> Vec<String> {
        let mut tags = self.tags.clone();
        if include_inherited {
            for tag in &self.inherited_tags {
                if !tags.contains(tag) {
                    tags.push(tag.clone());
                }
            }
        }
        tags
    }
}
