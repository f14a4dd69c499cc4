//! Translation configuration surface

use serde::{Deserialize, Serialize};

/// The heading property that carries the entry type. Fixed rather than
/// configurable so it can never collide with the ordinary `type` field of
/// technical reports.
pub const TYPE_PROPERTY: &str = "BTYPE";

/// Options governing both translation directions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Derive missing citation keys programmatically instead of prompting.
    pub autokey: bool,
    /// Prefix prepended to every stored property name except the key
    /// property.
    pub prefix: String,
    /// A heading's title satisfies the `title` requirement and is omitted
    /// from required-field prompts.
    pub treat_title_as_headline: bool,
    /// Include non-schema fields in formatted output.
    pub export_arbitrary_fields: bool,
    /// Property holding the citation key. `CUSTOM_ID` keeps keys local to
    /// a document; switching to the global `ID` property trades that for
    /// document-wide identity.
    pub key_property: String,
    /// Tags applied to every written heading.
    pub default_tags: Vec<String>,
    /// Convert between heading tags and the `keywords` field in both
    /// directions.
    pub tags_are_keywords: bool,
    /// Tags never folded into the `keywords` field on export.
    pub no_export_tags: Vec<String>,
    /// Fold inherited tags, not just local ones, into `keywords` on
    /// export.
    pub inherit_tags_on_export: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            autokey: false,
            prefix: String::new(),
            treat_title_as_headline: true,
            export_arbitrary_fields: false,
            key_property: "CUSTOM_ID".to_string(),
            default_tags: Vec::new(),
            tags_are_keywords: false,
            no_export_tags: Vec::new(),
            inherit_tags_on_export: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = Options::default();
        assert!(!options.autokey);
        assert!(options.treat_title_as_headline);
        assert_eq!(options.key_property, "CUSTOM_ID");
        assert!(options.prefix.is_empty());
    }

    #[test]
    fn partial_config_deserializes_over_defaults() {
        let options: Options =
            serde_json::from_str(r#"{"prefix": "BIB_", "tags_are_keywords": true}"#).unwrap();
        assert_eq!(options.prefix, "BIB_");
        assert!(options.tags_are_keywords);
        assert_eq!(options.key_property, "CUSTOM_ID");
    }
}
