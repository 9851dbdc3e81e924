//! Alias configuration schema.
//!
//! This module defines the on-disk shape of an alias file. All types
//! derive Serde traits; segments and aliases are arrays-of-tables so that
//! declaration order survives deserialization.
//!
//! ```toml
//! default_language = "eng"
//!
//! [[segments]]
//! canonical = "articles"
//!
//! [[segments.aliases]]
//! lang = "fra"
//! spellings = ["articles"]
//!
//! [[segments.aliases]]
//! lang = "spa"
//! spellings = ["artículos", "articulos"]
//!
//! [[segments.children]]
//! canonical = "the-block"
//!
//! [[segments.children.aliases]]
//! lang = "fra"
//! spellings = ["le-bloc"]
//! ```

use serde::{Deserialize, Serialize};

use crate::aliases::table::{AliasTable, SegmentEntry};

/// Root of an alias file.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AliasesConfig {
    /// Language tag treated as "already canonical". Optional.
    pub default_language: Option<String>,

    /// Top-level canonical segments, in declaration order.
    pub segments: Vec<SegmentConfig>,
}

/// One canonical segment and its localized spellings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SegmentConfig {
    /// Canonical segment name.
    pub canonical: String,

    /// Per-language spellings, in declaration order.
    #[serde(default)]
    pub aliases: Vec<LanguageConfig>,

    /// Alias sets for sub-paths of this segment.
    #[serde(default)]
    pub children: Vec<SegmentConfig>,
}

/// One language's spellings for a segment.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LanguageConfig {
    /// Language tag (e.g. "fra", "spa").
    pub lang: String,

    /// Valid spellings, first one used for translation.
    #[serde(default)]
    pub spellings: Vec<String>,
}

impl AliasesConfig {
    /// Build the runtime alias table this configuration describes.
    pub fn build_table(&self) -> AliasTable {
        let mut table = AliasTable::new();
        for segment in &self.segments {
            table.push(segment.build_entry());
        }
        table
    }
}

impl SegmentConfig {
    fn build_entry(&self) -> SegmentEntry {
        let mut entry = SegmentEntry::new(&self.canonical);
        for alias in &self.aliases {
            entry = entry.alias(&alias.lang, alias.spellings.iter().cloned());
        }
        for child in &self.children {
            entry = entry.child(child.build_entry());
        }
        entry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_a_nested_table_in_declaration_order() {
        let config: AliasesConfig = toml::from_str(
            r#"
            default_language = "eng"

            [[segments]]
            canonical = "articles"

            [[segments.aliases]]
            lang = "fra"
            spellings = ["articles"]

            [[segments.aliases]]
            lang = "spa"
            spellings = ["artículos", "articulos"]

            [[segments.children]]
            canonical = "the-block"

            [[segments.children.aliases]]
            lang = "spa"
            spellings = ["el-bloque"]

            [[segments]]
            canonical = "paintings"
            "#,
        )
        .unwrap();

        assert_eq!(config.default_language.as_deref(), Some("eng"));

        let table = config.build_table();
        assert_eq!(table.entries()[0].canonical(), "articles");
        assert_eq!(table.entries()[1].canonical(), "paintings");

        let articles = table.get("articles").unwrap();
        assert_eq!(
            articles.spellings_for("spa").unwrap(),
            ["artículos", "articulos"]
        );
        assert!(articles.children().unwrap().get("the-block").is_some());
        assert!(table.get("paintings").unwrap().children().is_none());
    }

    #[test]
    fn minimal_config_deserializes() {
        let config: AliasesConfig = toml::from_str("").unwrap();
        assert!(config.default_language.is_none());
        assert!(config.build_table().is_empty());
    }
}
