//! The nested alias table the resolver walks.
//!
//! # Responsibilities
//! - Map canonical segment names to their per-language spellings
//! - Nest child tables for segments with localized sub-paths
//! - Preserve declaration order (first-match tie-break depends on it)

/// One language's spellings for a canonical segment.
///
/// A language may list several equally valid spellings, e.g. with and
/// without diacritics. Order is significant: translation picks the first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageAliases {
    lang: String,
    spellings: Vec<String>,
}

impl LanguageAliases {
    pub fn new<I, S>(lang: impl Into<String>, spellings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lang: lang.into(),
            spellings: spellings.into_iter().map(Into::into).collect(),
        }
    }

    pub fn lang(&self) -> &str {
        &self.lang
    }

    pub fn spellings(&self) -> &[String] {
        &self.spellings
    }
}

/// A canonical segment together with its localized spellings and,
/// optionally, the alias table for its sub-paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentEntry {
    canonical: String,
    languages: Vec<LanguageAliases>,
    children: Option<AliasTable>,
}

impl SegmentEntry {
    pub fn new(canonical: impl Into<String>) -> Self {
        Self {
            canonical: canonical.into(),
            languages: Vec::new(),
            children: None,
        }
    }

    /// Add the spellings of one language. Builder-style.
    pub fn alias<I, S>(mut self, lang: impl Into<String>, spellings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.languages.push(LanguageAliases::new(lang, spellings));
        self
    }

    /// Add a child entry, creating the children table on first use.
    pub fn child(mut self, entry: SegmentEntry) -> Self {
        self.children
            .get_or_insert_with(AliasTable::new)
            .push(entry);
        self
    }

    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    pub fn languages(&self) -> &[LanguageAliases] {
        &self.languages
    }

    pub fn children(&self) -> Option<&AliasTable> {
        self.children.as_ref()
    }

    /// Spellings recorded for `lang`, if any.
    pub fn spellings_for(&self, lang: &str) -> Option<&[String]> {
        self.languages
            .iter()
            .find(|l| l.lang == lang)
            .map(|l| l.spellings.as_slice())
    }

    /// The first language whose spellings contain `piece`.
    pub fn matching_language(&self, piece: &str) -> Option<&str> {
        self.languages
            .iter()
            .find(|l| l.spellings.iter().any(|s| s == piece))
            .map(|l| l.lang.as_str())
    }

    /// Canonical name plus every alias across every language, deduplicated,
    /// canonical first.
    pub fn equivalent_spellings(&self) -> Vec<String> {
        let mut out = vec![self.canonical.clone()];
        for lang in &self.languages {
            for spelling in &lang.spellings {
                if !out.iter().any(|s| s == spelling) {
                    out.push(spelling.clone());
                }
            }
        }
        out
    }
}

/// One level of the alias table: canonical names in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasTable {
    entries: Vec<SegmentEntry>,
}

impl AliasTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry, builder-style.
    pub fn entry(mut self, entry: SegmentEntry) -> Self {
        self.entries.push(entry);
        self
    }

    pub fn push(&mut self, entry: SegmentEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[SegmentEntry] {
        &self.entries
    }

    /// Exact lookup by canonical name.
    pub fn get(&self, canonical: &str) -> Option<&SegmentEntry> {
        self.entries.iter().find(|e| e.canonical == canonical)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_assembles_nested_table() {
        let table = AliasTable::new().entry(
            SegmentEntry::new("articles")
                .alias("fra", ["articles"])
                .alias("spa", ["artículos", "articulos"])
                .child(SegmentEntry::new("the-block").alias("fra", ["le-bloc"])),
        );

        let articles = table.get("articles").unwrap();
        assert_eq!(articles.spellings_for("spa").unwrap().len(), 2);

        let children = articles.children().unwrap();
        assert!(children.get("the-block").is_some());
        assert!(children.get("missing").is_none());
    }

    #[test]
    fn matching_language_returns_first_hit() {
        let entry = SegmentEntry::new("articles")
            .alias("fra", ["articles"])
            .alias("spa", ["artículos", "articulos"]);

        assert_eq!(entry.matching_language("articulos"), Some("spa"));
        assert_eq!(entry.matching_language("articles"), Some("fra"));
        assert_eq!(entry.matching_language("posts"), None);
    }

    #[test]
    fn equivalent_spellings_deduplicates() {
        // "articles" appears both as the canonical name and as a fra alias.
        let entry = SegmentEntry::new("articles")
            .alias("fra", ["articles"])
            .alias("spa", ["artículos", "articulos"]);

        assert_eq!(
            entry.equivalent_spellings(),
            vec!["articles", "artículos", "articulos"]
        );
    }
}
