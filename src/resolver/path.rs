//! Segment-by-segment path resolution.
//!
//! # Responsibilities
//! - Normalize localized paths to their canonical spelling
//! - Translate canonical (or localized) paths into a target language
//! - Report which language each piece of a path was written in
//! - Enumerate every localized path equivalent to a canonical one
//!
//! # Design Decisions
//! - One descent produces canonical, translated, and language data together
//! - Exact canonical match is checked before aliases, making `normalize`
//!   idempotent on canonical input
//! - Not found / language missing are ordinary outcomes, not errors

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::aliases::table::{AliasTable, SegmentEntry};

/// The language a path should be translated into.
///
/// `Default` (and any tag equal to the resolver's configured default
/// language) means canonical names are used verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TargetLanguage {
    #[default]
    Default,
    Tag(String),
}

impl TargetLanguage {
    pub fn tag(tag: impl Into<String>) -> Self {
        TargetLanguage::Tag(tag.into())
    }
}

impl From<&str> for TargetLanguage {
    fn from(tag: &str) -> Self {
        TargetLanguage::Tag(tag.to_string())
    }
}

impl From<String> for TargetLanguage {
    fn from(tag: String) -> Self {
        TargetLanguage::Tag(tag)
    }
}

/// Canonical and translated forms of a path, plus the detected source
/// language of each real segment.
///
/// The piece vectors include the leading empty piece of an absolute path
/// and a trailing empty piece when the input ended with `/`; the language
/// vector covers real segments only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathAnalysis {
    canonical: Vec<String>,
    translated: Vec<String>,
    languages: Vec<Option<String>>,
}

impl PathAnalysis {
    pub fn canonical_path(&self) -> String {
        self.canonical.join("/")
    }

    pub fn translated_path(&self) -> String {
        self.translated.join("/")
    }

    pub fn canonical_pieces(&self) -> &[String] {
        &self.canonical
    }

    pub fn translated_pieces(&self) -> &[String] {
        &self.translated
    }

    /// Detected source language per segment. `None` stands for the
    /// configured default when no default language is set.
    pub fn languages(&self) -> &[Option<String>] {
        &self.languages
    }
}

/// Walks paths through an alias table snapshot.
///
/// Purely synchronous and read-only; a single instance may be shared
/// across threads as long as nothing mutates the table underneath it.
#[derive(Debug, Clone)]
pub struct PathResolver {
    table: Arc<AliasTable>,
    default_language: Option<String>,
}

impl PathResolver {
    pub fn new(table: AliasTable) -> Self {
        Self {
            table: Arc::new(table),
            default_language: None,
        }
    }

    pub fn with_default_language(table: AliasTable, lang: impl Into<String>) -> Self {
        Self {
            table: Arc::new(table),
            default_language: Some(lang.into()),
        }
    }

    /// Build a resolver around an existing snapshot, e.g. one handed out
    /// by an [`AliasTableSource`](crate::aliases::source::AliasTableSource).
    pub fn from_shared(table: Arc<AliasTable>, default_language: Option<String>) -> Self {
        Self {
            table,
            default_language,
        }
    }

    pub fn default_language(&self) -> Option<&str> {
        self.default_language.as_deref()
    }

    /// Rewrite `path` to its canonical form.
    ///
    /// Unknown segments pass through unchanged and stop further table
    /// descent; a trailing `/` is preserved.
    pub fn normalize(&self, path: &str) -> String {
        self.analyze(path, TargetLanguage::Default).canonical_path()
    }

    /// Rewrite `path` into `target`'s spelling.
    ///
    /// Falls back to a segment's original spelling when the matched entry
    /// has no spellings for `target`.
    pub fn translate(&self, path: &str, target: impl Into<TargetLanguage>) -> String {
        self.analyze(path, target).translated_path()
    }

    /// Normalize and translate in a single table descent.
    pub fn analyze(&self, path: &str, target: impl Into<TargetLanguage>) -> PathAnalysis {
        let target = target.into();
        let trailing_slash = path.ends_with('/');

        let mut pieces: Vec<&str> = path.split('/').collect();
        // The leading piece of an absolute path is empty; it (or whatever
        // a malformed relative path starts with) passes through verbatim.
        let lead = pieces.remove(0);
        // Only the final empty piece of a trailing slash is a boundary;
        // repeated slashes leave empty interior pieces that behave like
        // any other unmatched segment.
        if trailing_slash {
            pieces.pop();
        }

        let mut canonical = vec![lead.to_string()];
        let mut translated = vec![lead.to_string()];
        let mut languages = Vec::with_capacity(pieces.len());

        let mut table = Some(self.table.as_ref());
        for piece in pieces {
            let (matched, translation, lang) = self.match_piece(piece, table, &target);

            canonical.push(match matched {
                Some(entry) => entry.canonical().to_string(),
                None => piece.to_string(),
            });
            translated.push(translation);
            languages.push(lang);

            // An unmatched piece exhausts the table for all descendants.
            table = matched.and_then(SegmentEntry::children);
        }

        if trailing_slash {
            canonical.push(String::new());
            translated.push(String::new());
        }

        PathAnalysis {
            canonical,
            translated,
            languages,
        }
    }

    /// Every path whose normalization is `canonical_path`.
    ///
    /// The input is expected to be canonical already; descent always uses
    /// canonical names, and segments absent from the table contribute only
    /// themselves.
    pub fn all_paths_for(&self, canonical_path: &str) -> BTreeSet<String> {
        let trailing_slash = canonical_path.ends_with('/');

        let mut pieces: Vec<&str> = canonical_path.split('/').collect();
        let lead = pieces.remove(0);
        if trailing_slash {
            pieces.pop();
        }

        let mut levels: Vec<Vec<String>> = vec![vec![lead.to_string()]];

        let mut table = Some(self.table.as_ref());
        for piece in pieces {
            let entry = table.and_then(|t| t.get(piece));
            levels.push(match entry {
                Some(entry) => entry.equivalent_spellings(),
                None => vec![piece.to_string()],
            });
            table = entry.and_then(SegmentEntry::children);
        }

        if trailing_slash {
            levels.push(vec![String::new()]);
        }

        // Cartesian product across levels, joined back with '/'.
        let mut paths = levels[0].clone();
        for level in &levels[1..] {
            let mut next = Vec::with_capacity(paths.len() * level.len());
            for prefix in &paths {
                for piece in level {
                    next.push(format!("{prefix}/{piece}"));
                }
            }
            paths = next;
        }

        paths.into_iter().collect()
    }

    /// Match one piece against a table level.
    ///
    /// Returns the matched entry (if any), the piece's spelling in the
    /// target language, and the detected source language.
    fn match_piece<'t>(
        &self,
        piece: &str,
        table: Option<&'t AliasTable>,
        target: &TargetLanguage,
    ) -> (Option<&'t SegmentEntry>, String, Option<String>) {
        let Some(table) = table else {
            return (None, piece.to_string(), self.default_language.clone());
        };

        for entry in table.entries() {
            if piece == entry.canonical() {
                let translation = self.piece_translation(piece, entry, target);
                return (Some(entry), translation, self.default_language.clone());
            }

            if let Some(lang) = entry.matching_language(piece) {
                let lang = lang.to_string();
                let translation = self.piece_translation(piece, entry, target);
                return (Some(entry), translation, Some(lang));
            }
        }

        (None, piece.to_string(), self.default_language.clone())
    }

    /// A matched piece's spelling in the target language: the canonical
    /// name for the default language, the first listed spelling otherwise,
    /// or the piece as originally written when the language is missing.
    fn piece_translation(&self, piece: &str, entry: &SegmentEntry, target: &TargetLanguage) -> String {
        let tag = match target {
            TargetLanguage::Default => return entry.canonical().to_string(),
            TargetLanguage::Tag(tag) => tag,
        };

        if Some(tag.as_str()) == self.default_language.as_deref() {
            return entry.canonical().to_string();
        }

        match entry.spellings_for(tag).and_then(|s| s.first()) {
            Some(spelling) => spelling.clone(),
            None => piece.to_string(),
        }
    }
}
