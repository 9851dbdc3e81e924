//! Resolution against tables that change at runtime.
//!
//! # Responsibilities
//! - Fetch a fresh table snapshot before every resolution
//! - Delegate all path logic to a transient [`PathResolver`]
//!
//! # Design Decisions
//! - No caching between calls: freshness over performance, the backing
//!   content (user-generated aliases) changes often
//! - Source failures propagate to the caller uninterpreted

use std::sync::Arc;

use crate::aliases::source::{AliasTableSource, BoxError, SourceError, SupplierSource};
use crate::aliases::table::AliasTable;
use crate::resolver::path::{PathAnalysis, PathResolver, TargetLanguage};

/// A resolver that re-reads its alias table from an
/// [`AliasTableSource`] on every operation.
pub struct DynamicPathResolver {
    source: Arc<dyn AliasTableSource>,
    default_language: Option<String>,
}

impl DynamicPathResolver {
    pub fn new(source: impl AliasTableSource + 'static) -> Self {
        Self {
            source: Arc::new(source),
            default_language: None,
        }
    }

    /// Wrap a source that is also held elsewhere, e.g. a
    /// [`SwapSource`](crate::aliases::source::SwapSource) fed by a watcher.
    pub fn from_shared(source: Arc<dyn AliasTableSource>) -> Self {
        Self {
            source,
            default_language: None,
        }
    }

    /// Build from a plain supplier closure returning a fresh table.
    pub fn from_fn<F>(supplier: F) -> Self
    where
        F: Fn() -> Result<AliasTable, BoxError> + Send + Sync + 'static,
    {
        Self::new(SupplierSource::new(supplier))
    }

    pub fn default_language(mut self, lang: impl Into<String>) -> Self {
        self.default_language = Some(lang.into());
        self
    }

    /// See [`PathResolver::normalize`].
    pub fn normalize(&self, path: &str) -> Result<String, SourceError> {
        Ok(self.resolver()?.normalize(path))
    }

    /// See [`PathResolver::translate`].
    pub fn translate(
        &self,
        path: &str,
        target: impl Into<TargetLanguage>,
    ) -> Result<String, SourceError> {
        Ok(self.resolver()?.translate(path, target))
    }

    /// See [`PathResolver::analyze`].
    pub fn analyze(
        &self,
        path: &str,
        target: impl Into<TargetLanguage>,
    ) -> Result<PathAnalysis, SourceError> {
        Ok(self.resolver()?.analyze(path, target))
    }

    fn resolver(&self) -> Result<PathResolver, SourceError> {
        let table = self.source.fetch()?;
        Ok(PathResolver::from_shared(
            table,
            self.default_language.clone(),
        ))
    }
}
