//! i18n request-path normalization library.
//!
//! Rewrites localized request paths to their canonical form before routing,
//! translates canonical paths back into localized spellings, and enumerates
//! every localized path that resolves to a given canonical one.

pub mod aliases;
pub mod config;
pub mod http;
pub mod resolver;

pub use aliases::source::{AliasTableSource, SourceError, StaticSource, SupplierSource, SwapSource};
pub use aliases::table::{AliasTable, SegmentEntry};
pub use http::rewrite::{NormalizeLayer, OriginalPath};
pub use resolver::dynamic::DynamicPathResolver;
pub use resolver::path::{PathAnalysis, PathResolver, TargetLanguage};
