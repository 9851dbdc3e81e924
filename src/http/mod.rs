//! HTTP pipeline adapter.
//!
//! # Data Flow
//! ```text
//! Incoming request
//!     → rewrite.rs (NormalizeLayer)
//!         resolver.normalize(uri.path())
//!         → original path preserved in request extensions
//!         → request URI rewritten to the canonical path
//!     → inner service routes on the canonical path
//! ```
//!
//! # Design Decisions
//! - The layer rewrites the path and nothing else: no status codes, no
//!   headers, no body handling
//! - The query string is carried over untouched
//! - A table fetch failure passes the request through unrewritten;
//!   stale routing beats failing the request

pub mod rewrite;
