//! Path resolution subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming path ("/articulos/le-bloc")
//!     → split on '/' (leading empty piece passes through verbatim)
//!     → path.rs walks the alias table piece by piece
//!         exact canonical match | alias match | pass-through
//!     → descend into the matched entry's children for the next piece
//!     → join pieces back with '/'
//!
//! Dynamic tables:
//!     dynamic.rs fetches a fresh snapshot from an AliasTableSource
//!     → builds a transient PathResolver → delegates
//! ```
//!
//! # Design Decisions
//! - Canonical names win over aliases, so normalization is idempotent
//! - An unmatched piece exhausts the table for all its descendants
//! - First match wins for ambiguous aliases (declaration order)
//! - Pure synchronous traversal; no I/O, no allocation beyond the output

pub mod dynamic;
pub mod path;
