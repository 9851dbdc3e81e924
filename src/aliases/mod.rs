//! Alias table subsystem.
//!
//! # Data Flow
//! ```text
//! alias file (TOML/JSON) or in-code builder
//!     → table.rs (AliasTable: ordered entries, nested children)
//!     → source.rs (snapshot handed out as Arc<AliasTable>)
//!     → resolver walks the snapshot, never writes to it
//!
//! On refresh (dynamic tables):
//!     supplier / SwapSource produces a whole new table
//!     → next resolution sees the new snapshot
//!     → in-flight resolutions keep the old one
//! ```
//!
//! # Design Decisions
//! - Entries keep declaration order; ambiguous aliases resolve to the
//!   first matching entry (documented tie-break, not an error)
//! - Lookup is an O(n) scan per level (tables are small, no index needed)
//! - Tables are immutable once built; refresh means swap, never mutate

pub mod source;
pub mod table;
