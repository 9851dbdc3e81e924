//! Alias configuration subsystem.
//!
//! # Data Flow
//! ```text
//! alias file (TOML/JSON)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → AliasesConfig → AliasTable (immutable)
//!     → PathResolver / SwapSource
//!
//! On file change:
//!     watcher.rs detects change
//!     → loader.rs loads & validates
//!     → new AliasTable sent over channel
//!     → SwapSource.store swaps the snapshot
//! ```
//!
//! # Design Decisions
//! - Arrays-of-tables keep declaration order through deserialization;
//!   first-match resolution depends on it
//! - Validation returns all errors, not just the first
//! - Overlapping aliases across sibling entries are rejected here even
//!   though the resolver tolerates them (first match wins at runtime)

pub mod loader;
pub mod schema;
pub mod validation;
pub mod watcher;

pub use loader::{load_config, load_resolver, ConfigError};
pub use schema::AliasesConfig;
