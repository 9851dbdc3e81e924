//! Alias table sources.
//!
//! # Responsibilities
//! - Hand the resolver a table snapshot per resolution
//! - Static tables: return the stored snapshot
//! - Dynamic tables: invoke a supplier, or read an atomically swapped slot
//!
//! # Design Decisions
//! - `fetch` returns `Arc<AliasTable>` so snapshots are cheap to share
//! - Supplier failures propagate uninterpreted; no retry, no stale fallback
//! - `SwapSource` uses arc-swap: refreshers store, resolutions load,
//!   no locks on the resolution path

use std::sync::Arc;

use arc_swap::ArcSwap;
use thiserror::Error;

use crate::aliases::table::AliasTable;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// A supplier's failure, forwarded to the caller uninterpreted.
#[derive(Debug, Error)]
#[error("alias table source failed: {0}")]
pub struct SourceError(#[from] pub BoxError);

/// Anything that can produce the current alias table.
pub trait AliasTableSource: Send + Sync {
    fn fetch(&self) -> Result<Arc<AliasTable>, SourceError>;
}

/// A fixed table known at construction time.
#[derive(Debug, Clone)]
pub struct StaticSource {
    table: Arc<AliasTable>,
}

impl StaticSource {
    pub fn new(table: AliasTable) -> Self {
        Self {
            table: Arc::new(table),
        }
    }
}

impl AliasTableSource for StaticSource {
    fn fetch(&self) -> Result<Arc<AliasTable>, SourceError> {
        Ok(self.table.clone())
    }
}

/// A table slot an external refresher swaps whole tables into.
#[derive(Debug)]
pub struct SwapSource {
    table: ArcSwap<AliasTable>,
}

impl SwapSource {
    pub fn new(initial: AliasTable) -> Self {
        Self {
            table: ArcSwap::from_pointee(initial),
        }
    }

    /// Replace the current table. In-flight resolutions keep their snapshot.
    pub fn store(&self, table: AliasTable) {
        tracing::info!(entries = table.len(), "alias table swapped");
        self.table.store(Arc::new(table));
    }

    pub fn load(&self) -> Arc<AliasTable> {
        self.table.load_full()
    }
}

impl AliasTableSource for SwapSource {
    fn fetch(&self) -> Result<Arc<AliasTable>, SourceError> {
        Ok(self.table.load_full())
    }
}

/// A zero-argument supplier invoked on every fetch, for tables that are
/// rebuilt from frequently-changing content.
pub struct SupplierSource<F> {
    supplier: F,
}

impl<F> SupplierSource<F>
where
    F: Fn() -> Result<AliasTable, BoxError> + Send + Sync,
{
    pub fn new(supplier: F) -> Self {
        Self { supplier }
    }
}

impl<F> AliasTableSource for SupplierSource<F>
where
    F: Fn() -> Result<AliasTable, BoxError> + Send + Sync,
{
    fn fetch(&self) -> Result<Arc<AliasTable>, SourceError> {
        (self.supplier)().map(Arc::new).map_err(SourceError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aliases::table::SegmentEntry;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn sample_table() -> AliasTable {
        AliasTable::new().entry(SegmentEntry::new("articles").alias("spa", ["articulos"]))
    }

    #[test]
    fn static_source_returns_same_snapshot() {
        let source = StaticSource::new(sample_table());
        let a = source.fetch().unwrap();
        let b = source.fetch().unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn swap_source_exposes_new_table_after_store() {
        let source = SwapSource::new(sample_table());
        assert!(source.fetch().unwrap().get("paintings").is_none());

        source.store(AliasTable::new().entry(SegmentEntry::new("paintings")));
        assert!(source.fetch().unwrap().get("paintings").is_some());
    }

    #[test]
    fn supplier_source_invokes_supplier_per_fetch() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = calls.clone();
        let source = SupplierSource::new(move || {
            seen.fetch_add(1, Ordering::SeqCst);
            Ok(sample_table())
        });

        let a = source.fetch().unwrap();
        let b = source.fetch().unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert!(!Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn supplier_failure_propagates() {
        let source = SupplierSource::new(|| Err("backing store unavailable".into()));
        let err = source.fetch().unwrap_err();
        assert!(err.to_string().contains("backing store unavailable"));
    }
}
