//! Alias file watcher for hot reload.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;

use crate::aliases::source::SwapSource;
use crate::aliases::table::AliasTable;
use crate::config::loader::load_config;

/// Watches an alias file and emits a freshly built table on every change.
pub struct AliasWatcher {
    path: PathBuf,
    update_tx: mpsc::UnboundedSender<AliasTable>,
}

impl AliasWatcher {
    /// Create a new AliasWatcher.
    ///
    /// Returns the watcher and a receiver for table updates.
    pub fn new(path: &Path) -> (Self, mpsc::UnboundedReceiver<AliasTable>) {
        let (update_tx, update_rx) = mpsc::unbounded_channel();

        (
            Self {
                path: path.to_path_buf(),
                update_tx,
            },
            update_rx,
        )
    }

    /// Start watching the file in a background thread.
    pub fn run(self) -> Result<RecommendedWatcher, notify::Error> {
        let tx = self.update_tx.clone();
        let path = self.path.clone();

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) => {
                    if event.kind.is_modify() || event.kind.is_create() {
                        tracing::info!("Alias file change detected, reloading...");
                        match load_config(&path) {
                            Ok(config) => {
                                let _ = tx.send(config.build_table());
                            }
                            Err(e) => {
                                tracing::error!(
                                    "Failed to reload aliases: {}. Keeping current table.",
                                    e
                                );
                            }
                        }
                    }
                }
                Err(e) => tracing::error!("Watch error: {:?}", e),
            },
            Config::default().with_poll_interval(Duration::from_secs(2)),
        )?;

        watcher.watch(&self.path, RecursiveMode::NonRecursive)?;

        tracing::info!(path = ?self.path, "Alias watcher started");
        Ok(watcher)
    }
}

/// Drain table updates into a [`SwapSource`]. Spawn this next to a
/// [`DynamicPathResolver`](crate::resolver::dynamic::DynamicPathResolver)
/// sharing the same source.
pub async fn apply_updates(source: Arc<SwapSource>, mut rx: mpsc::UnboundedReceiver<AliasTable>) {
    while let Some(table) = rx.recv().await {
        source.store(table);
    }
}
