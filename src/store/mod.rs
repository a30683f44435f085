//! # Persistence Boundary
//!
//! The board treats storage as an opaque bytes-in/bytes-out collaborator:
//! it owns the JSON encoding of the collection, while an [`OrderStore`]
//! implementation owns where the bytes live. Durability is advisory, never
//! authoritative; a failed load or save leaves the in-memory collection as
//! session truth.
//!
//! Saves are funneled through a single writer task (see [`spawn_writer`]) so
//! the command loop never waits on storage, while writes still commit in the
//! order the states were produced.

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Errors surfaced by a storage backend.
///
/// Callers inside the engine log these and carry on; nothing here is fatal.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Bytes-in/bytes-out storage for the order collection.
///
/// `load` distinguishes absence (`Ok(None)`) from failure so the board's
/// fallback-to-seed logic stays explicit and testable.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Reads the persisted blob, if any.
    async fn load(&self) -> Result<Option<Vec<u8>>, StoreError>;

    /// Replaces the persisted blob.
    async fn save(&self, bytes: Vec<u8>) -> Result<(), StoreError>;
}

/// Spawns the background writer that drains queued snapshots into the store.
///
/// One snapshot per state-changing command arrives on `rx`, already encoded.
/// Failures are logged and swallowed. The task ends when the sender side is
/// dropped, after draining whatever is still queued, so a graceful shutdown
/// flushes every pending save.
pub fn spawn_writer(
    store: Arc<dyn OrderStore>,
    mut rx: mpsc::UnboundedReceiver<Vec<u8>>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(bytes) = rx.recv().await {
            match store.save(bytes).await {
                Ok(()) => debug!("Snapshot saved"),
                Err(e) => warn!(error = %e, "Snapshot save failed, in-memory state remains authoritative"),
            }
        }
        debug!("Store writer shutdown");
    })
}
