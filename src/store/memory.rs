//! In-memory storage, used by tests and as a no-setup default.

use crate::store::{OrderStore, StoreError};
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Mutex;

/// Keeps the blob in memory.
///
/// The failure toggles let tests exercise the board's degradation paths
/// (seed fallback, swallowed save errors) deterministically.
#[derive(Default)]
pub struct MemoryStore {
    bytes: Mutex<Option<Vec<u8>>>,
    fail_loads: AtomicBool,
    fail_saves: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts pre-populated, as if a previous session had saved `bytes`.
    pub fn with_bytes(bytes: Vec<u8>) -> Self {
        Self {
            bytes: Mutex::new(Some(bytes)),
            ..Self::default()
        }
    }

    /// Makes every subsequent `load` fail.
    pub fn fail_loads(&self) {
        self.fail_loads.store(true, Ordering::SeqCst);
    }

    /// Makes every subsequent `save` fail.
    pub fn fail_saves(&self) {
        self.fail_saves.store(true, Ordering::SeqCst);
    }

    /// The currently stored blob, for test assertions.
    pub async fn snapshot(&self) -> Option<Vec<u8>> {
        self.bytes.lock().await.clone()
    }
}

#[async_trait]
impl OrderStore for MemoryStore {
    async fn load(&self) -> Result<Option<Vec<u8>>, StoreError> {
        if self.fail_loads.load(Ordering::SeqCst) {
            return Err(StoreError::Backend("load disabled".to_string()));
        }
        Ok(self.bytes.lock().await.clone())
    }

    async fn save(&self, bytes: Vec<u8>) -> Result<(), StoreError> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(StoreError::Backend("save disabled".to_string()));
        }
        *self.bytes.lock().await = Some(bytes);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn empty_store_loads_as_absence() {
        let store = MemoryStore::new();
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn toggles_force_failures() {
        let store = MemoryStore::with_bytes(b"x".to_vec());
        assert!(store.load().await.unwrap().is_some());

        store.fail_loads();
        assert!(store.load().await.is_err());

        store.fail_saves();
        assert!(store.save(b"y".to_vec()).await.is_err());
        // The failed save did not clobber the stored blob.
        assert_eq!(store.snapshot().await, Some(b"x".to_vec()));
    }
}
