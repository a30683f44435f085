//! File-backed storage: the whole collection lives in one blob at a fixed
//! path.

use crate::store::{OrderStore, StoreError};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Default location of the persisted collection.
pub const DEFAULT_PATH: &str = "kitchen_orders.json";

/// Stores the blob in a single file.
///
/// A missing file reads as absence, not an error. Writes go through a
/// sibling tmp file and a rename so a crash mid-write never leaves a
/// truncated blob behind.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new(DEFAULT_PATH)
    }
}

#[async_trait]
impl OrderStore for FileStore {
    async fn load(&self) -> Result<Option<Vec<u8>>, StoreError> {
        match fs::read(&self.path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, bytes: Vec<u8>) -> Result<(), StoreError> {
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, &bytes).await?;
        fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}
