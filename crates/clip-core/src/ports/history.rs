use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

use crate::clipboard::ClipEntry;

/// Append-only clipboard history, oldest entry first.
///
/// # Behavior / 行为
/// - `append()` only ever adds at the end.
/// - `load()` re-reads the backing storage on every call and skips records
///   that cannot be decoded.
/// - `clear()` is idempotent: clearing an absent history succeeds.
#[async_trait]
pub trait HistoryStorePort: Send + Sync {
    async fn append(&self, entry: &ClipEntry) -> Result<(), HistoryStoreError>;

    async fn load(&self) -> Result<Vec<ClipEntry>, HistoryStoreError>;

    /// Most recently appended entry, if any.
    async fn last(&self) -> Result<Option<ClipEntry>, HistoryStoreError> {
        Ok(self.load().await?.pop())
    }

    async fn clear(&self) -> Result<(), HistoryStoreError>;
}

#[derive(Debug, Error)]
pub enum HistoryStoreError {
    #[error("failed to open history file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read history file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write history file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to remove history file {path}: {source}")]
    Remove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mockall::mock! {
    pub HistoryStore {}

    #[async_trait]
    impl HistoryStorePort for HistoryStore {
        async fn append(&self, entry: &ClipEntry) -> Result<(), HistoryStoreError>;
        async fn load(&self) -> Result<Vec<ClipEntry>, HistoryStoreError>;
        async fn clear(&self) -> Result<(), HistoryStoreError>;
    }
}
