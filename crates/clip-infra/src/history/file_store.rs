use std::path::{Path, PathBuf};

use async_trait::async_trait;
use clip_core::ports::{HistoryStoreError, HistoryStorePort};
use clip_core::ClipEntry;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::codec::entry_line;

/// History store backed by a single flat text file, one record per line.
///
/// Every read re-scans the whole file; nothing is cached between calls.
/// Concurrent writers are not coordinated: each append is a single small
/// `O_APPEND` write, and a `clear` racing an `append` may drop the record.
pub struct FileHistoryStore {
    path: PathBuf,
}

impl FileHistoryStore {
    /// Creates a store that persists records to `path`.
    ///
    /// The file is not touched until the first operation.
    ///
    /// # Examples
    ///
    /// ```
    /// let store = clip_infra::FileHistoryStore::new("/tmp/clipper/history.log");
    /// assert!(store.path().ends_with("history.log"));
    /// ```
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn ensure_parent_dir(&self) -> Result<(), HistoryStoreError> {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => {
                fs::create_dir_all(dir)
                    .await
                    .map_err(|source| HistoryStoreError::Open {
                        path: self.path.clone(),
                        source,
                    })
            }
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl HistoryStorePort for FileHistoryStore {
    /// Appends one encoded record and a newline to the end of the file,
    /// creating the file (and its directory) when absent.
    #[tracing::instrument(
        name = "infra.history.append",
        skip(self, entry),
        fields(type_tag = %entry.type_tag(), size_bytes = entry.size_bytes())
    )]
    async fn append(&self, entry: &ClipEntry) -> Result<(), HistoryStoreError> {
        self.ensure_parent_dir().await?;

        let mut record = entry_line::encode(entry);
        record.push('\n');

        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(|source| HistoryStoreError::Open {
                path: self.path.clone(),
                source,
            })?;

        let write_err = |source: std::io::Error| HistoryStoreError::Write {
            path: self.path.clone(),
            source,
        };
        file.write_all(record.as_bytes()).await.map_err(write_err)?;
        // tokio defers the write to a blocking task; flush surfaces its result.
        file.flush().await.map_err(write_err)?;

        debug!(path = %self.path.display(), "Appended history record");
        Ok(())
    }

    /// Reads every record in file order, skipping lines that fail to decode.
    ///
    /// A missing file is an empty history.
    #[tracing::instrument(name = "infra.history.load", skip(self))]
    async fn load(&self) -> Result<Vec<ClipEntry>, HistoryStoreError> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(HistoryStoreError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let mut entries = Vec::new();
        let mut skipped = 0usize;

        for (index, raw) in bytes.split(|b| *b == b'\n').enumerate() {
            if raw.is_empty() {
                continue;
            }

            let decoded = std::str::from_utf8(raw)
                .map_err(|e| e.to_string())
                .and_then(|line| entry_line::try_decode(line).map_err(|e| e.to_string()));

            match decoded {
                Ok(entry) => entries.push(entry),
                Err(reason) => {
                    skipped += 1;
                    debug!(line = index + 1, %reason, "Skipping malformed history record");
                }
            }
        }

        debug!(
            entries = entries.len(),
            skipped,
            "Loaded clipboard history"
        );
        Ok(entries)
    }

    /// Deletes the backing file. Clearing an absent history succeeds.
    #[tracing::instrument(name = "infra.history.clear", skip(self))]
    async fn clear(&self) -> Result<(), HistoryStoreError> {
        match fs::remove_file(&self.path).await {
            Ok(()) => {
                debug!(path = %self.path.display(), "Removed history file");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(HistoryStoreError::Remove {
                path: self.path.clone(),
                source,
            }),
        }
    }
}
