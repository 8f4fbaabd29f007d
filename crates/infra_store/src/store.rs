//! Document store implementations
//!
//! The store is deliberately small: load the whole document, save the
//! whole document. No partial writes, no locking, no transactions. The
//! system is a single practitioner's single-seat tool, and the services
//! reload before every mutation so state is never cached across requests.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tempfile::NamedTempFile;
use tokio::sync::RwLock;

use crate::document::CaseFile;
use crate::error::StorageError;

/// Durable holder of the case file.
///
/// Implementations must make `save` atomic from the caller's perspective:
/// a reader never observes a truncated or half-written document.
#[async_trait]
pub trait DocumentStore: Send + Sync + 'static {
    /// Loads the current document. First run (no existing storage) yields
    /// an empty document, not an error.
    async fn load(&self) -> Result<CaseFile, StorageError>;

    /// Persists the whole document, replacing the previous contents.
    async fn save(&self, document: &CaseFile) -> Result<(), StorageError>;
}

/// File-backed store: one pretty-printed JSON file.
///
/// Writes go to a temp file in the same directory and are renamed over
/// the target, so a crash mid-write can never truncate the document. The
/// parent directory is created on first write.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store backed by the file at `path`.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl DocumentStore for JsonFileStore {
    async fn load(&self) -> Result<CaseFile, StorageError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(StorageError::Corrupt),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "case file absent, starting empty");
                Ok(CaseFile::default())
            }
            Err(err) => Err(StorageError::Read(err)),
        }
    }

    async fn save(&self, document: &CaseFile) -> Result<(), StorageError> {
        let bytes = serde_json::to_vec_pretty(document).map_err(StorageError::Encode)?;
        let path = self.path.clone();

        tokio::task::spawn_blocking(move || write_atomic(&path, &bytes))
            .await
            .map_err(|err| StorageError::Write(std::io::Error::other(err)))?
    }
}

/// Writes `bytes` to `path` via a sibling temp file and rename.
fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), StorageError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir).map_err(StorageError::Write)?;

    let mut tmp = NamedTempFile::new_in(dir).map_err(StorageError::Write)?;
    tmp.write_all(bytes).map_err(StorageError::Write)?;
    tmp.flush().map_err(StorageError::Write)?;
    tmp.persist(path)
        .map_err(|err| StorageError::Write(err.error))?;
    Ok(())
}

/// In-memory store for tests and demos.
///
/// Full store semantics, nothing on disk. `set_fail_writes` makes
/// subsequent saves fail, for exercising storage-error paths.
#[derive(Debug, Default)]
pub struct MemoryStore {
    document: RwLock<CaseFile>,
    fail_writes: AtomicBool,
}

impl MemoryStore {
    /// Creates an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `document`.
    pub fn seeded(document: CaseFile) -> Self {
        Self {
            document: RwLock::new(document),
            fail_writes: AtomicBool::new(false),
        }
    }

    /// Makes subsequent saves fail with a write error.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Returns a copy of the current document.
    pub async fn snapshot(&self) -> CaseFile {
        self.document.read().await.clone()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn load(&self) -> Result<CaseFile, StorageError> {
        Ok(self.document.read().await.clone())
    }

    async fn save(&self, document: &CaseFile) -> Result<(), StorageError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::Write(std::io::Error::other(
                "memory store configured to fail writes",
            )));
        }
        *self.document.write().await = document.clone();
        Ok(())
    }
}
