//! Snapshot persistence backends.
//!
//! The store persists its full state into a single slot after every
//! mutation. The slot is modeled as the [`SnapshotCache`] trait so the
//! store can be driven against a real file or an in-memory fake.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use log::debug;

use crate::core::{Result, Snapshot, StoreError};

/// A single key-value slot holding the serialized snapshot.
///
/// Reads report "never written" as `Ok(None)`, not as an error. Writes
/// replace the previous value wholesale; a failed write must leave the
/// previously persisted snapshot intact.
pub trait SnapshotCache: Send + Sync {
    /// Read and parse the persisted snapshot, if any.
    ///
    /// Fails with [`StoreError::CorruptCache`] when data exists but does
    /// not parse as a snapshot.
    fn read(&self) -> Result<Option<Snapshot>>;

    /// Replace the persisted snapshot with `snapshot`.
    fn write(&self, snapshot: &Snapshot) -> Result<()>;
}

// ============================================================================
// File-backed Cache
// ============================================================================

/// JSON file cache with atomic replace.
///
/// The snapshot is written to a temporary file in the target directory
/// and renamed into place, so a crash mid-write never leaves a torn
/// snapshot behind.
pub struct FileCache {
    path: PathBuf,
}

impl FileCache {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotCache for FileCache {
    fn read(&self) -> Result<Option<Snapshot>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let data = fs::read_to_string(&self.path)
            .map_err(|e| StoreError::Io(format!("Failed to read snapshot file: {}", e)))?;
        let snapshot = serde_json::from_str(&data).map_err(|e| {
            StoreError::CorruptCache(format!(
                "{} holds data that does not parse as a snapshot: {}",
                self.path.display(),
                e
            ))
        })?;
        Ok(Some(snapshot))
    }

    fn write(&self, snapshot: &Snapshot) -> Result<()> {
        let serialized = serde_json::to_vec(snapshot)
            .map_err(|e| StoreError::Serialization(format!("Failed to serialize snapshot: {}", e)))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    StoreError::Io(format!("Failed to create snapshot directory: {}", e))
                })?;
            }
        }

        // Temp file must live in the target directory so the final rename
        // stays on one filesystem.
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut temp = tempfile::NamedTempFile::new_in(dir)
            .map_err(|e| StoreError::Io(format!("Failed to create temp file: {}", e)))?;
        temp.write_all(&serialized)
            .map_err(|e| StoreError::Io(format!("Failed to write snapshot: {}", e)))?;
        temp.as_file()
            .sync_all()
            .map_err(|e| StoreError::Io(format!("Failed to sync snapshot: {}", e)))?;
        temp.persist(&self.path)
            .map_err(|e| StoreError::Io(format!("Failed to replace snapshot: {}", e)))?;

        debug!("Wrote snapshot to {}", self.path.display());
        Ok(())
    }
}

// ============================================================================
// In-memory Cache
// ============================================================================

/// In-memory cache slot for tests and embedding.
///
/// Stores the serialized form rather than the parsed snapshot so that
/// corrupt-data behavior is representable. Clone-friendly via `Arc`: all
/// clones share one slot, which lets a test keep a handle to the cache it
/// handed to the store.
#[derive(Clone, Default)]
pub struct MemoryCache {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the slot with raw bytes, bypassing serialization. Used to
    /// stage corrupt or hand-written cache contents.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(raw.into()))),
        }
    }
}

impl SnapshotCache for MemoryCache {
    fn read(&self) -> Result<Option<Snapshot>> {
        let slot = self
            .slot
            .lock()
            .map_err(|_| StoreError::Io("Cache lock poisoned".to_string()))?;
        match slot.as_deref() {
            None => Ok(None),
            Some(raw) => {
                let snapshot = serde_json::from_str(raw).map_err(|e| {
                    StoreError::CorruptCache(format!(
                        "Cached data does not parse as a snapshot: {}",
                        e
                    ))
                })?;
                Ok(Some(snapshot))
            }
        }
    }

    fn write(&self, snapshot: &Snapshot) -> Result<()> {
        let serialized = serde_json::to_string(snapshot)
            .map_err(|e| StoreError::Serialization(format!("Failed to serialize snapshot: {}", e)))?;
        let mut slot = self
            .slot
            .lock()
            .map_err(|_| StoreError::Io("Cache lock poisoned".to_string()))?;
        *slot = Some(serialized);
        Ok(())
    }
}
