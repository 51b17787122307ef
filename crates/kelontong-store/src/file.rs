//! # File-Backed Blob Store
//!
//! Stores each blob as `<data dir>/<key>.json`. Writes go to a temporary
//! sibling file first and are renamed into place, so a crash mid-write
//! leaves the previous blob intact.
//!
//! ## Data Directory
//! - **macOS**: `~/Library/Application Support/id.kelontong.pos/`
//! - **Windows**: `%APPDATA%\kelontong\pos\data\`
//! - **Linux**: `~/.local/share/kelontongpos/`
//!
//! Set `KELONTONG_DATA_DIR` to override (development, tests).

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::debug;

use crate::blob::BlobStore;
use crate::error::{StoreError, StoreResult};

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "KELONTONG_DATA_DIR";

/// Blob store writing one JSON file per key.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Opens a store rooted at the given directory, creating it if needed.
    pub fn open(dir: impl Into<PathBuf>) -> StoreResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        debug!(?dir, "file store opened");
        Ok(FileStore { dir })
    }

    /// Opens a store at the platform data directory (or the
    /// `KELONTONG_DATA_DIR` override).
    pub fn open_default() -> StoreResult<Self> {
        FileStore::open(default_data_dir()?)
    }

    /// The directory this store writes into.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn blob_path(&self, key: &str) -> StoreResult<PathBuf> {
        // Keys are bare names; anything that could escape the data dir is
        // rejected before it reaches the filesystem.
        if key.is_empty()
            || !key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(StoreError::Io(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid blob key: {key:?}"),
            )));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl BlobStore for FileStore {
    fn load(&self, key: &str) -> StoreResult<Option<Vec<u8>>> {
        let path = self.blob_path(key)?;
        match fs::read(&path) {
            Ok(blob) => {
                debug!(key, bytes = blob.len(), "blob loaded");
                Ok(Some(blob))
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn save(&self, key: &str, blob: &[u8]) -> StoreResult<()> {
        let path = self.blob_path(key)?;
        let tmp = self.dir.join(format!("{key}.json.tmp"));

        fs::write(&tmp, blob)?;
        fs::rename(&tmp, &path)?;

        debug!(key, bytes = blob.len(), "blob saved");
        Ok(())
    }
}

/// Resolves the data directory: env override first, then the platform
/// application data location.
fn default_data_dir() -> StoreResult<PathBuf> {
    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }

    let proj_dirs = ProjectDirs::from("id", "kelontong", "pos").ok_or_else(|| {
        StoreError::Io(io::Error::new(
            io::ErrorKind::NotFound,
            "could not determine application data directory",
        ))
    })?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

// =============================================================================
// Unit Tests
// =============================================================================
