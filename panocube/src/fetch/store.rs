//! Local tile store.

use std::fs;
use std::path::{Path, PathBuf};

use super::fetcher::FetchError;

/// Directory-backed store for downloaded tiles.
///
/// Files are addressed by name only; the fetcher uses
/// [`crate::tile::TileCoord::file_name`] as the key so coordinates stay
/// recoverable from a directory listing.
#[derive(Debug, Clone)]
pub struct TileStore {
    root: PathBuf,
}

impl TileStore {
    /// Creates a store rooted at `root`. The directory is created lazily
    /// on first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The store's root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute path a file with this name would be stored at.
    pub fn path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Whether a file with this name is already materialized.
    pub fn contains(&self, name: &str) -> bool {
        self.path(name).exists()
    }

    /// Writes `bytes` under `name`, creating the root directory if needed.
    pub fn write(&self, name: &str, bytes: &[u8]) -> Result<PathBuf, FetchError> {
        fs::create_dir_all(&self.root).map_err(|source| FetchError::Io {
            path: self.root.clone(),
            source,
        })?;

        let path = self.path(name);
        fs::write(&path, bytes).map_err(|source| FetchError::Io {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }

    /// Reads the file stored under `name`.
    pub fn read(&self, name: &str) -> Result<Vec<u8>, FetchError> {
        let path = self.path(name);
        fs::read(&path).map_err(|source| FetchError::Io { path, source })
    }
}
