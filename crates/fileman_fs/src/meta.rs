use std::path::Path;

use crate::{Error, FilemanFS, Result};

impl FilemanFS {
    /// Whether anything exists at `path` (follows symlinks).
    pub fn exists(path: &Path) -> bool {
        path.exists()
    }

    pub fn is_file(path: &Path) -> bool {
        path.is_file()
    }

    pub fn is_dir(path: &Path) -> bool {
        path.is_dir()
    }

    /// Whether `path` is itself a symlink (does not follow it).
    pub fn is_symlink(path: &Path) -> bool {
        path.is_symlink()
    }

    pub async fn file_size(path: &Path) -> Result<u64> {
        let meta = tokio::fs::metadata(path)
            .await
            .map_err(|e| Error::io("inspect file", path, e))?;
        Ok(meta.len())
    }

    pub async fn is_file_empty(path: &Path) -> Result<bool> {
        if !Self::is_file(path) {
            return Err(Error::not_found("inspect file", path));
        }
        Ok(Self::file_size(path).await? == 0)
    }
}
