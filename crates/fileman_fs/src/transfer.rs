use std::path::Path;

use crate::{Error, FilemanFS, Result, sibling_path};

impl FilemanFS {
    /// Copies `source` to `destination`, leaving the source untouched. The
    /// destination must not exist yet.
    pub async fn copy_file(source: &Path, destination: &Path) -> Result<()> {
        if !Self::is_file(source) {
            return Err(Error::not_found("copy file", source));
        }
        if Self::exists(destination) {
            return Err(Error::already_exists("copy file", destination));
        }
        tokio::fs::copy(source, destination)
            .await
            .map_err(|e| Error::io("copy file", destination, e))?;
        Ok(())
    }

    /// Moves `source` to `destination` via OS rename. No cross-device
    /// fallback: a rename the OS cannot perform atomically surfaces as an
    /// error instead of a partial copy.
    pub async fn move_file(source: &Path, destination: &Path) -> Result<()> {
        if !Self::is_file(source) {
            return Err(Error::not_found("move file", source));
        }
        if Self::exists(destination) {
            return Err(Error::already_exists("move file", destination));
        }
        tokio::fs::rename(source, destination)
            .await
            .map_err(|e| Error::io("move file", source, e))
    }

    /// Renames the file to `new_name` inside its current parent directory.
    pub async fn rename_file(path: &Path, new_name: &str) -> Result<()> {
        if !Self::is_file(path) {
            return Err(Error::not_found("rename file", path));
        }
        let target = sibling_path(path, new_name);
        if Self::exists(&target) {
            return Err(Error::already_exists("rename file", &target));
        }
        tokio::fs::rename(path, &target)
            .await
            .map_err(|e| Error::io("rename file", path, e))
    }
}
