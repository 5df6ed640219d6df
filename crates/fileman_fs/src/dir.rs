use std::path::{Path, PathBuf};

use crate::{Error, FilemanFS, Result, sibling_path};

impl FilemanFS {
    /// Creates a directory at `path`. With `create_parents`, missing
    /// ancestors are created as well.
    pub async fn create_dir(path: &Path, create_parents: bool) -> Result<()> {
        if Self::exists(path) {
            return Err(Error::already_exists("create directory", path));
        }
        let result = if create_parents {
            tokio::fs::create_dir_all(path).await
        } else {
            tokio::fs::create_dir(path).await
        };
        result.map_err(|e| Error::io("create directory", path, e))
    }

    /// Removes the directory at `path`. Without `recursive`, a non-empty
    /// directory is refused by the OS and the error is surfaced.
    pub async fn remove_dir(path: &Path, recursive: bool) -> Result<()> {
        if !Self::is_dir(path) {
            return Err(Error::not_found("remove directory", path));
        }
        let result = if recursive {
            tokio::fs::remove_dir_all(path).await
        } else {
            tokio::fs::remove_dir(path).await
        };
        result.map_err(|e| Error::io("remove directory", path, e))
    }

    /// Whether the directory holds no entries. Pure query, no mutation.
    pub async fn is_dir_empty(path: &Path) -> Result<bool> {
        let mut entries = tokio::fs::read_dir(path)
            .await
            .map_err(|e| Error::io("inspect directory", path, e))?;
        let first = entries
            .next_entry()
            .await
            .map_err(|e| Error::io("inspect directory", path, e))?;
        Ok(first.is_none())
    }

    /// Lists the direct children of `path` with an is-directory flag.
    pub async fn list_dir(path: &Path) -> Result<Vec<(PathBuf, bool)>> {
        let mut entries = tokio::fs::read_dir(path)
            .await
            .map_err(|e| Error::io("list directory", path, e))?;

        let mut listing = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| Error::io("list directory", path, e))?
        {
            let file_type = entry
                .file_type()
                .await
                .map_err(|e| Error::io("list directory", path, e))?;
            listing.push((entry.path(), file_type.is_dir()));
        }
        Ok(listing)
    }

    /// Recursively copies the directory tree at `source` to `destination`.
    /// The destination must not exist yet.
    pub async fn copy_dir(source: &Path, destination: &Path) -> Result<()> {
        if !Self::is_dir(source) {
            return Err(Error::not_found("copy directory", source));
        }
        if Self::exists(destination) {
            return Err(Error::already_exists("copy directory", destination));
        }
        Self::copy_dir_recursive(source.to_path_buf(), destination.to_path_buf()).await
    }

    #[async_recursion::async_recursion]
    async fn copy_dir_recursive(source: PathBuf, destination: PathBuf) -> Result<()> {
        tokio::fs::create_dir_all(&destination)
            .await
            .map_err(|e| Error::io("copy directory", &destination, e))?;

        let mut entries = tokio::fs::read_dir(&source)
            .await
            .map_err(|e| Error::io("copy directory", &source, e))?;
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| Error::io("copy directory", &source, e))?
        {
            let from = entry.path();
            let to = destination.join(entry.file_name());
            let file_type = entry
                .file_type()
                .await
                .map_err(|e| Error::io("copy directory", &from, e))?;

            if file_type.is_dir() {
                Self::copy_dir_recursive(from, to).await?;
            } else {
                tokio::fs::copy(&from, &to)
                    .await
                    .map_err(|e| Error::io("copy file", &from, e))?;
            }
        }
        Ok(())
    }

    /// Moves the directory tree via OS rename; same contract as
    /// `move_file`, applied recursively by the OS.
    pub async fn move_dir(source: &Path, destination: &Path) -> Result<()> {
        if !Self::is_dir(source) {
            return Err(Error::not_found("move directory", source));
        }
        if Self::exists(destination) {
            return Err(Error::already_exists("move directory", destination));
        }
        tokio::fs::rename(source, destination)
            .await
            .map_err(|e| Error::io("move directory", source, e))
    }

    /// Renames the directory to `new_name` inside its current parent.
    pub async fn rename_dir(path: &Path, new_name: &str) -> Result<()> {
        if !Self::is_dir(path) {
            return Err(Error::not_found("rename directory", path));
        }
        let target = sibling_path(path, new_name);
        if Self::exists(&target) {
            return Err(Error::already_exists("rename directory", &target));
        }
        tokio::fs::rename(path, &target)
            .await
            .map_err(|e| Error::io("rename directory", path, e))
    }
}
