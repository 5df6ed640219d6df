use std::path::Path;

use crate::{Error, FilemanFS, Result, sibling_path};

impl FilemanFS {
    /// Creates a symlink at `link` pointing at `original`.
    ///
    /// The original must exist and the link path must be free. Platforms
    /// without symlink support report `Unsupported` instead of silently
    /// doing nothing.
    pub async fn create_symlink(original: &Path, link: &Path) -> Result<()> {
        if !Self::exists(original) {
            return Err(Error::not_found("create symlink", original));
        }
        if Self::exists(link) || Self::is_symlink(link) {
            return Err(Error::already_exists("create symlink", link));
        }

        #[cfg(unix)]
        return tokio::fs::symlink(original, link)
            .await
            .map_err(|e| Error::io("create symlink", link, e));

        #[cfg(windows)]
        {
            let result = if Self::is_dir(original) {
                tokio::fs::symlink_dir(original, link).await
            } else {
                tokio::fs::symlink_file(original, link).await
            };
            return result.map_err(|e| Error::io("create symlink", link, e));
        }

        #[cfg(not(any(unix, windows)))]
        Err(Error::Unsupported { action: "create symlink", path: link.to_path_buf() })
    }

    /// Removes the symlink itself; the target is never followed.
    pub async fn remove_symlink(path: &Path) -> Result<()> {
        if !Self::is_symlink(path) {
            return Err(Error::not_found("remove symlink", path));
        }
        tokio::fs::remove_file(path)
            .await
            .map_err(|e| Error::io("remove symlink", path, e))
    }

    /// Renames the symlink to `new_name` inside its current parent; the
    /// link keeps pointing at the same target.
    pub async fn rename_symlink(path: &Path, new_name: &str) -> Result<()> {
        if !Self::is_symlink(path) {
            return Err(Error::not_found("rename symlink", path));
        }
        let target = sibling_path(path, new_name);
        if Self::exists(&target) || Self::is_symlink(&target) {
            return Err(Error::already_exists("rename symlink", &target));
        }
        tokio::fs::rename(path, &target)
            .await
            .map_err(|e| Error::io("rename symlink", path, e))
    }
}
