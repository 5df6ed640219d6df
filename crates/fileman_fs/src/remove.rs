use std::path::Path;

use crate::{Error, FilemanFS, Result};

impl FilemanFS {
    /// Removes the file at `path`. A missing path is reported as
    /// `NotFound`, never collapsed into a silent success.
    pub async fn remove_file(path: &Path) -> Result<()> {
        if !Self::is_file(path) {
            return Err(Error::not_found("remove file", path));
        }
        tokio::fs::remove_file(path)
            .await
            .map_err(|e| Error::io("remove file", path, e))
    }
}
