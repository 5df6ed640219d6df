use std::path::Path;

use tokio::io::AsyncWriteExt;

use crate::{Error, FilemanFS, Result};

impl FilemanFS {
    /// Creates a new file at `path`, seeded with `contents` (pass an empty
    /// slice for none).
    ///
    /// The path must not already exist; missing parent directories are not
    /// created.
    pub async fn create_file(path: &Path, contents: impl AsRef<[u8]>) -> Result<()> {
        let mut file = tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .await
            .map_err(|e| Error::io("create file", path, e))?;

        file.write_all(contents.as_ref())
            .await
            .map_err(|e| Error::io("create file", path, e))?;
        file.flush()
            .await
            .map_err(|e| Error::io("create file", path, e))?;

        Ok(())
    }
}
