use std::path::Path;

use fileman_domain::WriteMode;
use tokio::io::AsyncWriteExt;

use crate::{Error, FilemanFS, Result};

impl FilemanFS {
    /// Writes `contents` to `path`, replacing or extending existing content
    /// per `mode`. The file is created if absent, but missing parent
    /// directories are not.
    pub async fn write(path: &Path, contents: impl AsRef<[u8]>, mode: WriteMode) -> Result<()> {
        let mut options = tokio::fs::OpenOptions::new();
        match mode {
            WriteMode::Overwrite => {
                options.write(true).create(true).truncate(true);
            }
            WriteMode::Append => {
                options.create(true).append(true);
            }
        }

        let mut file = options
            .open(path)
            .await
            .map_err(|e| Error::io("write file", path, e))?;
        file.write_all(contents.as_ref())
            .await
            .map_err(|e| Error::io("write file", path, e))?;
        file.flush()
            .await
            .map_err(|e| Error::io("write file", path, e))?;

        Ok(())
    }
}
