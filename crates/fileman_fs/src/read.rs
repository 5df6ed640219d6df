use std::io;
use std::path::Path;

use crate::{Error, FilemanFS, Result};

impl FilemanFS {
    pub async fn read(path: &Path) -> Result<Vec<u8>> {
        tokio::fs::read(path)
            .await
            .map_err(|e| Error::io("read file", path, e))
    }

    pub async fn read_utf8(path: &Path) -> Result<String> {
        let bytes = Self::read(path).await?;
        String::from_utf8(bytes).map_err(|e| Error::Io {
            action: "read file",
            path: path.to_path_buf(),
            source: io::Error::new(io::ErrorKind::InvalidData, e),
        })
    }
}
