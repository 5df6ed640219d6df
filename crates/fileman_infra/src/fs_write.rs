use std::path::{Path, PathBuf};

use bytes::Bytes;
use fileman_app::FileWriterInfra;
use fileman_domain::WriteMode;
use fileman_fs::FilemanFS;

/// Low-level file write service
///
/// Provides primitive create and write operations. Parent directories are
/// never created implicitly; the caller owns directory layout.
pub struct FilemanFileWriteService;

impl FilemanFileWriteService {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FilemanFileWriteService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl FileWriterInfra for FilemanFileWriteService {
    async fn create(&self, path: &Path, contents: Bytes) -> anyhow::Result<()> {
        Ok(FilemanFS::create_file(path, contents).await?)
    }

    async fn write(&self, path: &Path, contents: Bytes, mode: WriteMode) -> anyhow::Result<()> {
        Ok(FilemanFS::write(path, contents, mode).await?)
    }

    async fn write_temp(&self, prefix: &str, ext: &str, content: &str) -> anyhow::Result<PathBuf> {
        let path = tempfile::Builder::new()
            .disable_cleanup(true)
            .prefix(prefix)
            .suffix(ext)
            .tempfile()?
            .into_temp_path()
            .to_path_buf();

        self.write(&path, content.to_string().into(), WriteMode::Overwrite)
            .await?;

        Ok(path)
    }
}
