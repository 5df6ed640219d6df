use std::path::Path;

use fileman_app::FileTransferInfra;
use fileman_fs::FilemanFS;

#[derive(Default)]
pub struct FilemanFileTransferService;

impl FilemanFileTransferService {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl FileTransferInfra for FilemanFileTransferService {
    async fn copy_file(&self, source: &Path, destination: &Path) -> anyhow::Result<()> {
        Ok(FilemanFS::copy_file(source, destination).await?)
    }

    async fn move_file(&self, source: &Path, destination: &Path) -> anyhow::Result<()> {
        Ok(FilemanFS::move_file(source, destination).await?)
    }

    async fn rename_file(&self, path: &Path, new_name: &str) -> anyhow::Result<()> {
        Ok(FilemanFS::rename_file(path, new_name).await?)
    }
}
