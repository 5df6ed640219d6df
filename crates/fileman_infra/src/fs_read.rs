use std::path::Path;

use anyhow::Result;
use fileman_app::FileReaderInfra;
use fileman_fs::FilemanFS;

pub struct FilemanFileReadService;

impl Default for FilemanFileReadService {
    fn default() -> Self {
        Self
    }
}

impl FilemanFileReadService {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl FileReaderInfra for FilemanFileReadService {
    async fn read_utf8(&self, path: &Path) -> Result<String> {
        Ok(FilemanFS::read_utf8(path).await?)
    }

    async fn read(&self, path: &Path) -> Result<Vec<u8>> {
        Ok(FilemanFS::read(path).await?)
    }
}
