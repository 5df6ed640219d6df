use std::path::Path;

use anyhow::Result;
use fileman_app::FileInfoInfra;
use fileman_fs::FilemanFS;

pub struct FilemanFileMetaService;

#[async_trait::async_trait]
impl FileInfoInfra for FilemanFileMetaService {
    async fn exists(&self, path: &Path) -> Result<bool> {
        Ok(FilemanFS::exists(path))
    }

    async fn is_file(&self, path: &Path) -> Result<bool> {
        Ok(FilemanFS::is_file(path))
    }

    async fn is_dir(&self, path: &Path) -> Result<bool> {
        Ok(FilemanFS::is_dir(path))
    }

    async fn is_symlink(&self, path: &Path) -> Result<bool> {
        Ok(FilemanFS::is_symlink(path))
    }

    async fn file_size(&self, path: &Path) -> Result<u64> {
        Ok(FilemanFS::file_size(path).await?)
    }

    async fn is_file_empty(&self, path: &Path) -> Result<bool> {
        Ok(FilemanFS::is_file_empty(path).await?)
    }
}
