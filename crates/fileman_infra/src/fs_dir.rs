use std::path::{Path, PathBuf};

use fileman_app::{DirectoryInfra, DirectoryReaderInfra};
use fileman_fs::FilemanFS;

#[derive(Default)]
pub struct FilemanDirectoryService;

impl FilemanDirectoryService {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl DirectoryInfra for FilemanDirectoryService {
    async fn create_dir(&self, path: &Path, create_parents: bool) -> anyhow::Result<()> {
        Ok(FilemanFS::create_dir(path, create_parents).await?)
    }

    async fn remove_dir(&self, path: &Path, recursive: bool) -> anyhow::Result<()> {
        Ok(FilemanFS::remove_dir(path, recursive).await?)
    }

    async fn copy_dir(&self, source: &Path, destination: &Path) -> anyhow::Result<()> {
        Ok(FilemanFS::copy_dir(source, destination).await?)
    }

    async fn move_dir(&self, source: &Path, destination: &Path) -> anyhow::Result<()> {
        Ok(FilemanFS::move_dir(source, destination).await?)
    }

    async fn rename_dir(&self, path: &Path, new_name: &str) -> anyhow::Result<()> {
        Ok(FilemanFS::rename_dir(path, new_name).await?)
    }

    async fn is_dir_empty(&self, path: &Path) -> anyhow::Result<bool> {
        Ok(FilemanFS::is_dir_empty(path).await?)
    }
}

#[async_trait::async_trait]
impl DirectoryReaderInfra for FilemanDirectoryService {
    async fn list_directory_entries(
        &self,
        directory: &Path,
    ) -> anyhow::Result<Vec<(PathBuf, bool)>> {
        Ok(FilemanFS::list_dir(directory).await?)
    }
}
