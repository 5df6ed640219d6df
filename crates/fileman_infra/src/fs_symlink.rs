use std::path::Path;

use fileman_app::SymlinkInfra;
use fileman_fs::FilemanFS;

#[derive(Default)]
pub struct FilemanSymlinkService;

impl FilemanSymlinkService {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl SymlinkInfra for FilemanSymlinkService {
    async fn create_symlink(&self, original: &Path, link: &Path) -> anyhow::Result<()> {
        Ok(FilemanFS::create_symlink(original, link).await?)
    }

    async fn remove_symlink(&self, path: &Path) -> anyhow::Result<()> {
        Ok(FilemanFS::remove_symlink(path).await?)
    }

    async fn rename_symlink(&self, path: &Path, new_name: &str) -> anyhow::Result<()> {
        Ok(FilemanFS::rename_symlink(path, new_name).await?)
    }
}
