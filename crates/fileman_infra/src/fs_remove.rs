use std::path::Path;

use fileman_app::FileRemoverInfra;
use fileman_fs::FilemanFS;

/// Low-level file remove service
///
/// Deletes regular files only; directories and symlinks have their own
/// services.
#[derive(Default)]
pub struct FilemanFileRemoveService;

impl FilemanFileRemoveService {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl FileRemoverInfra for FilemanFileRemoveService {
    async fn remove(&self, path: &Path) -> anyhow::Result<()> {
        Ok(FilemanFS::remove_file(path).await?)
    }
}
