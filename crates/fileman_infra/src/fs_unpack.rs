use std::path::Path;

use fileman_app::ArchiveInfra;
use fileman_fs::FilemanFS;

/// Archive extraction service
///
/// Format detection and container handling live in the facade; this
/// adapter only exposes them behind the port trait.
#[derive(Default)]
pub struct FilemanArchiveService;

impl FilemanArchiveService {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl ArchiveInfra for FilemanArchiveService {
    async fn unpack(&self, archive: &Path, extract_dir: Option<&Path>) -> anyhow::Result<()> {
        Ok(FilemanFS::unpack_archive(archive, extract_dir).await?)
    }
}
