use std::path::{Path, PathBuf};
use std::sync::Arc;

use bytes::Bytes;
use fileman_app::{
    ArchiveInfra, DirectoryInfra, DirectoryReaderInfra, EnvironmentInfra, FileInfoInfra,
    FileReaderInfra, FileRemoverInfra, FileTransferInfra, FileWriterInfra, SymlinkInfra,
};
use fileman_domain::{Environment, WriteMode};

use crate::env::FilemanEnvironmentInfra;
use crate::fs_dir::FilemanDirectoryService;
use crate::fs_meta::FilemanFileMetaService;
use crate::fs_read::FilemanFileReadService;
use crate::fs_remove::FilemanFileRemoveService;
use crate::fs_symlink::FilemanSymlinkService;
use crate::fs_transfer::FilemanFileTransferService;
use crate::fs_unpack::FilemanArchiveService;
use crate::fs_write::FilemanFileWriteService;

/// The composite infrastructure handle: one stateless service per concern,
/// every port trait implemented by delegation.
#[derive(Clone)]
pub struct FilemanInfra {
    file_read_service: Arc<FilemanFileReadService>,
    file_write_service: Arc<FilemanFileWriteService>,
    file_remove_service: Arc<FilemanFileRemoveService>,
    file_meta_service: Arc<FilemanFileMetaService>,
    file_transfer_service: Arc<FilemanFileTransferService>,
    directory_service: Arc<FilemanDirectoryService>,
    symlink_service: Arc<FilemanSymlinkService>,
    archive_service: Arc<FilemanArchiveService>,
    environment_service: Arc<FilemanEnvironmentInfra>,
}

impl FilemanInfra {
    pub fn new(cwd: PathBuf) -> Self {
        Self {
            file_read_service: Arc::new(FilemanFileReadService::new()),
            file_write_service: Arc::new(FilemanFileWriteService::new()),
            file_remove_service: Arc::new(FilemanFileRemoveService::new()),
            file_meta_service: Arc::new(FilemanFileMetaService),
            file_transfer_service: Arc::new(FilemanFileTransferService::new()),
            directory_service: Arc::new(FilemanDirectoryService::new()),
            symlink_service: Arc::new(FilemanSymlinkService::new()),
            archive_service: Arc::new(FilemanArchiveService::new()),
            environment_service: Arc::new(FilemanEnvironmentInfra::new(cwd)),
        }
    }
}

impl EnvironmentInfra for FilemanInfra {
    fn get_environment(&self) -> Environment {
        self.environment_service.get_environment()
    }

    fn get_env_var(&self, key: &str) -> Option<String> {
        self.environment_service.get_env_var(key)
    }
}

#[async_trait::async_trait]
impl FileReaderInfra for FilemanInfra {
    async fn read_utf8(&self, path: &Path) -> anyhow::Result<String> {
        self.file_read_service.read_utf8(path).await
    }

    async fn read(&self, path: &Path) -> anyhow::Result<Vec<u8>> {
        self.file_read_service.read(path).await
    }
}

#[async_trait::async_trait]
impl FileWriterInfra for FilemanInfra {
    async fn create(&self, path: &Path, contents: Bytes) -> anyhow::Result<()> {
        self.file_write_service.create(path, contents).await
    }

    async fn write(&self, path: &Path, contents: Bytes, mode: WriteMode) -> anyhow::Result<()> {
        self.file_write_service.write(path, contents, mode).await
    }

    async fn write_temp(&self, prefix: &str, ext: &str, content: &str) -> anyhow::Result<PathBuf> {
        self.file_write_service
            .write_temp(prefix, ext, content)
            .await
    }
}

#[async_trait::async_trait]
impl FileRemoverInfra for FilemanInfra {
    async fn remove(&self, path: &Path) -> anyhow::Result<()> {
        self.file_remove_service.remove(path).await
    }
}

#[async_trait::async_trait]
impl FileInfoInfra for FilemanInfra {
    async fn exists(&self, path: &Path) -> anyhow::Result<bool> {
        self.file_meta_service.exists(path).await
    }

    async fn is_file(&self, path: &Path) -> anyhow::Result<bool> {
        self.file_meta_service.is_file(path).await
    }

    async fn is_dir(&self, path: &Path) -> anyhow::Result<bool> {
        self.file_meta_service.is_dir(path).await
    }

    async fn is_symlink(&self, path: &Path) -> anyhow::Result<bool> {
        self.file_meta_service.is_symlink(path).await
    }

    async fn file_size(&self, path: &Path) -> anyhow::Result<u64> {
        self.file_meta_service.file_size(path).await
    }

    async fn is_file_empty(&self, path: &Path) -> anyhow::Result<bool> {
        self.file_meta_service.is_file_empty(path).await
    }
}

#[async_trait::async_trait]
impl FileTransferInfra for FilemanInfra {
    async fn copy_file(&self, source: &Path, destination: &Path) -> anyhow::Result<()> {
        self.file_transfer_service.copy_file(source, destination).await
    }

    async fn move_file(&self, source: &Path, destination: &Path) -> anyhow::Result<()> {
        self.file_transfer_service.move_file(source, destination).await
    }

    async fn rename_file(&self, path: &Path, new_name: &str) -> anyhow::Result<()> {
        self.file_transfer_service.rename_file(path, new_name).await
    }
}

#[async_trait::async_trait]
impl DirectoryInfra for FilemanInfra {
    async fn create_dir(&self, path: &Path, create_parents: bool) -> anyhow::Result<()> {
        self.directory_service.create_dir(path, create_parents).await
    }

    async fn remove_dir(&self, path: &Path, recursive: bool) -> anyhow::Result<()> {
        self.directory_service.remove_dir(path, recursive).await
    }

    async fn copy_dir(&self, source: &Path, destination: &Path) -> anyhow::Result<()> {
        self.directory_service.copy_dir(source, destination).await
    }

    async fn move_dir(&self, source: &Path, destination: &Path) -> anyhow::Result<()> {
        self.directory_service.move_dir(source, destination).await
    }

    async fn rename_dir(&self, path: &Path, new_name: &str) -> anyhow::Result<()> {
        self.directory_service.rename_dir(path, new_name).await
    }

    async fn is_dir_empty(&self, path: &Path) -> anyhow::Result<bool> {
        self.directory_service.is_dir_empty(path).await
    }
}

#[async_trait::async_trait]
impl DirectoryReaderInfra for FilemanInfra {
    async fn list_directory_entries(
        &self,
        directory: &Path,
    ) -> anyhow::Result<Vec<(PathBuf, bool)>> {
        self.directory_service.list_directory_entries(directory).await
    }
}

#[async_trait::async_trait]
impl SymlinkInfra for FilemanInfra {
    async fn create_symlink(&self, original: &Path, link: &Path) -> anyhow::Result<()> {
        self.symlink_service.create_symlink(original, link).await
    }

    async fn remove_symlink(&self, path: &Path) -> anyhow::Result<()> {
        self.symlink_service.remove_symlink(path).await
    }

    async fn rename_symlink(&self, path: &Path, new_name: &str) -> anyhow::Result<()> {
        self.symlink_service.rename_symlink(path, new_name).await
    }
}

#[async_trait::async_trait]
impl ArchiveInfra for FilemanInfra {
    async fn unpack(&self, archive: &Path, extract_dir: Option<&Path>) -> anyhow::Result<()> {
        self.archive_service.unpack(archive, extract_dir).await
    }
}
