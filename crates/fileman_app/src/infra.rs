use std::path::{Path, PathBuf};

use bytes::Bytes;
use fileman_domain::{Environment, WriteMode};

/// Read access to file contents.
#[async_trait::async_trait]
pub trait FileReaderInfra: Send + Sync {
    async fn read_utf8(&self, path: &Path) -> anyhow::Result<String>;
    async fn read(&self, path: &Path) -> anyhow::Result<Vec<u8>>;
}

/// Creating files and writing content to them.
#[async_trait::async_trait]
pub trait FileWriterInfra: Send + Sync {
    /// Creates a new file; the path must not already exist.
    async fn create(&self, path: &Path, contents: Bytes) -> anyhow::Result<()>;

    /// Writes to an existing or new file per `mode`.
    async fn write(&self, path: &Path, contents: Bytes, mode: WriteMode) -> anyhow::Result<()>;

    /// Writes `content` to a fresh temporary file and returns its path.
    async fn write_temp(&self, prefix: &str, ext: &str, content: &str) -> anyhow::Result<PathBuf>;
}

/// Deleting regular files.
#[async_trait::async_trait]
pub trait FileRemoverInfra: Send + Sync {
    async fn remove(&self, path: &Path) -> anyhow::Result<()>;
}

/// Metadata queries. None of these mutate anything.
#[async_trait::async_trait]
pub trait FileInfoInfra: Send + Sync {
    async fn exists(&self, path: &Path) -> anyhow::Result<bool>;
    async fn is_file(&self, path: &Path) -> anyhow::Result<bool>;
    async fn is_dir(&self, path: &Path) -> anyhow::Result<bool>;
    async fn is_symlink(&self, path: &Path) -> anyhow::Result<bool>;
    async fn file_size(&self, path: &Path) -> anyhow::Result<u64>;
    async fn is_file_empty(&self, path: &Path) -> anyhow::Result<bool>;
}

/// Relocating files: copy to, move to, and rename within a directory.
#[async_trait::async_trait]
pub trait FileTransferInfra: Send + Sync {
    async fn copy_file(&self, source: &Path, destination: &Path) -> anyhow::Result<()>;
    async fn move_file(&self, source: &Path, destination: &Path) -> anyhow::Result<()>;
    async fn rename_file(&self, path: &Path, new_name: &str) -> anyhow::Result<()>;
}

/// Directory lifecycle and queries.
#[async_trait::async_trait]
pub trait DirectoryInfra: Send + Sync {
    async fn create_dir(&self, path: &Path, create_parents: bool) -> anyhow::Result<()>;
    async fn remove_dir(&self, path: &Path, recursive: bool) -> anyhow::Result<()>;
    async fn copy_dir(&self, source: &Path, destination: &Path) -> anyhow::Result<()>;
    async fn move_dir(&self, source: &Path, destination: &Path) -> anyhow::Result<()>;
    async fn rename_dir(&self, path: &Path, new_name: &str) -> anyhow::Result<()>;
    async fn is_dir_empty(&self, path: &Path) -> anyhow::Result<bool>;
}

/// Listing directory children.
#[async_trait::async_trait]
pub trait DirectoryReaderInfra: Send + Sync {
    /// Returns each direct child with an is-directory flag.
    async fn list_directory_entries(
        &self,
        directory: &Path,
    ) -> anyhow::Result<Vec<(PathBuf, bool)>>;
}

/// Symlink lifecycle. Implementations must report platforms without
/// symlink support instead of silently succeeding.
#[async_trait::async_trait]
pub trait SymlinkInfra: Send + Sync {
    async fn create_symlink(&self, original: &Path, link: &Path) -> anyhow::Result<()>;
    async fn remove_symlink(&self, path: &Path) -> anyhow::Result<()>;
    async fn rename_symlink(&self, path: &Path, new_name: &str) -> anyhow::Result<()>;
}

/// Archive extraction.
#[async_trait::async_trait]
pub trait ArchiveInfra: Send + Sync {
    /// Unpacks `archive` into `extract_dir`, defaulting to the archive's
    /// containing directory.
    async fn unpack(&self, archive: &Path, extract_dir: Option<&Path>) -> anyhow::Result<()>;
}

/// Access to the process environment captured at startup.
pub trait EnvironmentInfra: Send + Sync {
    fn get_environment(&self) -> Environment;
    fn get_env_var(&self, key: &str) -> Option<String>;
}
