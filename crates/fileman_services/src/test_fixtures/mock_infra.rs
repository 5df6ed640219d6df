//! Mock infrastructure for task service tests.
//!
//! Keeps a flat in-memory table of filesystem nodes so dispatcher behavior
//! can be exercised without touching the real filesystem.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use bytes::Bytes;
use fileman_app::{
    ArchiveInfra, DirectoryInfra, DirectoryReaderInfra, EnvironmentInfra, FileInfoInfra,
    FileReaderInfra, FileRemoverInfra, FileTransferInfra, FileWriterInfra, SymlinkInfra,
};
use fileman_domain::{Environment, WriteMode};

#[derive(Debug, Clone)]
pub enum Node {
    File(Bytes),
    Dir,
    Symlink(PathBuf),
}

#[derive(Debug, Default)]
pub struct MockFileService {
    pub entries: Mutex<Vec<(PathBuf, Node)>>,
}

impl MockFileService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_file(&self, path: impl Into<PathBuf>, content: impl Into<Bytes>) {
        let mut entries = self.entries.lock().unwrap();
        entries.push((path.into(), Node::File(content.into())));
    }

    pub fn add_dir(&self, path: impl Into<PathBuf>) {
        let mut entries = self.entries.lock().unwrap();
        entries.push((path.into(), Node::Dir));
    }

    pub fn add_symlink(&self, link: impl Into<PathBuf>, target: impl Into<PathBuf>) {
        let mut entries = self.entries.lock().unwrap();
        entries.push((link.into(), Node::Symlink(target.into())));
    }

    fn lookup(&self, path: &Path) -> Option<Node> {
        let entries = self.entries.lock().unwrap();
        entries
            .iter()
            .find(|(p, _)| p == path)
            .map(|(_, node)| node.clone())
    }

    fn file_bytes(&self, path: &Path) -> anyhow::Result<Bytes> {
        match self.lookup(path) {
            Some(Node::File(content)) => Ok(content),
            // One level of indirection is all the dispatcher tests need.
            Some(Node::Symlink(target)) => match self.lookup(&target) {
                Some(Node::File(content)) => Ok(content),
                _ => Err(anyhow::anyhow!("File not found: {target:?}")),
            },
            _ => Err(anyhow::anyhow!("File not found: {path:?}")),
        }
    }

    fn remove_entry(&self, path: &Path) {
        self.entries.lock().unwrap().retain(|(p, _)| p != path);
    }

    fn children_of(&self, directory: &Path) -> Vec<(PathBuf, Node)> {
        let entries = self.entries.lock().unwrap();
        entries
            .iter()
            .filter(|(p, _)| p.parent() == Some(directory))
            .cloned()
            .collect()
    }
}

#[async_trait::async_trait]
impl FileReaderInfra for MockFileService {
    async fn read_utf8(&self, path: &Path) -> anyhow::Result<String> {
        let bytes = self.file_bytes(path)?;
        String::from_utf8(bytes.to_vec())
            .map_err(|e| anyhow::anyhow!("Invalid UTF-8 in file: {path:?}: {e}"))
    }

    async fn read(&self, path: &Path) -> anyhow::Result<Vec<u8>> {
        Ok(self.file_bytes(path)?.to_vec())
    }
}

#[async_trait::async_trait]
impl FileWriterInfra for MockFileService {
    async fn create(&self, path: &Path, contents: Bytes) -> anyhow::Result<()> {
        if self.lookup(path).is_some() {
            return Err(anyhow::anyhow!("Path already exists: {path:?}"));
        }
        self.entries
            .lock()
            .unwrap()
            .push((path.to_path_buf(), Node::File(contents)));
        Ok(())
    }

    async fn write(&self, path: &Path, contents: Bytes, mode: WriteMode) -> anyhow::Result<()> {
        let merged = match (mode, self.lookup(path)) {
            (WriteMode::Append, Some(Node::File(existing))) => {
                let mut bytes = existing.to_vec();
                bytes.extend_from_slice(&contents);
                Bytes::from(bytes)
            }
            _ => contents,
        };
        self.remove_entry(path);
        self.entries
            .lock()
            .unwrap()
            .push((path.to_path_buf(), Node::File(merged)));
        Ok(())
    }

    async fn write_temp(&self, prefix: &str, ext: &str, content: &str) -> anyhow::Result<PathBuf> {
        let path = PathBuf::from(format!("/tmp/{prefix}scratch{ext}"));
        self.write(&path, Bytes::from(content.to_string()), WriteMode::Overwrite)
            .await?;
        Ok(path)
    }
}

#[async_trait::async_trait]
impl FileRemoverInfra for MockFileService {
    async fn remove(&self, path: &Path) -> anyhow::Result<()> {
        match self.lookup(path) {
            Some(Node::File(_)) => {
                self.remove_entry(path);
                Ok(())
            }
            _ => Err(anyhow::anyhow!("File not found: {path:?}")),
        }
    }
}

#[async_trait::async_trait]
impl FileInfoInfra for MockFileService {
    async fn exists(&self, path: &Path) -> anyhow::Result<bool> {
        Ok(self.lookup(path).is_some())
    }

    async fn is_file(&self, path: &Path) -> anyhow::Result<bool> {
        Ok(matches!(self.lookup(path), Some(Node::File(_))))
    }

    async fn is_dir(&self, path: &Path) -> anyhow::Result<bool> {
        Ok(matches!(self.lookup(path), Some(Node::Dir)))
    }

    async fn is_symlink(&self, path: &Path) -> anyhow::Result<bool> {
        Ok(matches!(self.lookup(path), Some(Node::Symlink(_))))
    }

    async fn file_size(&self, path: &Path) -> anyhow::Result<u64> {
        Ok(self.file_bytes(path)?.len() as u64)
    }

    async fn is_file_empty(&self, path: &Path) -> anyhow::Result<bool> {
        Ok(self.file_bytes(path)?.is_empty())
    }
}

#[async_trait::async_trait]
impl FileTransferInfra for MockFileService {
    async fn copy_file(&self, source: &Path, destination: &Path) -> anyhow::Result<()> {
        if self.lookup(destination).is_some() {
            return Err(anyhow::anyhow!("Path already exists: {destination:?}"));
        }
        let content = self.file_bytes(source)?;
        self.entries
            .lock()
            .unwrap()
            .push((destination.to_path_buf(), Node::File(content)));
        Ok(())
    }

    async fn move_file(&self, source: &Path, destination: &Path) -> anyhow::Result<()> {
        self.copy_file(source, destination).await?;
        self.remove_entry(source);
        Ok(())
    }

    async fn rename_file(&self, path: &Path, new_name: &str) -> anyhow::Result<()> {
        let parent = path.parent().unwrap_or_else(|| Path::new(""));
        self.move_file(path, &parent.join(new_name)).await
    }
}

#[async_trait::async_trait]
impl DirectoryInfra for MockFileService {
    async fn create_dir(&self, path: &Path, _create_parents: bool) -> anyhow::Result<()> {
        if self.lookup(path).is_some() {
            return Err(anyhow::anyhow!("Path already exists: {path:?}"));
        }
        self.add_dir(path.to_path_buf());
        Ok(())
    }

    async fn remove_dir(&self, path: &Path, recursive: bool) -> anyhow::Result<()> {
        if !matches!(self.lookup(path), Some(Node::Dir)) {
            return Err(anyhow::anyhow!("Directory not found: {path:?}"));
        }
        if !recursive && !self.children_of(path).is_empty() {
            return Err(anyhow::anyhow!("Directory not empty: {path:?}"));
        }
        self.entries
            .lock()
            .unwrap()
            .retain(|(p, _)| p != path && !p.starts_with(path));
        Ok(())
    }

    async fn copy_dir(&self, source: &Path, destination: &Path) -> anyhow::Result<()> {
        if !matches!(self.lookup(source), Some(Node::Dir)) {
            return Err(anyhow::anyhow!("Directory not found: {source:?}"));
        }
        let copied: Vec<(PathBuf, Node)> = {
            let entries = self.entries.lock().unwrap();
            entries
                .iter()
                .filter(|(p, _)| p.starts_with(source))
                .map(|(p, node)| {
                    let relative = p.strip_prefix(source).unwrap();
                    (destination.join(relative), node.clone())
                })
                .collect()
        };
        self.entries.lock().unwrap().extend(copied);
        Ok(())
    }

    async fn move_dir(&self, source: &Path, destination: &Path) -> anyhow::Result<()> {
        self.copy_dir(source, destination).await?;
        self.entries
            .lock()
            .unwrap()
            .retain(|(p, _)| !p.starts_with(source));
        Ok(())
    }

    async fn rename_dir(&self, path: &Path, new_name: &str) -> anyhow::Result<()> {
        let parent = path.parent().unwrap_or_else(|| Path::new(""));
        self.move_dir(path, &parent.join(new_name)).await
    }

    async fn is_dir_empty(&self, path: &Path) -> anyhow::Result<bool> {
        if !matches!(self.lookup(path), Some(Node::Dir)) {
            return Err(anyhow::anyhow!("Directory not found: {path:?}"));
        }
        Ok(self.children_of(path).is_empty())
    }
}

#[async_trait::async_trait]
impl DirectoryReaderInfra for MockFileService {
    async fn list_directory_entries(
        &self,
        directory: &Path,
    ) -> anyhow::Result<Vec<(PathBuf, bool)>> {
        Ok(self
            .children_of(directory)
            .into_iter()
            .map(|(p, node)| (p, matches!(node, Node::Dir)))
            .collect())
    }
}

#[async_trait::async_trait]
impl SymlinkInfra for MockFileService {
    async fn create_symlink(&self, original: &Path, link: &Path) -> anyhow::Result<()> {
        if self.lookup(original).is_none() {
            return Err(anyhow::anyhow!("Path not found: {original:?}"));
        }
        if self.lookup(link).is_some() {
            return Err(anyhow::anyhow!("Path already exists: {link:?}"));
        }
        self.add_symlink(link.to_path_buf(), original.to_path_buf());
        Ok(())
    }

    async fn remove_symlink(&self, path: &Path) -> anyhow::Result<()> {
        match self.lookup(path) {
            Some(Node::Symlink(_)) => {
                self.remove_entry(path);
                Ok(())
            }
            _ => Err(anyhow::anyhow!("Symlink not found: {path:?}")),
        }
    }

    async fn rename_symlink(&self, path: &Path, new_name: &str) -> anyhow::Result<()> {
        match self.lookup(path) {
            Some(Node::Symlink(target)) => {
                let parent = path.parent().unwrap_or_else(|| Path::new(""));
                self.remove_entry(path);
                self.add_symlink(parent.join(new_name), target);
                Ok(())
            }
            _ => Err(anyhow::anyhow!("Symlink not found: {path:?}")),
        }
    }
}

#[async_trait::async_trait]
impl ArchiveInfra for MockFileService {
    async fn unpack(&self, archive: &Path, _extract_dir: Option<&Path>) -> anyhow::Result<()> {
        // The mock only validates presence; container handling is covered
        // by the facade tests.
        if !matches!(self.lookup(archive), Some(Node::File(_))) {
            return Err(anyhow::anyhow!("File not found: {archive:?}"));
        }
        Ok(())
    }
}

#[derive(Debug)]
pub struct MockEnvironmentInfra;

impl EnvironmentInfra for MockEnvironmentInfra {
    fn get_environment(&self) -> Environment {
        Environment {
            cwd: PathBuf::from("/test"),
            os: "linux".to_string(),
            log_path: PathBuf::from("/test/logs"),
        }
    }

    fn get_env_var(&self, _key: &str) -> Option<String> {
        None
    }
}

/// Composite mock implementing every port trait the task service needs.
#[derive(Debug, Clone)]
pub struct MockCompositeService {
    pub file_service: Arc<MockFileService>,
    pub env_service: Arc<MockEnvironmentInfra>,
}

impl Default for MockCompositeService {
    fn default() -> Self {
        Self::new()
    }
}

impl MockCompositeService {
    pub fn new() -> Self {
        Self {
            file_service: Arc::new(MockFileService::new()),
            env_service: Arc::new(MockEnvironmentInfra),
        }
    }

    pub fn add_file(&self, path: impl Into<PathBuf>, content: impl Into<Bytes>) {
        self.file_service.add_file(path, content);
    }

    pub fn add_dir(&self, path: impl Into<PathBuf>) {
        self.file_service.add_dir(path);
    }
}

impl EnvironmentInfra for MockCompositeService {
    fn get_environment(&self) -> Environment {
        self.env_service.get_environment()
    }

    fn get_env_var(&self, key: &str) -> Option<String> {
        self.env_service.get_env_var(key)
    }
}

#[async_trait::async_trait]
impl FileReaderInfra for MockCompositeService {
    async fn read_utf8(&self, path: &Path) -> anyhow::Result<String> {
        self.file_service.read_utf8(path).await
    }

    async fn read(&self, path: &Path) -> anyhow::Result<Vec<u8>> {
        self.file_service.read(path).await
    }
}

#[async_trait::async_trait]
impl FileWriterInfra for MockCompositeService {
    async fn create(&self, path: &Path, contents: Bytes) -> anyhow::Result<()> {
        self.file_service.create(path, contents).await
    }

    async fn write(&self, path: &Path, contents: Bytes, mode: WriteMode) -> anyhow::Result<()> {
        self.file_service.write(path, contents, mode).await
    }

    async fn write_temp(&self, prefix: &str, ext: &str, content: &str) -> anyhow::Result<PathBuf> {
        self.file_service.write_temp(prefix, ext, content).await
    }
}

#[async_trait::async_trait]
impl FileRemoverInfra for MockCompositeService {
    async fn remove(&self, path: &Path) -> anyhow::Result<()> {
        self.file_service.remove(path).await
    }
}

#[async_trait::async_trait]
impl FileInfoInfra for MockCompositeService {
    async fn exists(&self, path: &Path) -> anyhow::Result<bool> {
        self.file_service.exists(path).await
    }

    async fn is_file(&self, path: &Path) -> anyhow::Result<bool> {
        self.file_service.is_file(path).await
    }

    async fn is_dir(&self, path: &Path) -> anyhow::Result<bool> {
        self.file_service.is_dir(path).await
    }

    async fn is_symlink(&self, path: &Path) -> anyhow::Result<bool> {
        self.file_service.is_symlink(path).await
    }

    async fn file_size(&self, path: &Path) -> anyhow::Result<u64> {
        self.file_service.file_size(path).await
    }

    async fn is_file_empty(&self, path: &Path) -> anyhow::Result<bool> {
        self.file_service.is_file_empty(path).await
    }
}

#[async_trait::async_trait]
impl FileTransferInfra for MockCompositeService {
    async fn copy_file(&self, source: &Path, destination: &Path) -> anyhow::Result<()> {
        self.file_service.copy_file(source, destination).await
    }

    async fn move_file(&self, source: &Path, destination: &Path) -> anyhow::Result<()> {
        self.file_service.move_file(source, destination).await
    }

    async fn rename_file(&self, path: &Path, new_name: &str) -> anyhow::Result<()> {
        self.file_service.rename_file(path, new_name).await
    }
}

#[async_trait::async_trait]
impl DirectoryInfra for MockCompositeService {
    async fn create_dir(&self, path: &Path, create_parents: bool) -> anyhow::Result<()> {
        self.file_service.create_dir(path, create_parents).await
    }

    async fn remove_dir(&self, path: &Path, recursive: bool) -> anyhow::Result<()> {
        self.file_service.remove_dir(path, recursive).await
    }

    async fn copy_dir(&self, source: &Path, destination: &Path) -> anyhow::Result<()> {
        self.file_service.copy_dir(source, destination).await
    }

    async fn move_dir(&self, source: &Path, destination: &Path) -> anyhow::Result<()> {
        self.file_service.move_dir(source, destination).await
    }

    async fn rename_dir(&self, path: &Path, new_name: &str) -> anyhow::Result<()> {
        self.file_service.rename_dir(path, new_name).await
    }

    async fn is_dir_empty(&self, path: &Path) -> anyhow::Result<bool> {
        self.file_service.is_dir_empty(path).await
    }
}

#[async_trait::async_trait]
impl DirectoryReaderInfra for MockCompositeService {
    async fn list_directory_entries(
        &self,
        directory: &Path,
    ) -> anyhow::Result<Vec<(PathBuf, bool)>> {
        self.file_service.list_directory_entries(directory).await
    }
}

#[async_trait::async_trait]
impl SymlinkInfra for MockCompositeService {
    async fn create_symlink(&self, original: &Path, link: &Path) -> anyhow::Result<()> {
        self.file_service.create_symlink(original, link).await
    }

    async fn remove_symlink(&self, path: &Path) -> anyhow::Result<()> {
        self.file_service.remove_symlink(path).await
    }

    async fn rename_symlink(&self, path: &Path, new_name: &str) -> anyhow::Result<()> {
        self.file_service.rename_symlink(path, new_name).await
    }
}

#[async_trait::async_trait]
impl ArchiveInfra for MockCompositeService {
    async fn unpack(&self, archive: &Path, extract_dir: Option<&Path>) -> anyhow::Result<()> {
        self.file_service.unpack(archive, extract_dir).await
    }
}
