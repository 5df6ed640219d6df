use std::path::{Path, PathBuf};
use std::sync::Arc;

use bytes::Bytes;
use derive_setters::Setters;
use fileman_app::{
    ArchiveInfra, DirectoryInfra, EnvironmentInfra, FileInfoInfra, FileReaderInfra,
    FileRemoverInfra, FileTransferInfra, FileWriterInfra, SymlinkInfra,
};
use fileman_domain::{FileTask, TaskOutcome, WriteMode};
use tracing::warn;

/// A single dispatchable file operation.
///
/// `source` is mandatory; `target`, `new_name` and `contents` are consumed
/// only by the tasks that need them. Relative paths are resolved against
/// the environment's working directory at dispatch time.
#[derive(Debug, Clone, Setters)]
#[setters(into, strip_option)]
pub struct TaskRequest {
    pub task: FileTask,
    pub source: PathBuf,
    pub target: Option<PathBuf>,
    pub new_name: Option<String>,
    pub contents: Option<Bytes>,
    pub mode: WriteMode,
}

impl TaskRequest {
    pub fn new(task: FileTask, source: impl Into<PathBuf>) -> Self {
        Self {
            task,
            source: source.into(),
            target: None,
            new_name: None,
            contents: None,
            mode: WriteMode::default(),
        }
    }
}

/// Routes a `FileTask` to the matching facade operation, choosing the
/// file, directory or symlink form by inspecting what the source path
/// currently is.
#[derive(Clone)]
pub struct FilemanTaskService<F> {
    infra: Arc<F>,
}

impl<
    F: FileReaderInfra
        + FileWriterInfra
        + FileRemoverInfra
        + FileInfoInfra
        + FileTransferInfra
        + DirectoryInfra
        + SymlinkInfra
        + ArchiveInfra
        + EnvironmentInfra,
> FilemanTaskService<F>
{
    pub fn new(infra: Arc<F>) -> Self {
        Self { infra }
    }

    pub async fn perform(&self, request: TaskRequest) -> anyhow::Result<TaskOutcome> {
        let source = self.resolve(&request.source);

        match request.task {
            FileTask::Copy => {
                let target = self.required_target(&request)?;
                if self.infra.is_dir(&source).await? {
                    self.infra.copy_dir(&source, &target).await?;
                } else {
                    self.infra.copy_file(&source, &target).await?;
                }
                Ok(TaskOutcome::Status(true))
            }
            FileTask::Create => {
                let contents = request.contents.unwrap_or_default();
                self.infra.create(&source, contents).await?;
                Ok(TaskOutcome::Status(true))
            }
            FileTask::Delete => {
                if self.infra.is_symlink(&source).await? {
                    self.infra.remove_symlink(&source).await?;
                } else if self.infra.is_dir(&source).await? {
                    self.infra.remove_dir(&source, false).await?;
                } else {
                    self.infra.remove(&source).await?;
                }
                Ok(TaskOutcome::Status(true))
            }
            FileTask::Exists => Ok(TaskOutcome::Status(self.infra.exists(&source).await?)),
            FileTask::Empty => {
                let empty = if self.infra.is_dir(&source).await? {
                    self.infra.is_dir_empty(&source).await?
                } else {
                    self.infra.is_file_empty(&source).await?
                };
                Ok(TaskOutcome::Status(empty))
            }
            FileTask::Link => {
                let target = self.required_target(&request)?;
                self.infra.create_symlink(&source, &target).await?;
                Ok(TaskOutcome::Status(true))
            }
            FileTask::Move => {
                let target = self.required_target(&request)?;
                if self.infra.is_dir(&source).await? {
                    self.infra.move_dir(&source, &target).await?;
                } else {
                    self.infra.move_file(&source, &target).await?;
                }
                Ok(TaskOutcome::Status(true))
            }
            FileTask::Read => Ok(TaskOutcome::Content(self.infra.read_utf8(&source).await?)),
            FileTask::Rename => {
                let new_name = request.new_name.as_deref().ok_or_else(|| {
                    anyhow::anyhow!("rename of '{}' requires a new name", source.display())
                })?;
                if self.infra.is_symlink(&source).await? {
                    self.infra.rename_symlink(&source, new_name).await?;
                } else if self.infra.is_dir(&source).await? {
                    self.infra.rename_dir(&source, new_name).await?;
                } else {
                    self.infra.rename_file(&source, new_name).await?;
                }
                Ok(TaskOutcome::Status(true))
            }
            FileTask::Unpack => {
                let target = request.target.as_deref().map(|dir| self.resolve(dir));
                self.infra.unpack(&source, target.as_deref()).await?;
                Ok(TaskOutcome::Status(true))
            }
            FileTask::Write => {
                let contents = request.contents.ok_or_else(|| {
                    anyhow::anyhow!("write to '{}' requires contents", source.display())
                })?;
                self.infra.write(&source, contents, request.mode).await?;
                Ok(TaskOutcome::Status(true))
            }
        }
    }

    /// Boolean convenience form: the failure is logged and collapsed to
    /// `false` instead of propagating. Callers that need to distinguish
    /// failure kinds use `perform` and match the typed error.
    pub async fn try_perform(&self, request: TaskRequest) -> bool {
        let task = request.task;
        let source = request.source.clone();

        match self.perform(request).await {
            Ok(TaskOutcome::Status(flag)) => flag,
            Ok(TaskOutcome::Content(_)) => true,
            Err(error) => {
                warn!(task = %task, path = %source.display(), error = %error, "file task failed");
                false
            }
        }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        self.infra.get_environment().resolve(path)
    }

    fn required_target(&self, request: &TaskRequest) -> anyhow::Result<PathBuf> {
        let target = request.target.as_deref().ok_or_else(|| {
            anyhow::anyhow!(
                "{} of '{}' requires a target path",
                request.task,
                request.source.display()
            )
        })?;
        Ok(self.resolve(target))
    }
}
