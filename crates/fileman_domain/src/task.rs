use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// The file operations the task dispatcher can run.
///
/// Each variant selects the matching facade operation; the dispatcher
/// decides between the file, directory and symlink form by inspecting
/// what the source path currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FileTask {
    Copy,
    Create,
    Delete,
    Exists,
    Empty,
    Link,
    Move,
    Read,
    Rename,
    Unpack,
    Write,
}

/// What a dispatched task produced.
///
/// Mutations and existence checks report a status flag; reads carry the
/// file content. The flag is a convenience only — failures surface as
/// errors, never as a silent `Status(false)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskOutcome {
    Status(bool),
    Content(String),
}

impl TaskOutcome {
    pub fn as_status(&self) -> Option<bool> {
        match self {
            TaskOutcome::Status(flag) => Some(*flag),
            TaskOutcome::Content(_) => None,
        }
    }

    pub fn as_content(&self) -> Option<&str> {
        match self {
            TaskOutcome::Status(_) => None,
            TaskOutcome::Content(content) => Some(content),
        }
    }
}
