use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Process-level context shared by every service.
///
/// Captured once at startup; operations never consult the process
/// environment directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Environment {
    /// Working directory relative paths are resolved against.
    pub cwd: PathBuf,
    /// Host operating system, as reported by the compiler target.
    pub os: String,
    /// Directory the rolling log files are written to.
    pub log_path: PathBuf,
}

impl Environment {
    /// Resolves `path` against the working directory unless it is already
    /// absolute.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.cwd.join(path)
        }
    }
}
