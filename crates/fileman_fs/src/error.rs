use std::io;
use std::path::{Path, PathBuf};

/// Typed failure taxonomy shared by every filesystem operation.
///
/// Each variant records the attempted action and the path it was attempted
/// on; messages stay descriptive even after the error has crossed an
/// `anyhow` boundary, and callers can still match on the variant instead of
/// parsing text.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to {action} '{}': path does not exist", path.display())]
    NotFound { action: &'static str, path: PathBuf },

    #[error("failed to {action} '{}': path already exists", path.display())]
    AlreadyExists { action: &'static str, path: PathBuf },

    #[error("failed to {action} '{}': permission denied", path.display())]
    PermissionDenied { action: &'static str, path: PathBuf },

    #[error("failed to {action} '{}': not supported on this platform", path.display())]
    Unsupported { action: &'static str, path: PathBuf },

    #[error("failed to unpack '{}': unrecognized or corrupted archive", path.display())]
    ArchiveFormat {
        path: PathBuf,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("failed to {action} '{}'", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Classifies an OS error into the taxonomy, falling back to `Io` when
    /// the kind has no dedicated variant.
    pub(crate) fn io(action: &'static str, path: &Path, source: io::Error) -> Self {
        let path = path.to_path_buf();
        match source.kind() {
            io::ErrorKind::NotFound => Error::NotFound { action, path },
            io::ErrorKind::AlreadyExists => Error::AlreadyExists { action, path },
            io::ErrorKind::PermissionDenied => Error::PermissionDenied { action, path },
            io::ErrorKind::Unsupported => Error::Unsupported { action, path },
            _ => Error::Io { action, path, source },
        }
    }

    pub(crate) fn not_found(action: &'static str, path: &Path) -> Self {
        Error::NotFound { action, path: path.to_path_buf() }
    }

    pub(crate) fn already_exists(action: &'static str, path: &Path) -> Self {
        Error::AlreadyExists { action, path: path.to_path_buf() }
    }

    pub(crate) fn archive(
        path: &Path,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Error::ArchiveFormat { path: path.to_path_buf(), source: Some(source.into()) }
    }
}
