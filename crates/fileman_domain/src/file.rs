use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// How `write` treats existing content at the target path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WriteMode {
    /// Replace whatever is there.
    #[default]
    Overwrite,
    /// Keep existing content and write after it.
    Append,
}

/// Container formats the unpack operation can extract.
///
/// Always derived from the file header, never from the extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ArchiveFormat {
    #[strum(serialize = "zip")]
    Zip,
    #[strum(serialize = "tar")]
    Tar,
    #[strum(serialize = "tar.gz")]
    TarGz,
}
