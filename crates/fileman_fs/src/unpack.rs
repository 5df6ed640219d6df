use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use fileman_domain::ArchiveFormat;
use tokio::io::AsyncReadExt;

use crate::{Error, FilemanFS, Result};

// The tar magic lives at offset 257, so the sniff window must reach past it.
const SNIFF_WINDOW: u64 = 1024;

impl FilemanFS {
    /// Extracts the archive at `archive` into `extract_dir`, defaulting to
    /// the archive's containing directory.
    ///
    /// The container format is sniffed from the file header, never from the
    /// extension. The extract directory is created if missing. Unrecognized
    /// or corrupted input reports `ArchiveFormat`; extraction itself runs on
    /// the blocking pool.
    pub async fn unpack_archive(archive: &Path, extract_dir: Option<&Path>) -> Result<()> {
        let format = Self::sniff_format(archive).await?;

        let target = match extract_dir {
            Some(dir) => dir.to_path_buf(),
            None => match archive.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
                _ => PathBuf::from("."),
            },
        };
        if !Self::exists(&target) {
            tokio::fs::create_dir_all(&target)
                .await
                .map_err(|e| Error::io("create extract directory", &target, e))?;
        }

        let archive_path = archive.to_path_buf();
        tokio::task::spawn_blocking(move || Self::extract_blocking(format, &archive_path, &target))
            .await
            .map_err(|e| Error::Io {
                action: "unpack archive",
                path: archive.to_path_buf(),
                source: io::Error::other(e),
            })?
    }

    /// Identifies the container format from the first `SNIFF_WINDOW` bytes.
    async fn sniff_format(archive: &Path) -> Result<ArchiveFormat> {
        let file = tokio::fs::File::open(archive)
            .await
            .map_err(|e| Error::io("unpack archive", archive, e))?;

        let mut header = Vec::with_capacity(SNIFF_WINDOW as usize);
        file.take(SNIFF_WINDOW)
            .read_to_end(&mut header)
            .await
            .map_err(|e| Error::io("unpack archive", archive, e))?;

        match infer::get(&header).map(|kind| kind.mime_type()) {
            Some("application/zip") => Ok(ArchiveFormat::Zip),
            Some("application/x-tar") => Ok(ArchiveFormat::Tar),
            Some("application/gzip") => Ok(ArchiveFormat::TarGz),
            _ => Err(Error::ArchiveFormat { path: archive.to_path_buf(), source: None }),
        }
    }

    fn extract_blocking(format: ArchiveFormat, archive: &Path, target: &Path) -> Result<()> {
        let file = File::open(archive).map_err(|e| Error::io("unpack archive", archive, e))?;

        match format {
            ArchiveFormat::Zip => {
                let mut zip = zip::ZipArchive::new(file).map_err(|e| Error::archive(archive, e))?;
                zip.extract(target).map_err(|e| Error::archive(archive, e))?;
            }
            ArchiveFormat::Tar => {
                let mut tar = tar::Archive::new(file);
                tar.unpack(target).map_err(|e| Error::archive(archive, e))?;
            }
            ArchiveFormat::TarGz => {
                let decoder = flate2::read::GzDecoder::new(file);
                let mut tar = tar::Archive::new(decoder);
                tar.unpack(target).map_err(|e| Error::archive(archive, e))?;
            }
        }
        Ok(())
    }
}
