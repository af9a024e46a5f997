//! Archive acquisition: download, extract, relocate
//!
//! Archives are staged entirely inside the vendor directory so the final
//! relocation is a same-filesystem rename. A partially-downloaded file left
//! behind by a failed run is accepted; the whole bootstrap is cheap to re-run
//! and the existence check on the final path short-circuits completed work.

use std::fs::{self, File};
use std::io;
use std::path::Path;

use crate::error::{EpubstrapError, Result};
use crate::progress;

/// Supported remote archive formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveKind {
    Zip,
    TarGz,
}

impl ArchiveKind {
    fn extension(self) -> &'static str {
        match self {
            ArchiveKind::Zip => "zip",
            ArchiveKind::TarGz => "tar.gz",
        }
    }
}

/// Download `url` and install the archive's single expected top-level
/// directory (named `root_dir`) at `final_path`.
///
/// A no-op when `final_path` already exists; that existence check is what
/// makes repeated bootstrap runs skip completed downloads. `tag` names the
/// downloaded file and prefixes the staging directory.
pub fn fetch_and_install(
    url: &str,
    kind: ArchiveKind,
    root_dir: &str,
    final_path: &Path,
    tag: &str,
) -> Result<()> {
    if final_path.exists() {
        return Ok(());
    }

    let vendor_dir = final_path
        .parent()
        .ok_or_else(|| EpubstrapError::IoError {
            message: format!("{} has no parent directory", final_path.display()),
        })?;
    fs::create_dir_all(vendor_dir)?;

    let archive_path = vendor_dir.join(format!("{}.{}", tag, kind.extension()));
    download(url, &archive_path)?;

    let staging = tempfile::Builder::new()
        .prefix(tag)
        .tempdir_in(vendor_dir)?;
    extract(kind, &archive_path, staging.path())?;
    relocate_root(staging.path(), root_dir, final_path)?;

    staging.close()?;
    fs::remove_file(&archive_path)?;
    Ok(())
}

/// Stream the remote resource to `dest`, with a progress bar.
pub fn download(url: &str, dest: &Path) -> Result<()> {
    let response = reqwest::blocking::get(url)?.error_for_status()?;
    let total = response.content_length();

    let pb = progress::download_bar(total);
    let mut reader = pb.wrap_read(response);
    let mut file = File::create(dest)?;
    io::copy(&mut reader, &mut file).map_err(|e| EpubstrapError::DownloadFailed {
        url: url.to_string(),
        reason: e.to_string(),
    })?;
    pb.finish_and_clear();
    Ok(())
}

/// Unpack the full archive contents into `dest`.
pub fn extract(kind: ArchiveKind, archive: &Path, dest: &Path) -> Result<()> {
    match kind {
        ArchiveKind::Zip => {
            let file = File::open(archive)?;
            let mut zip = zip::ZipArchive::new(file).map_err(|e| extract_failed(archive, e))?;
            zip.extract(dest).map_err(|e| extract_failed(archive, e))?;
        }
        ArchiveKind::TarGz => {
            let file = File::open(archive)?;
            let mut tar = tar::Archive::new(flate2::read::GzDecoder::new(file));
            tar.unpack(dest).map_err(|e| extract_failed(archive, e))?;
        }
    }
    Ok(())
}

/// Move the expected top-level directory out of the staging area.
///
/// The archive must produce `root_dir` and nothing else at its top level;
/// a changed upstream layout must never silently install a wrong directory
/// or silently discard stray siblings.
pub fn relocate_root(staging: &Path, root_dir: &str, final_path: &Path) -> Result<()> {
    let extracted = staging.join(root_dir);
    if !extracted.is_dir() || fs::read_dir(staging)?.count() != 1 {
        return Err(EpubstrapError::ArchiveLayoutMismatch {
            expected: root_dir.to_string(),
        });
    }
    fs::rename(&extracted, final_path)?;
    Ok(())
}

fn extract_failed(archive: &Path, err: impl std::fmt::Display) -> EpubstrapError {
    EpubstrapError::ExtractFailed {
        path: archive.display().to_string(),
        reason: err.to_string(),
    }
}
