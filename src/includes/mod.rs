//! Unified include tree assembly
//!
//! Headers from the ePub3 sources and the bundled third-party libraries are
//! copied under `include/<namespace>/` so the gyp build resolves everything
//! from a single root. This is a snapshot copy, one directory level deep:
//! edits to the originals require re-running the bootstrap.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{EpubstrapError, Result};
use crate::project::Project;

/// One logical include namespace and the source directories feeding it.
#[derive(Debug)]
pub struct IncludeEntry {
    pub namespace: &'static str,
    pub sources: Vec<PathBuf>,
}

/// The static namespace table. Namespaces are unique; later sources of an
/// entry overwrite same-named headers from earlier ones.
pub fn include_mapping(project: &Project) -> Vec<IncludeEntry> {
    let epub3 = project.epub3_dir();
    let third_party = project.third_party_dir();
    let utf8 = third_party.join("utf8-cpp").join("include");
    let google_url = third_party.join("google-url");
    let xml = epub3.join("xml");

    vec![
        IncludeEntry {
            namespace: "utf8",
            sources: vec![utf8.clone(), utf8.join("utf8")],
        },
        IncludeEntry {
            namespace: "google-url",
            sources: vec![google_url.join("src"), google_url.join("base")],
        },
        IncludeEntry {
            namespace: "libzip",
            sources: vec![third_party.join("libzip")],
        },
        IncludeEntry {
            namespace: "ePub3",
            sources: vec![epub3.clone(), epub3.join("ePub")],
        },
        IncludeEntry {
            namespace: "ePub3/utilities",
            sources: vec![epub3.join("utilities")],
        },
        IncludeEntry {
            namespace: "ePub3/xml",
            sources: vec![
                xml.clone(),
                xml.join("tree"),
                xml.join("utilities"),
                xml.join("validation"),
            ],
        },
    ]
}

/// Copy headers for every mapping entry into `include_root`.
///
/// Destination directories are created when absent and never cleared, so
/// repeated runs overwrite individual files but leave everything else in
/// place. A missing source directory is fatal, never silently skipped.
pub fn build(include_root: &Path, mapping: &[IncludeEntry], extensions: &[&str]) -> Result<()> {
    fs::create_dir_all(include_root)?;

    for entry in mapping {
        let dest = include_root.join(entry.namespace);
        fs::create_dir_all(&dest)?;
        for source in &entry.sources {
            copy_headers(source, &dest, extensions)?;
        }
    }
    Ok(())
}

/// Copy every file in `source` whose extension is allowed into `dest`,
/// overwriting same-named files. Deliberately non-recursive.
fn copy_headers(source: &Path, dest: &Path, extensions: &[&str]) -> Result<()> {
    if !source.is_dir() {
        return Err(EpubstrapError::IncludeSourceMissing {
            path: source.display().to_string(),
        });
    }

    for dir_entry in fs::read_dir(source)? {
        let path = dir_entry?.path();
        if !path.is_file() {
            continue;
        }
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            continue;
        };
        if !extensions.contains(&ext) {
            continue;
        }
        let Some(name) = path.file_name() else {
            continue;
        };
        fs::copy(&path, dest.join(name)).map_err(|e| EpubstrapError::FileCopyFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
    }
    Ok(())
}
