//! Error types for epubstrap
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//! Every failure the bootstrap can hit is fatal; there are no retries, so the
//! variants here exist to name the failure precisely, not to drive recovery.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for epubstrap operations
#[derive(Error, Diagnostic, Debug)]
pub enum EpubstrapError {
    // Platform errors
    #[error("Platform not supported: {os}")]
    #[diagnostic(
        code(epubstrap::platform::not_supported),
        help("Supported platforms: linux, mac, windows")
    )]
    PlatformNotSupported { os: String },

    // Download errors
    #[error("Failed to download {url}: {reason}")]
    #[diagnostic(
        code(epubstrap::fetch::download_failed),
        help("Check network connectivity and re-run; acquisition is idempotent")
    )]
    DownloadFailed { url: String, reason: String },

    // Archive errors
    #[error("Failed to extract archive {path}: {reason}")]
    #[diagnostic(code(epubstrap::fetch::extract_failed))]
    ExtractFailed { path: String, reason: String },

    #[error("Archive did not produce a single top-level directory '{expected}'")]
    #[diagnostic(
        code(epubstrap::fetch::layout_mismatch),
        help("The upstream archive layout changed; update the vendor table to match")
    )]
    ArchiveLayoutMismatch { expected: String },

    // Subprocess errors
    #[error("Failed to launch '{command}': {reason}")]
    #[diagnostic(
        code(epubstrap::command::spawn_failed),
        help("Check that the tool is installed and on PATH")
    )]
    CommandSpawnFailed { command: String, reason: String },

    #[error("'{command}' exited with status {code}")]
    #[diagnostic(code(epubstrap::command::failed))]
    CommandFailed { command: String, code: i32 },

    // Patch errors
    #[error("Patch file not found: {path}")]
    #[diagnostic(
        code(epubstrap::patch::not_found),
        help("Each platform needs a patches/<platform>.diff in the project directory")
    )]
    PatchNotFound { path: String },

    // Include tree errors
    #[error("Include source directory missing: {path}")]
    #[diagnostic(
        code(epubstrap::includes::source_missing),
        help("Header sources must exist before assembly; check out the full repository")
    )]
    IncludeSourceMissing { path: String },

    // Project layout errors
    #[error("Project directory {path} is not two levels below a repository root")]
    #[diagnostic(
        code(epubstrap::project::layout_invalid),
        help("Run from a platform port directory, e.g. <repo>/Platform/<port>")
    )]
    ProjectLayoutInvalid { path: String },

    // File system errors
    #[error("Failed to copy {path}: {reason}")]
    #[diagnostic(code(epubstrap::fs::copy_failed))]
    FileCopyFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(epubstrap::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for EpubstrapError {
    fn from(err: std::io::Error) -> Self {
        EpubstrapError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<reqwest::Error> for EpubstrapError {
    fn from(err: reqwest::Error) -> Self {
        EpubstrapError::DownloadFailed {
            url: err
                .url()
                .map(|u| u.to_string())
                .unwrap_or_else(|| "unknown".to_string()),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, EpubstrapError>;
