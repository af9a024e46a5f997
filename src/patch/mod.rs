//! Platform patch application
//!
//! Patches live in `patches/<platform>.diff` inside the project directory and
//! are applied with `git apply` from the repository root. There is no
//! idempotence guard: re-running the bootstrap without reverting the patch
//! fails on the second application, and that is expected behavior.

use std::path::{Path, PathBuf};

use crate::error::{EpubstrapError, Result};
use crate::platform::PlatformProfile;
use crate::project::Project;
use crate::runner::Invocation;

/// Patch file for `profile`, as an absolute path so `git apply` finds it
/// regardless of its working directory.
pub fn patch_file(patches_dir: &Path, profile: &PlatformProfile) -> PathBuf {
    patches_dir.join(format!("{}.diff", profile.id()))
}

/// Build the `git apply` invocation for `patch`, run from `repo_root`.
pub fn apply_command(patch: &Path, profile: &PlatformProfile, repo_root: &Path) -> Invocation {
    Invocation::new("git")
        .arg("apply")
        .args(profile.patch_flags().iter().copied())
        .arg(patch.display().to_string())
        .current_dir(repo_root)
}

/// Apply the platform patch against the repository root.
pub fn apply(project: &Project, profile: &PlatformProfile) -> Result<()> {
    let patch = patch_file(&project.patches_dir(), profile);
    if !patch.is_file() {
        return Err(EpubstrapError::PatchNotFound {
            path: patch.display().to_string(),
        });
    }
    apply_command(&patch, profile, project.root()).run()
}
