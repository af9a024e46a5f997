//! Synchronous subprocess execution
//!
//! Every external tool (git, python, the SDK installers, ninja) goes through
//! [`Invocation`]. Commands inherit stdio so the tool's own output is the
//! diagnostic surface; nothing is captured or parsed. The working directory is
//! resolved to an absolute path before launch because some tools (notably the
//! SDK batch scripts on Windows) misbehave under relative paths.

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use crate::error::{EpubstrapError, Result};

/// A single external command invocation.
#[derive(Debug, Clone)]
pub struct Invocation {
    program: String,
    args: Vec<String>,
    cwd: Option<PathBuf>,
    env: Vec<(String, String)>,
}

impl Invocation {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
            env: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Run the command from `dir` instead of the inherited working directory.
    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    /// Add an environment override for the child process only. The parent
    /// environment is inherited unchanged and never mutated.
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    /// Spawn, wait for completion, and fail on a non-zero exit status.
    pub fn run(&self) -> Result<()> {
        let status = self.status()?;
        if status.success() {
            Ok(())
        } else {
            Err(EpubstrapError::CommandFailed {
                command: self.to_string(),
                code: status.code().unwrap_or(-1),
            })
        }
    }

    /// Spawn, wait for completion, and surface the raw exit status.
    pub fn status(&self) -> Result<ExitStatus> {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        if let Some(dir) = &self.cwd {
            cmd.current_dir(absolute_dir(dir)?);
        }
        for (key, value) in &self.env {
            cmd.env(key, value);
        }
        cmd.status().map_err(|e| EpubstrapError::CommandSpawnFailed {
            command: self.to_string(),
            reason: e.to_string(),
        })
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

fn absolute_dir(dir: &Path) -> Result<PathBuf> {
    dunce::canonicalize(dir).map_err(|e| EpubstrapError::IoError {
        message: format!("{}: {}", dir.display(), e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shell_exit(code: u32) -> Invocation {
        if cfg!(windows) {
            Invocation::new("cmd").arg("/C").arg(format!("exit {}", code))
        } else {
            Invocation::new("sh").arg("-c").arg(format!("exit {}", code))
        }
    }

    #[test]
    fn test_run_success() {
        assert!(shell_exit(0).run().is_ok());
    }

    #[test]
    fn test_run_nonzero_exit() {
        let err = shell_exit(7).run().unwrap_err();
        match err {
            EpubstrapError::CommandFailed { code, .. } => assert_eq!(code, 7),
            other => panic!("expected CommandFailed, got {:?}", other),
        }
    }

    #[test]
    fn test_status_reports_code() {
        let status = shell_exit(3).status().unwrap();
        assert_eq!(status.code(), Some(3));
    }

    #[test]
    fn test_spawn_failure() {
        let err = Invocation::new("definitely-not-a-real-program-xyz")
            .run()
            .unwrap_err();
        assert!(matches!(err, EpubstrapError::CommandSpawnFailed { .. }));
    }

    #[test]
    fn test_current_dir_resolved_to_absolute() {
        let temp = tempfile::TempDir::new().unwrap();
        let inv = if cfg!(windows) {
            Invocation::new("cmd").args(["/C", "cd"])
        } else {
            Invocation::new("pwd")
        };
        assert!(inv.current_dir(temp.path()).run().is_ok());
    }

    #[test]
    fn test_missing_current_dir_fails() {
        let err = shell_exit(0)
            .current_dir("/definitely/not/a/real/dir")
            .run()
            .unwrap_err();
        assert!(matches!(err, EpubstrapError::IoError { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_env_override_visible_to_child() {
        let inv = Invocation::new("sh")
            .args(["-c", "test \"$EPUBSTRAP_TEST_VAR\" = expected"])
            .env("EPUBSTRAP_TEST_VAR", "expected");
        assert!(inv.run().is_ok());
    }

    #[test]
    fn test_display_joins_program_and_args() {
        let inv = Invocation::new("git").args(["apply", "linux.diff"]);
        assert_eq!(inv.to_string(), "git apply linux.diff");
    }
}
