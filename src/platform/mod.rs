//! Host platform detection and the per-platform bootstrap profile
//!
//! The per-platform differences (header extensions, patch leniency, toolchain
//! environment) all live here as one value object, selected once at startup
//! and threaded through every step that needs it.

use crate::error::{EpubstrapError, Result};

/// Closed set of operating systems the bootstrap supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Os {
    Linux,
    Mac,
    Windows,
}

/// Per-platform knobs for one bootstrap run. Immutable once detected.
#[derive(Debug, Clone)]
pub struct PlatformProfile {
    pub os: Os,
}

impl PlatformProfile {
    /// Detect the profile from the host operating system.
    pub fn detect() -> Result<Self> {
        Self::for_os_name(std::env::consts::OS)
    }

    /// Build a profile from an OS name following `std::env::consts::OS`
    /// conventions. Anything outside the supported set is a fatal error.
    pub fn for_os_name(name: &str) -> Result<Self> {
        let os = match name {
            "linux" => Os::Linux,
            "macos" => Os::Mac,
            "windows" => Os::Windows,
            other => {
                return Err(EpubstrapError::PlatformNotSupported {
                    os: other.to_string(),
                });
            }
        };
        Ok(Self { os })
    }

    /// Identifier used to select patch files (`patches/<id>.diff`).
    pub fn id(&self) -> &'static str {
        match self.os {
            Os::Linux => "linux",
            Os::Mac => "mac",
            Os::Windows => "windows",
        }
    }

    /// Header extensions (without the dot) copied into the include tree.
    /// MSVC headers ship inline implementation files alongside the headers.
    pub fn header_extensions(&self) -> &'static [&'static str] {
        match self.os {
            Os::Windows => &["h", "inl"],
            _ => &["h"],
        }
    }

    /// Extra `git apply` flags. Windows checkouts flip line endings, so the
    /// patch is applied leniently there.
    pub fn patch_flags(&self) -> &'static [&'static str] {
        match self.os {
            Os::Windows => &["--ignore-space-change", "--ignore-whitespace"],
            _ => &[],
        }
    }

    /// File name of the ninja binary once ninja has bootstrapped itself.
    pub fn ninja_binary(&self) -> &'static str {
        match self.os {
            Os::Windows => "ninja.exe",
            _ => "ninja",
        }
    }

    /// Environment overrides steering gyp's toolchain selection.
    pub fn build_env(&self) -> &'static [(&'static str, &'static str)] {
        match self.os {
            Os::Linux => &[("CC", "clang"), ("CXX", "clang++"), ("GYP_DEFINES", "clang=1")],
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_matches_host() {
        // The host running the tests must be in the supported set
        let profile = PlatformProfile::detect().unwrap();
        assert!(matches!(profile.os, Os::Linux | Os::Mac | Os::Windows));
    }

    #[test]
    fn test_for_os_name_mapping() {
        assert_eq!(PlatformProfile::for_os_name("linux").unwrap().os, Os::Linux);
        assert_eq!(PlatformProfile::for_os_name("macos").unwrap().os, Os::Mac);
        assert_eq!(
            PlatformProfile::for_os_name("windows").unwrap().os,
            Os::Windows
        );
    }

    #[test]
    fn test_for_os_name_unsupported() {
        let result = PlatformProfile::for_os_name("freebsd");
        assert!(matches!(
            result.unwrap_err(),
            EpubstrapError::PlatformNotSupported { .. }
        ));
    }

    #[test]
    fn test_ids() {
        assert_eq!(PlatformProfile { os: Os::Linux }.id(), "linux");
        assert_eq!(PlatformProfile { os: Os::Mac }.id(), "mac");
        assert_eq!(PlatformProfile { os: Os::Windows }.id(), "windows");
    }

    #[test]
    fn test_header_extensions() {
        assert_eq!(PlatformProfile { os: Os::Linux }.header_extensions(), ["h"]);
        assert_eq!(PlatformProfile { os: Os::Mac }.header_extensions(), ["h"]);
        assert_eq!(
            PlatformProfile { os: Os::Windows }.header_extensions(),
            ["h", "inl"]
        );
    }

    #[test]
    fn test_patch_flags_windows_only() {
        assert!(PlatformProfile { os: Os::Linux }.patch_flags().is_empty());
        assert!(PlatformProfile { os: Os::Mac }.patch_flags().is_empty());
        assert_eq!(
            PlatformProfile { os: Os::Windows }.patch_flags(),
            ["--ignore-space-change", "--ignore-whitespace"]
        );
    }

    #[test]
    fn test_ninja_binary() {
        assert_eq!(PlatformProfile { os: Os::Linux }.ninja_binary(), "ninja");
        assert_eq!(
            PlatformProfile { os: Os::Windows }.ninja_binary(),
            "ninja.exe"
        );
    }

    #[test]
    fn test_build_env_linux_selects_clang() {
        let env = PlatformProfile { os: Os::Linux }.build_env();
        assert!(env.contains(&("CC", "clang")));
        assert!(env.contains(&("CXX", "clang++")));
        assert!(env.contains(&("GYP_DEFINES", "clang=1")));
        assert!(PlatformProfile { os: Os::Mac }.build_env().is_empty());
        assert!(PlatformProfile { os: Os::Windows }.build_env().is_empty());
    }
}
