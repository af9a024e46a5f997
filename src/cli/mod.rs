//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - bootstrap: Bootstrap command arguments
//! - build: Build command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod bootstrap;
pub mod build;
pub mod completions;

pub use bootstrap::BootstrapArgs;
pub use build::BuildArgs;
pub use completions::CompletionsArgs;

/// epubstrap - third-party toolchain bootstrap
///
/// Acquire the vendor toolchain, patch the tree, and assemble the include
/// root for the ePub3 native build.
#[derive(Parser, Debug)]
#[command(
    name = "epubstrap",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Third-party toolchain bootstrap for the ePub3 native build",
    long_about = "epubstrap acquires the external build tools (gyp, ninja, the NaCl SDK, \
                  libxml2) into vendor/, applies the platform patch, and assembles the \
                  unified include/ tree. A separate build command drives gyp and ninja.",
    after_help = "Examples:\n   \
                  epubstrap bootstrap                   # acquire vendors, patch, build includes\n   \
                  epubstrap bootstrap --skip-patches    # re-run after a completed bootstrap\n   \
                  epubstrap build                       # generate ninja files and compile\n"
)]
pub struct Cli {
    /// Bootstrap project directory (defaults to current directory)
    #[arg(long, short = 'C', global = true, env = "EPUBSTRAP_PROJECT_DIR")]
    pub project_dir: Option<PathBuf>,

    /// Report skipped acquisitions, resolved paths, and tool invocations
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Acquire vendor tools, apply the platform patch, assemble includes
    Bootstrap(BootstrapArgs),

    /// Generate ninja files with gyp and compile
    Build(BuildArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
