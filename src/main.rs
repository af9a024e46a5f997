//! epubstrap - third-party toolchain bootstrap for the ePub3 native build
//!
//! One parameterized binary replacing the per-platform bootstrap scripts:
//! vendor tool acquisition (gyp, ninja, the NaCl SDK, libxml2), platform
//! patch application, include tree assembly, and the gyp/ninja build driver.

use clap::Parser;

mod cli;
mod commands;
mod error;
mod fetch;
mod includes;
mod patch;
mod platform;
mod progress;
mod project;
mod runner;
mod vendor;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Bootstrap(args) => commands::bootstrap::run(cli.project_dir, cli.verbose, args),
        Commands::Build(args) => commands::build::run(cli.project_dir, cli.verbose, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
