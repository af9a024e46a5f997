//! Bootstrap command implementation
//!
//! Runs the three phases in order:
//! 1. Vendor acquisition (idempotent; existing target directories are skipped)
//! 2. Platform patch application (not idempotent; see --skip-patches)
//! 3. Include tree assembly
//!
//! The first error aborts the run; the failing tool's own output is the
//! diagnostic surface.

use std::path::PathBuf;

use console::style;

use crate::cli::BootstrapArgs;
use crate::error::Result;
use crate::includes;
use crate::patch;
use crate::platform::PlatformProfile;
use crate::project::Project;
use crate::vendor::VendorInstaller;

pub fn run(project_dir: Option<PathBuf>, verbose: bool, args: BootstrapArgs) -> Result<()> {
    let profile = PlatformProfile::detect()?;
    let project = Project::locate(project_dir)?;

    if verbose {
        println!("  project dir: {}", project.dir().display());
        println!("  repo root:   {}", project.root().display());
        println!("  platform:    {}", profile.id());
    }

    let installer = VendorInstaller::new(&profile, project.vendor_dir()).verbose(verbose);
    installer.install_all()?;

    if args.skip_patches {
        println!("{} patches", style("Skipping").yellow().bold());
    } else {
        println!("{} patches", style("Applying").green().bold());
        patch::apply(&project, &profile)?;
    }

    println!("{} include tree", style("Assembling").green().bold());
    let mapping = includes::include_mapping(&project);
    includes::build(&project.include_dir(), &mapping, profile.header_extensions())?;

    println!("{}", style("Bootstrap complete").green().bold());
    Ok(())
}
