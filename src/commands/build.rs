//! Build command implementation
//!
//! Generates ninja files with gyp, then runs ninja against the generated
//! input. Assumes `bootstrap` has already populated vendor/. The run aborts
//! at the first non-zero exit status, so ninja is never invoked when gyp
//! fails.

use std::path::PathBuf;

use console::style;

use crate::cli::BuildArgs;
use crate::error::Result;
use crate::platform::PlatformProfile;
use crate::project::Project;
use crate::runner::Invocation;

pub fn run(project_dir: Option<PathBuf>, verbose: bool, args: BuildArgs) -> Result<()> {
    let profile = PlatformProfile::detect()?;
    let project = Project::locate(project_dir)?;

    let gyp_main = project.vendor_dir().join("gyp").join("gyp_main.py");
    let ninja = project
        .vendor_dir()
        .join("ninja")
        .join(profile.ninja_binary());

    println!("{} ninja files", style("Generating").green().bold());
    let mut generate = Invocation::new("python")
        .arg(gyp_main.display().to_string())
        .args(["--depth=.", "-f", "ninja"])
        .arg(args.spec)
        .current_dir(project.dir());
    for (key, value) in profile.build_env() {
        generate = generate.env(*key, *value);
    }
    if verbose {
        println!("  {}", generate);
    }
    generate.run()?;

    println!("{}", style("Building").green().bold());
    let compile = Invocation::new(ninja.display().to_string())
        .args(["-C", "out/Default", "-f", "build.ninja"])
        .current_dir(project.dir());
    if verbose {
        println!("  {}", compile);
    }
    compile.run()
}
