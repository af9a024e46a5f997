//! Version command implementation
//!
//! Besides the package version, reports the detected bootstrap profile so a
//! bug report shows which platform branch the run would take.

use crate::error::Result;
use crate::platform::PlatformProfile;

pub fn run() -> Result<()> {
    println!("epubstrap {}", env!("CARGO_PKG_VERSION"));

    let profile = PlatformProfile::detect()?;
    println!();
    println!("Host profile:");
    println!("  Platform: {}", profile.id());
    println!(
        "  Header extensions: .{}",
        profile.header_extensions().join(", .")
    );
    println!("  Ninja binary: {}", profile.ninja_binary());
    if !profile.patch_flags().is_empty() {
        println!("  Patch flags: {}", profile.patch_flags().join(" "));
    }

    Ok(())
}
