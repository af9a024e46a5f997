use clap::Parser;

/// Arguments for bootstrap command
#[derive(Parser, Debug)]
pub struct BootstrapArgs {
    /// Skip the patch step (patching is not idempotent; use this when
    /// re-running after a completed bootstrap)
    #[arg(long)]
    pub skip_patches: bool,
}
