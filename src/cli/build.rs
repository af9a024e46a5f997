use clap::Parser;

/// Arguments for build command
#[derive(Parser, Debug)]
pub struct BuildArgs {
    /// gyp build specification to generate ninja files from
    #[arg(long, default_value = "epub3.gyp")]
    pub spec: String,
}
