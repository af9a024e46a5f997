//! Shell completions command

use clap::CommandFactory;

use crate::cli::CompletionsArgs;
use crate::error::Result;

/// Generate completions for the shell picked on the command line. Unknown
/// shells are rejected by clap at parse time.
pub fn run(args: CompletionsArgs) -> Result<()> {
    let mut cmd = <crate::cli::Cli as CommandFactory>::command();
    clap_complete::generate(args.shell, &mut cmd, "epubstrap", &mut std::io::stdout().lock());
    Ok(())
}
