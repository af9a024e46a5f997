use clap::Parser;
use clap_complete::Shell;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    epubstrap completions bash > ~/.bash_completion.d/epubstrap\n\n\
                  Generate zsh completions:\n    epubstrap completions zsh > ~/.zfunc/_epubstrap\n\n\
                  Generate fish completions:\n    epubstrap completions fish > ~/.config/fish/completions/epubstrap.fish")]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
