mod encode;
mod vocab;
mod windows;

/// Subcommands for wbatch
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Build the training vocabulary of a data directory.
    Vocab(vocab::VocabArgs),

    /// Encode one split of a data directory into ids.
    Encode(encode::EncodeArgs),

    /// Window one split into (x, y) training pairs.
    Windows(windows::WindowsArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Vocab(cmd) => cmd.run(),
            Commands::Encode(cmd) => cmd.run(),
            Commands::Windows(cmd) => cmd.run(),
        }
    }
}
