use anyhow::Result;
use clap::Subcommand;

pub mod parse;

#[derive(Subcommand)]
pub enum TxCommand {
    /// Parse a processed transaction and display its contents
    Parse {
        /// Path to a hex or base64 encoded file (use '-' to read from stdin)
        path: std::path::PathBuf,
        /// Input is a bare Envelope rather than a ProcessedTransaction
        #[arg(long)]
        envelope: bool,
        /// Print JSON instead of a tree
        #[arg(long)]
        json: bool,
        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },
}

pub fn handle_command(command: TxCommand) -> Result<()> {
    match command {
        TxCommand::Parse {
            path,
            envelope,
            json,
            no_color,
        } => parse::handle_parse_command(path, envelope, json, no_color),
    }
}
