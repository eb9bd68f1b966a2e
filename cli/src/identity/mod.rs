use anyhow::Result;
use clap::Subcommand;

pub mod parse;

#[derive(Subcommand)]
pub enum IdentityCommand {
    /// Parse a serialized identity or a PEM certificate
    Parse {
        /// Path to a PEM file, or a hex or base64 encoded SerializedIdentity ('-' for stdin)
        path: std::path::PathBuf,
        /// Print JSON instead of a tree
        #[arg(long)]
        json: bool,
        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },
}

pub fn handle_command(command: IdentityCommand) -> Result<()> {
    match command {
        IdentityCommand::Parse {
            path,
            json,
            no_color,
        } => parse::handle_parse_command(path, json, no_color),
    }
}
