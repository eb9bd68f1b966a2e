use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod format;
mod identity;
mod input;
mod tx;

#[cfg(test)]
mod parse_tests;
#[cfg(test)]
mod test_utils;

#[derive(Parser)]
#[command(name = "wasm-fabric-cli")]
#[command(about = "Inspect Hyperledger Fabric transactions and identities", long_about = None)]
struct Cli {
    /// Trace every decoded layer to stderr
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Processed transaction and envelope operations
    #[command(subcommand)]
    Tx(tx::TxCommand),
    /// Serialized identity and certificate operations
    #[command(subcommand)]
    Identity(identity::IdentityCommand),
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    // stdout carries the tree or JSON, diagnostics go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Tx(cmd) => tx::handle_command(cmd),
        Commands::Identity(cmd) => identity::handle_command(cmd),
    }
}
