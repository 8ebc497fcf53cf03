use clap::{Parser, Subcommand};
use log::debug;

mod decode;
mod dump;
mod error;
mod format;
mod input;
mod output;
mod utils;

use error::Result;

#[derive(Parser)]
#[command(name = "tlvscope")]
#[command(about = "Schema-less BER/DER structure viewer", long_about = None)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode BER/DER data and print its TLV tree
    Decode {
        #[command(flatten)]
        config: decode::Config,
    },
    /// Print a hex dump of the decoded payload
    Dump {
        #[command(flatten)]
        config: dump::Config,
    },
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Decode { config } => decode::execute(config)?,
        Commands::Dump { config } => dump::execute(config)?,
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
    debug!("arguments parsed");

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
