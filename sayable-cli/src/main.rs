//! Sayable command-line entry point

use clap::Parser;
use sayable_cli::commands::Commands;

/// Make text speakable for TTS engines and add reaction tags
#[derive(Debug, Parser)]
#[command(name = "sayable")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
