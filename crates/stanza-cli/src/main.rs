//! Stanza CLI - room acoustics resonance calculator.

mod commands;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "stanza")]
#[command(author, version, about = "Room acoustics resonance calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute and tabulate room resonance modes
    Modes(commands::modes::ModesArgs),

    /// Compute the per-dimension standing-wave series
    Waves(commands::waves::WavesArgs),

    /// Synthesize sampled response curves for plotting
    Response(commands::response::ResponseArgs),

    /// Export a semicolon-delimited CSV report of all modes
    Export(commands::export::ExportArgs),

    /// List and inspect room presets
    Presets(commands::presets::PresetsArgs),
}

fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr so tables and CSV stay pipeable.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Modes(args) => commands::modes::run(args),
        Commands::Waves(args) => commands::waves::run(args),
        Commands::Response(args) => commands::response::run(args),
        Commands::Export(args) => commands::export::run(args),
        Commands::Presets(args) => commands::presets::run(args),
    }
}
