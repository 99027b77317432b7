//! Standing-wave table.

use clap::Args;
use stanza_core::standing_waves;
use stanza_signal::export_standing_waves_csv;
use std::path::PathBuf;

use super::common::{RoomArgs, print_settings};

#[derive(Args)]
pub struct WavesArgs {
    #[command(flatten)]
    room: RoomArgs,

    /// Write the series as a semicolon-delimited CSV report
    #[arg(long, value_name = "PATH")]
    csv: Option<PathBuf>,
}

pub fn run(args: WavesArgs) -> anyhow::Result<()> {
    let (geometry, params) = args.room.resolve()?;
    let waves = standing_waves(&geometry, &params);

    print_settings(&geometry, &params);

    if waves.is_empty() {
        println!("\nNo standing waves within the configured bounds.");
    } else {
        println!("\nStanding waves ({}):", waves.len());
        println!("  {:>10} {:>5} {:>12}", "Dimension", "Mode", "Freq (Hz)");
        for record in &waves {
            println!(
                "  {:>10} {:>5} {:>12.2}",
                record.dimension.label(),
                record.mode_index,
                record.frequency
            );
        }
    }

    if let Some(path) = args.csv {
        export_standing_waves_csv(&waves, &geometry, &params, &path)?;
        println!("Wrote report to {}", path.display());
    }

    Ok(())
}
