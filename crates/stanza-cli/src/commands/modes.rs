//! Resonance mode tables.

use clap::Args;
use stanza_core::{ModeRecord, ModeType, enumerate_modes};
use stanza_signal::export_report_csv;
use std::path::PathBuf;

use super::common::{RoomArgs, print_settings};

#[derive(Args)]
pub struct ModesArgs {
    #[command(flatten)]
    room: RoomArgs,

    /// Write the full listing as a semicolon-delimited CSV report
    #[arg(long, value_name = "PATH")]
    csv: Option<PathBuf>,

    /// Emit the collection as JSON instead of tables
    #[arg(long)]
    json: bool,
}

fn print_mode_table(title: &str, records: &[ModeRecord]) {
    println!("\n{} modes ({}):", title, records.len());
    if records.is_empty() {
        println!("  (none)");
        return;
    }
    println!("  {:>10} {:>3} {:>3} {:>3} {:>12}", "Mode", "p", "q", "r", "Freq (Hz)");
    for record in records {
        println!(
            "  {:>10} {:>3} {:>3} {:>3} {:>12.2}",
            record.label(),
            record.p,
            record.q,
            record.r,
            record.frequency
        );
    }
}

fn mode_json(record: &ModeRecord) -> serde_json::Value {
    serde_json::json!({
        "mode": record.label(),
        "p": record.p,
        "q": record.q,
        "r": record.r,
        "frequency_hz": record.frequency,
    })
}

pub fn run(args: ModesArgs) -> anyhow::Result<()> {
    let (geometry, params) = args.room.resolve()?;
    let modes = enumerate_modes(&geometry, &params);

    tracing::debug!(total = modes.total(), "enumerated modes");

    if args.json {
        let json = serde_json::json!({
            "length_m": geometry.length,
            "width_m": geometry.width,
            "height_m": geometry.height,
            "sound_speed_mps": params.sound_speed,
            "max_mode_index": params.max_mode_index,
            "axial": modes.axial.iter().map(mode_json).collect::<Vec<_>>(),
            "tangential": modes.tangential.iter().map(mode_json).collect::<Vec<_>>(),
            "oblique": modes.oblique.iter().map(mode_json).collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&json)?);
    } else {
        print_settings(&geometry, &params);

        if modes.is_empty() {
            println!("\nNo modes within the configured bounds.");
        } else {
            for mode_type in ModeType::ALL {
                print_mode_table(mode_type.label(), modes.by_type(mode_type));
            }
            println!("\n{} modes total", modes.total());
        }
    }

    if let Some(path) = args.csv {
        export_report_csv(&modes, &geometry, &params, &path)?;
        println!("Wrote report to {}", path.display());
    }

    Ok(())
}
