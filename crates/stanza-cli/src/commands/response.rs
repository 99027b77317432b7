//! Sampled response-curve synthesis.

use clap::Args;
use stanza_core::enumerate_modes;
use stanza_signal::{DEFAULT_RESOLUTION, ResponseCurves, export_response_csv};
use std::path::PathBuf;

use super::common::{RoomArgs, print_settings};

#[derive(Args)]
pub struct ResponseArgs {
    #[command(flatten)]
    room: RoomArgs,

    /// Samples per curve
    #[arg(long, default_value_t = DEFAULT_RESOLUTION)]
    resolution: usize,

    /// Write the curves as CSV (frequency_hz;axial;tangential;oblique;combined)
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,
}

pub fn run(args: ResponseArgs) -> anyhow::Result<()> {
    let (geometry, params) = args.room.resolve()?;
    let modes = enumerate_modes(&geometry, &params);
    let curves = ResponseCurves::from_modes(&modes, params.max_mode_index, args.resolution);

    tracing::debug!(
        modes = modes.total(),
        resolution = args.resolution,
        "synthesized response curves"
    );

    print_settings(&geometry, &params);
    println!(
        "\nSynthesized {} samples per curve over 0..{:.2} Hz from {} modes",
        curves.resolution(),
        curves.max_frequency,
        modes.total()
    );

    match curves.combined_peak() {
        Some((freq, amplitude)) => {
            println!("Combined curve peaks at {:.1} Hz (amplitude {:.4})", freq, amplitude);
        }
        None => println!("All curves are silent (no modes to synthesize)."),
    }

    if let Some(path) = args.output {
        export_response_csv(&curves, &path)?;
        println!("Wrote curves to {}", path.display());
    }

    Ok(())
}
