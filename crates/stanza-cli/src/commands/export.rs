//! CSV report export.

use clap::Args;
use stanza_core::enumerate_modes;
use stanza_signal::export_report_csv;
use std::path::PathBuf;

use super::common::RoomArgs;

#[derive(Args)]
pub struct ExportArgs {
    #[command(flatten)]
    room: RoomArgs,

    /// Output CSV file
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,
}

pub fn run(args: ExportArgs) -> anyhow::Result<()> {
    let (geometry, params) = args.room.resolve()?;
    let modes = enumerate_modes(&geometry, &params);

    export_report_csv(&modes, &geometry, &params, &args.output)?;
    println!(
        "Wrote {} modes to {}",
        modes.total(),
        args.output.display()
    );

    Ok(())
}
