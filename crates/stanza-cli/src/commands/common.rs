//! Shared room/parameter arguments for the computing subcommands.

use anyhow::{Context, bail};
use clap::Args;
use stanza_config::{RoomPreset, factory_preset_names, find_preset, get_factory_preset, validate};
use stanza_core::{AcousticParameters, RoomGeometry, SOUND_SPEED_AIR_20C};

/// Default enumeration bound for terminal tables.
///
/// The original calculator defaults to 10, which is fine on a canvas but
/// produces several hundred table rows; 4 keeps interactive output
/// readable. Pass `--max-modes` or a preset for anything else.
pub const DEFAULT_TABLE_MAX_MODES: u32 = 4;

/// Room dimensions and acoustic parameters, from flags and/or a preset.
#[derive(Args)]
pub struct RoomArgs {
    /// Room length in meters
    #[arg(long)]
    pub length: Option<f64>,

    /// Room width in meters
    #[arg(long)]
    pub width: Option<f64>,

    /// Room height in meters
    #[arg(long)]
    pub height: Option<f64>,

    /// Sound speed in m/s (331 = air at 0 °C, 343 = air at 20 °C)
    #[arg(long)]
    pub sound_speed: Option<f64>,

    /// Highest mode index to enumerate (1-10)
    #[arg(long)]
    pub max_modes: Option<u32>,

    /// Preset name or TOML path supplying any values not given as flags
    #[arg(long, value_name = "NAME")]
    pub preset: Option<String>,
}

impl RoomArgs {
    /// Resolve flags and preset into validated computation inputs.
    ///
    /// Explicit flags win over preset values; dimensions must come from
    /// one of the two. Everything passes through `stanza-config`
    /// validation before being handed to the calculators.
    pub fn resolve(&self) -> anyhow::Result<(RoomGeometry, AcousticParameters)> {
        let preset = self
            .preset
            .as_deref()
            .map(load_preset)
            .transpose()?;

        let dimension = |flag: Option<f64>, from_preset: Option<f64>, name: &str| {
            flag.or(from_preset).with_context(|| {
                format!("missing room {name}: pass --{name} or --preset")
            })
        };

        let geometry = RoomGeometry::new(
            dimension(self.length, preset.as_ref().map(|p| p.length), "length")?,
            dimension(self.width, preset.as_ref().map(|p| p.width), "width")?,
            dimension(self.height, preset.as_ref().map(|p| p.height), "height")?,
        );

        let params = AcousticParameters::new(
            self.sound_speed
                .or(preset.as_ref().map(|p| p.sound_speed))
                .unwrap_or(SOUND_SPEED_AIR_20C),
            self.max_modes
                .or(preset.as_ref().map(|p| p.max_modes))
                .unwrap_or(DEFAULT_TABLE_MAX_MODES),
        );

        validate(&geometry, &params)?;

        tracing::debug!(
            length = geometry.length,
            width = geometry.width,
            height = geometry.height,
            sound_speed = params.sound_speed,
            max_modes = params.max_mode_index,
            "resolved room input"
        );

        Ok((geometry, params))
    }
}

/// Load a preset by user file (name or path) or factory name.
pub fn load_preset(name: &str) -> anyhow::Result<RoomPreset> {
    if let Some(path) = find_preset(name) {
        return RoomPreset::load(&path)
            .with_context(|| format!("failed to load preset '{}'", path.display()));
    }
    if let Some(preset) = get_factory_preset(name) {
        return Ok(preset);
    }
    bail!(
        "unknown preset '{name}' (factory presets: {})",
        factory_preset_names().join(", ")
    );
}

/// Print the resolved room settings header shared by the table commands.
pub fn print_settings(geometry: &RoomGeometry, params: &AcousticParameters) {
    println!(
        "Room {} x {} x {} m ({:.1} m³), sound speed {} m/s, max mode index {}",
        geometry.length,
        geometry.width,
        geometry.height,
        geometry.volume(),
        params.sound_speed,
        params.max_mode_index
    );
}
