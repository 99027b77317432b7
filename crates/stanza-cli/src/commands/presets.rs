//! Room preset listing and inspection.

use clap::{Args, Subcommand};
use stanza_config::paths::{ensure_user_presets_dir, list_user_presets, preset_name_from_path};
use stanza_config::{RoomPreset, factory_presets};

use super::common::{RoomArgs, load_preset};

#[derive(Args)]
pub struct PresetsArgs {
    #[command(subcommand)]
    command: PresetsCommand,
}

#[derive(Subcommand)]
enum PresetsCommand {
    /// List factory and user presets
    List,

    /// Show a preset's stored values
    Show {
        /// Preset name or TOML path
        name: String,
    },

    /// Save the given room as a user preset
    Save {
        /// Preset name (file stem under the user presets directory)
        name: String,

        #[command(flatten)]
        room: RoomArgs,

        /// Optional description stored with the preset
        #[arg(long)]
        description: Option<String>,
    },
}

fn print_preset_line(preset: &RoomPreset) {
    println!(
        "  {:<18} {} x {} x {} m{}",
        preset.name,
        preset.length,
        preset.width,
        preset.height,
        preset
            .description
            .as_deref()
            .map(|d| format!("  - {d}"))
            .unwrap_or_default()
    );
}

pub fn run(args: PresetsArgs) -> anyhow::Result<()> {
    match args.command {
        PresetsCommand::List => {
            println!("Factory presets:");
            for preset in factory_presets() {
                print_preset_line(&preset);
            }

            let user_files = list_user_presets();
            if user_files.is_empty() {
                println!("\nNo user presets.");
            } else {
                println!("\nUser presets:");
                for path in user_files {
                    match RoomPreset::load(&path) {
                        Ok(preset) => print_preset_line(&preset),
                        Err(err) => {
                            let name = preset_name_from_path(&path).unwrap_or_default();
                            println!("  {:<18} (unreadable: {err})", name);
                        }
                    }
                }
            }
        }

        PresetsCommand::Show { name } => {
            let preset = load_preset(&name)?;
            println!("name        = {}", preset.name);
            if let Some(description) = &preset.description {
                println!("description = {description}");
            }
            println!("length      = {} m", preset.length);
            println!("width       = {} m", preset.width);
            println!("height      = {} m", preset.height);
            println!("sound_speed = {} m/s", preset.sound_speed);
            println!("max_modes   = {}", preset.max_modes);

            if let Err(err) = preset.validate() {
                println!("\nwarning: {err}");
            }
        }

        PresetsCommand::Save {
            name,
            room,
            description,
        } => {
            let (geometry, params) = room.resolve()?;
            let mut preset =
                RoomPreset::new(name.as_str(), geometry.length, geometry.width, geometry.height)
                    .with_sound_speed(params.sound_speed)
                    .with_max_modes(params.max_mode_index);
            if let Some(description) = description {
                preset = preset.with_description(description);
            }

            let dir = ensure_user_presets_dir()?;
            let path = dir.join(format!("{name}.toml"));
            preset.save(&path)?;
            println!("Saved preset '{name}' to {}", path.display());
        }
    }

    Ok(())
}
