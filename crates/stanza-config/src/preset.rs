//! Room preset file format and operations.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;
use crate::validation::{self, ValidationResult};
use stanza_core::{AcousticParameters, DEFAULT_MAX_MODE_INDEX, RoomGeometry, SOUND_SPEED_AIR_20C};

/// A named room description stored as TOML.
///
/// Presets carry the *inputs* of a computation (geometry, sound speed,
/// enumeration bound) — results are always recomputed from scratch.
///
/// # TOML Format
///
/// ```toml
/// name = "Living Room"
/// description = "Rectangular living room, suspended ceiling"
/// length = 5.2
/// width = 3.9
/// height = 2.4
/// sound_speed = 343.0
/// max_modes = 4
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoomPreset {
    /// Name of the preset.
    pub name: String,

    /// Optional description of the room.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Room length in meters.
    pub length: f64,

    /// Room width in meters.
    pub width: f64,

    /// Room height in meters.
    pub height: f64,

    /// Sound propagation speed in m/s (defaults to air at 20 °C).
    #[serde(default = "default_sound_speed")]
    pub sound_speed: f64,

    /// Mode index bound for the enumeration (defaults to 10).
    #[serde(default = "default_max_modes")]
    pub max_modes: u32,
}

fn default_sound_speed() -> f64 {
    SOUND_SPEED_AIR_20C
}

fn default_max_modes() -> u32 {
    DEFAULT_MAX_MODE_INDEX
}

impl RoomPreset {
    /// Create a preset from a name and room dimensions in meters.
    pub fn new(name: impl Into<String>, length: f64, width: f64, height: f64) -> Self {
        Self {
            name: name.into(),
            description: None,
            length,
            width,
            height,
            sound_speed: SOUND_SPEED_AIR_20C,
            max_modes: DEFAULT_MAX_MODE_INDEX,
        }
    }

    /// Create a preset with a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the sound speed in m/s.
    pub fn with_sound_speed(mut self, sound_speed: f64) -> Self {
        self.sound_speed = sound_speed;
        self
    }

    /// Set the enumeration bound.
    pub fn with_max_modes(mut self, max_modes: u32) -> Self {
        self.max_modes = max_modes;
        self
    }

    /// The preset's geometry as a core type.
    pub fn geometry(&self) -> RoomGeometry {
        RoomGeometry::new(self.length, self.width, self.height)
    }

    /// The preset's acoustic parameters as a core type.
    pub fn parameters(&self) -> AcousticParameters {
        AcousticParameters::new(self.sound_speed, self.max_modes)
    }

    /// Check the preset against the calculator preconditions.
    pub fn validate(&self) -> ValidationResult<()> {
        validation::validate(&self.geometry(), &self.parameters())
    }

    /// Load a preset from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        let preset: RoomPreset = toml::from_str(&content)?;
        Ok(preset)
    }

    /// Load a preset from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Save the preset to a TOML file.
    ///
    /// Creates the parent directory if it does not exist.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::create_dir(parent, e))?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|e| ConfigError::write_file(path, e))?;
        Ok(())
    }
}
