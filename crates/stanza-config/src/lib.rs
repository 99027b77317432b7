//! Input validation and room presets for the stanza calculators.
//!
//! The computation crates assume validated inputs (the frequency formulas
//! divide by the room dimensions). This crate is the layer that enforces
//! those preconditions, and it manages named room presets stored as TOML:
//!
//! - **Validation**: reject non-positive/non-finite geometry and
//!   parameters before they reach the math
//! - **Presets**: load and save room descriptions from TOML files
//! - **Paths**: platform-specific user preset directory
//! - **Factory Presets**: built-in rooms embedded at compile time
//!
//! # Example
//!
//! ```rust,no_run
//! use stanza_config::{RoomPreset, user_presets_dir, validate};
//!
//! let preset = RoomPreset::load("living_room.toml").unwrap();
//! validate(&preset.geometry(), &preset.parameters()).unwrap();
//!
//! // Save a variant to the user presets directory
//! let mut tweaked = preset.clone();
//! tweaked.height = 2.8;
//! tweaked.save(user_presets_dir().join("living_room_raised.toml")).unwrap();
//! ```

mod error;
mod preset;

/// Platform-specific paths for presets.
pub mod paths;

/// Geometry and parameter validation.
pub mod validation;

/// Factory presets bundled with the library.
pub mod factory_presets;

pub use error::ConfigError;
pub use factory_presets::{factory_preset_names, factory_presets, get_factory_preset};
pub use paths::{find_preset, user_presets_dir};
pub use preset::RoomPreset;
pub use validation::{
    MAX_MODE_LIMIT, ValidationError, ValidationResult, validate, validate_geometry,
    validate_parameters,
};
