//! Geometry and parameter validation.
//!
//! The computation crates treat valid inputs as a contract precondition:
//! the eigenfrequency formula divides by the room dimensions and would
//! silently propagate NaN or infinity. Every input path (CLI flags,
//! presets) funnels through these checks before any computation runs.

use stanza_core::{AcousticParameters, Dimension, RoomGeometry};
use thiserror::Error;

/// Practical upper bound for the mode index accepted from users.
///
/// The enumeration is O(n³); beyond this the tables stop being readable
/// long before the computation gets slow.
pub const MAX_MODE_LIMIT: u32 = 10;

/// Validation error types.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// A room dimension is zero, negative, NaN, or infinite.
    #[error("room {} must be a positive finite number of meters, got {value}", .dimension.label().to_lowercase())]
    InvalidDimension {
        /// Which dimension failed.
        dimension: Dimension,
        /// The offending value.
        value: f64,
    },

    /// The sound speed is zero, negative, NaN, or infinite.
    #[error("sound speed must be a positive finite number of m/s, got {value}")]
    InvalidSoundSpeed {
        /// The offending value.
        value: f64,
    },

    /// The mode index bound is outside the accepted range.
    #[error("max mode index must be between 1 and {MAX_MODE_LIMIT}, got {value}")]
    MaxModesOutOfRange {
        /// The offending value.
        value: u32,
    },
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validate a room geometry: every dimension positive and finite.
pub fn validate_geometry(geometry: &RoomGeometry) -> ValidationResult<()> {
    for dimension in Dimension::ALL {
        let value = geometry.dimension(dimension);
        if !value.is_finite() || value <= 0.0 {
            return Err(ValidationError::InvalidDimension { dimension, value });
        }
    }
    Ok(())
}

/// Validate acoustic parameters: positive finite sound speed and a mode
/// index bound in 1..=[`MAX_MODE_LIMIT`].
pub fn validate_parameters(params: &AcousticParameters) -> ValidationResult<()> {
    if !params.sound_speed.is_finite() || params.sound_speed <= 0.0 {
        return Err(ValidationError::InvalidSoundSpeed {
            value: params.sound_speed,
        });
    }
    if params.max_mode_index == 0 || params.max_mode_index > MAX_MODE_LIMIT {
        return Err(ValidationError::MaxModesOutOfRange {
            value: params.max_mode_index,
        });
    }
    Ok(())
}

/// Validate geometry and parameters together.
pub fn validate(geometry: &RoomGeometry, params: &AcousticParameters) -> ValidationResult<()> {
    validate_geometry(geometry)?;
    validate_parameters(params)?;
    Ok(())
}
