//! Acoustic computation parameters.

/// Speed of sound in air at 0 °C, in m/s.
pub const SOUND_SPEED_AIR_0C: f64 = 331.0;

/// Speed of sound in air at 20 °C, in m/s.
pub const SOUND_SPEED_AIR_20C: f64 = 343.0;

/// Default upper bound for mode indices.
pub const DEFAULT_MAX_MODE_INDEX: u32 = 10;

/// Sound speed and enumeration bound for a computation run.
///
/// `max_mode_index` bounds each of p, q, r independently; the enumeration
/// is O(n³) in it, so interactive callers keep it small (1..=10 in
/// practice). A value of 0 yields an empty result rather than an error.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AcousticParameters {
    /// Sound propagation speed in m/s. Must be positive and finite.
    pub sound_speed: f64,
    /// Inclusive upper bound for each mode index.
    pub max_mode_index: u32,
}

impl AcousticParameters {
    /// Create parameters from a sound speed and mode index bound.
    pub fn new(sound_speed: f64, max_mode_index: u32) -> Self {
        Self {
            sound_speed,
            max_mode_index,
        }
    }

    /// Parameters for air at 20 °C with the default index bound.
    pub fn default_air() -> Self {
        Self::new(SOUND_SPEED_AIR_20C, DEFAULT_MAX_MODE_INDEX)
    }
}
