//! Per-dimension standing-wave harmonic series.
//!
//! Independent of the 3D mode formula: each room dimension carries its own
//! half-wavelength harmonic series `f(n) = c / (2·d) · n` for n = 1..=N.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::geometry::{Dimension, RoomGeometry};
use crate::math::round_hz;
use crate::params::AcousticParameters;

/// One standing-wave harmonic along a single room dimension.
#[derive(Clone, Debug, PartialEq)]
pub struct StandingWaveRecord {
    /// The dimension this harmonic resonates along.
    pub dimension: Dimension,
    /// Harmonic number, 1..=N.
    pub mode_index: u32,
    /// Frequency in Hz, rounded to two decimals.
    pub frequency: f64,
}

/// Compute the standing-wave series for all three dimensions.
///
/// Produces exactly `3 · max_mode_index` records, generated per index in
/// dimension order (length, width, height) and then sorted ascending by
/// rounded frequency across the whole set. The stable sort keeps the
/// generation order for equal frequencies.
pub fn standing_waves(
    geometry: &RoomGeometry,
    params: &AcousticParameters,
) -> Vec<StandingWaveRecord> {
    let mut records = Vec::with_capacity(3 * params.max_mode_index as usize);

    for n in 1..=params.max_mode_index {
        for dimension in Dimension::ALL {
            let frequency =
                round_hz(params.sound_speed / (2.0 * geometry.dimension(dimension)) * f64::from(n));
            records.push(StandingWaveRecord {
                dimension,
                mode_index: n,
                frequency,
            });
        }
    }

    records.sort_by(|a, b| a.frequency.total_cmp(&b.frequency));
    records
}
