//! Room mode enumeration and classification.
//!
//! A rectangular room resonates at the eigenfrequencies
//!
//! ```text
//! f(p,q,r) = (c / 2) · sqrt((p/L)² + (q/W)² + (r/H)²)
//! ```
//!
//! for non-negative integer triples (p,q,r) ≠ (0,0,0). The number of
//! non-zero indices classifies the mode: one is axial (a single pair of
//! opposing surfaces), two is tangential, three is oblique.

#[cfg(not(feature = "std"))]
use alloc::{format, string::String, vec::Vec};

use crate::geometry::RoomGeometry;
use crate::math::round_hz;
use crate::params::AcousticParameters;

/// Classification of a room mode by the number of dimensions involved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ModeType {
    /// Exactly one non-zero index; resonance between one pair of surfaces.
    Axial,
    /// Exactly two non-zero indices.
    Tangential,
    /// All three indices non-zero.
    Oblique,
}

impl ModeType {
    /// All mode types in canonical order.
    pub const ALL: [ModeType; 3] = [ModeType::Axial, ModeType::Tangential, ModeType::Oblique];

    /// Classify a mode triple by its count of non-zero indices.
    ///
    /// Returns `None` for (0,0,0), which is the trivial DC solution and
    /// not a physical mode.
    pub fn classify(p: u32, q: u32, r: u32) -> Option<ModeType> {
        let non_zero = u32::from(p > 0) + u32::from(q > 0) + u32::from(r > 0);
        match non_zero {
            0 => None,
            1 => Some(ModeType::Axial),
            2 => Some(ModeType::Tangential),
            _ => Some(ModeType::Oblique),
        }
    }

    /// Human-readable label for tables and exports.
    pub fn label(self) -> &'static str {
        match self {
            ModeType::Axial => "Axial",
            ModeType::Tangential => "Tangential",
            ModeType::Oblique => "Oblique",
        }
    }
}

impl core::fmt::Display for ModeType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// One classified room mode.
#[derive(Clone, Debug, PartialEq)]
pub struct ModeRecord {
    /// Mode index along the room length.
    pub p: u32,
    /// Mode index along the room width.
    pub q: u32,
    /// Mode index along the room height.
    pub r: u32,
    /// Eigenfrequency in Hz, rounded to two decimals.
    pub frequency: f64,
    /// Classification by non-zero index count.
    pub mode_type: ModeType,
}

impl ModeRecord {
    /// The `"(p,q,r)"` label used in tables and exports.
    pub fn label(&self) -> String {
        format!("({},{},{})", self.p, self.q, self.r)
    }

    /// Mode complexity, the sum of the three indices.
    ///
    /// Higher-complexity modes are excited less efficiently; the signal
    /// synthesis layer weights amplitudes by this.
    pub fn complexity(&self) -> u32 {
        self.p + self.q + self.r
    }
}

/// The classified result of a mode enumeration.
///
/// Each list is sorted ascending by rounded frequency; ties keep
/// enumeration order (p-major, q-next, r-minor) because the sort is
/// stable. The union of the three lists is the full enumeration result,
/// each mode exactly once.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ModeCollection {
    /// Modes with exactly one non-zero index.
    pub axial: Vec<ModeRecord>,
    /// Modes with exactly two non-zero indices.
    pub tangential: Vec<ModeRecord>,
    /// Modes with all three indices non-zero.
    pub oblique: Vec<ModeRecord>,
}

impl ModeCollection {
    /// The list for one mode type.
    pub fn by_type(&self, mode_type: ModeType) -> &[ModeRecord] {
        match mode_type {
            ModeType::Axial => &self.axial,
            ModeType::Tangential => &self.tangential,
            ModeType::Oblique => &self.oblique,
        }
    }

    /// Iterate over all modes, axial first, then tangential, then oblique.
    pub fn iter(&self) -> impl Iterator<Item = &ModeRecord> {
        self.axial
            .iter()
            .chain(self.tangential.iter())
            .chain(self.oblique.iter())
    }

    /// Total number of modes across all three types.
    pub fn total(&self) -> usize {
        self.axial.len() + self.tangential.len() + self.oblique.len()
    }

    /// Whether the enumeration produced no modes at all.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// The highest frequency across all three types, or 0.0 when empty.
    pub fn max_frequency(&self) -> f64 {
        self.iter().fold(0.0, |acc, m| acc.max(m.frequency))
    }
}

/// The rectangular-room eigenfrequency formula, unrounded.
///
/// Evaluated in SI units (meters, m/s), producing Hz. The geometry must
/// hold positive finite dimensions; division by zero propagates infinity.
pub fn mode_frequency(geometry: &RoomGeometry, sound_speed: f64, p: u32, q: u32, r: u32) -> f64 {
    let pc = f64::from(p) / geometry.length;
    let qc = f64::from(q) / geometry.width;
    let rc = f64::from(r) / geometry.height;
    (sound_speed / 2.0) * libm::sqrt(pc * pc + qc * qc + rc * rc)
}

/// Enumerate and classify all room modes up to the configured index bound.
///
/// Each of p, q, r runs over `0..=max_mode_index`. The (0,0,0) triple is
/// skipped, and so is any triple with `p + q + r > 2 · max_mode_index`.
/// The sum cutoff bounds the combinatorial growth of high-index triples;
/// it is inherited behaviour that downstream output depends on, so it is
/// kept exactly as stated even though it excludes some triples whose
/// indices are all individually in bounds.
///
/// Frequencies are rounded to two decimals before sorting, so the
/// per-type ordering (and any ties) is defined on the rounded value.
pub fn enumerate_modes(geometry: &RoomGeometry, params: &AcousticParameters) -> ModeCollection {
    let max = params.max_mode_index;
    let mut collection = ModeCollection::default();

    for p in 0..=max {
        for q in 0..=max {
            for r in 0..=max {
                if p + q + r > 2 * max {
                    continue;
                }
                let Some(mode_type) = ModeType::classify(p, q, r) else {
                    continue;
                };

                let frequency = round_hz(mode_frequency(geometry, params.sound_speed, p, q, r));
                let record = ModeRecord {
                    p,
                    q,
                    r,
                    frequency,
                    mode_type,
                };

                match mode_type {
                    ModeType::Axial => collection.axial.push(record),
                    ModeType::Tangential => collection.tangential.push(record),
                    ModeType::Oblique => collection.oblique.push(record),
                }
            }
        }
    }

    collection
        .axial
        .sort_by(|a, b| a.frequency.total_cmp(&b.frequency));
    collection
        .tangential
        .sort_by(|a, b| a.frequency.total_cmp(&b.frequency));
    collection
        .oblique
        .sort_by(|a, b| a.frequency.total_cmp(&b.frequency));

    collection
}
