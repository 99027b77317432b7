//! Stanza Core - room acoustics computation primitives
//!
//! This crate computes the resonance behaviour of rectangular rooms from
//! closed-form acoustic formulas. Everything here is pure arithmetic over
//! validated finite inputs: no I/O, no shared state, no allocation beyond
//! the returned result vectors.
//!
//! # Core Types
//!
//! - [`RoomGeometry`] - rectangular room dimensions in meters
//! - [`AcousticParameters`] - sound speed and enumeration bound
//! - [`ModeRecord`] / [`ModeCollection`] - classified eigenmodes
//! - [`StandingWaveRecord`] - per-dimension half-wavelength harmonics
//!
//! # Operations
//!
//! - [`enumerate_modes`] - enumerate and classify all (p,q,r) room modes
//! - [`standing_waves`] - the 1..=N harmonic series per room dimension
//! - [`mode_frequency`] - the rectangular-room eigenfrequency formula
//!
//! # Example
//!
//! ```rust
//! use stanza_core::{AcousticParameters, RoomGeometry, enumerate_modes};
//!
//! let room = RoomGeometry::new(4.0, 3.0, 2.5);
//! let params = AcousticParameters::new(343.0, 4);
//! let modes = enumerate_modes(&room, &params);
//!
//! // The fundamental along the longest dimension is the lowest axial mode.
//! assert_eq!(modes.axial[0].frequency, 42.88);
//! ```
//!
//! # Preconditions
//!
//! The formulas divide by the room dimensions, so callers must validate
//! geometry and parameters before invoking this crate (the `stanza-config`
//! crate provides that layer). Non-positive or non-finite inputs propagate
//! NaN/infinity into the results rather than erroring here.
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible (with `alloc`). Disable the default
//! `std` feature:
//!
//! ```toml
//! [dependencies]
//! stanza-core = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod geometry;
pub mod math;
pub mod modes;
pub mod params;
pub mod standing_waves;

// Re-export main types at crate root
pub use geometry::{Dimension, RoomGeometry};
pub use math::round_hz;
pub use modes::{ModeCollection, ModeRecord, ModeType, enumerate_modes, mode_frequency};
pub use params::{
    AcousticParameters, DEFAULT_MAX_MODE_INDEX, SOUND_SPEED_AIR_0C, SOUND_SPEED_AIR_20C,
};
pub use standing_waves::{StandingWaveRecord, standing_waves};
