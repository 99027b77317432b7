//! Stanza Signal - continuous response curves from discrete room modes
//!
//! The mode enumeration in `stanza-core` produces discrete frequencies.
//! For charting, those are spread into continuous sampled curves: each
//! mode contributes a Laplace-shaped pulse centered at its frequency,
//! weighted by mode complexity and modal type, normalized against the
//! expected mode population and the local band density, and tapered
//! toward the top of the displayed range.
//!
//! - [`response`] - the synthesis itself ([`ResponseCurves`], [`synthesize_response`])
//! - [`interpolate`] - pointwise blending between curves for display layers
//! - [`export`] - CSV writers for reports and sampled curves
//!
//! # Example
//!
//! ```rust
//! use stanza_core::{AcousticParameters, RoomGeometry, enumerate_modes};
//! use stanza_signal::ResponseCurves;
//!
//! let room = RoomGeometry::new(4.0, 3.0, 2.5);
//! let params = AcousticParameters::new(343.0, 4);
//! let modes = enumerate_modes(&room, &params);
//!
//! let curves = ResponseCurves::from_modes(&modes, params.max_mode_index, 1000);
//! assert_eq!(curves.combined.len(), 1000);
//! assert!(curves.combined.iter().all(|&a| a >= 0.0));
//! ```

pub mod export;
pub mod interpolate;
pub mod response;

// Re-export main types
pub use export::{export_report_csv, export_response_csv, export_standing_waves_csv};
pub use interpolate::{interpolate, smoothstep};
pub use response::{
    DEFAULT_RESOLUTION, FREQUENCY_HEADROOM_HZ, ResponseCurves, synthesize_response,
    type_amplitude_factor,
};
