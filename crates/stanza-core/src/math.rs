//! Numeric helpers shared by the computation modules.
//!
//! Suitable for `no_std`; floating-point math goes through `libm`.

/// Round a frequency to two decimal places (cents of a hertz).
///
/// Rounds half away from zero, matching the fixed-precision display
/// format. Mode and standing-wave frequencies are rounded with this
/// before sorting, so ordering and ties are defined on the rounded value.
///
/// # Example
/// ```rust
/// use stanza_core::round_hz;
///
/// assert_eq!(round_hz(42.875), 42.88);
/// assert_eq!(round_hz(57.16666), 57.17);
/// ```
#[inline]
pub fn round_hz(hz: f64) -> f64 {
    libm::round(hz * 100.0) / 100.0
}
