//! Rectangular room geometry.

/// The three axes of a rectangular room.
///
/// Standing waves and presentation layers refer to dimensions by name;
/// the enumeration order (length, width, height) matches the order in
/// which per-index standing-wave records are generated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dimension {
    /// The room's length (the `p` axis of the mode triple).
    Length,
    /// The room's width (the `q` axis of the mode triple).
    Width,
    /// The room's height (the `r` axis of the mode triple).
    Height,
}

impl Dimension {
    /// All dimensions in canonical order.
    pub const ALL: [Dimension; 3] = [Dimension::Length, Dimension::Width, Dimension::Height];

    /// Human-readable label for tables and exports.
    pub fn label(self) -> &'static str {
        match self {
            Dimension::Length => "Length",
            Dimension::Width => "Width",
            Dimension::Height => "Height",
        }
    }
}

impl core::fmt::Display for Dimension {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// Rectangular room dimensions in meters.
///
/// All three dimensions must be positive and finite; this is a contract
/// precondition enforced by the validation layer, not re-checked here
/// (the frequency formulas divide by these values).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoomGeometry {
    /// Room length in meters.
    pub length: f64,
    /// Room width in meters.
    pub width: f64,
    /// Room height in meters.
    pub height: f64,
}

impl RoomGeometry {
    /// Create a room from its three dimensions in meters.
    pub fn new(length: f64, width: f64, height: f64) -> Self {
        Self {
            length,
            width,
            height,
        }
    }

    /// The extent of the room along one axis.
    pub fn dimension(&self, dim: Dimension) -> f64 {
        match dim {
            Dimension::Length => self.length,
            Dimension::Width => self.width,
            Dimension::Height => self.height,
        }
    }

    /// Room volume in cubic meters.
    pub fn volume(&self) -> f64 {
        self.length * self.width * self.height
    }
}
