//! Slice-projection axis selection.

use std::fmt;

use strata_core::ConfigError;

/// The spatial axis held fixed when projecting the occupancy grid onto
/// a printed 2D slice.
///
/// Raw driver integers convert through `TryFrom<i32>`; anything outside
/// `{0, 1, 2}` is rejected before any grid is allocated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Fix x; the printed plane is YZ.
    X,
    /// Fix y; the printed plane is XZ.
    Y,
    /// Fix z; the printed plane is XY.
    Z,
}

impl Axis {
    /// All three axes in index order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Dense index of this axis: x = 0, y = 1, z = 2.
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// Single-letter name used as the slice label.
    pub fn letter(self) -> char {
        match self {
            Axis::X => 'X',
            Axis::Y => 'Y',
            Axis::Z => 'Z',
        }
    }

    /// Name of the projected plane, used in report file names.
    pub fn plane(self) -> &'static str {
        match self {
            Axis::X => "YZ",
            Axis::Y => "XZ",
            Axis::Z => "XY",
        }
    }
}

impl TryFrom<i32> for Axis {
    type Error = ConfigError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Axis::X),
            1 => Ok(Axis::Y),
            2 => Ok(Axis::Z),
            _ => Err(ConfigError::InvalidAxis { value }),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}
