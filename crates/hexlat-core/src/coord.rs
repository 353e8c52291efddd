//! The [`GridCoord`] type.

use std::fmt;
use std::ops::{Add, Mul};

/// A 2D integer cell coordinate.
///
/// `x` runs along a row, `y` selects the row. `y` grows "up": the
/// `Up*` directions add to `y`, the `Down*` directions subtract from it.
///
/// Coordinates are plain values and may lie outside any grid; validity is
/// always checked against a [`GridConfig`](crate::GridConfig).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridCoord {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl GridCoord {
    /// The origin `(0, 0)`.
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a coordinate.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Translate by `(dx, dy)`, saturating at the `i32` bounds.
    ///
    /// A saturated coordinate lies outside every valid grid, since no axis
    /// of a grid reaches `i32::MAX`.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }

    /// Returns `true` if either component is negative.
    pub const fn is_negative(self) -> bool {
        self.x < 0 || self.y < 0
    }
}

impl fmt::Display for GridCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for GridCoord {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl From<GridCoord> for (i32, i32) {
    fn from(c: GridCoord) -> Self {
        (c.x, c.y)
    }
}

impl Add for GridCoord {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.offset(rhs.x, rhs.y)
    }
}

impl Mul<i32> for GridCoord {
    type Output = Self;

    fn mul(self, rhs: i32) -> Self {
        Self {
            x: self.x.saturating_mul(rhs),
            y: self.y.saturating_mul(rhs),
        }
    }
}
