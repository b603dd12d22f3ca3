//! Board coordinates.

use core::fmt;

/// A 1-indexed position on a board: `x` grows to the right, `y` grows down.
///
/// Coordinates are not validated on construction; bounds depend on the board
/// they are used with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    x: i32,
    y: i32,
}

impl Coordinate {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Horizontal component (column).
    pub const fn x(&self) -> i32 {
        self.x
    }

    /// Vertical component (row).
    pub const fn y(&self) -> i32 {
        self.y
    }

    /// Coordinate shifted by (`dx`, `dy`), saturating at the `i32` range.
    pub const fn offset(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
