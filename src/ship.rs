//! Ship geometry and health.

use crate::common::BoardError;
use crate::coord::Coordinate;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Cells extend towards increasing `x`.
    Horizontal,
    /// Cells extend towards increasing `y`.
    Vertical,
}

/// Offsets of a cell and its eight neighbours.
static NEAR: [(i32, i32); 9] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (0, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// A straight run of cells starting at `origin`, with remaining health.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    origin: Coordinate,
    length: usize,
    orientation: Orientation,
    health: usize,
}

impl Ship {
    /// Create an undamaged ship.
    pub fn new(origin: Coordinate, length: usize, orientation: Orientation) -> Self {
        Self {
            origin,
            length,
            orientation,
            health: length,
        }
    }

    /// First cell of the ship.
    pub fn origin(&self) -> Coordinate {
        self.origin
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Segments not yet hit.
    pub fn health(&self) -> usize {
        self.health
    }

    pub fn is_sunk(&self) -> bool {
        self.health == 0
    }

    /// Occupied cells, in order from the origin along the orientation axis.
    ///
    /// Yields nothing for a length that does not fit in an `i32`; such a ship
    /// is never accepted by a board.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        let len = i32::try_from(self.length).unwrap_or(0);
        (0..len).map(move |i| match self.orientation {
            Orientation::Horizontal => self.origin.offset(i, 0),
            Orientation::Vertical => self.origin.offset(0, i),
        })
    }

    /// Occupied cells collected into a vector.
    pub fn occupied_cells(&self) -> Vec<Coordinate> {
        self.cells().collect()
    }

    /// Whether `coord` is one of the ship's cells.
    pub fn contains(&self, coord: Coordinate) -> bool {
        self.cells().any(|c| c == coord)
    }

    /// Every cell within one step of the ship, including the ship itself.
    ///
    /// Not clipped to any board and may yield a cell more than once.
    pub fn contour(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.cells()
            .flat_map(|c| NEAR.iter().map(move |&(dx, dy)| c.offset(dx, dy)))
    }

    /// Register a hit on one segment.
    pub fn apply_hit(&mut self) -> Result<(), BoardError> {
        if self.health == 0 {
            return Err(BoardError::InvalidState);
        }
        self.health -= 1;
        Ok(())
    }
}
