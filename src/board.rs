//! Board state: cell grid, ship placements, exclusions and shot resolution.

use std::collections::BTreeSet;

use log::debug;
use rand::Rng;

use crate::common::{BoardError, ShotOutcome};
use crate::config::{MAX_FLEET_RESTARTS, MAX_PLACEMENT_ATTEMPTS};
use crate::coord::Coordinate;
use crate::ship::{Orientation, Ship};

/// Visible state of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    Empty,
    Ship,
    Miss,
    Hit,
    /// Neighbour of a destroyed ship; cannot hold a ship.
    ExclusionMarker,
}

/// One side's square grid together with the ships placed on it.
///
/// All mutation goes through [`Board::add_ship`], [`Board::shot`] and
/// [`Board::reset_exclusions`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    hidden: bool,
    destroyed_count: usize,
    cells: Vec<CellState>,
    excluded: BTreeSet<Coordinate>,
    ships: Vec<Ship>,
}

impl Board {
    /// Create an empty `size`×`size` board.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            hidden: false,
            destroyed_count: 0,
            cells: vec![CellState::Empty; size * size],
            excluded: BTreeSet::new(),
            ships: Vec::new(),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether undestroyed ships should be masked when displayed.
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    /// Number of ships sunk so far.
    pub fn destroyed_count(&self) -> usize {
        self.destroyed_count
    }

    /// Placed ships, in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Coordinates that can no longer be targeted.
    pub fn excluded(&self) -> &BTreeSet<Coordinate> {
        &self.excluded
    }

    /// `true` once at least one ship was placed and every ship is sunk.
    pub fn all_sunk(&self) -> bool {
        !self.ships.is_empty() && self.destroyed_count == self.ships.len()
    }

    pub fn in_bounds(&self, coord: Coordinate) -> bool {
        self.index(coord).is_some()
    }

    /// State of the cell at `coord`, or `None` if off the board.
    pub fn cell(&self, coord: Coordinate) -> Option<CellState> {
        self.index(coord).map(|i| self.cells[i])
    }

    /// Grid rows from top (`y = 1`) to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[CellState]> {
        self.cells.chunks(self.size.max(1))
    }

    fn index(&self, coord: Coordinate) -> Option<usize> {
        let x = usize::try_from(coord.x()).ok()?;
        let y = usize::try_from(coord.y()).ok()?;
        if (1..=self.size).contains(&x) && (1..=self.size).contains(&y) {
            Some((y - 1) * self.size + (x - 1))
        } else {
            None
        }
    }

    /// Exclude the in-bounds surroundings of ship `ship_index`. When
    /// `visible`, newly excluded cells are also marked on the grid.
    fn exclude_contour(&mut self, ship_index: usize, visible: bool) {
        let around: Vec<Coordinate> = self.ships[ship_index].contour().collect();
        for coord in around {
            let Some(i) = self.index(coord) else {
                continue;
            };
            if self.excluded.insert(coord) && visible {
                self.cells[i] = CellState::ExclusionMarker;
            }
        }
    }

    /// Place `ship` if all of its cells are on the board and not excluded.
    ///
    /// A rejected ship leaves the board untouched.
    pub fn add_ship(&mut self, ship: Ship) -> Result<(), BoardError> {
        if ship.length() == 0 {
            return Err(BoardError::ZeroLengthShip);
        }
        if i32::try_from(ship.length()).is_err() {
            return Err(BoardError::ShipOutOfBounds);
        }
        let mut indices = Vec::with_capacity(ship.length());
        for coord in ship.cells() {
            let i = self.index(coord).ok_or(BoardError::ShipOutOfBounds)?;
            if self.excluded.contains(&coord) {
                return Err(BoardError::ShipOverlaps);
            }
            indices.push(i);
        }

        for (coord, i) in ship.cells().zip(indices) {
            self.cells[i] = CellState::Ship;
            self.excluded.insert(coord);
        }
        self.ships.push(ship);
        self.exclude_contour(self.ships.len() - 1, false);
        Ok(())
    }

    /// Fire at `coord` and report what was struck.
    pub fn shot(&mut self, coord: Coordinate) -> Result<ShotOutcome, BoardError> {
        let i = self.index(coord).ok_or(BoardError::OutOfBounds)?;
        if self.excluded.contains(&coord) {
            return Err(BoardError::AlreadyTargeted);
        }

        let target = self.ships.iter().position(|s| s.contains(coord));
        if let Some(ship_index) = target {
            self.ships[ship_index].apply_hit()?;
        }
        self.excluded.insert(coord);

        let Some(ship_index) = target else {
            self.cells[i] = CellState::Miss;
            return Ok(ShotOutcome::Miss);
        };
        self.cells[i] = CellState::Hit;
        if self.ships[ship_index].is_sunk() {
            self.destroyed_count += 1;
            self.exclude_contour(ship_index, true);
            Ok(ShotOutcome::Sunk)
        } else {
            Ok(ShotOutcome::Hit)
        }
    }

    /// Forget every exclusion; called once after setup so that placement
    /// buffers do not block real shots.
    pub fn reset_exclusions(&mut self) {
        self.excluded.clear();
    }

    /// A uniformly random origin and orientation on this board.
    fn random_placement<R: Rng + ?Sized>(&self, rng: &mut R) -> (Coordinate, Orientation) {
        let max = i32::try_from(self.size).unwrap_or(i32::MAX);
        let origin = Coordinate::new(rng.random_range(1..=max), rng.random_range(1..=max));
        let orientation = if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        (origin, orientation)
    }

    /// One attempt at placing `fleet` at random. Returns `None` when some
    /// ship could not be placed within [`MAX_PLACEMENT_ATTEMPTS`] tries.
    ///
    /// Placement exclusions are reset on success.
    pub fn try_random<R: Rng + ?Sized>(size: usize, fleet: &[usize], rng: &mut R) -> Option<Self> {
        if size == 0 && !fleet.is_empty() {
            return None;
        }
        let mut board = Board::new(size);
        for &length in fleet {
            let placed = (0..MAX_PLACEMENT_ATTEMPTS).any(|_| {
                let (origin, orientation) = board.random_placement(rng);
                board.add_ship(Ship::new(origin, length, orientation)).is_ok()
            });
            if !placed {
                debug!(
                    "no room for a ship of length {} after {} attempts, discarding board",
                    length, MAX_PLACEMENT_ATTEMPTS
                );
                return None;
            }
        }
        board.reset_exclusions();
        Some(board)
    }

    /// Place `fleet` at random, discarding and restarting boards that run
    /// out of room.
    pub fn random<R: Rng + ?Sized>(
        size: usize,
        fleet: &[usize],
        rng: &mut R,
    ) -> Result<Self, BoardError> {
        for restart in 0..MAX_FLEET_RESTARTS {
            if let Some(board) = Self::try_random(size, fleet, rng) {
                debug!("fleet placed after {} restart(s)", restart);
                return Ok(board);
            }
        }
        Err(BoardError::FleetDoesNotFit { size })
    }
}
