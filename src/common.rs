//! Common types for Sea Battle: shot outcomes and board errors.

use thiserror::Error;

/// Result of a shot that landed on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    /// Shot struck a ship that is still afloat.
    Hit,
    /// Shot struck water.
    Miss,
    /// Shot destroyed the last remaining segment of a ship.
    Sunk,
}

impl ShotOutcome {
    /// Hits and sinkings give the shooter another shot; a miss passes the turn.
    pub fn fires_again(&self) -> bool {
        matches!(self, ShotOutcome::Hit | ShotOutcome::Sunk)
    }
}

/// Errors returned by Board and Ship operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Ship would extend past the board edge.
    #[error("ship placement is out of bounds")]
    ShipOutOfBounds,
    /// Ship would overlap or touch another ship.
    #[error("ship overlaps or touches another ship")]
    ShipOverlaps,
    #[error("ship must be at least one cell long")]
    ZeroLengthShip,
    /// Shot target lies outside the board.
    #[error("shot is outside the board")]
    OutOfBounds,
    /// Shot target was already fired upon or is excluded.
    #[error("this cell has already been targeted")]
    AlreadyTargeted,
    /// A ship was hit after it had already sunk.
    #[error("ship was hit after being destroyed")]
    InvalidState,
    /// Board does not carry the standard fleet.
    #[error("board does not carry the standard fleet")]
    FleetMismatch,
    /// Random fleet generation gave up on a board this small.
    #[error("fleet does not fit on a {size}x{size} board")]
    FleetDoesNotFit { size: usize },
}

impl BoardError {
    /// `true` for every rejection of a ship placement.
    pub fn is_invalid_placement(&self) -> bool {
        matches!(
            self,
            BoardError::ShipOutOfBounds | BoardError::ShipOverlaps | BoardError::ZeroLengthShip
        )
    }

    /// `true` for shot errors that only cost the shooter a retry.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, BoardError::OutOfBounds | BoardError::AlreadyTargeted)
    }
}
