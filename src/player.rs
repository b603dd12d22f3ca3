use crate::{
    board::Board,
    common::{BoardError, ShotOutcome},
    coord::Coordinate,
};
use rand::rngs::SmallRng;

/// Interface implemented by different player types.
///
/// A Player is responsible for:
/// - Selecting targets on the enemy board
/// - Handling feedback from its own shots and the opponent's
pub trait Player {
    /// Choose the next coordinate to fire at on `enemy`.
    fn select_target(&mut self, rng: &mut SmallRng, enemy: &Board) -> anyhow::Result<Coordinate>;

    /// Inform the player of the result of its last shot.
    fn handle_shot_result(&mut self, _target: Coordinate, _outcome: ShotOutcome) {}

    /// Inform the player that its last target was rejected; another will be requested.
    fn handle_shot_error(&mut self, _target: Coordinate, _error: BoardError) {}

    /// Inform the player of an opponent shot against its board.
    fn handle_opponent_shot(&mut self, _target: Coordinate, _outcome: ShotOutcome) {}
}
