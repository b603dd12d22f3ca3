use crate::{board::Board, coord::Coordinate};
use log::debug;
use rand::{rngs::SmallRng, Rng};

use crate::player::Player;

/// Automated opponent that fires at uniformly random cells.
///
/// Already-targeted cells are not avoided; the turn loop rejects them and
/// asks again.
pub struct AiPlayer;

impl AiPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AiPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for AiPlayer {
    fn select_target(&mut self, rng: &mut SmallRng, enemy: &Board) -> anyhow::Result<Coordinate> {
        let max = i32::try_from(enemy.size())?;
        if max == 0 {
            return Err(anyhow::anyhow!("cannot select a target on an empty board"));
        }
        let target = Coordinate::new(rng.random_range(1..=max), rng.random_range(1..=max));
        debug!("automated player picked {}", target);
        Ok(target)
    }
}
