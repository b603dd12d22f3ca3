//! Match state machine: turn taking, shot retries and victory detection.

use log::{debug, error, info};
use rand::rngs::SmallRng;

use crate::{
    board::Board,
    common::BoardError,
    config::{GameConfig, FLEET, NUM_SHIPS},
    player::Player,
};

/// One of the two sides of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    User,
    Opponent,
}

impl Side {
    pub fn other(&self) -> Side {
        match self {
            Side::User => Side::Opponent,
            Side::Opponent => Side::User,
        }
    }
}

/// Current status of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// `Side` is about to fire.
    Turn(Side),
    /// `Side` destroyed the whole enemy fleet.
    Won(Side),
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        matches!(self, GameStatus::Won(_))
    }
}

/// Let `shooter` fire at `enemy` until a shot lands.
///
/// Out-of-bounds and repeated targets are reported back to the shooter and
/// do not consume the turn. Returns whether the shooter fires again.
pub fn take_turn(
    shooter: &mut dyn Player,
    defender: &mut dyn Player,
    enemy: &mut Board,
    rng: &mut SmallRng,
) -> anyhow::Result<bool> {
    loop {
        let target = shooter.select_target(rng, enemy)?;
        match enemy.shot(target) {
            Ok(outcome) => {
                debug!("shot at {} -> {:?}", target, outcome);
                shooter.handle_shot_result(target, outcome);
                defender.handle_opponent_shot(target, outcome);
                return Ok(outcome.fires_again());
            }
            Err(e) if e.is_recoverable() => {
                debug!("shot at {} rejected: {}", target, e);
                shooter.handle_shot_error(target, e);
            }
            Err(e) => {
                error!("shot at {} broke board bookkeeping: {}", target, e);
                return Err(e.into());
            }
        }
    }
}

fn check_fleet(board: &Board) -> Result<(), BoardError> {
    let lengths: Vec<usize> = board.ships().iter().map(|s| s.length()).collect();
    if lengths != FLEET {
        return Err(BoardError::FleetMismatch);
    }
    Ok(())
}

/// A match between the user and the automated opponent.
pub struct GameEngine {
    user_board: Board,
    opponent_board: Board,
    user: Box<dyn Player>,
    opponent: Box<dyn Player>,
    rng: SmallRng,
    status: GameStatus,
    turns: usize,
    user_shots: usize,
    opponent_shots: usize,
}

impl GameEngine {
    /// Create a match with randomly placed fleets. The opponent's board is
    /// hidden and the user moves first.
    pub fn new(
        config: GameConfig,
        user: Box<dyn Player>,
        opponent: Box<dyn Player>,
        mut rng: SmallRng,
    ) -> Result<Self, BoardError> {
        let user_board = Board::random(config.size, &FLEET, &mut rng)?;
        let mut opponent_board = Board::random(config.size, &FLEET, &mut rng)?;
        opponent_board.set_hidden(true);
        info!(
            "new {}x{} match with a fleet of {} ships",
            config.size, config.size, NUM_SHIPS
        );
        Self::with_boards(user_board, opponent_board, user, opponent, rng)
    }

    /// Create a match from prepared boards. The user moves first.
    ///
    /// Both boards must carry exactly the standard [`FLEET`], in order, or
    /// the match could never be won.
    pub fn with_boards(
        user_board: Board,
        opponent_board: Board,
        user: Box<dyn Player>,
        opponent: Box<dyn Player>,
        rng: SmallRng,
    ) -> Result<Self, BoardError> {
        check_fleet(&user_board)?;
        check_fleet(&opponent_board)?;
        Ok(Self {
            user_board,
            opponent_board,
            user,
            opponent,
            rng,
            status: GameStatus::Turn(Side::User),
            turns: 0,
            user_shots: 0,
            opponent_shots: 0,
        })
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn user_board(&self) -> &Board {
        &self.user_board
    }

    pub fn opponent_board(&self) -> &Board {
        &self.opponent_board
    }

    /// Turns played so far. A turn ends with a miss or the end of the match.
    pub fn turns(&self) -> usize {
        self.turns
    }

    /// Successful shots fired by `side`.
    pub fn shots(&self, side: Side) -> usize {
        match side {
            Side::User => self.user_shots,
            Side::Opponent => self.opponent_shots,
        }
    }

    /// Play a single shot for the active side and advance the status.
    pub fn step(&mut self) -> anyhow::Result<GameStatus> {
        let GameStatus::Turn(side) = self.status else {
            return Ok(self.status);
        };

        let fire_again = match side {
            Side::User => {
                let again = take_turn(
                    self.user.as_mut(),
                    self.opponent.as_mut(),
                    &mut self.opponent_board,
                    &mut self.rng,
                )?;
                self.user_shots += 1;
                again
            }
            Side::Opponent => {
                let again = take_turn(
                    self.opponent.as_mut(),
                    self.user.as_mut(),
                    &mut self.user_board,
                    &mut self.rng,
                )?;
                self.opponent_shots += 1;
                again
            }
        };

        // The opponent's fleet is checked first, so a simultaneous wipe-out
        // goes to the user.
        self.status = if self.opponent_board.destroyed_count() == FLEET.len() {
            GameStatus::Won(Side::User)
        } else if self.user_board.destroyed_count() == FLEET.len() {
            GameStatus::Won(Side::Opponent)
        } else if fire_again {
            GameStatus::Turn(side)
        } else {
            GameStatus::Turn(side.other())
        };

        match self.status {
            GameStatus::Turn(next) if next == side => {}
            GameStatus::Turn(next) => {
                self.turns += 1;
                debug!("turn passes to {:?}", next);
            }
            GameStatus::Won(winner) => {
                self.turns += 1;
                info!("{:?} won after {} turns", winner, self.turns);
            }
        }
        Ok(self.status)
    }

    /// Play until one side has won and return the winner.
    pub fn run(&mut self) -> anyhow::Result<Side> {
        loop {
            if let GameStatus::Won(winner) = self.step()? {
                return Ok(winner);
            }
        }
    }
}
