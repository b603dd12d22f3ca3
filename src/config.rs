/// Side length of the default square board.
pub const DEFAULT_BOARD_SIZE: usize = 6;
pub const NUM_SHIPS: usize = 7;
/// Ship lengths every side places, in placement order.
pub const FLEET: [usize; NUM_SHIPS] = [3, 2, 2, 1, 1, 1, 1];

/// Random placement tries per ship before the board is discarded.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 2000;
/// Discarded boards tolerated before random fleet generation gives up.
pub const MAX_FLEET_RESTARTS: usize = 1000;

/// Match settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub size: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
        }
    }
}
