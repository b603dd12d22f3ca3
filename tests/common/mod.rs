#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use rand::rngs::SmallRng;
use seabattle::{
    Board, BoardError, Coordinate, Orientation, Player, Ship, ShotOutcome, DEFAULT_BOARD_SIZE,
};

/// Fixed layout of the standard fleet on a 6×6 board:
///
/// ```text
///    1 2 3 4 5 6
/// 1  # # # . # .
/// 2  . . . . # .
/// 3  # . . . . .
/// 4  # . # . . .
/// 5  . . . . . #
/// 6  # . . # . .
/// ```
pub const LAYOUT: [((i32, i32), usize, Orientation); 7] = [
    ((1, 1), 3, Orientation::Horizontal),
    ((1, 3), 2, Orientation::Vertical),
    ((5, 1), 2, Orientation::Vertical),
    ((3, 4), 1, Orientation::Horizontal),
    ((6, 5), 1, Orientation::Horizontal),
    ((1, 6), 1, Orientation::Horizontal),
    ((4, 6), 1, Orientation::Horizontal),
];

/// Every ship cell of [`LAYOUT`].
pub const SHIP_CELLS: [(i32, i32); 11] = [
    (1, 1),
    (2, 1),
    (3, 1),
    (1, 3),
    (1, 4),
    (5, 1),
    (5, 2),
    (3, 4),
    (6, 5),
    (1, 6),
    (4, 6),
];

/// A cell of [`LAYOUT`] holding no ship.
pub const WATER: (i32, i32) = (4, 3);

/// Board with [`LAYOUT`] placed and placement exclusions reset.
pub fn standard_board() -> Board {
    let mut board = Board::new(DEFAULT_BOARD_SIZE);
    for &((x, y), length, orientation) in LAYOUT.iter() {
        board
            .add_ship(Ship::new(Coordinate::new(x, y), length, orientation))
            .unwrap();
    }
    board.reset_exclusions();
    board
}

pub fn coords(cells: &[(i32, i32)]) -> Vec<Coordinate> {
    cells.iter().map(|&c| Coordinate::from(c)).collect()
}

/// Feedback recorded by a [`ScriptedPlayer`].
#[derive(Debug, Default)]
pub struct Feedback {
    pub results: Vec<(Coordinate, ShotOutcome)>,
    pub errors: Vec<(Coordinate, BoardError)>,
    pub incoming: Vec<(Coordinate, ShotOutcome)>,
}

/// Player firing at a predetermined list of targets.
pub struct ScriptedPlayer {
    targets: VecDeque<Coordinate>,
    feedback: Rc<RefCell<Feedback>>,
}

impl ScriptedPlayer {
    pub fn new(targets: Vec<Coordinate>) -> (Self, Rc<RefCell<Feedback>>) {
        let feedback = Rc::new(RefCell::new(Feedback::default()));
        let player = Self {
            targets: targets.into(),
            feedback: Rc::clone(&feedback),
        };
        (player, feedback)
    }
}

impl Player for ScriptedPlayer {
    fn select_target(&mut self, _rng: &mut SmallRng, _enemy: &Board) -> anyhow::Result<Coordinate> {
        self.targets
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("script exhausted"))
    }

    fn handle_shot_result(&mut self, target: Coordinate, outcome: ShotOutcome) {
        self.feedback.borrow_mut().results.push((target, outcome));
    }

    fn handle_shot_error(&mut self, target: Coordinate, error: BoardError) {
        self.feedback.borrow_mut().errors.push((target, error));
    }

    fn handle_opponent_shot(&mut self, target: Coordinate, outcome: ShotOutcome) {
        self.feedback.borrow_mut().incoming.push((target, outcome));
    }
}
