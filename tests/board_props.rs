use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{
    Board, BoardError, Coordinate, Orientation, Ship, ShotOutcome, DEFAULT_BOARD_SIZE, FLEET,
};

fn random_board(seed: u64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    Board::random(DEFAULT_BOARD_SIZE, &FLEET, &mut rng).unwrap()
}

fn orientation() -> impl Strategy<Value = Orientation> {
    prop_oneof![Just(Orientation::Horizontal), Just(Orientation::Vertical)]
}

fn touching(a: &Ship, b: &Ship) -> bool {
    a.cells().any(|p| {
        b.cells()
            .any(|q| (p.x() - q.x()).abs() <= 1 && (p.y() - q.y()).abs() <= 1)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn random_fleet_is_well_formed(seed in any::<u64>()) {
        let board = random_board(seed);
        let size = board.size() as i32;
        prop_assert!(board.excluded().is_empty());
        prop_assert_eq!(board.ships().len(), FLEET.len());
        for (i, ship) in board.ships().iter().enumerate() {
            let cells = ship.occupied_cells();
            prop_assert_eq!(cells.len(), ship.length());
            for (k, c) in cells.iter().enumerate() {
                prop_assert!((1..=size).contains(&c.x()) && (1..=size).contains(&c.y()));
                let expected = match ship.orientation() {
                    Orientation::Horizontal => ship.origin().offset(k as i32, 0),
                    Orientation::Vertical => ship.origin().offset(0, k as i32),
                };
                prop_assert_eq!(*c, expected);
            }
            for other in &board.ships()[i + 1..] {
                prop_assert!(!touching(ship, other));
            }
        }
    }

    #[test]
    fn rejected_placement_leaves_board_unchanged(
        ax in 1..=6i32, ay in 1..=6i32, alen in 1..=3usize, ao in orientation(),
        bx in -1..=8i32, by in -1..=8i32, blen in 1..=3usize, bo in orientation(),
    ) {
        let mut board = Board::new(DEFAULT_BOARD_SIZE);
        let first = Ship::new(Coordinate::new(ax, ay), alen, ao);
        prop_assume!(board.add_ship(first.clone()).is_ok());

        let before = board.clone();
        let second = Ship::new(Coordinate::new(bx, by), blen, bo);
        match board.add_ship(second.clone()) {
            Ok(()) => {
                prop_assert!(!touching(&first, &second));
                prop_assert_eq!(board.ships().len(), 2);
            }
            Err(e) => {
                prop_assert!(e.is_invalid_placement());
                prop_assert_eq!(&board, &before);
            }
        }
    }

    #[test]
    fn shot_twice_is_rejected(seed in any::<u64>(), x in 1..=6i32, y in 1..=6i32) {
        let mut board = random_board(seed);
        let target = Coordinate::new(x, y);
        board.shot(target).unwrap();
        let after_first = board.clone();
        prop_assert_eq!(board.shot(target), Err(BoardError::AlreadyTargeted));
        prop_assert_eq!(board, after_first);
    }

    #[test]
    fn ship_sinks_on_last_distinct_hit(seed in any::<u64>()) {
        let mut board = random_board(seed);
        let ships: Vec<Ship> = board.ships().to_vec();
        for (sunk_before, ship) in ships.iter().enumerate() {
            let cells = ship.occupied_cells();
            for (k, &cell) in cells.iter().enumerate() {
                prop_assert_eq!(board.destroyed_count(), sunk_before);
                let outcome = board.shot(cell).unwrap();
                if k + 1 == cells.len() {
                    prop_assert_eq!(outcome, ShotOutcome::Sunk);
                } else {
                    prop_assert_eq!(outcome, ShotOutcome::Hit);
                }
            }
            prop_assert_eq!(board.destroyed_count(), sunk_before + 1);
        }
        prop_assert!(board.all_sunk());
    }
}
