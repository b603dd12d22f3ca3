use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{AiPlayer, Board, GameEngine, GameStatus, Side, DEFAULT_BOARD_SIZE, FLEET};
use serde::Serialize;

#[derive(Serialize)]
struct SideReport {
    shots: usize,
    ships_lost: usize,
}

#[derive(Serialize)]
struct SimReport {
    winner: Side,
    turns: usize,
    user: SideReport,
    opponent: SideReport,
}

/// Automated match between two random shooters, reported as JSON.
fn main() -> anyhow::Result<()> {
    seabattle::init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <placement-seed> <play-seed>", args[0]);
        std::process::exit(1);
    }
    let placement_seed: u64 = args[1].parse()?;
    let play_seed: u64 = args[2].parse()?;

    let mut placement_rng = SmallRng::seed_from_u64(placement_seed);
    let user_board = Board::random(DEFAULT_BOARD_SIZE, &FLEET, &mut placement_rng)?;
    let opponent_board = Board::random(DEFAULT_BOARD_SIZE, &FLEET, &mut placement_rng)?;

    let mut engine = GameEngine::with_boards(
        user_board,
        opponent_board,
        Box::new(AiPlayer::new()),
        Box::new(AiPlayer::new()),
        SmallRng::seed_from_u64(play_seed),
    )?;
    let winner = engine.run()?;
    debug_assert_eq!(engine.status(), GameStatus::Won(winner));

    let report = SimReport {
        winner,
        turns: engine.turns(),
        user: SideReport {
            shots: engine.shots(Side::User),
            ships_lost: engine.user_board().destroyed_count(),
        },
        opponent: SideReport {
            shots: engine.shots(Side::Opponent),
            ships_lost: engine.opponent_board().destroyed_count(),
        },
    };
    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}
