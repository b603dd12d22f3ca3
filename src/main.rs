#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use seabattle::{
    init_logging, render, AiPlayer, CliPlayer, GameConfig, GameEngine, GameStatus, Side,
};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

/// Play Sea Battle against the computer.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let rng = if let Some(s) = cli.seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let mut engine = GameEngine::new(
        GameConfig::default(),
        Box::new(CliPlayer::new()),
        Box::new(AiPlayer::new()),
        rng,
    )?;

    println!("{}", render::greeting());
    loop {
        println!("{}", render::separator());
        println!(
            "{}",
            render::render_boards(engine.user_board(), engine.opponent_board())
        );
        println!("{}", render::separator());
        match engine.status() {
            GameStatus::Turn(Side::User) => println!("User's move!"),
            GameStatus::Turn(Side::Opponent) => println!("Computer's move!"),
            GameStatus::Won(_) => {}
        }

        if let GameStatus::Won(winner) = engine.step()? {
            println!("{}", render::separator());
            println!(
                "{}",
                render::render_boards(engine.user_board(), engine.opponent_board())
            );
            match winner {
                Side::User => println!("User won!"),
                Side::Opponent => println!("Computer won!"),
            }
            break;
        }
    }
    Ok(())
}
