#![cfg(feature = "std")]

use std::io::{self, BufRead, StdinLock, Stdout, Write};
use std::string::String;

use crate::{
    board::Board,
    common::{BoardError, ShotOutcome},
    coord::Coordinate,
};
use log::warn;
use rand::rngs::SmallRng;

use crate::player::Player;

/// Human player reading `x y` targets from a line-oriented input.
pub struct CliPlayer<R, W> {
    input: R,
    output: W,
}

impl CliPlayer<StdinLock<'static>, Stdout> {
    /// Player bound to the process's stdin and stdout.
    pub fn new() -> Self {
        Self::with_io(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    pub fn with_io(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the player, returning everything it wrote.
    pub fn into_output(self) -> W {
        self.output
    }

    fn report(&mut self, message: &str) {
        if let Err(e) = writeln!(self.output, "{}", message) {
            warn!("could not show shot feedback: {}", e);
        }
    }

    fn read_line(&mut self) -> anyhow::Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(anyhow::anyhow!("input closed before a target was entered"));
        }
        Ok(line)
    }
}

/// Parse a target written as two whitespace-separated non-negative integers.
pub fn parse_coord(input: &str) -> Result<Coordinate, String> {
    let parts: Vec<&str> = input.split_whitespace().collect();
    let &[x, y] = parts.as_slice() else {
        return Err("Enter 2 coordinates!".to_string());
    };
    let is_number = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    if !is_number(x) || !is_number(y) {
        return Err("Enter numbers!".to_string());
    }
    let x: i32 = x.parse().map_err(|_| format!("Coordinate '{}' is too large", x))?;
    let y: i32 = y.parse().map_err(|_| format!("Coordinate '{}' is too large", y))?;
    Ok(Coordinate::new(x, y))
}

fn outcome_message(outcome: ShotOutcome) -> &'static str {
    match outcome {
        ShotOutcome::Hit => "Ship hit!",
        ShotOutcome::Sunk => "Ship destroyed!",
        ShotOutcome::Miss => "Miss!",
    }
}

impl<R: BufRead, W: Write> Player for CliPlayer<R, W> {
    fn select_target(&mut self, _rng: &mut SmallRng, _enemy: &Board) -> anyhow::Result<Coordinate> {
        loop {
            write!(self.output, "Your move: ")?;
            self.output.flush()?;
            let line = self.read_line()?;
            match parse_coord(&line) {
                Ok(target) => return Ok(target),
                Err(msg) => writeln!(self.output, "{}", msg)?,
            }
        }
    }

    fn handle_shot_result(&mut self, _target: Coordinate, outcome: ShotOutcome) {
        self.report(outcome_message(outcome));
    }

    fn handle_shot_error(&mut self, _target: Coordinate, error: BoardError) {
        self.report(&error.to_string());
    }

    fn handle_opponent_shot(&mut self, target: Coordinate, outcome: ShotOutcome) {
        let message = format!(
            "Computer move: {} {}\n{}",
            target.x(),
            target.y(),
            outcome_message(outcome)
        );
        self.report(&message);
    }
}
