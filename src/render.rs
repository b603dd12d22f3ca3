//! Text rendering of boards.
//!
//! Hidden boards show undestroyed ship segments as open water.

use crate::board::{Board, CellState};

const SEPARATOR_WIDTH: usize = 75;

fn glyph(cell: CellState, hidden: bool) -> char {
    match cell {
        CellState::Empty => 'O',
        CellState::Ship if hidden => 'O',
        CellState::Ship => '■',
        CellState::Miss => 'T',
        CellState::Hit => 'X',
        CellState::ExclusionMarker => '.',
    }
}

fn header(size: usize) -> String {
    let cols: Vec<String> = (1..=size).map(|c| format!("{:^3}", c)).collect();
    format!("{:<2}|{}|", "", cols.join("|"))
}

fn board_lines(board: &Board) -> Vec<String> {
    let mut lines = vec![header(board.size())];
    for (num, row) in board.rows().enumerate().take(board.size()) {
        let cells: Vec<String> = row
            .iter()
            .map(|&c| glyph(c, board.is_hidden()).to_string())
            .collect();
        lines.push(format!("{:<2}| {} |", num + 1, cells.join(" | ")));
    }
    lines
}

/// Render a single board as a grid with 1-based column and row headers.
pub fn render_board(board: &Board) -> String {
    board_lines(board).join("\n")
}

/// Render the user's board and the opponent's board side by side.
pub fn render_boards(user: &Board, opponent: &Board) -> String {
    let left = board_lines(user);
    let right = board_lines(opponent);
    let width = left.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let gap = " ".repeat(8);

    let mut out = format!("{:<width$}{}{}\n", "User board:", gap, "Computer board:");
    for i in 0..left.len().max(right.len()) {
        let l = left.get(i).map(String::as_str).unwrap_or("");
        let r = right.get(i).map(String::as_str).unwrap_or("");
        let pad = width - l.chars().count();
        out.push_str(&format!("{}{}{}{}\n", l, " ".repeat(pad), gap, r));
    }
    out
}

/// Horizontal rule used between turns.
pub fn separator() -> String {
    "-".repeat(SEPARATOR_WIDTH)
}

/// Banner shown when the game starts.
pub fn greeting() -> String {
    let rule = separator();
    [
        rule.clone(),
        format!("{:^width$}", "Welcome to", width = SEPARATOR_WIDTH),
        format!("{:^width$}", "SEA BATTLE", width = SEPARATOR_WIDTH),
        rule,
        " input format: x y".to_string(),
        " x - column (horizontal)".to_string(),
        " y - row (vertical)".to_string(),
    ]
    .join("\n")
}
