//! Text rendering for boards and snapshots.
//!
//! Black stones render as `●`, white as `○`, empty intersections as `·`,
//! with coordinate gutters so moves can be read straight off the screen.
//! Column labels wrap past 9 (mod 10); boards cap at 32 either way.

use protocol::{Board, Cell, GamePhase, GameSnapshot, Player};

#[must_use]
pub fn stone_glyph(cell: Cell) -> char {
    match cell {
        Cell::Stone(Player::Black) => '●',
        Cell::Stone(Player::White) => '○',
        Cell::Empty => '·',
    }
}

/// Render the grid with x labels across the top and y labels down the side.
#[must_use]
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("  ");
    for x in 0..board.cols() {
        out.push(' ');
        out.push(char::from_digit((x % 10) as u32, 10).unwrap_or('?'));
    }
    out.push('\n');

    for (y, row) in board.iter_rows().enumerate() {
        out.push_str(&format!("{y:>2}"));
        for cell in row {
            out.push(' ');
            out.push(stone_glyph(*cell));
        }
        out.push('\n');
    }
    out
}

/// One-line human description of the game phase.
#[must_use]
pub fn phase_line(snapshot: &GameSnapshot) -> String {
    match snapshot.phase {
        GamePhase::WaitingForOpponent => "waiting for an opponent".to_owned(),
        GamePhase::InProgress => match snapshot.to_move {
            Some(player) => format!("in progress, {player} to move"),
            None => "in progress".to_owned(),
        },
        GamePhase::Won { winner } => format!("{winner} wins"),
        GamePhase::Draw => "draw".to_owned(),
        GamePhase::Ended => "ended by owner".to_owned(),
    }
}

/// Full snapshot view: header, board, status line.
#[must_use]
pub fn render_snapshot(snapshot: &GameSnapshot) -> String {
    let mut out = String::new();
    out.push_str(&format!("game {}  revision {}\n", snapshot.game_id, snapshot.revision));
    if let Some(stone) = snapshot.your_stone {
        if snapshot.is_owner {
            out.push_str(&format!("you play {stone} (owner)\n"));
        } else {
            out.push_str(&format!("you play {stone}\n"));
        }
    }
    out.push_str(&render_board(&snapshot.board));
    out.push_str(&phase_line(snapshot));
    out.push('\n');
    out
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
