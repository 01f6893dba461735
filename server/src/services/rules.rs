//! Rules engine — move validation, placement, and turn arbitration.
//!
//! DESIGN
//! ======
//! `apply_move` is the single entry point for mutating a board. It enforces
//! the full move contract (game running, mover seated, mover's turn, target
//! in bounds and empty), places the stone, then arbitrates the outcome:
//! a completed run wins, a full board draws, otherwise the turn passes.
//!
//! The win scan only examines the four lines through the cell just played;
//! every earlier position was already checked when its stone landed, so a
//! whole-board scan is never needed.

use protocol::{Board, Cell, GamePhase, Player};
use uuid::Uuid;

use crate::services::game::GameError;
use crate::state::{GameState, MoveRecord};

/// The four line directions through a cell: horizontal, vertical, and the
/// two diagonals. Each is scanned in both orientations.
const DIRECTIONS: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// Validate and apply one move for `player_id` at `(x, y)`.
///
/// # Errors
///
/// Rejects moves before the opponent joins (`GameNotStarted`), after a
/// terminal phase (`GameOver`), from non-seated ids (`NotSeated`), out of
/// turn (`NotYourTurn`), outside the grid (`OutOfBounds`), and onto an
/// occupied cell (`CellOccupied`).
pub fn apply_move(game: &mut GameState, player_id: Uuid, x: usize, y: usize) -> Result<(), GameError> {
    match game.phase {
        GamePhase::InProgress => {}
        GamePhase::WaitingForOpponent => return Err(GameError::GameNotStarted),
        _ => return Err(GameError::GameOver),
    }

    let Some(stone) = game.seat_of(player_id) else {
        return Err(GameError::NotSeated(player_id));
    };
    if stone != game.to_move {
        return Err(GameError::NotYourTurn { expected: game.to_move });
    }

    match game.board.get(x, y) {
        None => return Err(GameError::OutOfBounds { x, y }),
        Some(cell) if !cell.is_empty() => return Err(GameError::CellOccupied { x, y }),
        Some(_) => {}
    }

    // Validation is complete; `set` cannot fail on an in-bounds cell.
    game.board
        .set(x, y, Cell::Stone(stone))
        .map_err(|_| GameError::OutOfBounds { x, y })?;
    game.moves.push(MoveRecord { player: stone, x, y });

    if completes_run(&game.board, x, y, stone, game.win_len) {
        game.phase = GamePhase::Won { winner: stone };
    } else if game.board.is_full() {
        game.phase = GamePhase::Draw;
    } else {
        game.to_move = stone.opponent();
    }

    Ok(())
}

/// Whether the stone just placed at `(x, y)` completes a run of `win_len`.
#[must_use]
pub fn completes_run(board: &Board, x: usize, y: usize, stone: Player, win_len: usize) -> bool {
    DIRECTIONS.iter().any(|&(dx, dy)| {
        let run = 1 + count_stones(board, x, y, stone, dx, dy) + count_stones(board, x, y, stone, -dx, -dy);
        run >= win_len
    })
}

/// Count consecutive `stone` cells stepping `(dx, dy)` from `(x, y)`,
/// excluding the origin.
fn count_stones(board: &Board, x: usize, y: usize, stone: Player, dx: isize, dy: isize) -> usize {
    let mut count = 0;
    let mut cx = x as isize + dx;
    let mut cy = y as isize + dy;

    while cx >= 0 && cy >= 0 {
        #[allow(clippy::cast_sign_loss)]
        let cell = board.get(cx as usize, cy as usize);
        if cell != Some(Cell::Stone(stone)) {
            break;
        }
        count += 1;
        cx += dx;
        cy += dy;
    }
    count
}

#[cfg(test)]
#[path = "rules_test.rs"]
mod tests;
