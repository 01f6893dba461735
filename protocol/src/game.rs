//! Game types and JSON bodies for the HTTP API.
//!
//! DESIGN
//! ======
//! Clients never mutate game state directly. They issue one of four
//! operations (`request_update`, `play_move`, `restart_game`, `end_game`)
//! and read the resulting [`GameSnapshot`] back through polling. Snapshots
//! carry a monotonically increasing `revision` so a poller can tell a fresh
//! state from a stale one without comparing boards.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::board::Board;

// =============================================================================
// PLAYERS
// =============================================================================

/// One of the two stone colors. Black always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    Black,
    White,
}

impl Player {
    #[must_use]
    pub fn opponent(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Black => write!(f, "black"),
            Player::White => write!(f, "white"),
        }
    }
}

// =============================================================================
// PHASE
// =============================================================================

/// Lifecycle phase of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum GamePhase {
    /// Created, white seat still open. No moves accepted yet.
    WaitingForOpponent,
    /// Both seats taken, moves accepted.
    InProgress,
    /// A player completed a winning run.
    Won { winner: Player },
    /// Board filled with no winner.
    Draw,
    /// Terminated by the owner.
    Ended,
}

impl GamePhase {
    /// Terminal phases accept no further moves.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, GamePhase::Won { .. } | GamePhase::Draw | GamePhase::Ended)
    }
}

// =============================================================================
// SNAPSHOT
// =============================================================================

/// Full poll payload for one game, personalized when the poller identifies
/// itself with a `player_id` query parameter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub game_id: Uuid,
    pub board: Board,
    pub phase: GamePhase,
    /// Player expected to move next. `None` once the phase is terminal or
    /// while the white seat is open.
    pub to_move: Option<Player>,
    /// Bumped on every accepted mutation. Monotonic per game.
    pub revision: u64,
    /// Echo of the requesting player id, when supplied and known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_id: Option<Uuid>,
    /// Stone held by the requester. `None` for spectators and anonymous polls.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub your_stone: Option<Player>,
    /// Whether the requester may restart or end the game.
    #[serde(default)]
    pub is_owner: bool,
}

// =============================================================================
// REQUEST / RESPONSE BODIES
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGameBody {
    #[serde(default = "default_edge")]
    pub rows: usize,
    #[serde(default = "default_edge")]
    pub cols: usize,
    #[serde(default = "default_win_len")]
    pub win_len: usize,
}

fn default_edge() -> usize {
    15
}

fn default_win_len() -> usize {
    5
}

impl Default for CreateGameBody {
    fn default() -> Self {
        Self { rows: default_edge(), cols: default_edge(), win_len: default_win_len() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGameResponse {
    pub game_id: Uuid,
    pub player_id: Uuid,
    pub stone: Player,
    pub is_owner: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JoinGameResponse {
    pub game_id: Uuid,
    pub player_id: Uuid,
    /// `None` when both seats were already taken and the joiner spectates.
    pub stone: Option<Player>,
    pub is_owner: bool,
}

/// Body for `play_move`: coordinates plus the mover's identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveBody {
    pub player_id: Uuid,
    pub x: usize,
    pub y: usize,
}

/// Body for owner-gated operations (`restart_game`, `end_game`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerBody {
    pub player_id: Uuid,
}

/// Error payload returned by the server for rejected operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Grepable machine code, e.g. `E_NOT_YOUR_TURN`.
    pub code: String,
    pub message: String,
}

#[cfg(test)]
#[path = "game_test.rs"]
mod tests;
