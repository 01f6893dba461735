//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds a map of live games keyed by game ID. Each game owns its board,
//! seats, move log, and a revision counter bumped on every accepted
//! mutation so polling clients can detect change cheaply. The server
//! process is the sole writer; clients only ever see snapshots.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Instant;

use protocol::{Board, GamePhase, Player};
use tokio::sync::RwLock;
use uuid::Uuid;

// =============================================================================
// MOVE LOG
// =============================================================================

/// One accepted move, in play order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub player: Player,
    pub x: usize,
    pub y: usize,
}

// =============================================================================
// GAME STATE
// =============================================================================

/// Authoritative per-game state. Lives in memory for the game's lifetime
/// and is evicted by the expiry sweeper once idle or finished.
pub struct GameState {
    pub board: Board,
    /// Run length required to win.
    pub win_len: usize,
    /// Player with restart/end privileges (the creator).
    pub owner: Uuid,
    /// Black seat; always the creator.
    pub black: Uuid,
    /// White seat; `None` until a second player joins.
    pub white: Option<Uuid>,
    /// Read-only observers who joined after both seats filled.
    pub spectators: HashSet<Uuid>,
    pub phase: GamePhase,
    /// Whose turn it is while the game is in progress.
    pub to_move: Player,
    pub moves: Vec<MoveRecord>,
    /// Bumped on every accepted mutation. Monotonic.
    pub revision: u64,
    /// Last accepted request touching this game; drives idle eviction.
    pub last_activity: Instant,
}

impl GameState {
    #[must_use]
    pub fn new(board: Board, win_len: usize, owner: Uuid) -> Self {
        Self {
            board,
            win_len,
            owner,
            black: owner,
            white: None,
            spectators: HashSet::new(),
            phase: GamePhase::WaitingForOpponent,
            to_move: Player::Black,
            moves: Vec::new(),
            revision: 0,
            last_activity: Instant::now(),
        }
    }

    /// Stone held by `player_id`, if seated.
    #[must_use]
    pub fn seat_of(&self, player_id: Uuid) -> Option<Player> {
        if player_id == self.black {
            return Some(Player::Black);
        }
        if self.white == Some(player_id) {
            return Some(Player::White);
        }
        None
    }

    /// Whether the id belongs to a seat or a spectator.
    #[must_use]
    pub fn knows(&self, player_id: Uuid) -> bool {
        self.seat_of(player_id).is_some() || self.spectators.contains(&player_id)
    }

    /// Record a mutation: bump revision and refresh the activity clock.
    pub fn bump(&mut self) {
        self.revision += 1;
        self.last_activity = Instant::now();
    }

    /// Refresh the activity clock without a revision bump (reads, joins).
    pub fn touch(&mut self) {
        self.last_activity = Instant::now();
    }
}

// =============================================================================
// APP STATE
// =============================================================================

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; the games map is Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub games: Arc<RwLock<HashMap<Uuid, GameState>>>,
}

impl AppState {
    #[must_use]
    pub fn new() -> Self {
        Self { games: Arc::new(RwLock::new(HashMap::new())) }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
