//! Game service — lifecycle, snapshots, and owner-gated controls.
//!
//! DESIGN
//! ======
//! Games are created and mutated through these functions only; route
//! handlers translate HTTP into calls here and map `GameError` onto
//! statuses. Every accepted mutation bumps the game revision so polling
//! clients can detect change, and every accepted request refreshes the
//! activity clock that drives idle eviction.
//!
//! OWNERSHIP
//! =========
//! The creator takes the black seat and becomes the owner. Restart and end
//! are owner-only; the check happens here, server-side, regardless of any
//! client-side gating.

use protocol::{
    Board, BoardError, CreateGameBody, CreateGameResponse, GamePhase, GameSnapshot,
    JoinGameResponse, Player,
};
use tracing::info;
use uuid::Uuid;

use crate::services::rules;
use crate::state::{AppState, GameState};

/// Smallest run length that makes a meaningful game.
const MIN_WIN_LEN: usize = 3;

// =============================================================================
// ERRORS
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("game not found: {0}")]
    NotFound(Uuid),
    #[error("player {0} is not the game owner")]
    NotOwner(Uuid),
    #[error("player {0} does not hold a seat in this game")]
    NotSeated(Uuid),
    #[error("not your turn; {expected} is to move")]
    NotYourTurn { expected: Player },
    #[error("the game has not started yet; waiting for an opponent")]
    GameNotStarted,
    #[error("the game is over")]
    GameOver,
    #[error("coordinates ({x}, {y}) are outside the board")]
    OutOfBounds { x: usize, y: usize },
    #[error("cell ({x}, {y}) is already occupied")]
    CellOccupied { x: usize, y: usize },
    #[error("win length {win_len} does not fit a {rows}x{cols} board")]
    InvalidWinLen { win_len: usize, rows: usize, cols: usize },
    #[error(transparent)]
    InvalidBoard(#[from] BoardError),
}

impl GameError {
    /// Grepable machine code carried in error response bodies.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "E_GAME_NOT_FOUND",
            Self::NotOwner(_) => "E_NOT_OWNER",
            Self::NotSeated(_) => "E_NOT_SEATED",
            Self::NotYourTurn { .. } => "E_NOT_YOUR_TURN",
            Self::GameNotStarted => "E_GAME_NOT_STARTED",
            Self::GameOver => "E_GAME_OVER",
            Self::OutOfBounds { .. } => "E_OUT_OF_BOUNDS",
            Self::CellOccupied { .. } => "E_CELL_OCCUPIED",
            Self::InvalidWinLen { .. } => "E_INVALID_WIN_LEN",
            Self::InvalidBoard(_) => "E_INVALID_BOARD",
        }
    }
}

// =============================================================================
// LIFECYCLE
// =============================================================================

/// Create a new game. The creator takes black and ownership.
///
/// # Errors
///
/// Returns `InvalidBoard` for unusable dimensions and `InvalidWinLen` when
/// the requested run cannot fit on the board.
pub async fn create_game(state: &AppState, body: CreateGameBody) -> Result<CreateGameResponse, GameError> {
    let board = Board::new(body.rows, body.cols)?;
    if body.win_len < MIN_WIN_LEN || body.win_len > body.rows.max(body.cols) {
        return Err(GameError::InvalidWinLen {
            win_len: body.win_len,
            rows: body.rows,
            cols: body.cols,
        });
    }

    let game_id = Uuid::new_v4();
    let owner = Uuid::new_v4();
    let game = GameState::new(board, body.win_len, owner);

    let mut games = state.games.write().await;
    games.insert(game_id, game);
    info!(%game_id, rows = body.rows, cols = body.cols, win_len = body.win_len, "game created");

    Ok(CreateGameResponse { game_id, player_id: owner, stone: Player::Black, is_owner: true })
}

/// Join a game. The first joiner takes the white seat and starts the game;
/// everyone after that spectates.
///
/// # Errors
///
/// Returns `NotFound` for unknown game ids.
pub async fn join_game(state: &AppState, game_id: Uuid) -> Result<JoinGameResponse, GameError> {
    let mut games = state.games.write().await;
    let game = games.get_mut(&game_id).ok_or(GameError::NotFound(game_id))?;

    let player_id = Uuid::new_v4();
    if game.white.is_none() && game.phase == GamePhase::WaitingForOpponent {
        game.white = Some(player_id);
        game.phase = GamePhase::InProgress;
        game.bump();
        info!(%game_id, %player_id, "white seat taken, game started");
        return Ok(JoinGameResponse { game_id, player_id, stone: Some(Player::White), is_owner: false });
    }

    game.spectators.insert(player_id);
    game.touch();
    info!(%game_id, %player_id, spectators = game.spectators.len(), "spectator joined");
    Ok(JoinGameResponse { game_id, player_id, stone: None, is_owner: false })
}

/// Build a poll snapshot, personalized when `requester` is known to the game.
///
/// # Errors
///
/// Returns `NotFound` for unknown game ids.
pub async fn snapshot(
    state: &AppState,
    game_id: Uuid,
    requester: Option<Uuid>,
) -> Result<GameSnapshot, GameError> {
    let mut games = state.games.write().await;
    let game = games.get_mut(&game_id).ok_or(GameError::NotFound(game_id))?;
    // Active pollers keep a game alive under idle eviction.
    game.touch();
    Ok(snapshot_of(game_id, game, requester))
}

/// Validate and play one move, returning the resulting snapshot.
///
/// # Errors
///
/// Returns `NotFound` for unknown game ids, plus everything
/// [`rules::apply_move`] rejects.
pub async fn play_move(
    state: &AppState,
    game_id: Uuid,
    player_id: Uuid,
    x: usize,
    y: usize,
) -> Result<GameSnapshot, GameError> {
    let mut games = state.games.write().await;
    let game = games.get_mut(&game_id).ok_or(GameError::NotFound(game_id))?;

    rules::apply_move(game, player_id, x, y)?;
    game.bump();

    if let Some(record) = game.moves.last() {
        info!(
            %game_id,
            player = %record.player,
            x = record.x,
            y = record.y,
            move_no = game.moves.len(),
            revision = game.revision,
            phase = ?game.phase,
            "move played"
        );
    }
    Ok(snapshot_of(game_id, game, Some(player_id)))
}

/// Owner-only: wipe the board and start over. A game that lost its white
/// seat (never had one) returns to `WaitingForOpponent` instead.
///
/// # Errors
///
/// Returns `NotFound`, `NotOwner` for non-owners, and `GameOver` once the
/// owner has ended the game for good.
pub async fn restart_game(state: &AppState, game_id: Uuid, player_id: Uuid) -> Result<GameSnapshot, GameError> {
    let mut games = state.games.write().await;
    let game = games.get_mut(&game_id).ok_or(GameError::NotFound(game_id))?;

    if player_id != game.owner {
        return Err(GameError::NotOwner(player_id));
    }
    if game.phase == GamePhase::Ended {
        return Err(GameError::GameOver);
    }

    game.board.clear();
    game.moves.clear();
    game.to_move = Player::Black;
    game.phase = if game.white.is_some() {
        GamePhase::InProgress
    } else {
        GamePhase::WaitingForOpponent
    };
    game.bump();

    info!(%game_id, revision = game.revision, "game restarted by owner");
    Ok(snapshot_of(game_id, game, Some(player_id)))
}

/// Owner-only: terminate the game. Terminal and irreversible.
///
/// # Errors
///
/// Returns `NotFound`, `NotOwner` for non-owners, and `GameOver` when the
/// game was already ended.
pub async fn end_game(state: &AppState, game_id: Uuid, player_id: Uuid) -> Result<GameSnapshot, GameError> {
    let mut games = state.games.write().await;
    let game = games.get_mut(&game_id).ok_or(GameError::NotFound(game_id))?;

    if player_id != game.owner {
        return Err(GameError::NotOwner(player_id));
    }
    if game.phase == GamePhase::Ended {
        return Err(GameError::GameOver);
    }

    game.phase = GamePhase::Ended;
    game.bump();

    info!(%game_id, revision = game.revision, "game ended by owner");
    Ok(snapshot_of(game_id, game, Some(player_id)))
}

// =============================================================================
// HELPERS
// =============================================================================

fn snapshot_of(game_id: Uuid, game: &GameState, requester: Option<Uuid>) -> GameSnapshot {
    let known = requester.filter(|id| game.knows(*id));
    GameSnapshot {
        game_id,
        board: game.board.clone(),
        phase: game.phase,
        to_move: (game.phase == GamePhase::InProgress).then_some(game.to_move),
        revision: game.revision,
        player_id: known,
        your_stone: known.and_then(|id| game.seat_of(id)),
        is_owner: known == Some(game.owner),
    }
}

#[cfg(test)]
#[path = "game_test.rs"]
mod tests;
