//! Game routes — HTTP translation over the game service.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use protocol::{CreateGameBody, CreateGameResponse, ErrorBody, GameSnapshot, JoinGameResponse, MoveBody, PlayerBody};
use serde::Deserialize;
use uuid::Uuid;

use crate::services::game::{self, GameError};
use crate::state::AppState;

/// Error responses carry a grepable code plus a human message.
type ApiError = (StatusCode, Json<ErrorBody>);

pub(crate) fn game_error_response(err: &GameError) -> ApiError {
    let status = match err {
        GameError::NotFound(_) => StatusCode::NOT_FOUND,
        GameError::NotOwner(_) | GameError::NotSeated(_) => StatusCode::FORBIDDEN,
        GameError::NotYourTurn { .. }
        | GameError::GameNotStarted
        | GameError::GameOver
        | GameError::CellOccupied { .. } => StatusCode::CONFLICT,
        GameError::OutOfBounds { .. }
        | GameError::InvalidWinLen { .. }
        | GameError::InvalidBoard(_) => StatusCode::BAD_REQUEST,
    };
    let body = ErrorBody { code: err.error_code().to_owned(), message: err.to_string() };
    (status, Json(body))
}

/// `POST /api/game` — create a game; the caller becomes owner and black.
pub async fn create_game(
    State(state): State<AppState>,
    Json(body): Json<CreateGameBody>,
) -> Result<(StatusCode, Json<CreateGameResponse>), ApiError> {
    let created = game::create_game(&state, body)
        .await
        .map_err(|e| game_error_response(&e))?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `POST /api/game/:id/join` — take the white seat, or spectate.
pub async fn join_game(
    State(state): State<AppState>,
    Path(game_id): Path<Uuid>,
) -> Result<Json<JoinGameResponse>, ApiError> {
    let joined = game::join_game(&state, game_id)
        .await
        .map_err(|e| game_error_response(&e))?;
    Ok(Json(joined))
}

#[derive(Deserialize)]
pub struct SnapshotQuery {
    pub player_id: Option<Uuid>,
}

/// `GET /api/game/:id` — the poll endpoint. An optional `player_id` query
/// parameter personalizes the snapshot (`your_stone`, `is_owner`).
pub async fn get_snapshot(
    State(state): State<AppState>,
    Path(game_id): Path<Uuid>,
    Query(query): Query<SnapshotQuery>,
) -> Result<Json<GameSnapshot>, ApiError> {
    let snapshot = game::snapshot(&state, game_id, query.player_id)
        .await
        .map_err(|e| game_error_response(&e))?;
    Ok(Json(snapshot))
}

/// `POST /api/game/:id/move` — play a stone at `(x, y)`.
pub async fn play_move(
    State(state): State<AppState>,
    Path(game_id): Path<Uuid>,
    Json(body): Json<MoveBody>,
) -> Result<Json<GameSnapshot>, ApiError> {
    let snapshot = game::play_move(&state, game_id, body.player_id, body.x, body.y)
        .await
        .map_err(|e| game_error_response(&e))?;
    Ok(Json(snapshot))
}

/// `POST /api/game/:id/restart` — owner-only board reset.
pub async fn restart_game(
    State(state): State<AppState>,
    Path(game_id): Path<Uuid>,
    Json(body): Json<PlayerBody>,
) -> Result<Json<GameSnapshot>, ApiError> {
    let snapshot = game::restart_game(&state, game_id, body.player_id)
        .await
        .map_err(|e| game_error_response(&e))?;
    Ok(Json(snapshot))
}

/// `POST /api/game/:id/end` — owner-only termination.
pub async fn end_game(
    State(state): State<AppState>,
    Path(game_id): Path<Uuid>,
    Json(body): Json<PlayerBody>,
) -> Result<Json<GameSnapshot>, ApiError> {
    let snapshot = game::end_game(&state, game_id, body.player_id)
        .await
        .map_err(|e| game_error_response(&e))?;
    Ok(Json(snapshot))
}

#[cfg(test)]
#[path = "games_test.rs"]
mod tests;
