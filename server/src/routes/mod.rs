//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The API surface is the client contract from the game screen: create and
//! join a game, poll its state, play a move, and the two owner-gated
//! controls (restart, end). CORS is wide open so browser clients can poll
//! from any origin.

pub mod games;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/game", post(games::create_game))
        .route("/api/game/{id}", get(games::get_snapshot))
        .route("/api/game/{id}/join", post(games::join_game))
        .route("/api/game/{id}/move", post(games::play_move))
        .route("/api/game/{id}/restart", post(games::restart_game))
        .route("/api/game/{id}/end", post(games::end_game))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
