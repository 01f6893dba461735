//! HTTP client for the gomoku API.
//!
//! One method per game operation: `request_update`, `play_move`,
//! `restart_game`, `end_game`, plus create/join/ping. Server rejections
//! surface as [`CliError::Api`] carrying the grepable code from the error
//! body; everything else is transport-level.

use protocol::{
    CreateGameBody, CreateGameResponse, ErrorBody, GameSnapshot, JoinGameResponse, MoveBody,
    PlayerBody,
};
use serde::de::DeserializeOwned;
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("missing player id; pass --player-id or set GOMOKU_PLAYER_ID")]
    MissingPlayerId,
    #[error("only the game owner can {0}")]
    NotOwner(&'static str),
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server rejected the request ({code}): {message}")]
    Api { status: u16, code: String, message: String },
}

pub struct GameClient {
    http: reqwest::Client,
    base_url: String,
}

impl GameClient {
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self { http: reqwest::Client::new(), base_url: normalize_base_url(base_url) }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// `GET /healthz`.
    pub async fn ping(&self) -> Result<(), CliError> {
        let response = self.http.get(self.url("/healthz")).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CliError::Api {
                status: status.as_u16(),
                code: "E_HTTP".to_owned(),
                message: "health check failed".to_owned(),
            });
        }
        Ok(())
    }

    /// `POST /api/game`.
    pub async fn create_game(&self, body: CreateGameBody) -> Result<CreateGameResponse, CliError> {
        let response = self.http.post(self.url("/api/game")).json(&body).send().await?;
        decode(response).await
    }

    /// `POST /api/game/:id/join`.
    pub async fn join_game(&self, game_id: Uuid) -> Result<JoinGameResponse, CliError> {
        let response = self
            .http
            .post(self.url(&format!("/api/game/{game_id}/join")))
            .send()
            .await?;
        decode(response).await
    }

    /// `GET /api/game/:id` — one poll.
    pub async fn request_update(
        &self,
        game_id: Uuid,
        player_id: Option<Uuid>,
    ) -> Result<GameSnapshot, CliError> {
        let mut request = self.http.get(self.url(&format!("/api/game/{game_id}")));
        if let Some(player_id) = player_id {
            request = request.query(&[("player_id", player_id.to_string())]);
        }
        decode(request.send().await?).await
    }

    /// `POST /api/game/:id/move`.
    pub async fn play_move(
        &self,
        game_id: Uuid,
        player_id: Uuid,
        x: usize,
        y: usize,
    ) -> Result<GameSnapshot, CliError> {
        let response = self
            .http
            .post(self.url(&format!("/api/game/{game_id}/move")))
            .json(&MoveBody { player_id, x, y })
            .send()
            .await?;
        decode(response).await
    }

    /// `POST /api/game/:id/restart` — owner only.
    pub async fn restart_game(&self, game_id: Uuid, player_id: Uuid) -> Result<GameSnapshot, CliError> {
        let response = self
            .http
            .post(self.url(&format!("/api/game/{game_id}/restart")))
            .json(&PlayerBody { player_id })
            .send()
            .await?;
        decode(response).await
    }

    /// `POST /api/game/:id/end` — owner only.
    pub async fn end_game(&self, game_id: Uuid, player_id: Uuid) -> Result<GameSnapshot, CliError> {
        let response = self
            .http
            .post(self.url(&format!("/api/game/{game_id}/end")))
            .json(&PlayerBody { player_id })
            .send()
            .await?;
        decode(response).await
    }
}

fn normalize_base_url(base_url: &str) -> String {
    base_url.trim_end_matches('/').to_owned()
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, CliError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json::<T>().await?);
    }

    let body = response.json::<ErrorBody>().await.unwrap_or_else(|_| ErrorBody {
        code: "E_HTTP".to_owned(),
        message: format!("HTTP {}", status.as_u16()),
    });
    Err(CliError::Api { status: status.as_u16(), code: body.code, message: body.message })
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
