//! Expiry service — background eviction of idle and finished games.
//!
//! DESIGN
//! ======
//! Games live purely in memory, so abandoned ones must be reaped. A
//! background task sweeps the game map on a fixed interval and evicts games
//! whose activity clock has gone stale. Finished games (won, drawn, or
//! ended) get a much shorter grace period than live ones; polling a game
//! counts as activity, so watched games are never reaped mid-session.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::info;

use crate::state::AppState;

const DEFAULT_SWEEP_INTERVAL_MS: u64 = 60_000;
const DEFAULT_IDLE_TTL_SECS: u64 = 3_600;
const DEFAULT_FINISHED_TTL_SECS: u64 = 300;

/// Tuning knobs for the expiry sweeper, loaded from environment variables.
#[derive(Clone, Copy)]
pub(crate) struct ExpiryConfig {
    /// Milliseconds between sweeps.
    pub(crate) sweep_interval_ms: u64,
    /// Seconds of inactivity before a live game is evicted.
    pub(crate) idle_ttl_secs: u64,
    /// Seconds of inactivity before a finished game is evicted.
    pub(crate) finished_ttl_secs: u64,
}

impl ExpiryConfig {
    pub(crate) fn from_env() -> Self {
        Self {
            sweep_interval_ms: env_parse("GAME_SWEEP_INTERVAL_MS", DEFAULT_SWEEP_INTERVAL_MS),
            idle_ttl_secs: env_parse("GAME_IDLE_TTL_SECS", DEFAULT_IDLE_TTL_SECS),
            finished_ttl_secs: env_parse("GAME_FINISHED_TTL_SECS", DEFAULT_FINISHED_TTL_SECS),
        }
    }
}

pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

/// Spawn the background expiry task. Returns a handle for shutdown.
pub fn spawn_expiry_task(state: AppState) -> JoinHandle<()> {
    let config = ExpiryConfig::from_env();
    info!(
        sweep_interval_ms = config.sweep_interval_ms,
        idle_ttl_secs = config.idle_ttl_secs,
        finished_ttl_secs = config.finished_ttl_secs,
        "game expiry sweeper configured"
    );

    tokio::spawn(async move {
        loop {
            sweep_once(&state, config).await;
            tokio::time::sleep(Duration::from_millis(config.sweep_interval_ms)).await;
        }
    })
}

/// Evict every game past its TTL. Returns the number evicted.
pub(crate) async fn sweep_once(state: &AppState, config: ExpiryConfig) -> usize {
    let idle_ttl = Duration::from_secs(config.idle_ttl_secs);
    let finished_ttl = Duration::from_secs(config.finished_ttl_secs);

    let mut games = state.games.write().await;
    let before = games.len();
    games.retain(|game_id, game| {
        let idle = game.last_activity.elapsed();
        let expired = if game.phase.is_terminal() {
            idle >= finished_ttl
        } else {
            idle >= idle_ttl
        };
        if expired {
            info!(%game_id, idle_secs = idle.as_secs(), phase = ?game.phase, "evicting expired game");
        }
        !expired
    });
    before - games.len()
}

#[cfg(test)]
#[path = "expiry_test.rs"]
mod tests;
