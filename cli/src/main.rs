//! Terminal client for the gomoku service.
//!
//! The `watch` command is the game screen: it polls the server on a fixed
//! interval (1000 ms by default, matching the original client), redraws the
//! board when the snapshot revision advances, and tears down on Ctrl-C or
//! when the game reaches a terminal phase. `play`, `restart`, and `end`
//! dispatch the corresponding operations; restart/end are refused locally
//! for non-owners and enforced server-side regardless.

mod client;
mod render;

use std::time::Duration;

use clap::{Parser, Subcommand};
use protocol::CreateGameBody;
use tokio::time::MissedTickBehavior;
use uuid::Uuid;

use crate::client::{CliError, GameClient};

#[derive(Parser, Debug)]
#[command(name = "gomoku", about = "Gomoku game API client")]
struct Cli {
    #[arg(long, env = "GOMOKU_BASE_URL", default_value = "http://127.0.0.1:3000")]
    base_url: String,

    /// Identity issued by `create` or `join`.
    #[arg(long, env = "GOMOKU_PLAYER_ID")]
    player_id: Option<Uuid>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that the server is up.
    Ping,
    /// Create a game and take the black seat.
    Create {
        #[arg(long, default_value_t = 15)]
        rows: usize,
        #[arg(long, default_value_t = 15)]
        cols: usize,
        #[arg(long, default_value_t = 5)]
        win_len: usize,
    },
    /// Join a game: first joiner takes white, later joiners spectate.
    Join { game_id: Uuid },
    /// Poll a game and redraw the board as it changes.
    Watch {
        game_id: Uuid,
        #[arg(long, default_value_t = 1000)]
        interval_ms: u64,
    },
    /// Place a stone at (x, y).
    Play { game_id: Uuid, x: usize, y: usize },
    /// Owner only: wipe the board and start over.
    Restart { game_id: Uuid },
    /// Owner only: terminate the game.
    End { game_id: Uuid },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let client = GameClient::new(&cli.base_url);

    match cli.command {
        Command::Ping => {
            client.ping().await?;
            println!("ok");
            Ok(())
        }
        Command::Create { rows, cols, win_len } => run_create(&client, rows, cols, win_len).await,
        Command::Join { game_id } => run_join(&client, game_id).await,
        Command::Watch { game_id, interval_ms } => {
            run_watch(&client, game_id, cli.player_id, interval_ms).await
        }
        Command::Play { game_id, x, y } => run_play(&client, game_id, cli.player_id, x, y).await,
        Command::Restart { game_id } => run_control(&client, game_id, cli.player_id, Control::Restart).await,
        Command::End { game_id } => run_control(&client, game_id, cli.player_id, Control::End).await,
    }
}

async fn run_create(client: &GameClient, rows: usize, cols: usize, win_len: usize) -> Result<(), CliError> {
    let created = client.create_game(CreateGameBody { rows, cols, win_len }).await?;
    println!("game:   {}", created.game_id);
    println!("player: {}", created.player_id);
    println!("stone:  {} (owner)", created.stone);
    eprintln!("export GOMOKU_PLAYER_ID={}", created.player_id);
    Ok(())
}

async fn run_join(client: &GameClient, game_id: Uuid) -> Result<(), CliError> {
    let joined = client.join_game(game_id).await?;
    println!("game:   {}", joined.game_id);
    println!("player: {}", joined.player_id);
    match joined.stone {
        Some(stone) => println!("stone:  {stone}"),
        None => println!("stone:  none (spectating)"),
    }
    eprintln!("export GOMOKU_PLAYER_ID={}", joined.player_id);
    Ok(())
}

/// The fixed-interval refresh loop. One request per tick, awaited before
/// the next, so refreshes never overlap; missed ticks are skipped rather
/// than bursted.
async fn run_watch(
    client: &GameClient,
    game_id: Uuid,
    player_id: Option<Uuid>,
    interval_ms: u64,
) -> Result<(), CliError> {
    let mut ticker = tokio::time::interval(Duration::from_millis(interval_ms.max(1)));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut last_revision: Option<u64> = None;

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                eprintln!("watch stopped");
                return Ok(());
            }
            _ = ticker.tick() => {
                let snapshot = client.request_update(game_id, player_id).await?;
                // Redraw only when state actually advanced.
                if last_revision.map_or(true, |seen| snapshot.revision > seen) {
                    println!("{}", render::render_snapshot(&snapshot));
                    last_revision = Some(snapshot.revision);
                }
                if snapshot.phase.is_terminal() {
                    return Ok(());
                }
            }
        }
    }
}

async fn run_play(
    client: &GameClient,
    game_id: Uuid,
    player_id: Option<Uuid>,
    x: usize,
    y: usize,
) -> Result<(), CliError> {
    let player_id = player_id.ok_or(CliError::MissingPlayerId)?;
    let snapshot = client.play_move(game_id, player_id, x, y).await?;
    print!("{}", render::render_snapshot(&snapshot));
    Ok(())
}

#[derive(Clone, Copy)]
enum Control {
    Restart,
    End,
}

/// Owner-gated controls. Mirrors the original screen, which disabled these
/// buttons for non-owners: check ownership against a fresh snapshot before
/// dispatching. The server enforces the same rule authoritatively.
async fn run_control(
    client: &GameClient,
    game_id: Uuid,
    player_id: Option<Uuid>,
    control: Control,
) -> Result<(), CliError> {
    let player_id = player_id.ok_or(CliError::MissingPlayerId)?;

    let current = client.request_update(game_id, Some(player_id)).await?;
    if !current.is_owner {
        return Err(match control {
            Control::Restart => CliError::NotOwner("restart the game"),
            Control::End => CliError::NotOwner("end the game"),
        });
    }

    let snapshot = match control {
        Control::Restart => client.restart_game(game_id, player_id).await?,
        Control::End => client.end_game(game_id, player_id).await?,
    };
    print!("{}", render::render_snapshot(&snapshot));
    Ok(())
}
