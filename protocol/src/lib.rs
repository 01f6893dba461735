//! Shared game model and wire types for the gomoku service.
//!
//! This crate owns the representation used by both `server` and `cli`:
//! the board grid, player/phase enums, the poll snapshot, and the JSON
//! request/response bodies for every game operation. The server is the
//! only writer of game state; clients treat everything here as read-only
//! data refreshed by polling.

pub mod board;
pub mod game;

pub use board::{Board, BoardError, Cell};
pub use game::{
    CreateGameBody, CreateGameResponse, ErrorBody, GamePhase, GameSnapshot, JoinGameResponse,
    MoveBody, Player, PlayerBody,
};
