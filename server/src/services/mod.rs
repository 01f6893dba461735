//! Domain services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own the game rules and lifecycle logic so route handlers
//! can stay focused on protocol translation and status mapping.

pub mod expiry;
pub mod game;
pub mod rules;
