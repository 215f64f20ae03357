//! Core engine types: players and RNG.
//!
//! These are the building blocks every other module leans on; nothing in
//! here knows about Briscola rules.

pub mod player;
pub mod rng;

pub use player::{PlayerId, PlayerMap, PLAYER_COUNT};
pub use rng::GameRng;
