//! # briscola-engine
//!
//! A rules engine for two-player Briscola, driven by a host
//! rendering/input runtime.
//!
//! ## Design Principles
//!
//! 1. **Rules only**: The engine owns the card/pile data model, move
//!    legality, trick resolution, scoring, and the game lifecycle.
//!    Rendering, audio, and input polling live in the host, which reads
//!    engine state and never mutates it.
//!
//! 2. **Closed layouts**: Pile roles and players are closed enums backed
//!    by fixed-size arrays. Every match over them is exhaustive; there is
//!    no dynamic registry to misuse.
//!
//! 3. **Ownership is the invariant**: Every card lives in exactly one
//!    pile. Transfers draw owned cards out of one pile and feed them into
//!    another, and debug builds re-audit the 40-card union after every
//!    mutation.
//!
//! ## Architecture
//!
//! The host calls [`GameEngine::handle_event`] with discrete input events
//! and [`GameEngine::update`] once per frame; each update runs at most
//! one state-machine step and applies at most one move. Rendering reads a
//! [`Snapshot`] per tick.
//!
//! Deals are deterministic: the same seed reproduces the same shuffle,
//! deal, and trump suit, which is how the replay tests work.
//!
//! ## Modules
//!
//! - `core`: Player IDs, per-player storage, seeded RNG
//! - `cards`: Suits, ranks, point values, the 40-card deck
//! - `table`: Pile roles, pile storage, card transfers
//! - `engine`: Move validation, trick resolution, the state machine,
//!   host-facing events and snapshots

pub mod cards;
pub mod core;
pub mod engine;
pub mod table;

// Re-export commonly used types
pub use crate::core::{GameRng, PlayerId, PlayerMap, PLAYER_COUNT};

pub use crate::cards::{standard_deck, Card, Rank, Suit, DECK_SIZE, TOTAL_POINTS};

pub use crate::table::{DrawnCards, Pile, PileId, Table};

pub use crate::engine::{
    classify, determine_winning_turn, validate, EngineEvent, GameEngine, GameOutcome,
    GameStatus, MoveIntent, MoveProposal, PileView, Snapshot, TrickContext, TrickRecord,
};
