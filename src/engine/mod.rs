//! The orchestrating engine: events in, snapshots out.
//!
//! - `event`: the host input boundary
//! - `moves`: move legality and typed intents
//! - `trick`: trick resolution
//! - `game`: the lifecycle state machine
//! - `view`: read-only snapshots

pub mod event;
pub mod game;
pub mod moves;
pub mod trick;
pub mod view;

pub use event::{EngineEvent, MoveProposal};
pub use game::{GameEngine, GameOutcome, GameStatus};
pub use moves::{classify, validate, MoveIntent};
pub use trick::{determine_winning_turn, TrickContext, TrickRecord};
pub use view::{PileView, Snapshot};
