//! The pile arena: pile roles, pile storage, and card transfers.

pub mod layout;
pub mod pile;

pub use layout::{PileId, Table};
pub use pile::{DrawnCards, Pile};
