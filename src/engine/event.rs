//! The host input boundary.
//!
//! The host polls its own input devices and translates gestures into these
//! discrete events. The engine is the sole authority on legality: an
//! illegal proposal is silently dropped, and the host may render its own
//! rejection cue off the unchanged snapshot.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;
use crate::table::PileId;

/// A proposed transfer between two piles.
///
/// Transient intent only: it is consumed (or dropped) by the next engine
/// tick and never persisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveProposal {
    pub source: PileId,
    pub target: PileId,
    pub amount: usize,
}

impl MoveProposal {
    /// Propose moving a single card, the common case.
    #[must_use]
    pub const fn single(source: PileId, target: PileId) -> Self {
        Self {
            source,
            target,
            amount: 1,
        }
    }
}

/// A discrete input event delivered by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineEvent {
    /// Propose a card transfer; validated and applied on the next tick.
    ProposeMove(MoveProposal),
    /// Reveal a player's hand, if that player may act.
    ToggleHandFaceUp(PlayerId),
    /// Reset and redeal. `None` seeds from the clock.
    RequestNewGame { seed: Option<u64> },
    /// Advance out of the between-tricks pause.
    SignalEndRound,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_proposal() {
        let proposal = MoveProposal::single(PileId::Hand0Slot1, PileId::Foundation0);
        assert_eq!(proposal.amount, 1);
        assert_eq!(proposal.source, PileId::Hand0Slot1);
        assert_eq!(proposal.target, PileId::Foundation0);
    }

    #[test]
    fn test_event_serialization() {
        let event = EngineEvent::ProposeMove(MoveProposal::single(
            PileId::Stock,
            PileId::Hand1Slot2,
        ));

        let json = serde_json::to_string(&event).unwrap();
        let deserialized: EngineEvent = serde_json::from_str(&json).unwrap();

        assert_eq!(event, deserialized);
    }
}
