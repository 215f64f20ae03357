//! Read-only snapshots of engine state.
//!
//! The host reads one `Snapshot` per tick and renders from it; nothing in
//! here can mutate the game. Snapshots are plain serde values, so a host
//! in another process can consume them over any serde transport.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, Suit};
use crate::core::{PlayerId, PlayerMap};
use crate::table::PileId;

use super::game::{GameEngine, GameOutcome, GameStatus};
use super::trick::TrickRecord;

/// One pile's contents: ordered card identities plus face state,
/// bottom to top.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PileView {
    pub id: PileId,
    pub cards: Vec<Card>,
}

/// Everything the renderer needs in one tick.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub status: GameStatus,
    /// All twelve piles, in role order.
    pub piles: Vec<PileView>,
    pub briscola_suit: Option<Suit>,
    pub first_mover: PlayerId,
    /// Winner of the current trick, once resolved.
    pub win_turn: Option<PlayerId>,
    /// Won-pile point totals.
    pub points: PlayerMap<u32>,
    /// Set once the game reaches `Win`.
    pub outcome: Option<GameOutcome>,
    /// Resolved tricks, oldest first. Shares structure with the engine's
    /// own history, so capturing is O(1) in the number of tricks.
    pub tricks: Vector<TrickRecord>,
}

impl Snapshot {
    /// Capture the engine's observable state.
    #[must_use]
    pub fn capture(engine: &GameEngine) -> Self {
        Self {
            status: engine.status(),
            piles: PileId::ALL
                .iter()
                .map(|&id| PileView {
                    id,
                    cards: engine.table()[id].cards().to_vec(),
                })
                .collect(),
            briscola_suit: engine.briscola_suit(),
            first_mover: engine.first_mover(),
            win_turn: engine.win_turn(),
            points: PlayerMap::new(|p| engine.points(p)),
            outcome: engine.outcome(),
            tricks: engine.tricks().clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::DECK_SIZE;

    fn sample_snapshot() -> Snapshot {
        let mut engine = GameEngine::new(Some(42));
        engine.update();
        engine.snapshot()
    }

    #[test]
    fn test_capture_covers_every_pile() {
        let snapshot = sample_snapshot();

        assert_eq!(snapshot.piles.len(), PileId::COUNT);
        let total: usize = snapshot.piles.iter().map(|p| p.cards.len()).sum();
        assert_eq!(total, DECK_SIZE);
        assert_eq!(snapshot.status, GameStatus::Play);
        assert_eq!(snapshot.points[PlayerId::P0], 0);
        assert_eq!(snapshot.outcome, None);
    }

    #[test]
    fn test_json_round_trip() {
        let snapshot = sample_snapshot();

        let json = serde_json::to_string(&snapshot).unwrap();
        let deserialized: Snapshot = serde_json::from_str(&json).unwrap();

        assert_eq!(snapshot, deserialized);
    }

    #[test]
    fn test_bincode_round_trip() {
        let snapshot = sample_snapshot();

        let bytes = bincode::serialize(&snapshot).unwrap();
        let deserialized: Snapshot = bincode::deserialize(&bytes).unwrap();

        assert_eq!(snapshot, deserialized);
    }
}
