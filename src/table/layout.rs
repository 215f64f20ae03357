//! The fixed table layout: pile roles and the pile arena.
//!
//! Every pile a Briscola game ever needs exists for the whole game, so the
//! roles are a closed enum and the arena is a fixed-size array indexed by
//! it. Matching over `PileId` is exhaustive; there is no dynamic pile
//! registry to query or misspell.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::pile::Pile;
use crate::cards::DECK_SIZE;
use crate::core::PlayerId;

/// Role of a pile on the table.
///
/// - `Hand*Slot*`: one card of a player's three-card hand per slot.
/// - `Foundation*`: the card a player has committed to the current trick.
/// - `WonPile*`: a player's cumulative trick winnings.
/// - `Stock`: the face-down draw pile.
/// - `BriscolaDisplay`: the face-up card fixing the trump suit, playable
///   only once the stock is exhausted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PileId {
    Hand0Slot1,
    Hand0Slot2,
    Hand0Slot3,
    Hand1Slot1,
    Hand1Slot2,
    Hand1Slot3,
    Foundation0,
    Foundation1,
    WonPile0,
    WonPile1,
    Stock,
    BriscolaDisplay,
}

impl PileId {
    /// Number of pile roles.
    pub const COUNT: usize = 12;

    /// Every role, in index order.
    pub const ALL: [PileId; PileId::COUNT] = [
        PileId::Hand0Slot1,
        PileId::Hand0Slot2,
        PileId::Hand0Slot3,
        PileId::Hand1Slot1,
        PileId::Hand1Slot2,
        PileId::Hand1Slot3,
        PileId::Foundation0,
        PileId::Foundation1,
        PileId::WonPile0,
        PileId::WonPile1,
        PileId::Stock,
        PileId::BriscolaDisplay,
    ];

    /// Array index of this role.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The three hand slots of a player, in slot order.
    #[must_use]
    pub const fn hand_slots(player: PlayerId) -> [PileId; 3] {
        match player {
            PlayerId::P0 => [PileId::Hand0Slot1, PileId::Hand0Slot2, PileId::Hand0Slot3],
            PlayerId::P1 => [PileId::Hand1Slot1, PileId::Hand1Slot2, PileId::Hand1Slot3],
        }
    }

    /// A player's foundation.
    #[must_use]
    pub const fn foundation(player: PlayerId) -> PileId {
        match player {
            PlayerId::P0 => PileId::Foundation0,
            PlayerId::P1 => PileId::Foundation1,
        }
    }

    /// A player's won pile.
    #[must_use]
    pub const fn won_pile(player: PlayerId) -> PileId {
        match player {
            PlayerId::P0 => PileId::WonPile0,
            PlayerId::P1 => PileId::WonPile1,
        }
    }

    /// The owner of this hand slot, if it is one.
    #[must_use]
    pub const fn hand_owner(self) -> Option<PlayerId> {
        match self {
            PileId::Hand0Slot1 | PileId::Hand0Slot2 | PileId::Hand0Slot3 => Some(PlayerId::P0),
            PileId::Hand1Slot1 | PileId::Hand1Slot2 | PileId::Hand1Slot3 => Some(PlayerId::P1),
            _ => None,
        }
    }

    /// Is this one of the six hand slots?
    #[must_use]
    pub const fn is_hand_slot(self) -> bool {
        self.hand_owner().is_some()
    }
}

impl std::fmt::Display for PileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

/// The pile arena: one `Pile` per role, all cards of the game inside.
///
/// All card movement goes through [`Table::transfer`], which keeps every
/// transfer an atomic remove-then-insert pair. In debug builds each
/// mutation re-audits the exclusive-ownership invariant.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Table {
    piles: [Pile; PileId::COUNT],
}

impl Table {
    /// Create a table of twelve empty piles.
    #[must_use]
    pub fn new() -> Self {
        Self {
            piles: PileId::ALL.map(Pile::new),
        }
    }

    /// The pile with the given role.
    #[must_use]
    pub fn pile(&self, id: PileId) -> &Pile {
        &self.piles[id.index()]
    }

    /// Mutable access to the pile with the given role.
    pub fn pile_mut(&mut self, id: PileId) -> &mut Pile {
        &mut self.piles[id.index()]
    }

    /// Iterate over all piles in role order.
    pub fn piles(&self) -> impl Iterator<Item = &Pile> {
        self.piles.iter()
    }

    /// Total number of cards across all piles.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.piles.iter().map(Pile::len).sum()
    }

    /// Move up to `amount` cards from `source` onto `target`.
    ///
    /// Returns the number of cards actually moved. A transfer with
    /// `source == target` or `amount == 0` is a no-op; the validator
    /// rejects such proposals before they get here.
    pub fn transfer(&mut self, source: PileId, target: PileId, amount: usize) -> usize {
        if source == target || amount == 0 {
            return 0;
        }

        let drawn = self.pile_mut(source).draw(amount);
        let moved = drawn.len();
        self.pile_mut(target).add(drawn);

        self.debug_audit();
        moved
    }

    /// Check the exclusive-ownership invariant: the union of all piles is
    /// the full 40-card deck, with no duplicate identities.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        use rustc_hash::FxHashSet;

        if self.total_cards() != DECK_SIZE {
            return false;
        }

        let identities: FxHashSet<_> = self
            .piles
            .iter()
            .flat_map(|p| p.cards().iter().map(crate::cards::Card::identity))
            .collect();
        identities.len() == DECK_SIZE
    }

    /// Debug-build ownership audit, called at pile-mutation boundaries.
    ///
    /// A violation is a programming error, not a recoverable condition.
    pub fn debug_audit(&self) {
        debug_assert!(
            self.is_consistent(),
            "card ownership invariant broken: {} cards on table",
            self.total_cards()
        );
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<PileId> for Table {
    type Output = Pile;

    fn index(&self, id: PileId) -> &Self::Output {
        self.pile(id)
    }
}

impl IndexMut<PileId> for Table {
    fn index_mut(&mut self, id: PileId) -> &mut Self::Output {
        self.pile_mut(id)
    }
}
