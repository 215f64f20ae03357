//! Move legality: classifying raw proposals into typed intents.
//!
//! Legal transfers form a closed allow-list; anything not named here is
//! illegal. Classification is pure: it reads the table and never mutates
//! it, so a rejected proposal needs no rollback.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::PlayerId;
use crate::table::{PileId, Table};

use super::event::MoveProposal;

/// A validated transfer, tagged with what it means in the game.
///
/// Each variant carries only the fields its application needs; there are
/// no optional flip directives to leave half-configured.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveIntent {
    /// A player commits a hand card to their own foundation for this trick.
    PlayToFoundation { player: PlayerId, slot: PileId },
    /// A replacement card is dealt from the stock into an empty hand slot.
    DealFromStock { slot: PileId },
    /// The trump-reveal card is dealt into an empty hand slot; only
    /// offered by the engine once the stock is exhausted.
    DealFromBriscola { slot: PileId },
}

/// Classify a proposal against the current table layout.
///
/// Returns `None` for anything outside the allow-list:
/// - zero amount, source == target, or an empty source;
/// - a hand-slot play whose target foundation is occupied, belongs to the
///   other player, or whose hand shows no face-up card (a face-up card is
///   the player's declared intent to lead or follow);
/// - any deal into an occupied slot;
/// - every transfer touching won piles, foundations as sources, or the
///   opponent's hand.
#[must_use]
pub fn classify(table: &Table, proposal: MoveProposal) -> Option<MoveIntent> {
    let MoveProposal {
        source,
        target,
        amount,
    } = proposal;

    if amount == 0 || source == target || table[source].is_empty() {
        return None;
    }

    // Hand slot onto the owner's foundation.
    if let Some(player) = source.hand_owner() {
        if target == PileId::foundation(player)
            && table[target].is_empty()
            && any_hand_card_face_up(table, player)
        {
            return Some(MoveIntent::PlayToFoundation {
                player,
                slot: source,
            });
        }
        return None;
    }

    // Stock or briscola display into any empty hand slot, either player.
    if target.is_hand_slot() && table[target].is_empty() {
        match source {
            PileId::Stock => return Some(MoveIntent::DealFromStock { slot: target }),
            PileId::BriscolaDisplay => {
                return Some(MoveIntent::DealFromBriscola { slot: target })
            }
            _ => {}
        }
    }

    None
}

/// Is the proposal legal?
#[must_use]
pub fn validate(table: &Table, proposal: MoveProposal) -> bool {
    classify(table, proposal).is_some()
}

/// At least one of the player's three hand cards is face up.
fn any_hand_card_face_up(table: &Table, player: PlayerId) -> bool {
    PileId::hand_slots(player)
        .iter()
        .any(|&slot| table[slot].top_card().is_some_and(Card::is_face_up))
}
