//! Trick resolution.
//!
//! Pure functions from the two committed cards and game context to the
//! trick winner. Resolution never touches the table; the engine drains
//! the foundations afterwards.
//!
//! Two behaviors here are intentional reproductions of the reference
//! game rather than textbook Briscola:
//! - the zero-point tie-break compares raw numeric rank (Ace lowest),
//!   not trick-taking rank order;
//! - a trick of two different non-trump suits goes to whoever holds the
//!   mover advantage, with no look at the cards.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Suit};
use crate::core::PlayerId;

/// Everything trick resolution looks at.
#[derive(Clone, Debug)]
pub struct TrickContext {
    /// Player 0's committed card, if played.
    pub foundation0: Option<Card>,
    /// Player 1's committed card, if played.
    pub foundation1: Option<Card>,
    /// The trump suit fixed at deal time.
    pub briscola_suit: Suit,
    /// Holder of the different-suit tie-break authority.
    pub mover_advantage: PlayerId,
}

/// Determine the trick winner, or `None` while either foundation is empty.
///
/// Resolution order, first match wins:
/// 1. exactly one card is trump: that player;
/// 2. both trump: higher points, zero-point tie by higher numeric rank;
/// 3. same non-trump suit: higher points, zero-point tie by numeric rank;
/// 4. different non-trump suits: the mover-advantage holder.
#[must_use]
pub fn determine_winning_turn(ctx: &TrickContext) -> Option<PlayerId> {
    let (f0, f1) = match (&ctx.foundation0, &ctx.foundation1) {
        (Some(f0), Some(f1)) => (f0, f1),
        _ => return None,
    };

    let f0_is_briscola = f0.suit() == ctx.briscola_suit;
    let f1_is_briscola = f1.suit() == ctx.briscola_suit;

    match (f0_is_briscola, f1_is_briscola) {
        (true, false) => Some(PlayerId::P0),
        (false, true) => Some(PlayerId::P1),
        (true, true) => higher_card(f0, f1),
        (false, false) => {
            if f0.suit() == f1.suit() {
                higher_card(f0, f1)
            } else {
                Some(ctx.mover_advantage)
            }
        }
    }
}

/// Compare two same-suit cards: points first, raw numeric rank when both
/// are worthless. Player 0 takes the (unreachable) equal-points case, as
/// in the reference.
fn higher_card(f0: &Card, f1: &Card) -> Option<PlayerId> {
    if f0.points() == 0 && f1.points() == 0 {
        if f1.rank() > f0.rank() {
            Some(PlayerId::P1)
        } else {
            Some(PlayerId::P0)
        }
    } else if f0.points() > f1.points() {
        Some(PlayerId::P0)
    } else if f1.points() > f0.points() {
        Some(PlayerId::P1)
    } else {
        None
    }
}

/// A resolved trick, kept for the host's history display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrickRecord {
    /// The card player 0 committed.
    pub card0: Card,
    /// The card player 1 committed.
    pub card1: Card,
    pub winner: PlayerId,
}
