//! The 40-card Italian deck.

use super::card::{Card, Rank, Suit};

/// Cards in a full deck: 4 suits x 10 ranks.
pub const DECK_SIZE: usize = 40;

/// Point total across the whole deck.
pub const TOTAL_POINTS: u32 = 120;

/// Build a fresh deck, all cards face down, in suit-major order.
///
/// The caller shuffles; this function is deterministic.
#[must_use]
pub fn standard_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            cards.push(Card::new(suit, rank));
        }
    }
    cards
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_deck_size() {
        assert_eq!(standard_deck().len(), DECK_SIZE);
    }

    #[test]
    fn test_deck_has_no_duplicates() {
        let identities: FxHashSet<_> = standard_deck().iter().map(Card::identity).collect();
        assert_eq!(identities.len(), DECK_SIZE);
    }

    #[test]
    fn test_deck_points_sum_to_120() {
        let total: u32 = standard_deck().iter().map(Card::points).sum();
        assert_eq!(total, TOTAL_POINTS);
    }

    #[test]
    fn test_deck_is_face_down() {
        assert!(standard_deck().iter().all(|c| !c.is_face_up()));
    }
}
