//! Card identity and face orientation.
//!
//! A card's identity is its `(Suit, Rank)` pair from the 40-card Italian
//! deck; the only mutable state is face orientation. Position on screen is
//! the renderer's concern, keyed by identity.
//!
//! ## Points
//!
//! Point values are a pure function of rank: Ace 11, Three 10, King 4,
//! Queen 3, Jack 2, everything else 0. The whole deck sums to 120.

use serde::{Deserialize, Serialize};

/// Italian-deck suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Cups,
    Coins,
    Swords,
    Clubs,
}

impl Suit {
    /// All four suits, in index order.
    pub const ALL: [Suit; 4] = [Suit::Cups, Suit::Coins, Suit::Swords, Suit::Clubs];
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Suit::Cups => "Cups",
            Suit::Coins => "Coins",
            Suit::Swords => "Swords",
            Suit::Clubs => "Clubs",
        };
        write!(f, "{name}")
    }
}

/// Card rank, numbered 0..=9 as in the Italian deck: Ace through Seven,
/// then Jack, Queen, King.
///
/// The derived `Ord` is the raw numeric order (Ace lowest, King highest),
/// which is exactly the order trick resolution uses for its zero-point
/// tie-break.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace = 0,
    Two = 1,
    Three = 2,
    Four = 3,
    Five = 4,
    Six = 5,
    Seven = 6,
    Jack = 7,
    Queen = 8,
    King = 9,
}

impl Rank {
    /// All ten ranks, in numeric order.
    pub const ALL: [Rank; 10] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// The raw numeric rank (0 = Ace ... 9 = King).
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Briscola point value of this rank.
    ///
    /// ```
    /// use briscola_engine::cards::Rank;
    ///
    /// assert_eq!(Rank::Ace.points(), 11);
    /// assert_eq!(Rank::Three.points(), 10);
    /// assert_eq!(Rank::King.points(), 4);
    /// assert_eq!(Rank::Seven.points(), 0);
    /// ```
    #[must_use]
    pub const fn points(self) -> u32 {
        match self {
            Rank::Ace => 11,
            Rank::Three => 10,
            Rank::King => 4,
            Rank::Queen => 3,
            Rank::Jack => 2,
            _ => 0,
        }
    }
}

/// A single card: immutable identity plus face orientation.
///
/// `Card` is deliberately not `Copy`: piles pass cards around by move, so
/// a card drawn from one pile cannot silently stay behind in another.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    suit: Suit,
    rank: Rank,
    face_up: bool,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            face_up: false,
        }
    }

    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    /// The `(Suit, Rank)` pair naming this card.
    #[must_use]
    pub const fn identity(&self) -> (Suit, Rank) {
        (self.suit, self.rank)
    }

    #[must_use]
    pub const fn is_face_up(&self) -> bool {
        self.face_up
    }

    pub fn set_face_up(&mut self) {
        self.face_up = true;
    }

    pub fn set_face_down(&mut self) {
        self.face_up = false;
    }

    /// Toggle face orientation.
    pub fn flip(&mut self) {
        self.face_up = !self.face_up;
    }

    /// Briscola point value of this card.
    #[must_use]
    pub const fn points(&self) -> u32 {
        self.rank.points()
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} of {}", self.rank, self.suit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_table() {
        assert_eq!(Rank::Ace.points(), 11);
        assert_eq!(Rank::Three.points(), 10);
        assert_eq!(Rank::King.points(), 4);
        assert_eq!(Rank::Queen.points(), 3);
        assert_eq!(Rank::Jack.points(), 2);

        for rank in [Rank::Two, Rank::Four, Rank::Five, Rank::Six, Rank::Seven] {
            assert_eq!(rank.points(), 0);
        }
    }

    #[test]
    fn test_rank_numeric_order() {
        assert!(Rank::Ace < Rank::Two);
        assert!(Rank::Seven < Rank::Jack);
        assert!(Rank::Queen < Rank::King);
        assert_eq!(Rank::Ace.index(), 0);
        assert_eq!(Rank::King.index(), 9);
    }

    #[test]
    fn test_new_card_is_face_down() {
        let card = Card::new(Suit::Swords, Rank::Ace);
        assert!(!card.is_face_up());
        assert_eq!(card.identity(), (Suit::Swords, Rank::Ace));
    }

    #[test]
    fn test_face_operations() {
        let mut card = Card::new(Suit::Cups, Rank::Seven);

        card.set_face_up();
        assert!(card.is_face_up());

        card.set_face_down();
        assert!(!card.is_face_up());
    }

    #[test]
    fn test_flip_twice_is_identity() {
        let mut card = Card::new(Suit::Coins, Rank::King);
        let before = card.is_face_up();

        card.flip();
        card.flip();

        assert_eq!(card.is_face_up(), before);
    }

    #[test]
    fn test_display() {
        let card = Card::new(Suit::Clubs, Rank::Queen);
        assert_eq!(format!("{card}"), "Queen of Clubs");
    }

    #[test]
    fn test_serialization() {
        let mut card = Card::new(Suit::Coins, Rank::Three);
        card.set_face_up();

        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();

        assert_eq!(card, deserialized);
    }
}
