//! Ranks, suits and cards.
//!
//! Ranks are ordered by Dou Dizhu strength: `3 < 4 < ... < A < 2 < B < R`.
//! Each rank has a single-character code used by shape tokens and the
//! canonical hand string.

use serde::{Deserialize, Serialize};

/// Card rank, ordered by playing strength.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
    Two,
    BlackJoker,
    RedJoker,
}

impl Rank {
    /// Number of distinct ranks.
    pub const COUNT: usize = 15;

    /// All ranks in ascending strength.
    pub const ALL: [Rank; Rank::COUNT] = [
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
        Rank::Two,
        Rank::BlackJoker,
        Rank::RedJoker,
    ];

    /// Rank codes in ascending strength.
    pub const CODES: &'static str = "3456789TJQKA2BR";

    /// Position of this rank in `ALL`.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Single-character code (`'3'`..`'9'`, `T J Q K A 2`, `B`/`R` for jokers).
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
            Rank::Two => '2',
            Rank::BlackJoker => 'B',
            Rank::RedJoker => 'R',
        }
    }

    /// Parse a rank code.
    #[must_use]
    pub fn from_code(code: char) -> Option<Self> {
        Self::CODES
            .chars()
            .position(|c| c == code)
            .map(|i| Self::ALL[i])
    }

    /// Is this one of the two jokers?
    #[must_use]
    pub const fn is_joker(self) -> bool {
        matches!(self, Rank::BlackJoker | Rank::RedJoker)
    }

    /// Copies of this rank in a standard deck.
    #[must_use]
    pub const fn copies(self) -> u8 {
        if self.is_joker() {
            1
        } else {
            4
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Card suit. Jokers carry the `Joker` pseudo-suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
    Joker,
}

impl Suit {
    /// The four regular suits.
    pub const REGULAR: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Suit::Spades => 'S',
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
            Suit::Joker => 'J',
        }
    }
}

/// A single playing card.
///
/// Shapes only care about ranks; the suit is carried so hands stay a real
/// multiset of distinct cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    /// Create a card.
    ///
    /// Panics if jokers and the joker suit are not paired with each other.
    #[must_use]
    #[track_caller]
    pub fn new(rank: Rank, suit: Suit) -> Self {
        assert_eq!(
            rank.is_joker(),
            suit == Suit::Joker,
            "{:?} cannot carry suit {:?}",
            rank,
            suit
        );
        Self { rank, suit }
    }

    /// The black joker.
    #[must_use]
    pub const fn black_joker() -> Self {
        Self {
            rank: Rank::BlackJoker,
            suit: Suit::Joker,
        }
    }

    /// The red joker.
    #[must_use]
    pub const fn red_joker() -> Self {
        Self {
            rank: Rank::RedJoker,
            suit: Suit::Joker,
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.rank {
            Rank::BlackJoker => write!(f, "BJ"),
            Rank::RedJoker => write!(f, "RJ"),
            rank => write!(f, "{}{}", self.suit.code(), rank.code()),
        }
    }
}
