//! Card model: ranks, cards, canonical hand counts, and the deck.
//!
//! - `Rank`/`Suit`/`Card`: the 54 physical cards
//! - `RankCounts`: canonical hand form used for containment checks
//! - `Deck`/`Deal`: seeded shuffling and dealing

pub mod card;
pub mod counts;
pub mod deck;

pub use card::{Card, Rank, Suit};
pub use counts::{RankCounts, UnknownRank};
pub use deck::{Deal, Deck, BOTTOM_SIZE, HAND_SIZE};
