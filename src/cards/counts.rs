//! Canonical hand form: per-rank card counts.
//!
//! `RankCounts` is what containment checks run against. Its `Display` form is
//! the sorted rank string, e.g. `"3345TTBR"`, and parsing accepts the same
//! string in any order.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::card::{Card, Rank};

/// Multiset of ranks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RankCounts([u8; Rank::COUNT]);

impl RankCounts {
    /// An empty multiset.
    #[must_use]
    pub const fn new() -> Self {
        Self([0; Rank::COUNT])
    }

    /// Count the ranks of a hand of cards.
    #[must_use]
    pub fn from_cards(cards: &[Card]) -> Self {
        let mut counts = Self::new();
        for card in cards {
            counts.add(card.rank);
        }
        counts
    }

    /// Number of cards of `rank`.
    #[must_use]
    pub const fn get(&self, rank: Rank) -> u8 {
        self.0[rank.index()]
    }

    /// Does the multiset hold at least one `rank`?
    #[must_use]
    pub const fn holds(&self, rank: Rank) -> bool {
        self.get(rank) > 0
    }

    /// Add one card of `rank`. Counts saturate at `u8::MAX`.
    pub fn add(&mut self, rank: Rank) {
        let slot = &mut self.0[rank.index()];
        *slot = slot.saturating_add(1);
    }

    /// Remove one card of `rank`. Returns `false` if none was held.
    pub fn remove(&mut self, rank: Rank) -> bool {
        let slot = &mut self.0[rank.index()];
        if *slot == 0 {
            return false;
        }
        *slot -= 1;
        true
    }

    /// Multiset containment: every rank of `other` is held at least as often.
    #[must_use]
    pub fn contains(&self, other: &RankCounts) -> bool {
        self.0.iter().zip(other.0.iter()).all(|(have, need)| have >= need)
    }

    /// Total number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.iter().map(|&n| n as usize).sum()
    }

    /// Is the multiset empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|&n| n == 0)
    }

    /// Iterate over `(rank, count)` for ranks that are present, ascending.
    pub fn iter(&self) -> impl Iterator<Item = (Rank, u8)> + '_ {
        Rank::ALL
            .iter()
            .map(move |&rank| (rank, self.get(rank)))
            .filter(|&(_, n)| n > 0)
    }
}

impl std::fmt::Display for RankCounts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (rank, n) in self.iter() {
            for _ in 0..n {
                write!(f, "{}", rank.code())?;
            }
        }
        Ok(())
    }
}

/// Error returned when a rank string holds an unknown symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown rank symbol {symbol:?}")]
pub struct UnknownRank {
    pub symbol: char,
}

impl FromStr for RankCounts {
    type Err = UnknownRank;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut counts = Self::new();
        for symbol in s.chars() {
            let rank = Rank::from_code(symbol).ok_or(UnknownRank { symbol })?;
            counts.add(rank);
        }
        Ok(counts)
    }
}

impl FromIterator<Rank> for RankCounts {
    fn from_iter<I: IntoIterator<Item = Rank>>(iter: I) -> Self {
        let mut counts = Self::new();
        for rank in iter {
            counts.add(rank);
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suit;

    #[test]
    fn test_canonical_string_is_sorted() {
        let cards = [
            Card::red_joker(),
            Card::new(Rank::Two, Suit::Clubs),
            Card::new(Rank::Three, Suit::Hearts),
            Card::new(Rank::Ten, Suit::Spades),
            Card::new(Rank::Three, Suit::Spades),
        ];
        assert_eq!(RankCounts::from_cards(&cards).to_string(), "33T2R");
    }

    #[test]
    fn test_parse_any_order() {
        let a: RankCounts = "R33T2".parse().unwrap();
        let b: RankCounts = "33T2R".parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 5);
        assert_eq!(a.get(Rank::Three), 2);
    }

    #[test]
    fn test_parse_unknown_symbol() {
        let err = "33x".parse::<RankCounts>().unwrap_err();
        assert_eq!(err, UnknownRank { symbol: 'x' });
    }

    #[test]
    fn test_contains_is_multiset_containment() {
        let hand: RankCounts = "3334567".parse().unwrap();

        assert!(hand.contains(&"333".parse().unwrap()));
        assert!(hand.contains(&"34567".parse().unwrap()));
        assert!(!hand.contains(&"3333".parse().unwrap()));
        assert!(!hand.contains(&"8".parse().unwrap()));
        assert!(hand.contains(&RankCounts::new()));
    }

    #[test]
    fn test_add_remove() {
        let mut counts = RankCounts::new();
        assert!(counts.is_empty());
        assert!(!counts.remove(Rank::Ace));

        counts.add(Rank::Ace);
        assert!(counts.holds(Rank::Ace));
        assert!(counts.remove(Rank::Ace));
        assert!(!counts.holds(Rank::Ace));
        assert!(counts.is_empty());
    }

    #[test]
    fn test_add_saturates() {
        let counts: RankCounts = "3".repeat(300).parse().unwrap();
        assert_eq!(counts.get(Rank::Three), u8::MAX);
        assert!(!RankCounts::new().contains(&counts));
    }
}
