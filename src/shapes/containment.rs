//! Hand canonicalization and shape containment.
//!
//! The tracker never inspects cards itself. It asks a `ShapeContainment`
//! collaborator to turn a hand into a canonical form once per call and then
//! to answer per-shape and per-rank questions against that form.

use crate::cards::{Card, Rank, RankCounts};

use super::shape::CardShape;

/// Containment predicate over canonical hands.
///
/// Implementations must be deterministic and pure.
pub trait ShapeContainment {
    /// Canonical hand form.
    type Hand;

    /// Convert a hand of cards into canonical form.
    fn canonical(&self, cards: &[Card]) -> Self::Hand;

    /// Does the hand hold at least one card of `rank`?
    fn holds(&self, hand: &Self::Hand, rank: Rank) -> bool;

    /// Does the hand hold every card of `shape`?
    fn contains(&self, hand: &Self::Hand, shape: &CardShape) -> bool;
}

/// Multiset containment over per-rank counts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RankCounting;

impl ShapeContainment for RankCounting {
    type Hand = RankCounts;

    fn canonical(&self, cards: &[Card]) -> RankCounts {
        RankCounts::from_cards(cards)
    }

    fn holds(&self, hand: &RankCounts, rank: Rank) -> bool {
        hand.holds(rank)
    }

    fn contains(&self, hand: &RankCounts, shape: &CardShape) -> bool {
        hand.contains(shape.counts())
    }
}

impl<C: ShapeContainment + ?Sized> ShapeContainment for &C {
    type Hand = C::Hand;

    fn canonical(&self, cards: &[Card]) -> Self::Hand {
        (**self).canonical(cards)
    }

    fn holds(&self, hand: &Self::Hand, rank: Rank) -> bool {
        (**self).holds(hand, rank)
    }

    fn contains(&self, hand: &Self::Hand, shape: &CardShape) -> bool {
        (**self).contains(hand, shape)
    }
}
