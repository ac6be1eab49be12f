//! Seat identification, per-seat storage, and the player hand seam.
//!
//! ## PlayerId
//!
//! Dou Dizhu is always played by three seats: `PlayerId(0..=2)`.
//! Out-of-range ids are caller bugs and panic on construction.
//!
//! ## Seats
//!
//! Fixed-size per-seat storage backed by `[T; PLAYER_COUNT]` for O(1) access.
//!
//! ## HandView
//!
//! The tracker never owns hands. Anything exposing a seat and a current hand
//! can be judged.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::error::JudgerError;
use crate::cards::{Card, RankCounts};
use crate::shapes::CardShape;

/// Number of seats at a Dou Dizhu table.
pub const PLAYER_COUNT: usize = 3;

/// Seat identifier in `0..PLAYER_COUNT`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PlayerId(u8);

impl PlayerId {
    /// Create a seat id.
    ///
    /// Panics if `id` is not a valid seat.
    #[must_use]
    #[track_caller]
    pub fn new(id: u8) -> Self {
        assert!(
            (id as usize) < PLAYER_COUNT,
            "player id {} out of range (expected 0..{})",
            id,
            PLAYER_COUNT
        );
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over every seat in order.
    ///
    /// ```
    /// use doudizhu_judger::core::PlayerId;
    ///
    /// let seats: Vec<_> = PlayerId::all().collect();
    /// assert_eq!(seats, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    /// ```
    pub fn all() -> impl Iterator<Item = PlayerId> {
        (0..PLAYER_COUNT as u8).map(PlayerId)
    }
}

impl TryFrom<u8> for PlayerId {
    type Error = JudgerError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        if (id as usize) < PLAYER_COUNT {
            Ok(Self(id))
        } else {
            Err(JudgerError::InvalidPlayer { id })
        }
    }
}

impl From<PlayerId> for u8 {
    fn from(player: PlayerId) -> Self {
        player.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-seat data with O(1) access by `PlayerId`.
///
/// ```
/// use doudizhu_judger::core::{PlayerId, Seats};
///
/// let mut counts: Seats<usize> = Seats::new(|_| 17);
/// counts[PlayerId::new(0)] += 3;
/// assert_eq!(counts[PlayerId::new(0)], 20);
/// assert_eq!(counts[PlayerId::new(2)], 17);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Seats<T> {
    data: [T; PLAYER_COUNT],
}

impl<T> Seats<T> {
    /// Create seat storage from a factory receiving each `PlayerId`.
    pub fn new(mut factory: impl FnMut(PlayerId) -> T) -> Self {
        Self {
            data: std::array::from_fn(|i| factory(PlayerId(i as u8))),
        }
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Consume into the underlying array.
    #[must_use]
    pub fn into_inner(self) -> [T; PLAYER_COUNT] {
        self.data
    }
}

impl<T> From<[T; PLAYER_COUNT]> for Seats<T> {
    fn from(data: [T; PLAYER_COUNT]) -> Self {
        Self { data }
    }
}

impl<T> Index<PlayerId> for Seats<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for Seats<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// Read access to a seated player's hand.
///
/// Implemented by whatever entity the game driver uses for players.
pub trait HandView {
    /// The seat this hand belongs to.
    fn player_id(&self) -> PlayerId;

    /// The cards currently held.
    fn current_hand(&self) -> &[Card];
}

impl<T: HandView + ?Sized> HandView for &T {
    fn player_id(&self) -> PlayerId {
        (**self).player_id()
    }

    fn current_hand(&self) -> &[Card] {
        (**self).current_hand()
    }
}

/// A seated player owning a hand of cards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    hand: Vec<Card>,
}

impl Player {
    /// Seat a player with a starting hand.
    pub fn new(id: PlayerId, hand: impl Into<Vec<Card>>) -> Self {
        Self {
            id,
            hand: hand.into(),
        }
    }

    /// Remove the cards of `shape` from the hand.
    ///
    /// Takes one card per rank occurrence, scanning the hand from the back.
    /// Returns the removed cards, or `None` (leaving the hand untouched) when
    /// the hand does not hold the shape.
    pub fn play(&mut self, shape: &CardShape) -> Option<Vec<Card>> {
        if !RankCounts::from_cards(&self.hand).contains(shape.counts()) {
            return None;
        }

        let mut wanted = *shape.counts();
        let mut removed = Vec::with_capacity(shape.len());
        let mut idx = self.hand.len();
        while idx > 0 {
            idx -= 1;
            let rank = self.hand[idx].rank;
            if wanted.get(rank) > 0 {
                wanted.remove(rank);
                removed.push(self.hand.remove(idx));
            }
        }
        Some(removed)
    }

    /// Put cards back into the hand (undoing a play, or taking the bottom).
    pub fn receive(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.hand.extend(cards);
    }
}

impl HandView for Player {
    fn player_id(&self) -> PlayerId {
        self.id
    }

    fn current_hand(&self) -> &[Card] {
        &self.hand
    }
}
