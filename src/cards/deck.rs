//! The 54-card deck and seeded dealing.

use serde::{Deserialize, Serialize};

use super::card::{Card, Rank, Suit};
use crate::core::{GameRng, PlayerId, Seats};

/// Cards dealt to each seat before the landlord takes the bottom.
pub const HAND_SIZE: usize = 17;

/// Cards left face-down for the landlord.
pub const BOTTOM_SIZE: usize = 3;

/// An ordered deck of cards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The standard 54-card deck: 13 ranks in four suits plus two jokers.
    #[must_use]
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(54);
        for rank in Rank::ALL.iter().copied().filter(|r| !r.is_joker()) {
            for suit in Suit::REGULAR {
                cards.push(Card::new(rank, suit));
            }
        }
        cards.push(Card::black_joker());
        cards.push(Card::red_joker());
        Self { cards }
    }

    /// Shuffle in place.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Split the deck into three hands and the bottom.
    ///
    /// Panics if the deck does not hold exactly `3 * HAND_SIZE + BOTTOM_SIZE`
    /// cards.
    #[must_use]
    pub fn deal(self) -> Deal {
        assert_eq!(
            self.cards.len(),
            3 * HAND_SIZE + BOTTOM_SIZE,
            "deal needs a full deck"
        );
        let mut rest = self.cards.into_iter();
        let hands: Seats<Vec<Card>> = Seats::new(|_| rest.by_ref().take(HAND_SIZE).collect());
        let bottom = rest.collect();
        Deal { hands, bottom }
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

/// Result of dealing a deck.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deal {
    /// Seventeen cards per seat.
    pub hands: Seats<Vec<Card>>,
    /// Three cards reserved for the landlord.
    pub bottom: Vec<Card>,
}

impl Deal {
    /// Shuffle a standard deck with a seeded RNG and deal it.
    ///
    /// ```
    /// use doudizhu_judger::cards::Deal;
    /// use doudizhu_judger::core::{GameRng, PlayerId};
    ///
    /// let deal = Deal::shuffled(&mut GameRng::new(7));
    /// assert_eq!(deal.hands[PlayerId::new(1)].len(), 17);
    /// assert_eq!(deal.bottom.len(), 3);
    /// ```
    #[must_use]
    pub fn shuffled(rng: &mut GameRng) -> Self {
        let mut deck = Deck::standard();
        deck.shuffle(rng);
        deck.deal()
    }

    /// Hand the bottom cards to `landlord`, returning the final hands.
    #[must_use]
    pub fn with_landlord(mut self, landlord: PlayerId) -> Seats<Vec<Card>> {
        self.hands[landlord].append(&mut self.bottom);
        self.hands
    }
}
