//! Terminal detection and payoffs.
//!
//! A game ends as soon as one player empties their hand. If that player is
//! the landlord, the landlord alone wins; otherwise both peasants win
//! together.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::core::{HandView, PlayerId, PLAYER_COUNT};

/// Payoff per seat: 1 for a win, 0 for a loss.
pub type Payoffs = [i32; PLAYER_COUNT];

/// Has this player run out of cards?
#[must_use]
pub fn is_game_over<P: HandView + ?Sized>(player: &P) -> bool {
    player.current_hand().is_empty()
}

/// Has the player in seat `player_id` run out of cards?
///
/// Panics if `players` has no entry for that seat.
#[must_use]
pub fn judge_game<P: HandView>(players: &[P], player_id: PlayerId) -> bool {
    let player = players
        .iter()
        .find(|p| p.player_id() == player_id)
        .unwrap_or_else(|| panic!("no player seated as {}", player_id));
    is_game_over(player)
}

/// Payoffs for a finished game.
///
/// ```
/// use doudizhu_judger::core::PlayerId;
/// use doudizhu_judger::judger::judge_payoffs;
///
/// assert_eq!(judge_payoffs(PlayerId::new(0), PlayerId::new(0)), [1, 0, 0]);
/// assert_eq!(judge_payoffs(PlayerId::new(0), PlayerId::new(1)), [0, 1, 1]);
/// ```
#[must_use]
#[instrument(level = "trace")]
pub fn judge_payoffs(landlord: PlayerId, winner: PlayerId) -> Payoffs {
    GameResult::new(landlord, winner).payoffs()
}

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// The landlord emptied their hand first.
    LandlordWins { landlord: PlayerId },
    /// A peasant emptied their hand first; both peasants win.
    PeasantsWin { landlord: PlayerId },
}

impl GameResult {
    /// Classify a finished game from the landlord seat and the first seat to
    /// run out of cards.
    #[must_use]
    pub fn new(landlord: PlayerId, winner: PlayerId) -> Self {
        if winner == landlord {
            GameResult::LandlordWins { landlord }
        } else {
            GameResult::PeasantsWin { landlord }
        }
    }

    /// The landlord seat.
    #[must_use]
    pub fn landlord(&self) -> PlayerId {
        match *self {
            GameResult::LandlordWins { landlord } | GameResult::PeasantsWin { landlord } => landlord,
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match *self {
            GameResult::LandlordWins { landlord } => player == landlord,
            GameResult::PeasantsWin { landlord } => player != landlord,
        }
    }

    /// Winning seats in ascending order.
    pub fn winners(&self) -> impl Iterator<Item = PlayerId> + '_ {
        PlayerId::all().filter(move |&p| self.is_winner(p))
    }

    /// Per-seat payoffs.
    #[must_use]
    pub fn payoffs(&self) -> Payoffs {
        let mut payoffs = [0; PLAYER_COUNT];
        for winner in self.winners() {
            payoffs[winner.index()] = 1;
        }
        payoffs
    }
}
