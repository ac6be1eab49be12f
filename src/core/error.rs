//! Error types.
//!
//! Unbalanced play/undo calls and bad catalogue data are the only failures
//! callers can observe as values. Out-of-range seats panic at construction.

use derive_more::{Display, Error};

use super::player::PlayerId;
use crate::cards::Rank;

/// Tracker errors.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum JudgerError {
    /// `restore_playable` was called with no matching prior prune.
    #[display("{player} has no recorded removals to restore")]
    EmptyUndoLog { player: PlayerId },

    /// A raw seat index outside `0..PLAYER_COUNT`.
    #[display("player id {id} is not a seat at a three-player table")]
    InvalidPlayer { id: u8 },
}

/// Errors building a shape catalogue.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum CatalogueError {
    /// A token held a character that is not a rank code.
    #[display("shape {token:?} holds unknown rank symbol {symbol:?}")]
    UnknownRank { token: String, symbol: char },

    /// An empty token.
    #[display("empty shape token")]
    EmptyShape,

    /// A token needs more copies of a rank than the deck holds.
    #[display("shape {token:?} needs {count} of rank {rank}")]
    TooManyCards { token: String, rank: Rank, count: usize },

    /// The same token appeared twice.
    #[display("shape {token:?} listed more than once")]
    DuplicateShape { token: String },

    /// The catalogue source could not be parsed.
    #[display("catalogue parse error: {message}")]
    Parse { message: String },
}

impl From<serde_json::Error> for CatalogueError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse {
            message: err.to_string(),
        }
    }
}
