//! The judger: playable-set tracking with undo, plus terminal and payoff
//! queries.
//!
//! - `PlayableTracker`: per-seat playable shapes, pruned after plays
//! - `UndoLog`/`RemovalRecord`: per-seat stack of pruning deltas
//! - `SinglesCursor`: fast-path hint for detecting a vanished rank
//! - `judge_game`/`judge_payoffs`: outcome rules

pub mod cursor;
pub mod outcome;
pub mod tracker;
pub mod undo;

pub use cursor::SinglesCursor;
pub use outcome::{is_game_over, judge_game, judge_payoffs, GameResult, Payoffs};
pub use tracker::{PlayableSet, PlayableTracker};
pub use undo::{RemovalRecord, UndoLog};
