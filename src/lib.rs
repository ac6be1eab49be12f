//! # doudizhu-judger
//!
//! Tracks which catalogue card shapes each Dou Dizhu player can still play as
//! their hand shrinks, with exact undo, plus terminal and payoff rules.
//!
//! ## Design Principles
//!
//! 1. **Incremental**: Playable sets are built once per game and only pruned
//!    afterwards. Each prune costs one pass over the current set.
//!
//! 2. **Exact Undo**: Every prune records its delta. Restoring pops the delta,
//!    so a play followed by its undo leaves the tracker unchanged.
//!
//! 3. **Injected Collaborators**: The shape catalogue and the containment
//!    predicate are passed in, never global. The catalogue is shared read-only
//!    across any number of games.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: Playable sets and undo logs use `im-rs`,
//!   so a tracker clones in O(1) for callers that branch on game state.
//!
//! - **Fast Path**: A per-player singles cursor detects a rank that vanished
//!   from the hand and drops every shape using it. A full rescan runs in the
//!   same pass, so the fast path never changes the result.
//!
//! ## Modules
//!
//! - `core`: Seats, players, configuration, errors, RNG
//! - `cards`: Ranks, cards, canonical hand counts, deck and dealing
//! - `shapes`: Card shapes, the catalogue, the containment seam
//! - `judger`: Playable-set tracker, undo log, outcome rules

pub mod cards;
pub mod core;
pub mod judger;
pub mod shapes;

// Re-export commonly used types
pub use crate::core::{
    CatalogueError, GameRng, HandView, JudgerConfig, JudgerError, Player, PlayerId, Seats,
    PLAYER_COUNT,
};

pub use crate::cards::{Card, Deal, Deck, Rank, RankCounts, Suit};

pub use crate::shapes::{CardShape, RankCounting, ShapeCatalogue, ShapeContainment};

pub use crate::judger::{
    is_game_over, judge_game, judge_payoffs, GameResult, Payoffs, PlayableSet, PlayableTracker,
    RemovalRecord, SinglesCursor, UndoLog,
};
