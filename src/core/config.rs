//! Tracker configuration.
//!
//! `JudgerConfig` controls how pruning walks each player's singles cursor.
//! The defaults match a standard game: every cursor starts at the full rank
//! order and the single-miss fast path is on.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Rank;

/// Ordered rank sequence a singles cursor walks.
pub type Singles = SmallVec<[Rank; Rank::COUNT]>;

/// Configuration for `PlayableTracker`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JudgerConfig {
    /// Starting singles sequence for every player's cursor.
    pub singles: Singles,

    /// Use the single-miss fast path when pruning.
    ///
    /// When false every prune is a full rescan of the playable set.
    pub miss_fast_path: bool,
}

impl Default for JudgerConfig {
    fn default() -> Self {
        Self {
            singles: Rank::ALL.iter().copied().collect(),
            miss_fast_path: true,
        }
    }
}

impl JudgerConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the starting singles sequence.
    #[must_use]
    pub fn with_singles(mut self, singles: impl IntoIterator<Item = Rank>) -> Self {
        self.singles = singles.into_iter().collect();
        self
    }

    /// Disable the fast path so every prune rescans the whole set.
    #[must_use]
    pub fn full_rescan(mut self) -> Self {
        self.miss_fast_path = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = JudgerConfig::new();
        assert!(config.miss_fast_path);
        assert_eq!(config.singles.len(), Rank::COUNT);
        assert_eq!(config.singles[0], Rank::Three);
        assert_eq!(config.singles[Rank::COUNT - 1], Rank::RedJoker);
    }

    #[test]
    fn test_config_builder() {
        let config = JudgerConfig::new()
            .with_singles([Rank::Ace, Rank::Two])
            .full_rescan();

        assert!(!config.miss_fast_path);
        assert_eq!(config.singles.as_slice(), &[Rank::Ace, Rank::Two]);
    }

    #[test]
    fn test_config_serialization() {
        let config = JudgerConfig::new().with_singles([Rank::Three, Rank::Ten]);
        let json = serde_json::to_string(&config).unwrap();
        let back: JudgerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
