//! Singles cursor.
//!
//! Each player walks an ordered rank sequence left to right. A prune looks
//! for the first remaining rank the hand no longer holds (the "miss") and
//! consumes the sequence up to and including it. Only one miss is consumed
//! per prune.

use crate::cards::Rank;
use crate::core::Singles;

/// Progress through a player's singles sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SinglesCursor {
    singles: Singles,
    position: usize,
}

impl SinglesCursor {
    /// Start at the beginning of `singles`.
    #[must_use]
    pub fn new(singles: Singles) -> Self {
        Self {
            singles,
            position: 0,
        }
    }

    /// Ranks not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> &[Rank] {
        &self.singles[self.position..]
    }

    /// Number of ranks consumed so far.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Find the first remaining rank for which `holds` is false and consume
    /// everything up to and including it.
    ///
    /// Returns the missed rank, or `None` (cursor unchanged) if every
    /// remaining rank is still held.
    pub fn consume_miss(&mut self, holds: impl Fn(Rank) -> bool) -> Option<Rank> {
        let offset = self.remaining().iter().position(|&rank| !holds(rank))?;
        let missed = self.singles[self.position + offset];
        self.position += offset + 1;
        Some(missed)
    }

    /// Move back to an earlier position recorded before a prune.
    ///
    /// Panics if `position` is ahead of the cursor.
    pub fn rewind(&mut self, position: usize) {
        assert!(
            position <= self.position,
            "cannot rewind singles cursor forward ({} > {})",
            position,
            self.position
        );
        self.position = position;
    }
}
