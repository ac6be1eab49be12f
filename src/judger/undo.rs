//! Undo log of removal records.
//!
//! Each prune pushes one `RemovalRecord`; each restore pops one. Records hold
//! only the delta, so restore cost is proportional to what the prune removed.
//! The log is an `im::Vector` so cloning a tracker stays O(1).

use im::Vector;
use std::sync::Arc;

use crate::shapes::CardShape;

/// Shapes removed by one prune, in removal order, plus the cursor position
/// the prune started from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RemovalRecord {
    removed: Arc<[CardShape]>,
    cursor_before: usize,
}

impl RemovalRecord {
    #[must_use]
    pub fn new(removed: Vec<CardShape>, cursor_before: usize) -> Self {
        Self {
            removed: removed.into(),
            cursor_before,
        }
    }

    /// Removed shapes, in removal order.
    #[must_use]
    pub fn removed(&self) -> &[CardShape] {
        &self.removed
    }

    /// Singles cursor position before the prune.
    #[must_use]
    pub fn cursor_before(&self) -> usize {
        self.cursor_before
    }
}

/// Per-player stack of removal records.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UndoLog {
    records: Vector<RemovalRecord>,
}

impl UndoLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: RemovalRecord) {
        self.records.push_back(record);
    }

    /// Pop the most recent record.
    pub fn pop(&mut self) -> Option<RemovalRecord> {
        self.records.pop_back()
    }

    /// Peek at the most recent record.
    #[must_use]
    pub fn last(&self) -> Option<&RemovalRecord> {
        self.records.last()
    }

    /// Number of records awaiting restore.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
