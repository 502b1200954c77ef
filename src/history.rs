//! Snapshot-based linear undo/redo.
//!
//! DESIGN
//! ======
//! Every committed mutation pushes a full snapshot of the document (items,
//! selection, grid). At the observed scale (tens of items) full snapshots
//! are cheaper to reason about than a diff journal, and restoring one is a
//! single state swap. The model is strictly linear: committing anything
//! while undone truncates the redo tail.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use crate::grid::GridConfig;
use crate::item::{ItemId, PlacedItem};

/// One point-in-time copy of the document, sufficient to restore it
/// bit-for-bit.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// All items, in `(layer, id)` order.
    pub items: Vec<PlacedItem>,
    /// Selected item ids, sorted.
    pub selection: Vec<ItemId>,
    /// Grid extent and cell size at the time of the snapshot.
    pub grid: GridConfig,
}

/// Linear undo/redo over document snapshots.
///
/// The entry at `cursor` is always the current committed state, so undo
/// and redo are cursor moves, never recomputation.
pub struct History {
    entries: Vec<Snapshot>,
    cursor: usize,
}

impl History {
    /// Create a history whose baseline is `initial`.
    #[must_use]
    pub fn new(initial: Snapshot) -> Self {
        Self { entries: vec![initial], cursor: 0 }
    }

    /// Record a newly committed state. Discards any redo tail.
    pub fn commit(&mut self, snapshot: Snapshot) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(snapshot);
        self.cursor = self.entries.len() - 1;
    }

    /// Step back one entry, returning the state to restore.
    pub fn undo(&mut self) -> Option<&Snapshot> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(&self.entries[self.cursor])
    }

    /// Step forward one entry, returning the state to restore.
    pub fn redo(&mut self) -> Option<&Snapshot> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        Some(&self.entries[self.cursor])
    }

    /// Drop all entries and start over from `baseline`.
    ///
    /// Used when the host hydrates the document from a snapshot: history
    /// from a previous document must not leak across loads.
    pub fn reset(&mut self, baseline: Snapshot) {
        self.entries.clear();
        self.entries.push(baseline);
        self.cursor = 0;
    }

    /// Whether an undo step is available.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// Whether a redo step is available.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// Number of entries currently held, including the baseline.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: a history holds at least its baseline.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
