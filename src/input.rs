//! Input model: palette tools, selection, and the drag gesture state machine.
//!
//! This module defines the types consumed by the placement engine's event
//! handlers. `Tool` captures the user's palette choice at pointer-down
//! time. `DragState` is the active gesture being tracked between drag-start
//! and drag-end, carrying the context needed to snap the pointer to a
//! candidate cell and to commit (or reject) the final document mutation on
//! release. A gesture that is cancelled mid-flight never reaches the store.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use std::collections::HashSet;

use crate::grid::GridCell;
use crate::item::{EquipmentKind, Footprint, ItemId, Layer};
use crate::validate::Verdict;

/// Which tool is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    /// Pointer / selection tool (default).
    #[default]
    Select,
    /// Place new equipment of the given kind from the palette.
    Place(EquipmentKind),
}

impl Tool {
    /// Whether this tool places new equipment.
    #[must_use]
    pub fn is_place(self) -> bool {
        matches!(self, Self::Place(_))
    }
}

/// A keyboard key, by the name the host reports (e.g. `"Delete"`,
/// `"Escape"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

/// The set of currently selected item ids.
///
/// Transient UI state: never persisted, cleared on snapshot loads, and
/// pruned when a selected item is removed.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    ids: HashSet<ItemId>,
}

impl Selection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an id to the selection.
    pub fn insert(&mut self, id: ItemId) {
        self.ids.insert(id);
    }

    /// Remove an id from the selection. Returns whether it was present.
    pub fn remove(&mut self, id: &ItemId) -> bool {
        self.ids.remove(id)
    }

    /// Add the id if absent, remove it if present.
    pub fn toggle(&mut self, id: ItemId) {
        if !self.ids.remove(&id) {
            self.ids.insert(id);
        }
    }

    /// Clear the whole selection.
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Whether `id` is selected.
    #[must_use]
    pub fn contains(&self, id: &ItemId) -> bool {
        self.ids.contains(id)
    }

    /// Selected ids, sorted for deterministic iteration.
    #[must_use]
    pub fn ids(&self) -> Vec<ItemId> {
        let mut ids: Vec<ItemId> = self.ids.iter().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Number of selected items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Persistent UI state visible to the renderer.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Currently active palette tool.
    pub tool: Tool,
    /// Currently selected items.
    pub selection: Selection,
}

/// Where the pointer would drop the dragged footprint, and whether that
/// drop would commit.
///
/// Produced on every drag-move so the host can ghost-render the candidate
/// cell and tint it by validity. Purely advisory: nothing is mutated until
/// drag-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapPreview {
    /// Candidate anchor cell under the pointer.
    pub cell: GridCell,
    /// What validation says about dropping there.
    pub verdict: Verdict,
}

/// Internal state for the drag gesture state machine.
#[derive(Debug, Clone, Copy, Default)]
pub enum DragState {
    /// No gesture in progress; waiting for the next drag-start.
    #[default]
    Idle,
    /// The user is moving an existing item (and, rigidly, its group).
    DraggingItem {
        /// Id of the item being dragged.
        id: ItemId,
        /// Pointer cell minus anchor cell at drag-start, so the grab point
        /// stays under the pointer instead of the anchor jumping to it.
        grab_dx: i32,
        /// See `grab_dx`.
        grab_dy: i32,
    },
    /// The user is dragging a new item out of the palette.
    PlacingNew {
        /// Equipment kind being placed.
        kind: EquipmentKind,
        /// Layer the new item will occupy.
        layer: Layer,
        /// Footprint the new item will occupy.
        footprint: Footprint,
    },
}

impl DragState {
    /// Whether a gesture is in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Idle)
    }
}
