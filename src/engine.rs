//! Top-level placement engine: validated mutations, selection, and history.
//!
//! DESIGN
//! ======
//! The engine is the single source of truth for one editor session. Every
//! mutation follows the same path: build a candidate, run it through
//! [`crate::validate::validate`], and only then touch the store, push a
//! history snapshot, and hand the host an [`Action`] describing what
//! changed. Rejections are ordinary `Err` return values — a user drags into
//! occupied space constantly, so they must be cheap and must leave the
//! document untouched. The host re-renders from the returned actions; there
//! is no separate notification channel.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use std::time::{SystemTime, UNIX_EPOCH};

use uuid::Uuid;

use crate::consts::QUARTER_TURN_DEGREES;
use crate::grid::{GridCell, GridConfig, WorldPoint};
use crate::history::{History, Snapshot};
use crate::input::{DragState, Key, Selection, SnapPreview, Tool, UiState};
use crate::item::{
    EquipmentKind, Footprint, ItemId, ItemStore, Layer, PartialPlacedItem, PlacedItem,
};
use crate::validate::{self, Candidate, Verdict};

/// Actions returned from committed mutations for the host to process.
///
/// Renderers re-draw from these; hosts that persist layouts forward them to
/// their own storage layer.
#[derive(Debug, Clone)]
pub enum Action {
    /// A new item was placed.
    ItemAdded(PlacedItem),
    /// An existing item's fields changed (rotation, footprint, props).
    ItemUpdated { id: ItemId, fields: PartialPlacedItem },
    /// One item — or a whole group, rigidly — moved to new cells.
    ItemsMoved { moves: Vec<(ItemId, GridCell)> },
    /// An item was removed.
    ItemRemoved { id: ItemId },
    /// Items were joined into a group.
    Grouped { group_id: Uuid, members: Vec<ItemId> },
    /// A group was dissolved.
    Ungrouped { group_id: Uuid, members: Vec<ItemId> },
    /// The grid extent or cell size changed.
    GridChanged(GridConfig),
    /// Undo or redo replaced the document with an earlier state.
    Restored,
    /// The selection changed without any document mutation.
    SelectionChanged,
}

/// Error returned by engine mutations.
///
/// `OutOfBounds` and `Collides` are routine rejections of normal
/// interaction; everything else indicates a caller bug and is logged at
/// warn level when it surfaces.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    /// The candidate footprint extends past the grid extent.
    #[error("footprint extends past the grid extent")]
    OutOfBounds,
    /// The candidate footprint overlaps another item on the same layer.
    #[error("footprint overlaps item {with}")]
    Collides { with: ItemId },
    /// The target item id is not in the store.
    #[error("unknown item: {0}")]
    UnknownItem(ItemId),
    /// A footprint edge of zero cells was supplied.
    #[error("footprint edges must be at least one cell")]
    InvalidFootprint,
    /// Grouping needs at least two distinct items.
    #[error("grouping requires at least two distinct items")]
    GroupTooSmall,
    /// The target group id has no members.
    #[error("unknown group: {0}")]
    UnknownGroup(Uuid),
}

impl PlacementError {
    /// Whether this is a routine placement rejection (revert the visual)
    /// rather than a precondition violation (fix the caller).
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::OutOfBounds | Self::Collides { .. })
    }
}

/// How rotation interacts with the occupied footprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RotationMode {
    /// Rotation is presentational only; the occupied footprint never
    /// changes. Matches the legacy editors.
    #[default]
    Cosmetic,
    /// A quarter turn transposes the footprint, and the transposed
    /// footprint is validated like any other placement.
    RotatesFootprint,
}

/// The placement engine for one editor session.
///
/// Owns the item store, the grid config, the selection, the drag gesture
/// state, and the undo/redo history. Hosts hold it exclusively and read
/// document state through the accessor methods; all mutation goes through
/// the validated operations below.
pub struct PlacementEngine {
    items: ItemStore,
    grid: GridConfig,
    ui: UiState,
    drag: DragState,
    rotation_mode: RotationMode,
    history: History,
}

fn now_ms() -> i64 {
    let Ok(dur) = SystemTime::now().duration_since(UNIX_EPOCH) else {
        return 0;
    };
    i64::try_from(dur.as_millis()).unwrap_or(0)
}

fn ensure_valid(verdict: Verdict) -> Result<(), PlacementError> {
    match verdict {
        Verdict::Valid => Ok(()),
        Verdict::OutOfBounds => Err(PlacementError::OutOfBounds),
        Verdict::Collides { with } => Err(PlacementError::Collides { with }),
    }
}

fn warn_unknown(id: ItemId) -> PlacementError {
    tracing::warn!(%id, "operation on unknown item");
    PlacementError::UnknownItem(id)
}

#[allow(clippy::cast_possible_truncation)]
fn quarter_turn_parity(degrees: f64) -> i64 {
    ((degrees / QUARTER_TURN_DEGREES).round() as i64).rem_euclid(2)
}

impl PlacementEngine {
    /// Create an engine with the default (cosmetic) rotation mode.
    #[must_use]
    pub fn new(grid: GridConfig) -> Self {
        Self::with_rotation_mode(grid, RotationMode::default())
    }

    /// Create an engine with an explicit rotation mode.
    #[must_use]
    pub fn with_rotation_mode(grid: GridConfig, rotation_mode: RotationMode) -> Self {
        let baseline = Snapshot { items: Vec::new(), selection: Vec::new(), grid };
        Self {
            items: ItemStore::new(),
            grid,
            ui: UiState::default(),
            drag: DragState::Idle,
            rotation_mode,
            history: History::new(baseline),
        }
    }

    // --- Snapshot plumbing ---

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            items: self.items.sorted_items().into_iter().cloned().collect(),
            selection: self.ui.selection.ids(),
            grid: self.grid,
        }
    }

    fn push_history(&mut self) {
        let snapshot = self.snapshot();
        self.history.commit(snapshot);
    }

    fn apply_snapshot(&mut self, snapshot: Snapshot) {
        self.items.load_snapshot(snapshot.items);
        self.ui.selection.clear();
        for id in snapshot.selection {
            self.ui.selection.insert(id);
        }
        self.grid = snapshot.grid;
        self.drag = DragState::Idle;
    }

    /// Hydrate the document from a host snapshot.
    ///
    /// Clears the selection, aborts any gesture, and resets history so the
    /// loaded state becomes the new undo baseline.
    pub fn load_snapshot(&mut self, items: Vec<PlacedItem>) {
        let count = items.len();
        self.items.load_snapshot(items);
        self.ui.selection.clear();
        self.drag = DragState::Idle;
        let baseline = self.snapshot();
        self.history.reset(baseline);
        tracing::info!(count, "snapshot loaded");
    }

    // --- Item mutations ---

    /// Place a new item, generating a fresh id.
    ///
    /// # Errors
    ///
    /// Returns `InvalidFootprint` for a zero-sized footprint,
    /// `OutOfBounds` or `Collides` when validation rejects the placement.
    pub fn add_item(
        &mut self,
        kind: EquipmentKind,
        layer: Layer,
        cell: GridCell,
        footprint: Footprint,
    ) -> Result<Action, PlacementError> {
        if footprint.width == 0 || footprint.height == 0 {
            tracing::warn!(?footprint, "zero-sized footprint");
            return Err(PlacementError::InvalidFootprint);
        }
        let candidate = Candidate::new(layer, cell, footprint);
        ensure_valid(validate::validate(&candidate, &self.items, &self.grid, &[]))?;

        let item = PlacedItem {
            id: Uuid::new_v4(),
            kind,
            layer,
            cell,
            footprint,
            rotation_degrees: 0.0,
            group_id: None,
            props: serde_json::json!({}),
            updated_at: now_ms(),
        };
        self.items.insert(item.clone());
        self.push_history();
        tracing::debug!(id = %item.id, ?kind, "item added");
        Ok(Action::ItemAdded(item))
    }

    /// Place a new item using its kind's catalog defaults for layer and
    /// footprint.
    ///
    /// # Errors
    ///
    /// Same as [`Self::add_item`].
    pub fn add_from_catalog(
        &mut self,
        kind: EquipmentKind,
        cell: GridCell,
    ) -> Result<Action, PlacementError> {
        self.add_item(kind, kind.default_layer(), cell, kind.default_footprint())
    }

    /// Plan a move of `id` (and, rigidly, its group) so its anchor lands on
    /// `to`. Pure: returns the member moves without applying them.
    fn plan_move(
        &self,
        id: ItemId,
        to: GridCell,
    ) -> Result<Vec<(ItemId, GridCell)>, PlacementError> {
        let item = self
            .items
            .get(&id)
            .ok_or(PlacementError::UnknownItem(id))?;
        let dx = to.x - item.cell.x;
        let dy = to.y - item.cell.y;
        let members: Vec<&PlacedItem> = match item.group_id {
            Some(gid) => self
                .items
                .sorted_items()
                .into_iter()
                .filter(|i| i.group_id == Some(gid))
                .collect(),
            None => vec![item],
        };
        let exclude: Vec<ItemId> = members.iter().map(|i| i.id).collect();

        let mut moves = Vec::with_capacity(members.len());
        for member in members {
            let target = member.cell.offset_by(dx, dy);
            let candidate = Candidate::new(member.layer, target, member.footprint);
            ensure_valid(validate::validate(&candidate, &self.items, &self.grid, &exclude))?;
            moves.push((member.id, target));
        }
        Ok(moves)
    }

    /// Move an item's anchor to `to`. Grouped items move together as a
    /// rigid unit: either every member lands in bounds and collision-free,
    /// or nothing moves.
    ///
    /// A move onto the item's current cell is trivially accepted and does
    /// not create a history entry.
    ///
    /// # Errors
    ///
    /// Returns `UnknownItem` for an id not in the store, `OutOfBounds` or
    /// `Collides` when validation rejects any member's new position.
    pub fn move_item(&mut self, id: ItemId, to: GridCell) -> Result<Action, PlacementError> {
        let Some(item) = self.items.get(&id) else {
            return Err(warn_unknown(id));
        };
        if item.cell == to {
            return Ok(Action::ItemsMoved { moves: vec![(id, to)] });
        }

        let moves = self.plan_move(id, to)?;
        let ts = now_ms();
        for (member, cell) in &moves {
            let fields = PartialPlacedItem {
                cell: Some(*cell),
                updated_at: Some(ts),
                ..Default::default()
            };
            self.items.apply_partial(member, &fields);
        }
        self.push_history();
        tracing::debug!(%id, moved = moves.len(), "item moved");
        Ok(Action::ItemsMoved { moves })
    }

    /// Set an item's rotation.
    ///
    /// Under [`RotationMode::Cosmetic`] this always commits. Under
    /// [`RotationMode::RotatesFootprint`], a change of quarter-turn parity
    /// transposes the footprint, and the transposed candidate must
    /// validate; on rejection neither rotation nor footprint changes.
    ///
    /// # Errors
    ///
    /// Returns `UnknownItem` for an id not in the store, `OutOfBounds` or
    /// `Collides` when the transposed footprint is rejected.
    pub fn rotate_item(&mut self, id: ItemId, degrees: f64) -> Result<Action, PlacementError> {
        let Some(item) = self.items.get(&id) else {
            return Err(warn_unknown(id));
        };
        let mut fields = PartialPlacedItem {
            rotation_degrees: Some(degrees),
            updated_at: Some(now_ms()),
            ..Default::default()
        };
        if self.rotation_mode == RotationMode::RotatesFootprint
            && quarter_turn_parity(item.rotation_degrees) != quarter_turn_parity(degrees)
        {
            let transposed = item.footprint.transposed();
            let candidate = Candidate::new(item.layer, item.cell, transposed);
            ensure_valid(validate::validate(&candidate, &self.items, &self.grid, &[id]))?;
            fields.footprint = Some(transposed);
        }
        self.items.apply_partial(&id, &fields);
        self.push_history();
        tracing::debug!(%id, degrees, "item rotated");
        Ok(Action::ItemUpdated { id, fields })
    }

    /// Resize an item's footprint in place.
    ///
    /// # Errors
    ///
    /// Returns `InvalidFootprint` for a zero-sized footprint,
    /// `UnknownItem` for an id not in the store, `OutOfBounds` or
    /// `Collides` when the new footprint is rejected.
    pub fn resize_item(
        &mut self,
        id: ItemId,
        footprint: Footprint,
    ) -> Result<Action, PlacementError> {
        if footprint.width == 0 || footprint.height == 0 {
            tracing::warn!(?footprint, "zero-sized footprint");
            return Err(PlacementError::InvalidFootprint);
        }
        let Some(item) = self.items.get(&id) else {
            return Err(warn_unknown(id));
        };
        let candidate = Candidate::new(item.layer, item.cell, footprint);
        ensure_valid(validate::validate(&candidate, &self.items, &self.grid, &[id]))?;

        let fields = PartialPlacedItem {
            footprint: Some(footprint),
            updated_at: Some(now_ms()),
            ..Default::default()
        };
        self.items.apply_partial(&id, &fields);
        self.push_history();
        tracing::debug!(%id, ?footprint, "item resized");
        Ok(Action::ItemUpdated { id, fields })
    }

    /// Merge keys into an item's props bag (null values delete keys).
    ///
    /// # Errors
    ///
    /// Returns `UnknownItem` for an id not in the store.
    pub fn set_props(
        &mut self,
        id: ItemId,
        props: serde_json::Value,
    ) -> Result<Action, PlacementError> {
        if self.items.get(&id).is_none() {
            return Err(warn_unknown(id));
        }
        let fields = PartialPlacedItem {
            props: Some(props),
            updated_at: Some(now_ms()),
            ..Default::default()
        };
        self.items.apply_partial(&id, &fields);
        self.push_history();
        Ok(Action::ItemUpdated { id, fields })
    }

    /// Remove an item. Unconditional for known ids; also clears the id
    /// from the selection.
    ///
    /// # Errors
    ///
    /// Returns `UnknownItem` for an id not in the store.
    pub fn remove_item(&mut self, id: ItemId) -> Result<Action, PlacementError> {
        if self.items.remove(&id).is_none() {
            return Err(warn_unknown(id));
        }
        self.ui.selection.remove(&id);
        self.push_history();
        tracing::debug!(%id, "item removed");
        Ok(Action::ItemRemoved { id })
    }

    // --- Grouping ---

    /// Join the given items into a fresh group.
    ///
    /// # Errors
    ///
    /// Returns `GroupTooSmall` for fewer than two distinct ids and
    /// `UnknownItem` if any id is not in the store.
    pub fn group_items(&mut self, ids: &[ItemId]) -> Result<Action, PlacementError> {
        let mut members = ids.to_vec();
        members.sort_unstable();
        members.dedup();
        if members.len() < 2 {
            tracing::warn!(count = members.len(), "group needs at least two items");
            return Err(PlacementError::GroupTooSmall);
        }
        for id in &members {
            if self.items.get(id).is_none() {
                return Err(warn_unknown(*id));
            }
        }

        let group_id = Uuid::new_v4();
        let ts = now_ms();
        for id in &members {
            let fields = PartialPlacedItem {
                group_id: Some(Some(group_id)),
                updated_at: Some(ts),
                ..Default::default()
            };
            self.items.apply_partial(id, &fields);
        }
        self.push_history();
        tracing::debug!(%group_id, members = members.len(), "items grouped");
        Ok(Action::Grouped { group_id, members })
    }

    /// Join the current selection into a group.
    ///
    /// # Errors
    ///
    /// Same as [`Self::group_items`].
    pub fn group_selection(&mut self) -> Result<Action, PlacementError> {
        let ids = self.ui.selection.ids();
        self.group_items(&ids)
    }

    /// Dissolve a group, leaving its members in place.
    ///
    /// # Errors
    ///
    /// Returns `UnknownGroup` if no item carries `group_id`.
    pub fn ungroup(&mut self, group_id: Uuid) -> Result<Action, PlacementError> {
        let members: Vec<ItemId> = self
            .items
            .sorted_items()
            .into_iter()
            .filter(|i| i.group_id == Some(group_id))
            .map(|i| i.id)
            .collect();
        if members.is_empty() {
            tracing::warn!(%group_id, "ungroup of unknown group");
            return Err(PlacementError::UnknownGroup(group_id));
        }

        let ts = now_ms();
        for id in &members {
            let fields = PartialPlacedItem {
                group_id: Some(None),
                updated_at: Some(ts),
                ..Default::default()
            };
            self.items.apply_partial(id, &fields);
        }
        self.push_history();
        tracing::debug!(%group_id, members = members.len(), "group dissolved");
        Ok(Action::Ungrouped { group_id, members })
    }

    // --- Grid ---

    /// Replace the grid config after an explicit user resize.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if any existing item would no longer fit the
    /// new extent; the grid is unchanged in that case.
    pub fn set_grid(&mut self, grid: GridConfig) -> Result<Action, PlacementError> {
        for item in self.items.sorted_items() {
            let candidate = Candidate::new(item.layer, item.cell, item.footprint);
            if !validate::is_within_bounds(&candidate, &grid) {
                return Err(PlacementError::OutOfBounds);
            }
        }
        self.grid = grid;
        self.push_history();
        tracing::info!(rows = grid.rows(), columns = grid.columns(), "grid resized");
        Ok(Action::GridChanged(grid))
    }

    // --- History ---

    /// Step the document back to the state before the last committed
    /// mutation. Returns `None` when there is nothing to undo.
    pub fn undo(&mut self) -> Option<Action> {
        let snapshot = self.history.undo()?.clone();
        self.apply_snapshot(snapshot);
        tracing::debug!("undid last mutation");
        Some(Action::Restored)
    }

    /// Step the document forward again after an undo. Returns `None` when
    /// there is nothing to redo.
    pub fn redo(&mut self) -> Option<Action> {
        let snapshot = self.history.redo()?.clone();
        self.apply_snapshot(snapshot);
        tracing::debug!("redid last undone mutation");
        Some(Action::Restored)
    }

    /// Whether an undo step is available.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Whether a redo step is available.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    // --- Selection ---

    /// Select an item, adding it to the current selection.
    ///
    /// # Errors
    ///
    /// Returns `UnknownItem` for an id not in the store.
    pub fn select(&mut self, id: ItemId) -> Result<(), PlacementError> {
        if self.items.get(&id).is_none() {
            return Err(warn_unknown(id));
        }
        self.ui.selection.insert(id);
        Ok(())
    }

    /// Toggle an item's membership in the selection.
    ///
    /// # Errors
    ///
    /// Returns `UnknownItem` for an id not in the store.
    pub fn toggle_select(&mut self, id: ItemId) -> Result<(), PlacementError> {
        if self.items.get(&id).is_none() {
            return Err(warn_unknown(id));
        }
        self.ui.selection.toggle(id);
        Ok(())
    }

    /// Clear the selection.
    pub fn clear_selection(&mut self) {
        self.ui.selection.clear();
    }

    // --- Tools and pointer/keyboard events ---

    /// Set the active palette tool.
    pub fn set_tool(&mut self, tool: Tool) {
        self.ui.tool = tool;
    }

    /// Route a pointer-down through the active tool: a palette tool starts
    /// a placement gesture; the select tool selects the item under the
    /// pointer (if any) and starts dragging it.
    pub fn on_pointer_down(&mut self, pointer: WorldPoint) -> Vec<Action> {
        match self.ui.tool {
            Tool::Place(kind) => {
                self.begin_place(kind);
                Vec::new()
            }
            Tool::Select => {
                let cell = self.grid.world_to_cell(pointer);
                let Some(item) = self.items.item_at(cell) else {
                    if self.ui.selection.is_empty() {
                        return Vec::new();
                    }
                    self.ui.selection.clear();
                    return vec![Action::SelectionChanged];
                };
                let (id, anchor) = (item.id, item.cell);
                let changed = !self.ui.selection.contains(&id);
                if changed {
                    self.ui.selection.clear();
                    self.ui.selection.insert(id);
                }
                self.drag = DragState::DraggingItem {
                    id,
                    grab_dx: cell.x - anchor.x,
                    grab_dy: cell.y - anchor.y,
                };
                if changed {
                    vec![Action::SelectionChanged]
                } else {
                    Vec::new()
                }
            }
        }
    }

    /// Start dragging an existing item from `pointer`.
    ///
    /// # Errors
    ///
    /// Returns `UnknownItem` for an id not in the store.
    pub fn begin_drag(&mut self, id: ItemId, pointer: WorldPoint) -> Result<(), PlacementError> {
        let Some(item) = self.items.get(&id) else {
            return Err(warn_unknown(id));
        };
        let cell = self.grid.world_to_cell(pointer);
        self.drag = DragState::DraggingItem {
            id,
            grab_dx: cell.x - item.cell.x,
            grab_dy: cell.y - item.cell.y,
        };
        Ok(())
    }

    /// Start dragging a new item out of the palette, using the kind's
    /// catalog defaults.
    pub fn begin_place(&mut self, kind: EquipmentKind) {
        self.drag = DragState::PlacingNew {
            kind,
            layer: kind.default_layer(),
            footprint: kind.default_footprint(),
        };
    }

    /// Preview where the active gesture would drop at `pointer`.
    ///
    /// Pure: nothing is mutated, so an aborted gesture never touches the
    /// store. Returns `None` when no gesture is active (or the dragged
    /// item vanished from under the gesture).
    #[must_use]
    pub fn drag_to(&self, pointer: WorldPoint) -> Option<SnapPreview> {
        match self.drag {
            DragState::Idle => None,
            DragState::DraggingItem { id, grab_dx, grab_dy } => {
                let cell = self.candidate_cell(pointer, grab_dx, grab_dy);
                match self.plan_move(id, cell) {
                    Ok(_) => Some(SnapPreview { cell, verdict: Verdict::Valid }),
                    Err(PlacementError::OutOfBounds) => {
                        Some(SnapPreview { cell, verdict: Verdict::OutOfBounds })
                    }
                    Err(PlacementError::Collides { with }) => {
                        Some(SnapPreview { cell, verdict: Verdict::Collides { with } })
                    }
                    Err(_) => None,
                }
            }
            DragState::PlacingNew { layer, footprint, .. } => {
                let cell = self.grid.world_to_cell(pointer);
                let candidate = Candidate::new(layer, cell, footprint);
                let verdict = validate::validate(&candidate, &self.items, &self.grid, &[]);
                Some(SnapPreview { cell, verdict })
            }
        }
    }

    /// Finish the active gesture at `pointer`, committing through the
    /// validated mutations.
    ///
    /// Returns `Ok(None)` when no gesture was active or the drop landed on
    /// the dragged item's current cell. On `Err` the document is untouched
    /// and the host reverts the visual to the item's committed position.
    ///
    /// # Errors
    ///
    /// Same as [`Self::move_item`] / [`Self::add_item`] for the
    /// corresponding gesture.
    pub fn end_drag(&mut self, pointer: WorldPoint) -> Result<Option<Action>, PlacementError> {
        match std::mem::take(&mut self.drag) {
            DragState::Idle => Ok(None),
            DragState::DraggingItem { id, grab_dx, grab_dy } => {
                let to = self.candidate_cell(pointer, grab_dx, grab_dy);
                if self.items.get(&id).map(|i| i.cell) == Some(to) {
                    return Ok(None);
                }
                self.move_item(id, to).map(Some)
            }
            DragState::PlacingNew { kind, layer, footprint } => {
                let cell = self.grid.world_to_cell(pointer);
                self.add_item(kind, layer, cell, footprint).map(Some)
            }
        }
    }

    /// Abort the active gesture without touching the document.
    pub fn cancel_drag(&mut self) {
        self.drag = DragState::Idle;
    }

    /// Handle a key press: `Delete`/`Backspace` removes the selection,
    /// `Escape` cancels a gesture or clears the selection.
    pub fn on_key_down(&mut self, key: &Key) -> Vec<Action> {
        match key.0.as_str() {
            "Delete" | "Backspace" => self.delete_selection(),
            "Escape" => {
                if self.drag.is_active() {
                    self.cancel_drag();
                    Vec::new()
                } else if self.ui.selection.is_empty() {
                    Vec::new()
                } else {
                    self.ui.selection.clear();
                    vec![Action::SelectionChanged]
                }
            }
            _ => Vec::new(),
        }
    }

    /// Remove every selected item as a single undo step.
    pub fn delete_selection(&mut self) -> Vec<Action> {
        let ids = self.ui.selection.ids();
        if ids.is_empty() {
            return Vec::new();
        }
        let mut actions = Vec::with_capacity(ids.len());
        for id in ids {
            if self.items.remove(&id).is_some() {
                self.ui.selection.remove(&id);
                actions.push(Action::ItemRemoved { id });
            }
        }
        self.push_history();
        tracing::debug!(removed = actions.len(), "selection deleted");
        actions
    }

    fn candidate_cell(&self, pointer: WorldPoint, grab_dx: i32, grab_dy: i32) -> GridCell {
        let cell = self.grid.world_to_cell(pointer);
        GridCell::new(cell.x - grab_dx, cell.y - grab_dy)
    }

    // --- Queries ---

    /// Look up an item by id.
    #[must_use]
    pub fn item(&self, id: &ItemId) -> Option<&PlacedItem> {
        self.items.get(id)
    }

    /// The topmost item under a world-space point, if any.
    #[must_use]
    pub fn item_at(&self, pointer: WorldPoint) -> Option<&PlacedItem> {
        self.items.item_at(self.grid.world_to_cell(pointer))
    }

    /// Read-only access to the item store.
    #[must_use]
    pub fn items(&self) -> &ItemStore {
        &self.items
    }

    /// The current grid config.
    #[must_use]
    pub fn grid(&self) -> GridConfig {
        self.grid
    }

    /// The current selection.
    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.ui.selection
    }

    /// The active palette tool.
    #[must_use]
    pub fn tool(&self) -> Tool {
        self.ui.tool
    }

    /// The active drag gesture state.
    #[must_use]
    pub fn drag(&self) -> &DragState {
        &self.drag
    }

    /// How rotation interacts with footprints in this session.
    #[must_use]
    pub fn rotation_mode(&self) -> RotationMode {
        self.rotation_mode
    }
}
