//! Document model: placed equipment, its properties, and the in-memory store.
//!
//! This module defines the core data types that describe what is on the
//! floor grid (`PlacedItem`, `EquipmentKind`, `Layer`, `Footprint`), a
//! sparse-update type for incremental edits (`PartialPlacedItem`), a typed
//! accessor for the open-ended `props` JSON bag (`Props`), and the runtime
//! store that owns all live items (`ItemStore`).
//!
//! Data flows into this layer from host snapshots (JSON deserialization)
//! and from the placement engine (validated mutations). Renderers read from
//! `ItemStore` via `sorted_items` to determine draw order.

#[cfg(test)]
#[path = "item_test.rs"]
mod item_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::grid::{GridCell, WorldOffset};

/// Unique identifier for a placed item.
pub type ItemId = Uuid;

/// The rectangular run of grid cells an item occupies, in cell units.
///
/// Both edges are at least 1; a zero edge is rejected at mutation time as
/// a precondition violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Footprint {
    /// Width in cells (along x).
    pub width: u32,
    /// Height in cells (along y).
    pub height: u32,
}

impl Footprint {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// This footprint with width and height swapped, as after a quarter
    /// turn.
    #[must_use]
    pub fn transposed(self) -> Self {
        Self { width: self.height, height: self.width }
    }
}

/// A named partition of the placement space.
///
/// Collision is checked only within a layer; items on different layers
/// never collide with each other. Ordering is draw order, bottom to top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    /// Floor-standing equipment (racks, CRACs, PDUs on plinths).
    Floor,
    /// Wall-mounted equipment.
    Wall,
    /// Overhead equipment (cable trays, ducting).
    Overhead,
}

/// The kind of equipment a placed item represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EquipmentKind {
    /// 42U equipment rack.
    Rack,
    /// Standalone server or appliance.
    Server,
    /// Computer-room air conditioning unit.
    CoolingUnit,
    /// Power distribution unit.
    Pdu,
    /// Top-of-rack or aggregation switch.
    NetworkSwitch,
    /// Overhead cable tray segment.
    CableTray,
}

impl EquipmentKind {
    /// The footprint this kind occupies when added from the palette.
    #[must_use]
    pub fn default_footprint(self) -> Footprint {
        match self {
            Self::Rack => Footprint::new(1, 2),
            Self::Server | Self::Pdu | Self::NetworkSwitch => Footprint::new(1, 1),
            Self::CoolingUnit => Footprint::new(2, 2),
            Self::CableTray => Footprint::new(1, 4),
        }
    }

    /// The layer this kind mounts on when added from the palette.
    #[must_use]
    pub fn default_layer(self) -> Layer {
        match self {
            Self::Rack | Self::Server | Self::CoolingUnit => Layer::Floor,
            Self::Pdu | Self::NetworkSwitch => Layer::Wall,
            Self::CableTray => Layer::Overhead,
        }
    }

    /// Fixed world-space nudge aligning this kind's model pivot with its
    /// footprint.
    #[must_use]
    pub fn world_offset(self) -> WorldOffset {
        match self {
            Self::Rack | Self::Server | Self::Pdu | Self::NetworkSwitch => WorldOffset::ZERO,
            Self::CoolingUnit => WorldOffset::new(0.0, -6.0),
            Self::CableTray => WorldOffset::new(0.0, 8.0),
        }
    }
}

/// A placed item as stored in the document and in snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedItem {
    /// Unique identifier for this item.
    pub id: ItemId,
    /// Equipment kind.
    pub kind: EquipmentKind,
    /// Placement layer; collision is scoped to this.
    pub layer: Layer,
    /// Anchor cell of the footprint (its lowest corner).
    pub cell: GridCell,
    /// Rectangular run of cells occupied, anchored at `cell`.
    pub footprint: Footprint,
    /// Clockwise rotation in degrees around the footprint center.
    pub rotation_degrees: f64,
    /// Items sharing a group id move together as a rigid unit.
    pub group_id: Option<Uuid>,
    /// Open-ended per-item properties (label, asset tag, power draw, etc.).
    pub props: serde_json::Value,
    /// Milliseconds since the Unix epoch of the last committed mutation.
    pub updated_at: i64,
}

impl PlacedItem {
    /// Whether this item's footprint covers `cell`.
    #[must_use]
    pub fn covers(&self, cell: GridCell) -> bool {
        let (x, y) = (i64::from(cell.x), i64::from(cell.y));
        let (ax, ay) = (i64::from(self.cell.x), i64::from(self.cell.y));
        x >= ax
            && x < ax + i64::from(self.footprint.width)
            && y >= ay
            && y < ay + i64::from(self.footprint.height)
    }
}

/// Sparse update for a placed item. Only present fields are applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PartialPlacedItem {
    /// New anchor cell, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cell: Option<GridCell>,
    /// New footprint, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footprint: Option<Footprint>,
    /// New rotation in degrees, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation_degrees: Option<f64>,
    /// New group membership: `Some(None)` clears the group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<Option<Uuid>>,
    /// Props keys to merge or remove (null values delete keys).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub props: Option<serde_json::Value>,
    /// New last-mutation timestamp, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
}

/// Typed access to common props fields from a `PlacedItem.props` JSON value.
pub struct Props<'a> {
    value: &'a serde_json::Value,
}

impl<'a> Props<'a> {
    /// Wrap a reference to a `props` JSON value for typed access.
    #[must_use]
    pub fn new(value: &'a serde_json::Value) -> Self {
        Self { value }
    }

    /// Display label shown on the floor plan. Empty string when absent.
    #[must_use]
    pub fn label(&self) -> &str {
        self.value
            .get("label")
            .and_then(|v| v.as_str())
            .unwrap_or("")
    }

    /// Inventory asset tag. Empty string when absent.
    #[must_use]
    pub fn asset_tag(&self) -> &str {
        self.value
            .get("asset_tag")
            .and_then(|v| v.as_str())
            .unwrap_or("")
    }

    /// Rated power draw in watts. Defaults to `0.0` when absent.
    #[must_use]
    pub fn power_draw_watts(&self) -> f64 {
        self.value
            .get("power_draw_watts")
            .and_then(serde_json::Value::as_f64)
            .unwrap_or(0.0)
    }
}

/// In-memory store of placed items.
pub struct ItemStore {
    items: HashMap<ItemId, PlacedItem>,
}

impl ItemStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self { items: HashMap::new() }
    }

    /// Insert or replace an item. If an item with the same `id` already
    /// exists it is overwritten.
    pub fn insert(&mut self, item: PlacedItem) {
        self.items.insert(item.id, item);
    }

    /// Remove an item by id, returning it if it was present.
    pub fn remove(&mut self, id: &ItemId) -> Option<PlacedItem> {
        self.items.remove(id)
    }

    /// Return a reference to an item by id.
    #[must_use]
    pub fn get(&self, id: &ItemId) -> Option<&PlacedItem> {
        self.items.get(id)
    }

    /// Apply a partial update to an existing item. Returns false if the
    /// item doesn't exist.
    pub fn apply_partial(&mut self, id: &ItemId, partial: &PartialPlacedItem) -> bool {
        let Some(item) = self.items.get_mut(id) else {
            return false;
        };
        if let Some(cell) = partial.cell {
            item.cell = cell;
        }
        if let Some(footprint) = partial.footprint {
            item.footprint = footprint;
        }
        if let Some(r) = partial.rotation_degrees {
            item.rotation_degrees = r;
        }
        if let Some(group_id) = partial.group_id {
            item.group_id = group_id;
        }
        if let Some(ts) = partial.updated_at {
            item.updated_at = ts;
        }
        if let Some(ref props) = partial.props {
            let Some(incoming) = props.as_object() else {
                return false;
            };

            if !item.props.is_object() {
                item.props = serde_json::json!({});
            }

            if let Some(existing) = item.props.as_object_mut() {
                for (k, v) in incoming {
                    if v.is_null() {
                        existing.remove(k);
                    } else {
                        existing.insert(k.clone(), v.clone());
                    }
                }
            }
        }
        true
    }

    /// Replace all items with a full snapshot.
    pub fn load_snapshot(&mut self, items: Vec<PlacedItem>) {
        self.items.clear();
        for item in items {
            self.items.insert(item.id, item);
        }
    }

    /// Iterate over all items in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &PlacedItem> {
        self.items.values()
    }

    /// Return all items sorted by `(layer, id)` for deterministic draw order.
    #[must_use]
    pub fn sorted_items(&self) -> Vec<&PlacedItem> {
        let mut items: Vec<&PlacedItem> = self.items.values().collect();
        items.sort_by(|a, b| a.layer.cmp(&b.layer).then_with(|| a.id.cmp(&b.id)));
        items
    }

    /// The topmost item whose footprint covers `cell`, if any.
    ///
    /// Layers are searched top-down (overhead before wall before floor), so
    /// a pointer over stacked layers picks the one drawn on top.
    #[must_use]
    pub fn item_at(&self, cell: GridCell) -> Option<&PlacedItem> {
        self.sorted_items()
            .into_iter()
            .rev()
            .find(|item| item.covers(cell))
    }

    /// Number of items currently in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the store contains no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for ItemStore {
    fn default() -> Self {
        Self::new()
    }
}
