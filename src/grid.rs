//! Grid configuration and grid↔world coordinate conversions.
//!
//! All three editors address equipment by integer cell; the renderers work
//! in continuous world units. `GridConfig` owns that mapping. The forward
//! direction ([`GridConfig::cell_to_world`]) centers the anchor point
//! within its cell; the inverse ([`GridConfig::world_to_cell`]) floors, so
//! a point exactly on a cell boundary belongs to the cell whose lower
//! corner it touches, and the pair round-trips for any point produced by
//! the forward mapping.

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_CELL_SIZE, DEFAULT_GRID_CELLS, MAX_GRID_CELLS, MIN_GRID_CELLS};

/// Error returned when constructing an invalid [`GridConfig`].
///
/// These indicate caller bugs (bad wiring in the hosting screen), not user
/// actions, and are surfaced as error values rather than panics.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GridError {
    /// The cell size is zero, negative, NaN, or infinite.
    #[error("cell size must be finite and positive, got {0}")]
    NonPositiveCellSize(f64),
    /// Rows or columns fall outside the supported extent range.
    #[error("grid extent {rows}x{columns} outside supported range {MIN_GRID_CELLS}..={MAX_GRID_CELLS}")]
    ExtentOutOfRange {
        /// Requested row count.
        rows: u32,
        /// Requested column count.
        columns: u32,
    },
}

/// A discrete cell address on the placement grid.
///
/// Signed so that candidates dragged past the origin are representable and
/// can be rejected by validation instead of silently clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridCell {
    pub x: i32,
    pub y: i32,
}

impl GridCell {
    #[must_use]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// This cell translated by `(dx, dy)` cells.
    #[must_use]
    pub fn offset_by(self, dx: i32, dy: i32) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }
}

/// A point in continuous world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldPoint {
    pub x: f64,
    pub y: f64,
}

impl WorldPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A fixed world-space nudge applied when mapping a cell to world space.
///
/// Used to align an equipment model's pivot with its footprint (each
/// [`crate::item::EquipmentKind`] carries its own offset).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WorldOffset {
    pub x: f64,
    pub y: f64,
}

impl WorldOffset {
    /// The zero offset.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The addressable grid extent and the world-unit size of one cell.
///
/// Created once per editor session and changed only by explicit user
/// resize actions, routed through
/// [`crate::engine::PlacementEngine::set_grid`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    rows: u32,
    columns: u32,
    cell_size: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_GRID_CELLS,
            columns: DEFAULT_GRID_CELLS,
            cell_size: DEFAULT_CELL_SIZE,
        }
    }
}

impl GridConfig {
    /// Create a grid config, validating extent and cell size.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::ExtentOutOfRange`] if `rows` or `columns` fall
    /// outside `MIN_GRID_CELLS..=MAX_GRID_CELLS`, and
    /// [`GridError::NonPositiveCellSize`] if `cell_size` is not a finite
    /// positive number.
    pub fn new(rows: u32, columns: u32, cell_size: f64) -> Result<Self, GridError> {
        if !cell_size.is_finite() || cell_size <= 0.0 {
            return Err(GridError::NonPositiveCellSize(cell_size));
        }
        let extent_ok = |n: u32| (MIN_GRID_CELLS..=MAX_GRID_CELLS).contains(&n);
        if !extent_ok(rows) || !extent_ok(columns) {
            return Err(GridError::ExtentOutOfRange { rows, columns });
        }
        Ok(Self { rows, columns, cell_size })
    }

    /// Number of rows (the grid's extent along y).
    #[must_use]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns (the grid's extent along x).
    #[must_use]
    pub fn columns(&self) -> u32 {
        self.columns
    }

    /// Edge length of one cell, in world units.
    #[must_use]
    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Convert a cell address to the world-space center of its anchor cell,
    /// nudged by `offset`.
    #[must_use]
    pub fn cell_to_world(&self, cell: GridCell, offset: WorldOffset) -> WorldPoint {
        let half = self.cell_size / 2.0;
        WorldPoint {
            x: f64::from(cell.x) * self.cell_size + half + offset.x,
            y: f64::from(cell.y) * self.cell_size + half + offset.y,
        }
    }

    /// Convert a world-space point to the cell containing it.
    ///
    /// Floors rather than rounds: a point exactly on a cell boundary maps
    /// to the cell whose lower corner it touches. Round-trips with
    /// [`Self::cell_to_world`] for any point the forward mapping produced.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn world_to_cell(&self, point: WorldPoint) -> GridCell {
        GridCell {
            x: (point.x / self.cell_size).floor() as i32,
            y: (point.y / self.cell_size).floor() as i32,
        }
    }
}
