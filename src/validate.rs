//! Bounds and collision checks for candidate placements.
//!
//! Every mutation the engine commits goes through [`validate`] first. The
//! checks are pure: the caller decides whether a rejection reverts a drag,
//! highlights the blocking item, or is simply dropped. Footprints are
//! half-open boxes (`[x, x+w) × [y, y+h)`), so two items that merely touch
//! along an edge do not collide.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use crate::grid::{GridCell, GridConfig};
use crate::item::{Footprint, ItemId, ItemStore, Layer};

/// A proposed placement: where an item (existing or new) wants to be.
#[derive(Debug, Clone, Copy)]
pub struct Candidate {
    /// Layer the candidate would occupy; collision is scoped to this.
    pub layer: Layer,
    /// Proposed anchor cell.
    pub cell: GridCell,
    /// Proposed footprint.
    pub footprint: Footprint,
}

impl Candidate {
    #[must_use]
    pub fn new(layer: Layer, cell: GridCell, footprint: Footprint) -> Self {
        Self { layer, cell, footprint }
    }
}

/// Outcome of validating a candidate placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// In bounds and collision-free; safe to commit.
    Valid,
    /// The footprint extends past the grid extent.
    OutOfBounds,
    /// The footprint overlaps another item on the same layer.
    Collides {
        /// The first blocking item found.
        with: ItemId,
    },
}

impl Verdict {
    /// Whether this verdict permits a commit.
    #[must_use]
    pub fn is_valid(self) -> bool {
        matches!(self, Self::Valid)
    }
}

/// True iff the candidate's footprint lies entirely within the grid.
#[must_use]
pub fn is_within_bounds(candidate: &Candidate, grid: &GridConfig) -> bool {
    let cell = candidate.cell;
    let fp = candidate.footprint;
    cell.x >= 0
        && cell.y >= 0
        && i64::from(cell.x) + i64::from(fp.width) <= i64::from(grid.columns())
        && i64::from(cell.y) + i64::from(fp.height) <= i64::from(grid.rows())
}

/// True iff two footprints, anchored at `a` and `b`, intersect.
///
/// Half-open box test: touching edges do not count as overlap.
#[must_use]
pub fn overlaps(a: GridCell, a_fp: Footprint, b: GridCell, b_fp: Footprint) -> bool {
    let (ax, ay) = (i64::from(a.x), i64::from(a.y));
    let (bx, by) = (i64::from(b.x), i64::from(b.y));
    ax < bx + i64::from(b_fp.width)
        && bx < ax + i64::from(a_fp.width)
        && ay < by + i64::from(b_fp.height)
        && by < ay + i64::from(a_fp.height)
}

/// Validate a candidate against the grid extent and all same-layer items.
///
/// Bounds are checked first (cheaper, short-circuits). `exclude` lists item
/// ids ignored during the collision scan: the moving item itself, or every
/// member of a group being moved as a rigid unit.
#[must_use]
pub fn validate(
    candidate: &Candidate,
    items: &ItemStore,
    grid: &GridConfig,
    exclude: &[ItemId],
) -> Verdict {
    if !is_within_bounds(candidate, grid) {
        return Verdict::OutOfBounds;
    }
    // Scan in sorted order so the reported blocker is deterministic.
    for item in items.sorted_items() {
        if item.layer != candidate.layer || exclude.contains(&item.id) {
            continue;
        }
        if overlaps(candidate.cell, candidate.footprint, item.cell, item.footprint) {
            return Verdict::Collides { with: item.id };
        }
    }
    Verdict::Valid
}
