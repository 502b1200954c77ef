//! Shared numeric constants for the placement engine.

// ── Grid extent ─────────────────────────────────────────────────

/// Smallest allowed grid edge, in cells.
pub const MIN_GRID_CELLS: u32 = 5;

/// Largest allowed grid edge, in cells.
pub const MAX_GRID_CELLS: u32 = 30;

/// Default edge length of one grid cell, in world units.
pub const DEFAULT_CELL_SIZE: f64 = 40.0;

/// Default grid edge for a fresh editor session, in cells.
pub const DEFAULT_GRID_CELLS: u32 = 10;

// ── Rotation ────────────────────────────────────────────────────

/// One quarter turn, in degrees. Footprint transposition is decided by
/// quarter-turn parity.
pub const QUARTER_TURN_DEGREES: f64 = 90.0;
