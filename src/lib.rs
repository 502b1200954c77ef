//! Grid placement engine for the data-center floor editors.
//!
//! This crate is the headless core shared by the 2D isometric floor-plan
//! editor and the 3D equipment editor. It owns the authoritative list of
//! placed equipment, converts between grid cells and continuous world
//! coordinates, validates every proposed placement (bounds + same-layer
//! collision), and tracks a linear undo/redo history. The hosting editor is
//! responsible only for wiring pointer/keyboard events to the engine and
//! re-rendering from the resulting [`engine::Action`]s.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level [`engine::PlacementEngine`] and its actions/errors |
//! | [`item`] | Placed equipment types and the in-memory item store |
//! | [`grid`] | Grid configuration and grid↔world coordinate conversions |
//! | [`validate`] | Bounds and collision checks for candidate placements |
//! | [`history`] | Snapshot-based linear undo/redo |
//! | [`input`] | Drag gesture state machine, palette tools, and key events |
//! | [`consts`] | Shared numeric constants (grid extent limits, defaults) |

pub mod consts;
pub mod engine;
pub mod grid;
pub mod history;
pub mod input;
pub mod item;
pub mod validate;
