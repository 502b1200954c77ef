use uuid::Uuid;

use super::*;

// =============================================================
// Tool
// =============================================================

#[test]
fn tool_default_is_select() {
    assert_eq!(Tool::default(), Tool::Select);
}

#[test]
fn tool_select_is_not_place() {
    assert!(!Tool::Select.is_place());
}

#[test]
fn tool_place_is_place() {
    assert!(Tool::Place(EquipmentKind::Rack).is_place());
}

#[test]
fn tool_place_carries_kind() {
    let tool = Tool::Place(EquipmentKind::CoolingUnit);
    assert_eq!(tool, Tool::Place(EquipmentKind::CoolingUnit));
    assert_ne!(tool, Tool::Place(EquipmentKind::Rack));
}

// =============================================================
// Key
// =============================================================

#[test]
fn key_equality() {
    assert_eq!(Key("Delete".into()), Key("Delete".into()));
    assert_ne!(Key("Delete".into()), Key("Escape".into()));
}

#[test]
fn key_stores_string() {
    let k = Key("Escape".into());
    assert_eq!(k.0, "Escape");
}

// =============================================================
// Selection
// =============================================================

#[test]
fn selection_starts_empty() {
    let s = Selection::new();
    assert!(s.is_empty());
    assert_eq!(s.len(), 0);
    assert!(s.ids().is_empty());
}

#[test]
fn selection_insert_and_contains() {
    let mut s = Selection::new();
    let id = Uuid::new_v4();
    s.insert(id);
    assert!(s.contains(&id));
    assert_eq!(s.len(), 1);
}

#[test]
fn selection_insert_is_idempotent() {
    let mut s = Selection::new();
    let id = Uuid::new_v4();
    s.insert(id);
    s.insert(id);
    assert_eq!(s.len(), 1);
}

#[test]
fn selection_remove_reports_presence() {
    let mut s = Selection::new();
    let id = Uuid::new_v4();
    s.insert(id);
    assert!(s.remove(&id));
    assert!(!s.remove(&id));
    assert!(s.is_empty());
}

#[test]
fn selection_toggle_adds_then_removes() {
    let mut s = Selection::new();
    let id = Uuid::new_v4();
    s.toggle(id);
    assert!(s.contains(&id));
    s.toggle(id);
    assert!(!s.contains(&id));
}

#[test]
fn selection_clear_removes_everything() {
    let mut s = Selection::new();
    s.insert(Uuid::new_v4());
    s.insert(Uuid::new_v4());
    s.clear();
    assert!(s.is_empty());
}

#[test]
fn selection_ids_are_sorted() {
    let mut s = Selection::new();
    let a = Uuid::from_u128(3);
    let b = Uuid::from_u128(1);
    let c = Uuid::from_u128(2);
    s.insert(a);
    s.insert(b);
    s.insert(c);
    assert_eq!(s.ids(), vec![b, c, a]);
}

// =============================================================
// UiState
// =============================================================

#[test]
fn ui_state_default_tool_is_select() {
    let ui = UiState::default();
    assert_eq!(ui.tool, Tool::Select);
}

#[test]
fn ui_state_default_selection_is_empty() {
    let ui = UiState::default();
    assert!(ui.selection.is_empty());
}

// =============================================================
// DragState
// =============================================================

#[test]
fn drag_state_default_is_idle() {
    assert!(matches!(DragState::default(), DragState::Idle));
}

#[test]
fn drag_state_idle_is_not_active() {
    assert!(!DragState::Idle.is_active());
}

#[test]
fn drag_state_gestures_are_active() {
    let dragging = DragState::DraggingItem { id: Uuid::new_v4(), grab_dx: 0, grab_dy: 1 };
    assert!(dragging.is_active());

    let placing = DragState::PlacingNew {
        kind: EquipmentKind::Rack,
        layer: Layer::Floor,
        footprint: Footprint::new(1, 2),
    };
    assert!(placing.is_active());
}

// =============================================================
// SnapPreview
// =============================================================

#[test]
fn snap_preview_equality() {
    let a = SnapPreview { cell: GridCell::new(1, 2), verdict: Verdict::Valid };
    let b = SnapPreview { cell: GridCell::new(1, 2), verdict: Verdict::Valid };
    assert_eq!(a, b);
    let c = SnapPreview { cell: GridCell::new(1, 2), verdict: Verdict::OutOfBounds };
    assert_ne!(a, c);
}
