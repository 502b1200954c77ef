use serde_json::json;
use uuid::Uuid;

use super::*;
use crate::item::{EquipmentKind, PlacedItem};

// =============================================================
// Helpers
// =============================================================

fn grid10() -> GridConfig {
    GridConfig::new(10, 10, 40.0).unwrap()
}

fn item_on(layer: Layer, x: i32, y: i32, w: u32, h: u32) -> PlacedItem {
    PlacedItem {
        id: Uuid::new_v4(),
        kind: EquipmentKind::Rack,
        layer,
        cell: GridCell::new(x, y),
        footprint: Footprint::new(w, h),
        rotation_degrees: 0.0,
        group_id: None,
        props: json!({}),
        updated_at: 0,
    }
}

fn store_with(items: Vec<PlacedItem>) -> ItemStore {
    let mut store = ItemStore::new();
    for item in items {
        store.insert(item);
    }
    store
}

fn floor_candidate(x: i32, y: i32, w: u32, h: u32) -> Candidate {
    Candidate::new(Layer::Floor, GridCell::new(x, y), Footprint::new(w, h))
}

// =============================================================
// Verdict
// =============================================================

#[test]
fn verdict_valid_is_valid() {
    assert!(Verdict::Valid.is_valid());
}

#[test]
fn verdict_rejections_are_not_valid() {
    assert!(!Verdict::OutOfBounds.is_valid());
    assert!(!Verdict::Collides { with: Uuid::new_v4() }.is_valid());
}

// =============================================================
// is_within_bounds
// =============================================================

#[test]
fn bounds_accepts_interior() {
    assert!(is_within_bounds(&floor_candidate(3, 4, 2, 2), &grid10()));
}

#[test]
fn bounds_accepts_origin() {
    assert!(is_within_bounds(&floor_candidate(0, 0, 1, 1), &grid10()));
}

#[test]
fn bounds_accepts_footprint_flush_with_edge() {
    assert!(is_within_bounds(&floor_candidate(8, 8, 2, 2), &grid10()));
    assert!(is_within_bounds(&floor_candidate(9, 0, 1, 10), &grid10()));
}

#[test]
fn bounds_rejects_footprint_past_edge() {
    // 9 + 2 = 11 > 10.
    assert!(!is_within_bounds(&floor_candidate(9, 9, 2, 2), &grid10()));
}

#[test]
fn bounds_rejects_negative_anchor() {
    assert!(!is_within_bounds(&floor_candidate(-1, 2, 1, 1), &grid10()));
    assert!(!is_within_bounds(&floor_candidate(2, -1, 1, 1), &grid10()));
}

#[test]
fn bounds_rejects_anchor_at_extent() {
    assert!(!is_within_bounds(&floor_candidate(10, 0, 1, 1), &grid10()));
}

#[test]
fn bounds_rejects_wide_footprint_overflowing_columns() {
    assert!(!is_within_bounds(&floor_candidate(5, 0, 6, 1), &grid10()));
}

#[test]
fn bounds_distinguishes_rows_from_columns() {
    let g = GridConfig::new(5, 20, 40.0).unwrap();
    // 15 columns in, fine; 15 rows down, not.
    assert!(is_within_bounds(&floor_candidate(15, 0, 1, 1), &g));
    assert!(!is_within_bounds(&floor_candidate(0, 15, 1, 1), &g));
}

// =============================================================
// overlaps
// =============================================================

#[test]
fn overlaps_identical_boxes() {
    let a = GridCell::new(2, 2);
    assert!(overlaps(a, Footprint::new(2, 2), a, Footprint::new(2, 2)));
}

#[test]
fn overlaps_partial_intersection() {
    assert!(overlaps(
        GridCell::new(0, 0),
        Footprint::new(2, 2),
        GridCell::new(1, 1),
        Footprint::new(2, 2),
    ));
}

#[test]
fn overlaps_contained_box() {
    assert!(overlaps(
        GridCell::new(0, 0),
        Footprint::new(4, 4),
        GridCell::new(1, 1),
        Footprint::new(1, 1),
    ));
}

#[test]
fn overlaps_touching_edges_is_not_overlap() {
    // A occupies columns 0-1, B starts at column 2.
    assert!(!overlaps(
        GridCell::new(0, 0),
        Footprint::new(2, 2),
        GridCell::new(2, 0),
        Footprint::new(2, 2),
    ));
}

#[test]
fn overlaps_touching_corners_is_not_overlap() {
    assert!(!overlaps(
        GridCell::new(0, 0),
        Footprint::new(2, 2),
        GridCell::new(2, 2),
        Footprint::new(2, 2),
    ));
}

#[test]
fn overlaps_disjoint_boxes() {
    assert!(!overlaps(
        GridCell::new(0, 0),
        Footprint::new(1, 1),
        GridCell::new(5, 5),
        Footprint::new(1, 1),
    ));
}

#[test]
fn overlaps_is_symmetric() {
    let cases = [
        (GridCell::new(0, 0), Footprint::new(2, 3), GridCell::new(1, 2), Footprint::new(3, 1)),
        (GridCell::new(4, 4), Footprint::new(1, 1), GridCell::new(4, 4), Footprint::new(2, 2)),
        (GridCell::new(0, 0), Footprint::new(1, 1), GridCell::new(1, 0), Footprint::new(1, 1)),
        (GridCell::new(-2, -2), Footprint::new(4, 4), GridCell::new(1, 1), Footprint::new(2, 2)),
    ];
    for (a, a_fp, b, b_fp) in cases {
        assert_eq!(overlaps(a, a_fp, b, b_fp), overlaps(b, b_fp, a, a_fp));
    }
}

// =============================================================
// validate
// =============================================================

#[test]
fn validate_empty_store_in_bounds_is_valid() {
    let store = ItemStore::new();
    let verdict = validate(&floor_candidate(2, 2, 2, 2), &store, &grid10(), &[]);
    assert_eq!(verdict, Verdict::Valid);
}

#[test]
fn validate_out_of_bounds_wins_over_collision() {
    // The candidate both leaves the grid and overlaps an item; bounds are
    // checked first.
    let blocker = item_on(Layer::Floor, 8, 8, 2, 2);
    let store = store_with(vec![blocker]);
    let verdict = validate(&floor_candidate(9, 9, 2, 2), &store, &grid10(), &[]);
    assert_eq!(verdict, Verdict::OutOfBounds);
}

#[test]
fn validate_reports_blocking_item() {
    let blocker = item_on(Layer::Floor, 2, 2, 1, 2);
    let blocker_id = blocker.id;
    let store = store_with(vec![blocker]);
    let verdict = validate(&floor_candidate(2, 2, 1, 1), &store, &grid10(), &[]);
    assert_eq!(verdict, Verdict::Collides { with: blocker_id });
}

#[test]
fn validate_ignores_other_layers() {
    let wall_item = item_on(Layer::Wall, 2, 2, 2, 2);
    let store = store_with(vec![wall_item]);
    let verdict = validate(&floor_candidate(2, 2, 1, 1), &store, &grid10(), &[]);
    assert_eq!(verdict, Verdict::Valid);
}

#[test]
fn validate_accepts_adjacent_touching_footprints() {
    // A occupies rows 2-3 at column 2; B occupies rows 4-5. Touching at
    // the row-4 boundary is not overlap.
    let a = item_on(Layer::Floor, 2, 2, 1, 2);
    let store = store_with(vec![a]);
    let verdict = validate(&floor_candidate(2, 4, 1, 2), &store, &grid10(), &[]);
    assert_eq!(verdict, Verdict::Valid);
}

#[test]
fn validate_excluded_item_does_not_collide() {
    let a = item_on(Layer::Floor, 2, 2, 2, 2);
    let a_id = a.id;
    let store = store_with(vec![a]);
    let candidate = floor_candidate(3, 3, 2, 2);
    assert_eq!(
        validate(&candidate, &store, &grid10(), &[a_id]),
        Verdict::Valid
    );
    assert_eq!(
        validate(&candidate, &store, &grid10(), &[]),
        Verdict::Collides { with: a_id }
    );
}

#[test]
fn validate_excludes_multiple_ids() {
    let a = item_on(Layer::Floor, 0, 0, 2, 2);
    let b = item_on(Layer::Floor, 2, 0, 2, 2);
    let (a_id, b_id) = (a.id, b.id);
    let store = store_with(vec![a, b]);
    // A candidate overlapping both passes when both are excluded.
    let candidate = floor_candidate(1, 0, 2, 2);
    assert_eq!(
        validate(&candidate, &store, &grid10(), &[a_id, b_id]),
        Verdict::Valid
    );
}

#[test]
fn validate_collision_among_many_reports_sorted_first() {
    let mut a = item_on(Layer::Floor, 0, 0, 2, 2);
    let mut b = item_on(Layer::Floor, 2, 0, 2, 2);
    // Force a known id order.
    a.id = Uuid::from_u128(1);
    b.id = Uuid::from_u128(2);
    let store = store_with(vec![a, b]);
    let candidate = floor_candidate(1, 0, 2, 2);
    assert_eq!(
        validate(&candidate, &store, &grid10(), &[]),
        Verdict::Collides { with: Uuid::from_u128(1) }
    );
}
