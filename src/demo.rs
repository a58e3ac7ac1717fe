//! Built-in demo data for the viewer.
//!
//! Provides a small hand-authored lineage (two lineages, one division) and a
//! matching time-slice layout, so the GUI is explorable without a snapshot
//! file on disk.

use crate::forest::Forest;
use crate::snapshot::GraphSnapshot;
use once_cell::sync::Lazy;

static DEMO_LINEAGE: Lazy<GraphSnapshot> = Lazy::new(|| {
    build_demo_forest()
        .to_snapshot()
        .expect("demo forest is well formed")
});

static DEMO_SLICE: Lazy<GraphSnapshot> = Lazy::new(|| {
    GraphSnapshot::from_json_value(serde_json::json!({
        "width": 6,
        "height": 5,
        "id_to_node": {
            "2_1": {"x": 1.0, "y": 3.5, "color": "#2e86c1"},
            "2_2": {"x": 4.0, "y": 3.0, "color": "#28b463"},
            "3_1": {"x": 0.5, "y": 1.5, "color": "#2e86c1", "parent_id": "2_1", "is_child": true},
            "3_2": {"x": 2.0, "y": 1.0, "color": "#5dade2", "parent_id": "2_1", "is_child": true},
            "3_3": {"x": 4.5, "y": 1.0, "color": "#28b463", "parent_id": "2_2", "is_child": true},
        }
    }))
    .expect("demo slice is well formed")
});

fn build_demo_forest() -> Forest {
    let mut forest = Forest::new();
    // Lineage one: a track that divides at ordinal 2.
    let spine = [("0_1", 0), ("1_1", 1), ("2_1", 2)];
    for (id, ordinal) in spine {
        forest.add_node(id, ordinal, Some(1)).expect("unique demo ids");
    }
    forest.add_node("3_1", 3, Some(1)).expect("unique demo ids");
    forest.add_node("3_2", 3, Some(2)).expect("unique demo ids");
    forest.add_node("4_1", 4, Some(1)).expect("unique demo ids");
    forest.add_node("4_2", 4, Some(2)).expect("unique demo ids");
    // Lineage two: an undivided track.
    forest.add_node("1_3", 1, Some(3)).expect("unique demo ids");
    forest.add_node("2_3", 2, Some(3)).expect("unique demo ids");
    forest.add_node("3_3", 3, Some(3)).expect("unique demo ids");

    let links = [
        ("1_1", "0_1"),
        ("2_1", "1_1"),
        ("3_1", "2_1"),
        ("3_2", "2_1"),
        ("4_1", "3_1"),
        ("4_2", "3_2"),
        ("2_3", "1_3"),
        ("3_3", "2_3"),
    ];
    for (child, parent) in links {
        forest.set_parent(child, parent).expect("demo links are valid");
    }

    let colors = [
        ("0_1", "#2e86c1"),
        ("1_1", "#2e86c1"),
        ("2_1", "#2e86c1"),
        ("3_1", "#2e86c1"),
        ("4_1", "#2e86c1"),
        ("3_2", "#5dade2"),
        ("4_2", "#5dade2"),
        ("1_3", "#28b463"),
        ("2_3", "#28b463"),
        ("3_3", "#28b463"),
    ];
    for (id, color) in colors {
        forest.set_color(id, color).expect("demo ids exist");
    }

    forest.assign_offsets();
    forest
}

/// The built-in demo lineage snapshot (x = offset, y = time ordinal).
pub fn demo_lineage_snapshot() -> &'static GraphSnapshot {
    &DEMO_LINEAGE
}

/// The built-in demo time-slice snapshot (x, y = spatial position).
pub fn demo_slice_snapshot() -> &'static GraphSnapshot {
    &DEMO_SLICE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_snapshots_are_consistent() {
        let lineage = demo_lineage_snapshot();
        assert_eq!(lineage.len(), 10);
        assert_eq!(lineage.edges().count(), 8);
        assert!(lineage.width() >= 2.0);
        assert_eq!(lineage.height(), 5.0);

        let slice = demo_slice_snapshot();
        assert_eq!(slice.len(), 5);
        // Every child node's parent resolves within the slice.
        assert_eq!(slice.edges().count(), 3);
        assert!(slice.nodes().iter().filter(|n| n.is_child).count() == 3);
    }
}
