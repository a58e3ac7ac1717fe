use anyhow::Result;
use linview::{demo_lineage_snapshot, demo_slice_snapshot, Forest, GraphSnapshot, SnapshotError};
use std::env;
use std::fs;

#[test]
fn test_build_export_and_read_back_forest() -> Result<()> {
    let test_file = env::temp_dir().join("test_lineage_snapshot.json");
    let test_file = test_file.to_str().unwrap();

    // Clean up any existing file
    let _ = fs::remove_file(test_file);

    // Build a forest: one lineage dividing at ordinal 1, one isolated cell
    {
        let mut forest = Forest::new();
        forest.add_node("0_1", 0, Some(1))?;
        forest.add_node("1_1", 1, Some(1))?;
        forest.add_node("2_2", 2, Some(2))?;
        forest.add_node("2_3", 2, Some(3))?;
        forest.add_node("0_9", 0, Some(9))?;
        forest.set_parent("1_1", "0_1")?;
        forest.set_parent("2_2", "1_1")?;
        forest.set_parent("2_3", "1_1")?;
        forest.set_color("0_1", "#2e86c1")?;
        forest.assign_offsets();

        let json = serde_json::to_string_pretty(&forest.to_snapshot_value())?;
        fs::write(test_file, json)?;
    }

    // Read it back through the widget input path
    let text = fs::read_to_string(test_file)?;
    let snapshot = GraphSnapshot::from_json_str(&text)?;

    assert_eq!(snapshot.len(), 5);
    assert_eq!(snapshot.edges().count(), 3);
    assert_eq!(snapshot.height(), 3.0);

    // The dividing parent sits centered between its children
    let children = ["2_2", "2_3"].map(|id| snapshot.get(id).unwrap().x);
    let parent_x = snapshot.get("1_1").unwrap().x;
    assert_eq!(parent_x, 0.5 * (children[0] + children[1]));

    // Parent links and colors survive the round trip
    assert_eq!(
        snapshot.get("2_2").unwrap().parent_id.as_deref(),
        Some("1_1")
    );
    assert_eq!(snapshot.get("0_1").unwrap().color.as_deref(), Some("#2e86c1"));

    // The isolated cell is flagged and has no edge
    let isolated = snapshot.get("0_9").unwrap();
    assert!(isolated.isolated);
    assert!(snapshot.parent_of(isolated).is_none());

    let _ = fs::remove_file(test_file);
    Ok(())
}

#[test]
fn test_nearest_node_prefers_minimal_distance() -> Result<()> {
    // Three nodes at (0,0), (1,0), (0,1); node 2's parent is node 1.
    let snapshot = GraphSnapshot::from_json_str(
        r#"{
            "width": 2,
            "height": 2,
            "id_to_node": {
                "1": {"x": 0, "y": 0},
                "2": {"x": 1, "y": 0, "parent_id": "1"},
                "3": {"x": 0, "y": 1}
            }
        }"#,
    )?;

    // (0.9, 0.1) is nearest node 1's cell center regardless of input order.
    assert_eq!(snapshot.nearest_node(0.9, 0.1)?.id, "1");
    assert_eq!(snapshot.edges().count(), 1);
    Ok(())
}

#[test]
fn test_lineage_key_spelling_parses() -> Result<()> {
    let snapshot = GraphSnapshot::from_json_str(
        r##"{
            "width": 4,
            "height": 3,
            "id_to_node": {
                "a": {"identity": "a", "offset": 2.5, "timestamp_ordinal": 1,
                      "label": 7, "color": "#28b463", "parent_id": null, "isolated": false}
            }
        }"##,
    )?;
    let a = snapshot.get("a").unwrap();
    assert_eq!((a.x, a.y), (2.5, 1.0));
    assert_eq!(a.label, Some(7));
    Ok(())
}

#[test]
fn test_absent_parent_is_skipped_not_an_error() -> Result<()> {
    let snapshot = GraphSnapshot::from_json_str(
        r#"{
            "width": 2,
            "height": 1,
            "id_to_node": {
                "a": {"x": 0, "y": 0, "parent_id": "missing"},
                "b": {"x": 1, "y": 0}
            }
        }"#,
    )?;
    assert_eq!(snapshot.edges().count(), 0);
    assert!(snapshot.parent_of(snapshot.get("a").unwrap()).is_none());
    Ok(())
}

#[test]
fn test_empty_snapshot_lookups_fail_cleanly() -> Result<()> {
    let snapshot = GraphSnapshot::from_json_str(r#"{"width": 0, "height": 0, "id_to_node": {}}"#)?;
    assert!(matches!(
        snapshot.nearest_node(1.0, 1.0),
        Err(SnapshotError::Empty)
    ));
    assert!(matches!(snapshot.nearest_row(1.0), Err(SnapshotError::Empty)));
    Ok(())
}

#[test]
fn test_demo_data_loads() {
    assert!(!demo_lineage_snapshot().is_empty());
    assert!(!demo_slice_snapshot().is_empty());
    // Demo slice nodes hit-test against their cell centers.
    let slice = demo_slice_snapshot();
    let node = slice.nodes().first().unwrap();
    let found = slice.nearest_node(node.x + 0.5, node.y + 0.5).unwrap();
    assert_eq!(found.id, node.id);
}
