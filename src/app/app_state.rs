//! Centralized application state for the lineage viewer.
//!
//! This module composes focused state components that each manage one aspect
//! of the application's state. Keeping invariants local to each component
//! allows borrow-checker friendly access to different state aspects from the
//! panels.

use crate::state::{LineageSelection, SliceSelection, SnapshotState, ThemeState};
use linview::GraphSnapshot;
use std::path::PathBuf;

/// Main application state composed of focused state components.
pub struct AppState {
    /// Snapshot shown in the lineage view
    pub lineage: SnapshotState,

    /// Snapshot shown in the time-slice view
    pub slice: SnapshotState,

    /// Hover/selection state of the lineage view
    pub lineage_selection: LineageSelection,

    /// Hover/selection state of the slice view
    pub slice_selection: SliceSelection,

    /// Theme and styling state
    pub theme: ThemeState,

    /// Current error message to display (if any)
    pub error_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates a new application state with default values.
    pub fn new() -> Self {
        Self {
            lineage: SnapshotState::new(),
            slice: SnapshotState::new(),
            lineage_selection: LineageSelection::new(),
            slice_selection: SliceSelection::new(),
            theme: ThemeState::new(),
            error_message: None,
        }
    }

    /// Loads a snapshot into the lineage view, resetting its interaction
    /// state. Hover and selection never survive a snapshot replacement.
    pub fn load_lineage_snapshot(&mut self, snapshot: GraphSnapshot, path: Option<PathBuf>) {
        self.lineage.load(snapshot, path);
        self.lineage_selection.clear();
        self.error_message = None;
    }

    /// Loads a snapshot into the time-slice view, resetting its interaction
    /// state.
    pub fn load_slice_snapshot(&mut self, snapshot: GraphSnapshot, path: Option<PathBuf>) {
        self.slice.load(snapshot, path);
        self.slice_selection.clear();
        self.error_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(ids: &[&str]) -> GraphSnapshot {
        let mut id_to_node = serde_json::Map::new();
        for (i, id) in ids.iter().enumerate() {
            id_to_node.insert(
                id.to_string(),
                serde_json::json!({"x": i as f64, "y": 0}),
            );
        }
        GraphSnapshot::from_json_value(serde_json::json!({
            "width": ids.len(),
            "height": 1,
            "id_to_node": id_to_node,
        }))
        .unwrap()
    }

    #[test]
    fn loading_a_lineage_snapshot_clears_row_state() {
        let mut state = AppState::new();
        state.load_lineage_snapshot(snapshot(&["a", "b"]), None);
        state.lineage_selection.set_hovered_row(Some(1));
        state.lineage_selection.select_row(1);

        state.load_lineage_snapshot(snapshot(&["c"]), None);
        assert_eq!(state.lineage_selection.hovered_row(), None);
        assert_eq!(state.lineage_selection.selected_row(), None);
    }

    #[test]
    fn loading_a_slice_snapshot_clears_node_state() {
        let mut state = AppState::new();
        state.load_slice_snapshot(snapshot(&["a", "b"]), None);
        state.slice_selection.set_hovered_node(Some("a".to_string()));
        state.slice_selection.select_child("a".to_string());
        state.slice_selection.select_ancestor("b".to_string());

        state.load_slice_snapshot(snapshot(&["c"]), None);
        assert_eq!(state.slice_selection.hovered_node(), None);
        assert_eq!(state.slice_selection.selected_child(), None);
        assert_eq!(state.slice_selection.selected_ancestor(), None);
    }

    #[test]
    fn loading_clears_a_stale_error_message() {
        let mut state = AppState::new();
        state.error_message = Some("no nodes loaded".to_string());
        state.load_lineage_snapshot(snapshot(&["a"]), None);
        assert_eq!(state.error_message, None);
    }
}
