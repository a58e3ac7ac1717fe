//! Status bar UI rendering.
//!
//! Handles the bottom status bar: slice selection report in the original
//! doodle's format, lineage row state, and snapshot counts.

use crate::app::AppState;
use egui::RichText;

/// Builds the slice status text: child selection (with its parent id),
/// ancestor selection, then hover, each segment ending in "; ".
pub fn slice_status_text(state: &AppState) -> String {
    let mut status = String::new();
    let Some(snapshot) = state.slice.snapshot() else {
        return status;
    };
    let selection = &state.slice_selection;

    if let Some(id) = selection.selected_child() {
        let parent = snapshot
            .get(id)
            .and_then(|n| n.parent_id.as_deref())
            .map(|pid| format!("[{}]", pid))
            .unwrap_or_else(|| "(no parent)".to_string());
        status.push_str(&format!("Child {} {}; ", id, parent));
    }
    if let Some(id) = selection.selected_ancestor() {
        status.push_str(&format!("Ancestor {}; ", id));
    }
    if let Some(id) = selection.hovered_node() {
        status.push_str(&format!("Hover {}; ", id));
    }
    status
}

/// Renders the status panel at the bottom of the window.
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState) {
    ui.horizontal(|ui| {
        if let Some(snapshot) = state.lineage.snapshot() {
            ui.label(RichText::new(format!(
                "Lineage: {} nodes | {} edges | {}x{}",
                snapshot.len(),
                snapshot.edges().count(),
                snapshot.width(),
                snapshot.height()
            ))
            .strong());

            if let Some(row) = state.lineage_selection.selected_row() {
                ui.label(RichText::new("|").strong());
                ui.label(format!("Selected timestep {}", row));
            }
            if let Some(row) = state.lineage_selection.hovered_row() {
                ui.label(RichText::new("|").strong());
                ui.label(format!("Timestep {}", row));
            }
        } else {
            ui.label(RichText::new("No lineage loaded").strong());
        }

        let slice_status = slice_status_text(state);
        if !slice_status.is_empty() {
            ui.label(RichText::new("|").strong());
            ui.label(slice_status);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use linview::GraphSnapshot;

    fn state_with_slice() -> AppState {
        let mut state = AppState::new();
        let snapshot = GraphSnapshot::from_json_value(serde_json::json!({
            "width": 3,
            "height": 1,
            "id_to_node": {
                "c": {"x": 0, "y": 0, "parent_id": "p", "is_child": true},
                "p": {"x": 1, "y": 0},
                "o": {"x": 2, "y": 0, "is_child": true},
            }
        }))
        .unwrap();
        state.load_slice_snapshot(snapshot, None);
        state
    }

    #[test]
    fn status_reports_child_with_parent_reference() {
        let mut state = state_with_slice();
        state.slice_selection.select_child("c".to_string());
        state.slice_selection.select_ancestor("p".to_string());
        state.slice_selection.set_hovered_node(Some("o".to_string()));
        assert_eq!(slice_status_text(&state), "Child c [p]; Ancestor p; Hover o; ");
    }

    #[test]
    fn status_marks_parentless_children() {
        let mut state = state_with_slice();
        state.slice_selection.select_child("o".to_string());
        assert_eq!(slice_status_text(&state), "Child o (no parent); ");
    }

    #[test]
    fn status_is_empty_without_interaction() {
        let state = state_with_slice();
        assert_eq!(slice_status_text(&state), "");
    }
}
