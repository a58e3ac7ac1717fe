//! Time-slice canvas panel.
//!
//! Allocates the canvas, hit-tests the pointer against node cell centers,
//! updates hover state, and bubbles node clicks (with their child/ancestor
//! role) up to the application.

use crate::app::AppState;
use crate::domain::frame::{Frame, YDirection};
use crate::rendering::slice_renderer;
use linview::ThemeColors;

/// Result of user interaction with the slice canvas.
pub enum SlicePanelInteraction {
    /// A node was clicked; `is_child` carries its role at this slice
    NodeClicked { id: String, is_child: bool },
}

/// Renders the time-slice panel: header label plus the slice canvas.
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Mutable reference to application state
/// * `colors` - Color palette for the current theme
///
/// # Returns
/// * `Option<SlicePanelInteraction>` - User interaction result
pub fn render_slice_panel(
    ui: &mut egui::Ui,
    state: &mut AppState,
    colors: &ThemeColors,
) -> Option<SlicePanelInteraction> {
    ui.horizontal(|ui| {
        ui.strong("Timeslice detail");
        if let Some(path) = state.slice.file_path() {
            ui.label(egui::RichText::new(path.display().to_string()).weak());
        }
    });

    let Some(snapshot) = state.slice.snapshot() else {
        ui.weak("No timeslice loaded");
        return None;
    };

    let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::click());
    painter.rect_filled(response.rect, 0.0, colors.canvas_background);

    // Spatial y grows upward in the slice, unlike the lineage view.
    let frame = Frame::new(
        response.rect,
        (-1.0, -1.0),
        (snapshot.width() + 1.0, snapshot.height() + 1.0),
        YDirection::Up,
    );

    if let Some(pos) = response.hover_pos() {
        let (mx, my) = frame.to_model(pos);
        match snapshot.nearest_node(mx, my) {
            Ok(node) => state
                .slice_selection
                .set_hovered_node(Some(node.id.clone())),
            Err(e) => state.error_message = Some(e.to_string()),
        }
    } else {
        state.slice_selection.set_hovered_node(None);
    }

    let mut interaction = None;
    if response.clicked() {
        if let Some(pos) = response.interact_pointer_pos() {
            let (mx, my) = frame.to_model(pos);
            match snapshot.nearest_node(mx, my) {
                Ok(node) => {
                    interaction = Some(SlicePanelInteraction::NodeClicked {
                        id: node.id.clone(),
                        is_child: node.is_child,
                    })
                }
                Err(e) => state.error_message = Some(e.to_string()),
            }
        }
    }

    slice_renderer::render_slice(&painter, &frame, snapshot, &state.slice_selection, colors);

    interaction
}
