//! Lineage canvas panel.
//!
//! Allocates the canvas, maps pointer events into model coordinates, updates
//! hover state, and bubbles row clicks up to the application.

use crate::app::AppState;
use crate::domain::frame::{Frame, YDirection};
use crate::rendering::lineage_renderer;
use linview::ThemeColors;

/// Result of user interaction with the lineage canvas.
pub enum LineagePanelInteraction {
    /// A time-ordinal row was clicked
    RowClicked { ordinal: i64 },
}

/// Renders the lineage panel: header label plus the full-lineage canvas.
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Mutable reference to application state
/// * `colors` - Color palette for the current theme
///
/// # Returns
/// * `Option<LineagePanelInteraction>` - User interaction result
pub fn render_lineage_panel(
    ui: &mut egui::Ui,
    state: &mut AppState,
    colors: &ThemeColors,
) -> Option<LineagePanelInteraction> {
    ui.horizontal(|ui| {
        ui.strong("Lineage");
        if let Some(path) = state.lineage.file_path() {
            ui.label(egui::RichText::new(path.display().to_string()).weak());
        }
    });

    let Some(snapshot) = state.lineage.snapshot() else {
        ui.weak("No lineage loaded");
        return None;
    };

    let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::click());
    painter.rect_filled(response.rect, 0.0, colors.canvas_background);

    // One unit of padding around the model grid, matching the original
    // frame_region bounds; time ordinal 0 renders at the top.
    let frame = Frame::new(
        response.rect,
        (-1.0, -1.0),
        (snapshot.width() + 1.0, snapshot.height() + 1.0),
        YDirection::Down,
    );

    if let Some(pos) = response.hover_pos() {
        let (_, my) = frame.to_model(pos);
        match snapshot.nearest_row(my) {
            Ok(row) => state.lineage_selection.set_hovered_row(Some(row)),
            Err(e) => state.error_message = Some(e.to_string()),
        }
    } else {
        state.lineage_selection.set_hovered_row(None);
    }

    let mut interaction = None;
    if response.clicked() {
        if let Some(pos) = response.interact_pointer_pos() {
            let (_, my) = frame.to_model(pos);
            match snapshot.nearest_row(my) {
                Ok(ordinal) => interaction = Some(LineagePanelInteraction::RowClicked { ordinal }),
                Err(e) => state.error_message = Some(e.to_string()),
            }
        }
    }

    lineage_renderer::render_lineage(
        &painter,
        &frame,
        snapshot,
        &state.lineage_selection,
        colors,
    );

    interaction
}
