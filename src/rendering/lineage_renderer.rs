//! Lineage view rendering.
//!
//! Draws every node across all time steps (x = spatial offset, y = time
//! ordinal, time flowing downward), parent-to-child edges, and the
//! hover/selection row bands.

use crate::domain::frame::Frame;
use crate::presentation::color_mapping;
use crate::rendering::{EDGE_CHILD_ANCHOR, EDGE_PARENT_ANCHOR, GLYPH_INSET, GLYPH_SIZE};
use crate::state::LineageSelection;
use egui::{Stroke, StrokeKind};
use linview::{GraphSnapshot, ThemeColors};

/// Renders the lineage canvas.
///
/// # Arguments
/// * `painter` - Painter clipped to the canvas rect
/// * `frame` - Model-to-screen mapping for the canvas
/// * `snapshot` - The loaded snapshot
/// * `selection` - Current hover/selection row state
/// * `colors` - Color palette for the current theme
pub fn render_lineage(
    painter: &egui::Painter,
    frame: &Frame,
    snapshot: &GraphSnapshot,
    selection: &LineageSelection,
    colors: &ThemeColors,
) {
    // Edges go under the glyphs.
    for (child, parent) in snapshot.edges() {
        let from = frame.to_screen(parent.x + EDGE_PARENT_ANCHOR.0, parent.y + EDGE_PARENT_ANCHOR.1);
        let to = frame.to_screen(child.x + EDGE_CHILD_ANCHOR.0, child.y + EDGE_CHILD_ANCHOR.1);
        painter.line_segment([from, to], Stroke::new(1.0, colors.edge));
    }

    for node in snapshot.nodes() {
        let rect = frame.rect(node.x + GLYPH_INSET, node.y + GLYPH_INSET, GLYPH_SIZE, GLYPH_SIZE);
        painter.rect_filled(rect, 0.0, color_mapping::node_color(node, colors));
    }

    // Translucent band over the hovered time-ordinal row.
    if let Some(row) = selection.hovered_row() {
        let band = frame.rect(0.0, row as f64, snapshot.width(), 1.0);
        painter.rect_filled(band, 0.0, colors.hover_overlay);
    }

    // Outlined band over the selected row.
    if let Some(row) = selection.selected_row() {
        let band = frame.rect(0.0, row as f64, snapshot.width(), 1.0);
        painter.rect_stroke(band, 0.0, Stroke::new(2.0, colors.row_select), StrokeKind::Inside);
    }
}
