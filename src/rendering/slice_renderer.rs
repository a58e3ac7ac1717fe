//! Time-slice view rendering.
//!
//! Draws the nodes of one time step at their spatial positions (y up),
//! parent edges within the slice, and the hover square plus the independent
//! child/ancestor selection outlines.

use crate::domain::frame::Frame;
use crate::presentation::color_mapping;
use crate::rendering::{EDGE_CHILD_ANCHOR, EDGE_PARENT_ANCHOR, GLYPH_INSET, GLYPH_SIZE};
use crate::state::SliceSelection;
use egui::{Stroke, StrokeKind};
use linview::{GraphSnapshot, ThemeColors};

/// Renders the time-slice canvas.
///
/// # Arguments
/// * `painter` - Painter clipped to the canvas rect
/// * `frame` - Model-to-screen mapping for the canvas
/// * `snapshot` - The loaded slice snapshot
/// * `selection` - Current hover and child/ancestor selection state
/// * `colors` - Color palette for the current theme
pub fn render_slice(
    painter: &egui::Painter,
    frame: &Frame,
    snapshot: &GraphSnapshot,
    selection: &SliceSelection,
    colors: &ThemeColors,
) {
    for node in snapshot.nodes() {
        let rect = frame.rect(node.x + GLYPH_INSET, node.y + GLYPH_INSET, GLYPH_SIZE, GLYPH_SIZE);
        painter.rect_filled(rect, 0.0, color_mapping::node_color(node, colors));
    }

    for (child, parent) in snapshot.edges() {
        let from = frame.to_screen(child.x + EDGE_CHILD_ANCHOR.0, child.y + EDGE_CHILD_ANCHOR.1);
        let to = frame.to_screen(parent.x + EDGE_PARENT_ANCHOR.0, parent.y + EDGE_PARENT_ANCHOR.1);
        painter.line_segment([from, to], Stroke::new(1.0, colors.edge));
    }

    // Translucent square over the hovered node's cell.
    if let Some(node) = selection.hovered_node().and_then(|id| snapshot.get(id)) {
        let cell = frame.rect(node.x, node.y, 1.0, 1.0);
        painter.rect_filled(cell, 0.0, colors.hover_overlay);
    }

    // Child and ancestor selections are independent outlines; both may show.
    if let Some(node) = selection.selected_child().and_then(|id| snapshot.get(id)) {
        let outline = frame.rect(node.x + 0.1, node.y + 0.1, 0.8, 0.8);
        painter.rect_stroke(outline, 0.0, Stroke::new(3.0, colors.child_select), StrokeKind::Middle);
    }
    if let Some(node) = selection.selected_ancestor().and_then(|id| snapshot.get(id)) {
        let outline = frame.rect(node.x + 0.1, node.y + 0.1, 0.8, 0.8);
        painter.rect_stroke(outline, 0.0, Stroke::new(3.0, colors.ancestor_select), StrokeKind::Middle);
    }
}
