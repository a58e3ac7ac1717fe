//! Color resolution for nodes and the active theme.
//!
//! Node colors come from the snapshot as hex strings; anything missing or
//! unparseable falls back to the theme's default node color.

use egui::Color32;
use linview::{hex_to_color32, Node, ThemeColors, ThemeManager};

/// Returns a reference to the current theme's color palette.
pub fn theme_colors(theme_manager: &ThemeManager) -> &ThemeColors {
    &theme_manager.current_theme().colors
}

/// Resolves the fill color for a node glyph.
pub fn node_color(node: &Node, colors: &ThemeColors) -> Color32 {
    node.color
        .as_deref()
        .and_then(hex_to_color32)
        .unwrap_or(colors.node_default)
}
