//! Theme support for the lineage viewer.
//!
//! Provides Light and Dark color schemes and a centralized theme manager.
//! Node colors supplied by the snapshot override the theme default; all
//! interaction overlays (hover band, row selection, child/ancestor strokes)
//! come from the active theme.

use egui::Color32;
use std::collections::HashMap;

/// Complete color palette for a theme.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Background colors
    pub background: Color32,
    pub panel_background: Color32,

    // Foreground colors
    pub text: Color32,
    pub text_dim: Color32,

    // Canvas colors
    pub canvas_background: Color32,
    pub node_default: Color32,
    pub edge: Color32,

    // Interaction overlays
    pub hover_overlay: Color32,
    pub row_select: Color32,
    pub child_select: Color32,
    pub ancestor_select: Color32,

    // Chrome
    pub border: Color32,
    pub error: Color32,
}

/// A complete theme definition with metadata and color palette.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub description: String,
    pub colors: ThemeColors,
}

impl Theme {
    /// Base egui visuals matching the palette's brightness, decided from the
    /// panel background's perceived luminance rather than the theme name.
    pub fn base_visuals(&self) -> egui::Visuals {
        let c = self.colors.panel_background;
        let luma = 0.299 * c.r() as f32 + 0.587 * c.g() as f32 + 0.114 * c.b() as f32;
        if luma > 128.0 {
            egui::Visuals::light()
        } else {
            egui::Visuals::dark()
        }
    }
}

/// Centralized theme manager providing access to all available themes.
pub struct ThemeManager {
    themes: HashMap<String, Theme>,
    current_theme_name: String,
}

impl ThemeManager {
    /// Creates a new ThemeManager initialized with the built-in themes.
    pub fn new() -> Self {
        let mut themes = HashMap::new();
        themes.insert("Light".to_string(), light_theme());
        themes.insert("Dark".to_string(), dark_theme());
        Self {
            themes,
            current_theme_name: "Dark".to_string(),
        }
    }

    /// Retrieves a theme by name.
    pub fn get_theme(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    /// Returns a sorted list of all available theme names.
    pub fn list_themes(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.themes.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }

    /// Gets the currently selected theme.
    pub fn current_theme(&self) -> &Theme {
        &self.themes[&self.current_theme_name]
    }

    /// Returns the name of the currently selected theme.
    pub fn current_theme_name(&self) -> &str {
        &self.current_theme_name
    }

    /// Sets the current theme by name.
    pub fn set_current_theme(&mut self, name: &str) -> Result<(), String> {
        if self.themes.contains_key(name) {
            self.current_theme_name = name.to_string();
            Ok(())
        } else {
            Err(format!("Theme '{}' not found", name))
        }
    }

    /// Applies a theme's colors to egui visuals.
    pub fn apply_theme(&self, theme: &Theme, visuals: &mut egui::Visuals) {
        let colors = &theme.colors;

        visuals.panel_fill = colors.panel_background;
        visuals.extreme_bg_color = colors.canvas_background;
        visuals.override_text_color = Some(colors.text);

        visuals.selection.bg_fill = colors.row_select;
        visuals.widgets.noninteractive.bg_fill = colors.panel_background;
        visuals.widgets.hovered.bg_fill = colors.hover_overlay;

        visuals.error_fg_color = colors.error;
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates the Light theme.
fn light_theme() -> Theme {
    Theme {
        name: "Light".to_string(),
        description: "Light theme matching the original doodle palette".to_string(),
        colors: ThemeColors {
            background: Color32::from_rgb(248, 248, 248),
            panel_background: Color32::from_rgb(248, 248, 248),

            text: Color32::from_rgb(0, 0, 0),
            text_dim: Color32::from_rgb(120, 120, 120),

            canvas_background: Color32::from_rgb(255, 255, 255),
            // Unlabeled nodes draw as "#999".
            node_default: Color32::from_rgb(153, 153, 153),
            edge: Color32::from_rgb(60, 60, 60),

            // rgba(0,0,0,0.1)
            hover_overlay: with_alpha(Color32::BLACK, 26),
            row_select: Color32::from_rgb(0, 0, 0),
            child_select: Color32::from_rgb(0, 0, 0),
            ancestor_select: Color32::from_rgb(192, 192, 192),

            border: Color32::from_rgb(160, 160, 160),
            error: Color32::from_rgb(200, 40, 40),
        },
    }
}

/// Creates the Dark theme.
fn dark_theme() -> Theme {
    Theme {
        name: "Dark".to_string(),
        description: "Dark theme with inverted overlay colors".to_string(),
        colors: ThemeColors {
            background: Color32::from_rgb(39, 39, 39),
            panel_background: Color32::from_rgb(39, 39, 39),

            text: Color32::from_rgb(255, 255, 255),
            text_dim: Color32::from_rgb(160, 160, 160),

            canvas_background: Color32::from_rgb(16, 16, 16),
            node_default: Color32::from_rgb(153, 153, 153),
            edge: Color32::from_rgb(200, 200, 200),

            hover_overlay: with_alpha(Color32::WHITE, 26),
            row_select: Color32::from_rgb(255, 255, 255),
            child_select: Color32::from_rgb(255, 255, 255),
            ancestor_select: Color32::from_rgb(149, 165, 166),

            border: Color32::from_rgb(100, 100, 100),
            error: Color32::from_rgb(231, 76, 60),
        },
    }
}

/// Parses a "#rrggbb" hex string into a Color32.
///
/// Returns None for any other shape; callers fall back to the theme default.
pub fn hex_to_color32(hex: &str) -> Option<Color32> {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color32::from_rgb(r, g, b))
}

/// Sets the alpha channel of a color, treating the input as unmultiplied
/// RGB. Used to derive the translucent hover overlays from opaque base
/// colors.
pub fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}
