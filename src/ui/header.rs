//! Header panel UI rendering.
//!
//! Handles the top bar with snapshot open buttons, the demo loader, and the
//! theme selector.

use crate::app::AppState;
use egui::Color32;
use std::path::PathBuf;

/// Result of user interaction with the header panel.
pub enum HeaderInteraction {
    /// User picked a lineage snapshot file
    OpenLineageRequested(PathBuf),
    /// User picked a time-slice snapshot file
    OpenSliceRequested(PathBuf),
    /// User asked for the built-in demo data
    OpenDemoRequested,
}

fn pick_snapshot_file() -> Option<PathBuf> {
    let mut dialog = rfd::FileDialog::new().add_filter("Snapshot Files", &["json"]);
    if let Ok(cwd) = std::env::current_dir() {
        dialog = dialog.set_directory(cwd);
    }
    dialog.pick_file()
}

/// Renders the application header with file controls and the theme selector.
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Mutable reference to application state
///
/// # Returns
/// * `Option<HeaderInteraction>` - User interaction result
pub fn render_header(ui: &mut egui::Ui, state: &mut AppState) -> Option<HeaderInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        if ui.button("📁 Open Lineage").clicked() {
            if let Some(path) = pick_snapshot_file() {
                interaction = Some(HeaderInteraction::OpenLineageRequested(path));
            }
        }

        if ui.button("📁 Open Timeslice").clicked() {
            if let Some(path) = pick_snapshot_file() {
                interaction = Some(HeaderInteraction::OpenSliceRequested(path));
            }
        }

        if ui.button("🔬 Demo Forest").clicked() {
            interaction = Some(HeaderInteraction::OpenDemoRequested);
        }

        // Push theme selector to the right
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let old_theme = state.theme.current_theme_name().to_string();
            let mut current_theme = old_theme.clone();
            egui::ComboBox::from_id_salt("theme_selector")
                .selected_text(&current_theme)
                .show_ui(ui, |ui| {
                    for theme_name in state.theme.theme_manager().list_themes() {
                        ui.selectable_value(&mut current_theme, theme_name.to_string(), theme_name);
                    }
                });

            if old_theme != current_theme && state.theme.set_theme(&current_theme) {
                ui.ctx().request_repaint();
            }

            ui.label("Theme:");
        });
    });

    if let Some(err) = &state.error_message {
        ui.colored_label(Color32::RED, err);
    }

    interaction
}
