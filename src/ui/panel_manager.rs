//! Panel orchestration and layout management.
//!
//! Coordinates the header, the two canvas panels, and the status bar, and
//! funnels their interactions into a single enum for the application to
//! dispatch.

use crate::app::AppState;
use crate::presentation::color_mapping;
use crate::ui::{header, lineage_panel, slice_panel, status_bar};

/// Result of panel interactions that the application handles.
pub enum PanelInteraction {
    /// User picked a lineage snapshot file
    OpenLineageRequested(std::path::PathBuf),
    /// User picked a time-slice snapshot file
    OpenSliceRequested(std::path::PathBuf),
    /// User asked for the built-in demo data
    OpenDemoRequested,
    /// A time-ordinal row was clicked in the lineage view
    LineageRowClicked { ordinal: i64 },
    /// A node was clicked in the slice view
    SliceNodeClicked { id: String, is_child: bool },
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// This is the main entry point for rendering the entire UI, called from
    /// the eframe::App::update() implementation.
    pub fn render_all_panels(ctx: &egui::Context, state: &mut AppState) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;

        let theme_colors = color_mapping::theme_colors(state.theme.theme_manager()).clone();

        // Header panel at the top
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            if let Some(header_interaction) = header::render_header(ui, state) {
                interaction = Some(match header_interaction {
                    header::HeaderInteraction::OpenLineageRequested(path) => {
                        PanelInteraction::OpenLineageRequested(path)
                    }
                    header::HeaderInteraction::OpenSliceRequested(path) => {
                        PanelInteraction::OpenSliceRequested(path)
                    }
                    header::HeaderInteraction::OpenDemoRequested => {
                        PanelInteraction::OpenDemoRequested
                    }
                });
            }
        });

        // Status panel at the very bottom
        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state);
        });

        // Lineage canvas on the left, slice canvas in the center
        egui::SidePanel::left("lineage_panel")
            .resizable(true)
            .default_width(420.0)
            .show(ctx, |ui| {
                if let Some(lineage_panel::LineagePanelInteraction::RowClicked { ordinal }) =
                    lineage_panel::render_lineage_panel(ui, state, &theme_colors)
                {
                    interaction = Some(PanelInteraction::LineageRowClicked { ordinal });
                }
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(slice_panel::SlicePanelInteraction::NodeClicked { id, is_child }) =
                slice_panel::render_slice_panel(ui, state, &theme_colors)
            {
                interaction = Some(PanelInteraction::SliceNodeClicked { id, is_child });
            }
        });

        interaction
    }
}
