//! Lineage Viewer GUI Application
//!
//! Interactive viewer for cell lineage snapshots using the egui framework.
//! The viewer features:
//! - A lineage canvas showing every node across all time steps, with
//!   hover/select of time-ordinal rows
//! - A time-slice canvas showing one step's spatial layout, with
//!   hover/select of individual nodes (child vs ancestor roles)

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
//! - Snapshot loading from JSON files or built-in demo data
//! - Multiple theme support with persistent preferences
//!
//! The application is built with a modular architecture:
//! - `app/` - Centralized application state
//! - `domain/` - Model-to-screen coordinate mapping
//! - `presentation/` - Color resolution (separated from domain logic)
//! - `io/` - Snapshot file loading
//! - `ui/` - UI panel rendering and interaction handling
//! - `rendering/` - Low-level canvas drawing for both views
//! - `state/` - State components for snapshots, selection, and theme

use eframe::egui;
use std::path::PathBuf;

mod app;
mod domain;
mod io;
mod presentation;
mod rendering;
mod state;
mod ui;

use app::AppState;
use ui::panel_manager::{PanelInteraction, PanelManager};

/// Main application entry point that initializes and launches the viewer.
fn main() -> eframe::Result {
    // An optional command-line argument names a lineage snapshot to load
    let initial_file = std::env::args().nth(1).map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 750.0])
            .with_title("Lineage Viewer"),
        ..Default::default()
    };

    eframe::run_native(
        "Lineage Viewer",
        options,
        Box::new(move |cc| Ok(Box::new(LineageViewerApp::new(cc, initial_file)))),
    )
}

/// The main Lineage Viewer application.
///
/// Delegates state to `AppState` and layout to `PanelManager`; this struct
/// only wires interactions.
struct LineageViewerApp {
    /// Centralized application state
    state: AppState,
    /// Optional file to load on first frame
    pending_file_load: Option<PathBuf>,
}

impl LineageViewerApp {
    /// Creates a new viewer with the theme loaded from persistent storage
    /// and an optional initial lineage snapshot to load on startup.
    fn new(cc: &eframe::CreationContext, initial_file: Option<PathBuf>) -> Self {
        let mut state = AppState::new();
        state.theme = state::ThemeState::from_storage(cc.storage);
        Self {
            state,
            pending_file_load: initial_file,
        }
    }

    /// Loads a lineage snapshot file, surfacing failures in the header.
    fn open_lineage_file(&mut self, path: PathBuf) {
        match io::load_snapshot(&path) {
            Ok(snapshot) => self.state.load_lineage_snapshot(snapshot, Some(path)),
            Err(e) => self.state.error_message = Some(format!("{:#}", e)),
        }
    }

    /// Loads a time-slice snapshot file, surfacing failures in the header.
    fn open_slice_file(&mut self, path: PathBuf) {
        match io::load_snapshot(&path) {
            Ok(snapshot) => self.state.load_slice_snapshot(snapshot, Some(path)),
            Err(e) => self.state.error_message = Some(format!("{:#}", e)),
        }
    }

    /// Handles panel interactions reported by the PanelManager.
    fn handle_panel_interaction(&mut self, interaction: PanelInteraction) {
        match interaction {
            PanelInteraction::OpenLineageRequested(path) => {
                self.open_lineage_file(path);
            }
            PanelInteraction::OpenSliceRequested(path) => {
                self.open_slice_file(path);
            }
            PanelInteraction::OpenDemoRequested => {
                self.state
                    .load_lineage_snapshot(linview::demo_lineage_snapshot().clone(), None);
                self.state
                    .load_slice_snapshot(linview::demo_slice_snapshot().clone(), None);
            }
            PanelInteraction::LineageRowClicked { ordinal } => {
                self.state.lineage_selection.select_row(ordinal);
            }
            PanelInteraction::SliceNodeClicked { id, is_child } => {
                if is_child {
                    self.state.slice_selection.select_child(id);
                } else {
                    self.state.slice_selection.select_ancestor(id);
                }
            }
        }
    }
}

impl eframe::App for LineageViewerApp {
    /// Called when the app is shutting down - persists the theme choice.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        self.state.theme.persist(storage);
    }

    /// Main update loop: applies the theme, performs any pending initial
    /// load, renders all panels, and dispatches their interactions.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.theme.apply(ctx);

        if let Some(path) = self.pending_file_load.take() {
            self.open_lineage_file(path);
        }

        if let Some(interaction) = PanelManager::render_all_panels(ctx, &mut self.state) {
            self.handle_panel_interaction(interaction);
        }
    }
}
