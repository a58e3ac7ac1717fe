//! Loaded snapshot state management.
//!
//! Each widget holds its own snapshot; replacing it fully re-draws the
//! widget, there is no incremental update path.

use linview::GraphSnapshot;
use std::path::PathBuf;

/// State related to one widget's loaded snapshot.
///
/// Responsibilities:
/// - Managing the snapshot lifetime
/// - Tracking the source file path (None for built-in demo data)
#[derive(Debug, Clone, Default)]
pub struct SnapshotState {
    /// The currently loaded snapshot (if any)
    snapshot: Option<GraphSnapshot>,
    /// Path to the currently loaded file (None for demo data)
    file_path: Option<PathBuf>,
}

impl SnapshotState {
    /// Creates a new snapshot state with nothing loaded.
    pub fn new() -> Self {
        Self {
            snapshot: None,
            file_path: None,
        }
    }

    /// Replaces the loaded snapshot.
    ///
    /// # Arguments
    /// * `snapshot` - The snapshot to load
    /// * `path` - Optional source file path (None for demo data)
    pub fn load(&mut self, snapshot: GraphSnapshot, path: Option<PathBuf>) {
        self.snapshot = Some(snapshot);
        self.file_path = path;
    }

    /// Returns the loaded snapshot, if any.
    pub fn snapshot(&self) -> Option<&GraphSnapshot> {
        self.snapshot.as_ref()
    }

    /// Returns the source file path, if any.
    pub fn file_path(&self) -> Option<&PathBuf> {
        self.file_path.as_ref()
    }
}
