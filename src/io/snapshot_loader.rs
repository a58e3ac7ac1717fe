//! Synchronous snapshot file loading.
//!
//! Snapshot files are small JSON documents, so loading happens inline on the
//! UI thread; failures surface in the header's error label.

use anyhow::{Context, Result};
use linview::GraphSnapshot;
use std::fs;
use std::path::Path;

/// Reads and parses a snapshot JSON file.
pub fn load_snapshot(path: &Path) -> Result<GraphSnapshot> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    GraphSnapshot::from_json_str(&text)
        .with_context(|| format!("failed to parse snapshot {}", path.display()))
}
