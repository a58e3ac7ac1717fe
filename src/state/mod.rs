//! State management modules for the lineage viewer.
//!
//! This module contains state-only logic (no UI concerns):
//! - Snapshot state (loaded node data, source file path)
//! - Selection state for the lineage view (hovered/selected row)
//! - Selection state for the slice view (hovered node, child/ancestor picks)
//! - Theme state (selection, persistence, per-frame application)

mod selection;
mod snapshot_state;
mod theme_state;

pub use selection::{LineageSelection, SliceSelection};
pub use snapshot_state::SnapshotState;
pub use theme_state::ThemeState;
