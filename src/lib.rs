pub mod snapshot;
pub mod forest;
pub mod theme;
pub mod demo;

// Export the snapshot data model
pub use snapshot::{GraphSnapshot, Node, SnapshotError};

// Export the lineage forest builder
pub use forest::Forest;

// Export theme support
pub use theme::{Theme, ThemeColors, ThemeManager, hex_to_color32, with_alpha};

// Export built-in demo data
pub use demo::{demo_lineage_snapshot, demo_slice_snapshot};
