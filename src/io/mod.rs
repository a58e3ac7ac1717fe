//! Snapshot file loading.

pub mod snapshot_loader;

pub use snapshot_loader::load_snapshot;
