//! UI panel rendering and interaction handling.

pub mod header;
pub mod lineage_panel;
pub mod panel_manager;
pub mod slice_panel;
pub mod status_bar;
