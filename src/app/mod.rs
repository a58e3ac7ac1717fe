//! Application-level modules for the lineage viewer.
//!
//! This module contains the centralized application state.

mod app_state;

pub use app_state::AppState;
