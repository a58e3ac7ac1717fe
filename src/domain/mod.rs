//! Domain logic for the lineage viewer.
//!
//! This module contains pure coordinate-mapping logic with no UI concerns:
//! - Frame mapping between model space and screen space

pub mod frame;
