//! Rendering subsystem for the lineage canvases.
//!
//! This module contains all painter-level drawing logic:
//! - Lineage view rendering (all time steps, row hover/selection bands)
//! - Slice view rendering (one time step, node hover/selection outlines)
//!
//! Both views share the same glyph metrics: every node occupies a unit cell
//! in model space and draws as a 0.6-square inset by 0.2, with parent edges
//! anchored at the cell's vertical fifths.

pub mod lineage_renderer;
pub mod slice_renderer;

/// Inset of the node glyph within its unit cell.
pub const GLYPH_INSET: f64 = 0.2;
/// Side length of the node glyph.
pub const GLYPH_SIZE: f64 = 0.6;

/// Model-space anchor on the parent glyph where an edge starts.
pub const EDGE_PARENT_ANCHOR: (f64, f64) = (0.5, 0.8);
/// Model-space anchor on the child glyph where an edge ends.
pub const EDGE_CHILD_ANCHOR: (f64, f64) = (0.5, 0.2);
