//! Visual styling separated from domain logic.

pub mod color_mapping;
