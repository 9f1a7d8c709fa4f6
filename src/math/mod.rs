//! 2-D math utilities for footprint and zone geometry

pub mod rect;
pub mod polygon;

pub use rect::Rect;
pub use polygon::Polygon;
