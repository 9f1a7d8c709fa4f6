//! Building subtypes and dimension selection

pub mod subtype;
pub mod dimensions;

pub use subtype::{BuildingSubtype, GarageFacades, SubtypeProfile};
pub use dimensions::{select_dimensions, select_dimensions_for_subtype, BuildingDims};
