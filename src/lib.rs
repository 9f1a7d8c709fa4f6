//! Ringcity - deterministic structure generation for a ring-shaped world

pub mod core;
pub mod math;
pub mod seed;
pub mod flare;
pub mod zone;
pub mod building;
pub mod placement;
pub mod facade;
pub mod palette;
pub mod generator;
