//! Generation configuration

use serde::{Deserialize, Serialize};

use crate::zone::planner::GRID_CELL_SIZE;

/// Tunables for a generation session. `Default` matches production values;
/// tests shrink or reseed as needed.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Root seed for the whole world
    pub world_seed: u32,
    /// Grid cell side length in meters
    pub cell_size: f32,
    /// Attach palette colors to generated buildings
    pub assign_colors: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            world_seed: 0,
            cell_size: GRID_CELL_SIZE,
            assign_colors: true,
        }
    }
}
