//! Building subtype profiles: per-subtype dimension, window, and door tables.
//!
//! Every hand-tuned probability lives here as data. The facade generator and
//! the zone planner read these tables instead of branching on subtype names.

use serde::{Deserialize, Serialize};

/// Building subtype tag carried on every generated record
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildingSubtype {
    House,
    Apartment,
    Campus,
    Retail,
    Warehouse,
    Factory,
    Barn,
    AgriIndustrial,
    ParkStructure,
}

/// Which long facades receive garage/loading doors
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GarageFacades {
    None,
    FrontOnly,
    FrontAndBack,
}

/// Per-floor chances of the three window treatments
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WindowChances {
    pub full_height: f32,
    pub standard: f32,
    pub ceiling: f32,
}

/// Static profile describing one subtype
#[derive(Clone, Copy, Debug)]
pub struct SubtypeProfile {
    /// Base footprint range before importance scaling (meters)
    pub width_range: (f32, f32),
    pub depth_range: (f32, f32),
    /// Permitted discrete heights with selection weights
    pub heights: &'static [f32],
    pub height_weights: &'static [f32],
    /// Window treatment chances per floor band
    pub windows: WindowChances,
    /// Horizontal slot density factor (applied as √density to slot count)
    pub window_density: f32,
    /// Chance of any secondary doors, and how many when they appear
    pub secondary_door_chance: f32,
    pub secondary_door_count: (u8, u8),
    /// Office-tower style: one door per facade
    pub doors_on_all_facades: bool,
    /// Industrial rule: both long facades must end with a door
    pub require_front_back_doors: bool,
    /// Garage/loading door placement
    pub garage_facades: GarageFacades,
    /// Chance that an eligible facade gets garage doors at all
    pub garage_chance: f32,
    /// Weights for 1..=N garage doors on a facade
    pub garage_count_weights: &'static [f32],
    /// Pair every garage door with an adjacent utility door
    pub pair_utility_door: bool,
    /// Scatter placement: minimum gap to neighbors and density scale
    pub spacing_gap: f32,
    pub count_scale: f32,
}

impl BuildingSubtype {
    /// All subtypes, in a fixed order
    pub const ALL: [BuildingSubtype; 9] = [
        BuildingSubtype::House,
        BuildingSubtype::Apartment,
        BuildingSubtype::Campus,
        BuildingSubtype::Retail,
        BuildingSubtype::Warehouse,
        BuildingSubtype::Factory,
        BuildingSubtype::Barn,
        BuildingSubtype::AgriIndustrial,
        BuildingSubtype::ParkStructure,
    ];

    /// Stable lowercase name used in serialized records and palette keys
    pub fn name(self) -> &'static str {
        match self {
            BuildingSubtype::House => "house",
            BuildingSubtype::Apartment => "apartment",
            BuildingSubtype::Campus => "campus",
            BuildingSubtype::Retail => "retail",
            BuildingSubtype::Warehouse => "warehouse",
            BuildingSubtype::Factory => "factory",
            BuildingSubtype::Barn => "barn",
            BuildingSubtype::AgriIndustrial => "agri_industrial",
            BuildingSubtype::ParkStructure => "park_structure",
        }
    }

    /// Palette zone key for the color lookup service
    pub fn palette_zone(self) -> &'static str {
        match self {
            BuildingSubtype::House | BuildingSubtype::Apartment | BuildingSubtype::Campus => {
                "Residential"
            }
            BuildingSubtype::Retail => "Commercial",
            BuildingSubtype::Warehouse | BuildingSubtype::Factory => "Industrial",
            BuildingSubtype::Barn | BuildingSubtype::AgriIndustrial => "Agricultural",
            BuildingSubtype::ParkStructure => "Parks",
        }
    }

    /// The subtype's static profile table
    pub fn profile(self) -> &'static SubtypeProfile {
        match self {
            BuildingSubtype::House => &HOUSE,
            BuildingSubtype::Apartment => &APARTMENT,
            BuildingSubtype::Campus => &CAMPUS,
            BuildingSubtype::Retail => &RETAIL,
            BuildingSubtype::Warehouse => &WAREHOUSE,
            BuildingSubtype::Factory => &FACTORY,
            BuildingSubtype::Barn => &BARN,
            BuildingSubtype::AgriIndustrial => &AGRI_INDUSTRIAL,
            BuildingSubtype::ParkStructure => &PARK_STRUCTURE,
        }
    }
}

static HOUSE: SubtypeProfile = SubtypeProfile {
    width_range: (8.0, 16.0),
    depth_range: (8.0, 16.0),
    heights: &[8.0, 12.0],
    height_weights: &[0.7, 0.3],
    windows: WindowChances { full_height: 0.10, standard: 0.85, ceiling: 0.15 },
    window_density: 0.5,
    secondary_door_chance: 0.2,
    secondary_door_count: (1, 1),
    doors_on_all_facades: false,
    require_front_back_doors: false,
    garage_facades: GarageFacades::None,
    garage_chance: 0.0,
    garage_count_weights: &[],
    pair_utility_door: false,
    spacing_gap: 5.0,
    count_scale: 1.2,
};

static APARTMENT: SubtypeProfile = SubtypeProfile {
    width_range: (14.0, 28.0),
    depth_range: (14.0, 28.0),
    heights: &[12.0, 16.0, 20.0],
    height_weights: &[0.4, 0.35, 0.25],
    windows: WindowChances { full_height: 0.15, standard: 0.85, ceiling: 0.10 },
    window_density: 0.6,
    secondary_door_chance: 1.0,
    secondary_door_count: (2, 3),
    doors_on_all_facades: false,
    require_front_back_doors: false,
    garage_facades: GarageFacades::None,
    garage_chance: 0.0,
    garage_count_weights: &[],
    pair_utility_door: false,
    spacing_gap: 5.0,
    count_scale: 1.0,
};

static CAMPUS: SubtypeProfile = SubtypeProfile {
    width_range: (20.0, 35.0),
    depth_range: (20.0, 35.0),
    heights: &[12.0, 16.0, 20.0],
    height_weights: &[0.3, 0.4, 0.3],
    windows: WindowChances { full_height: 0.15, standard: 0.85, ceiling: 0.10 },
    window_density: 0.6,
    secondary_door_chance: 1.0,
    secondary_door_count: (2, 3),
    doors_on_all_facades: false,
    require_front_back_doors: false,
    garage_facades: GarageFacades::None,
    garage_chance: 0.0,
    garage_count_weights: &[],
    pair_utility_door: false,
    spacing_gap: 6.0,
    count_scale: 0.8,
};

static RETAIL: SubtypeProfile = SubtypeProfile {
    width_range: (15.0, 35.0),
    depth_range: (15.0, 35.0),
    heights: &[20.0],
    height_weights: &[1.0],
    windows: WindowChances { full_height: 0.85, standard: 0.20, ceiling: 0.10 },
    window_density: 0.85,
    secondary_door_chance: 0.0,
    secondary_door_count: (0, 0),
    doors_on_all_facades: true,
    require_front_back_doors: false,
    garage_facades: GarageFacades::None,
    garage_chance: 0.0,
    garage_count_weights: &[],
    pair_utility_door: false,
    spacing_gap: 5.0,
    count_scale: 1.0,
};

static WAREHOUSE: SubtypeProfile = SubtypeProfile {
    width_range: (30.0, 80.0),
    depth_range: (30.0, 80.0),
    heights: &[5.0, 10.0, 12.0],
    height_weights: &[0.4, 0.4, 0.2],
    windows: WindowChances { full_height: 0.0, standard: 0.15, ceiling: 0.30 },
    window_density: 0.3,
    secondary_door_chance: 0.0,
    secondary_door_count: (0, 0),
    doors_on_all_facades: false,
    require_front_back_doors: true,
    garage_facades: GarageFacades::FrontAndBack,
    garage_chance: 0.85,
    garage_count_weights: &[0.20, 0.35, 0.30, 0.15],
    pair_utility_door: true,
    spacing_gap: 6.0,
    count_scale: 1.0,
};

static FACTORY: SubtypeProfile = SubtypeProfile {
    width_range: (30.0, 80.0),
    depth_range: (30.0, 80.0),
    heights: &[5.0, 8.0, 10.0, 12.0, 15.0, 16.0, 20.0],
    height_weights: &[0.2, 0.2, 0.2, 0.2, 0.08, 0.07, 0.05],
    windows: WindowChances { full_height: 0.05, standard: 0.30, ceiling: 0.35 },
    window_density: 0.35,
    secondary_door_chance: 0.3,
    secondary_door_count: (1, 1),
    doors_on_all_facades: false,
    require_front_back_doors: true,
    garage_facades: GarageFacades::FrontAndBack,
    garage_chance: 0.6,
    garage_count_weights: &[0.6, 0.4],
    pair_utility_door: false,
    spacing_gap: 10.0,
    count_scale: 0.7,
};

static BARN: SubtypeProfile = SubtypeProfile {
    width_range: (12.0, 24.0),
    depth_range: (10.0, 18.0),
    heights: &[5.0, 8.0, 10.0],
    height_weights: &[0.3, 0.5, 0.2],
    windows: WindowChances { full_height: 0.0, standard: 0.30, ceiling: 0.25 },
    window_density: 0.3,
    secondary_door_chance: 0.3,
    secondary_door_count: (1, 1),
    doors_on_all_facades: false,
    require_front_back_doors: false,
    garage_facades: GarageFacades::FrontOnly,
    garage_chance: 0.7,
    garage_count_weights: &[1.0],
    pair_utility_door: false,
    spacing_gap: 8.0,
    count_scale: 0.9,
};

static AGRI_INDUSTRIAL: SubtypeProfile = SubtypeProfile {
    width_range: (15.0, 30.0),
    depth_range: (15.0, 30.0),
    heights: &[5.0, 8.0, 10.0, 12.0],
    height_weights: &[0.3, 0.3, 0.25, 0.15],
    windows: WindowChances { full_height: 0.0, standard: 0.30, ceiling: 0.25 },
    window_density: 0.3,
    secondary_door_chance: 0.2,
    secondary_door_count: (1, 1),
    doors_on_all_facades: false,
    require_front_back_doors: false,
    garage_facades: GarageFacades::FrontOnly,
    garage_chance: 0.7,
    garage_count_weights: &[1.0],
    pair_utility_door: true,
    spacing_gap: 5.0,
    count_scale: 1.2,
};

static PARK_STRUCTURE: SubtypeProfile = SubtypeProfile {
    width_range: (4.0, 12.0),
    depth_range: (4.0, 12.0),
    heights: &[4.0, 8.0],
    height_weights: &[0.75, 0.25],
    windows: WindowChances { full_height: 0.20, standard: 0.60, ceiling: 0.0 },
    window_density: 0.4,
    secondary_door_chance: 0.0,
    secondary_door_count: (0, 0),
    doors_on_all_facades: false,
    require_front_back_doors: false,
    garage_facades: GarageFacades::None,
    garage_chance: 0.0,
    garage_count_weights: &[],
    pair_utility_door: false,
    spacing_gap: 5.0,
    count_scale: 1.0,
};
