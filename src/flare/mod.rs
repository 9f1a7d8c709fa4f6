//! Station flare model
//!
//! Ring floor width, level count, and zone half-width all widen near
//! stations. The widening ("flare") blends a base value toward a
//! station-specific maximum with a cosine curve over the station's influence
//! range, optionally holding a flat plateau across the chunks nearest the
//! station center. Outside every station's influence the base value is
//! returned exactly, and the blend is continuous at the influence edge.

use serde::{Deserialize, Serialize};

/// Ring circumference in meters (264,000 km)
pub const RING_CIRCUMFERENCE: f64 = 264_000_000.0;

/// Longitudinal chunk length in meters
pub const CHUNK_LENGTH: f64 = 1_000.0;

/// Floor width away from any station
pub const BASE_WIDTH: f32 = 400.0;

/// Level count away from any station
pub const BASE_LEVELS: u32 = 5;

/// Zone half-width away from any station
pub const BASE_ZONE_HALF_WIDTH: f32 = 20.0;

/// Parameters of a station class
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StationClass {
    /// Maximum flare radius from the ring centerline (meters)
    pub max_radius: f32,
    /// Total influence length along the ring (meters, half per side)
    pub influence_length: f64,
    /// Level count at the station center
    pub max_levels: u32,
    /// Flat full-width span around the center (meters, 0 = no plateau)
    pub plateau_radius: f64,
}

impl StationClass {
    /// Pillar/elevator hub: the largest station class.
    ///
    /// The plateau keeps the five chunks straddling the station seam at
    /// full width (chunk centers are 1 km apart, so ±2.5 km covers them).
    pub const PILLAR_HUB: Self = Self {
        max_radius: 12_500.0,
        influence_length: 50_000.0,
        max_levels: 15,
        plateau_radius: 2_500.0,
    };

    /// Regional hub
    pub const REGIONAL_HUB: Self = Self {
        max_radius: 8_000.0,
        influence_length: 32_000.0,
        max_levels: 11,
        plateau_radius: 0.0,
    };

    /// Local station
    pub const LOCAL_STATION: Self = Self {
        max_radius: 2_500.0,
        influence_length: 10_000.0,
        max_levels: 7,
        plateau_radius: 0.0,
    };

    /// Half the influence length: how far the flare reaches per side
    pub fn influence_half_length(&self) -> f64 {
        self.influence_length / 2.0
    }
}

/// A station placed on the ring
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Station {
    /// Hub name, also the key for color-palette lookups
    pub name: String,
    /// Ring position in meters, in `[0, RING_CIRCUMFERENCE)`
    pub position: f64,
    pub class: StationClass,
}

/// Wrap a ring position into `[0, RING_CIRCUMFERENCE)`
pub fn wrap_position(position: f64) -> f64 {
    position.rem_euclid(RING_CIRCUMFERENCE)
}

/// Shortest distance between two ring positions, accounting for wraparound
pub fn ring_distance(a: f64, b: f64) -> f64 {
    let direct = (wrap_position(a) - wrap_position(b)).abs();
    direct.min(RING_CIRCUMFERENCE - direct)
}

/// Flare model over a fixed set of stations
#[derive(Clone, Debug)]
pub struct FlareModel {
    stations: Vec<Station>,
}

/// Zone half-width tiers keyed on the continuous flare width. Wider
/// reserved/industrial bands near stations, collapsing to the base
/// half-width at the flare edge.
const ZONE_HALF_WIDTH_TIERS: [(f32, f32); 4] = [
    (20_000.0, 80.0),
    (10_000.0, 60.0),
    (5_000.0, 40.0),
    (1_000.0, 30.0),
];

impl FlareModel {
    /// Model with an explicit station set
    pub fn new(stations: Vec<Station>) -> Self {
        Self { stations }
    }

    /// Default station layout: 12 pillar hubs evenly spaced around the ring
    pub fn with_pillar_hubs() -> Self {
        const HUB_NAMES: [&str; 12] = [
            "Pillar of Kongo",
            "Pillar of Kilima",
            "Pillar of Laccadé",
            "Pillar of Nusantara",
            "Pillar of Makassar",
            "Pillar of Arafura",
            "Pillar of Kirana",
            "Pillar of Polynesya",
            "Pillar of Andenor",
            "Pillar of Quito Prime",
            "Pillar of Solamazon",
            "Pillar of Atlantica",
        ];
        let spacing = RING_CIRCUMFERENCE / HUB_NAMES.len() as f64;
        let stations = HUB_NAMES
            .iter()
            .enumerate()
            .map(|(i, name)| Station {
                name: (*name).to_string(),
                position: spacing * i as f64,
                class: StationClass::PILLAR_HUB,
            })
            .collect();
        Self::new(stations)
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// Nearest station whose influence range covers the position
    pub fn nearest_station(&self, ring_position: f64) -> Option<(&Station, f64)> {
        let pos = wrap_position(ring_position);
        let mut nearest: Option<(&Station, f64)> = None;
        for station in &self.stations {
            let distance = ring_distance(pos, station.position);
            if distance > station.class.influence_half_length() {
                continue;
            }
            match nearest {
                Some((_, best)) if distance >= best => {}
                _ => nearest = Some((station, distance)),
            }
        }
        nearest
    }

    /// Name of the hub covering a ring position, for palette lookups
    pub fn hub_name_at(&self, ring_position: f64) -> Option<&str> {
        self.nearest_station(ring_position)
            .map(|(station, _)| station.name.as_str())
    }

    /// Floor width at a ring position.
    ///
    /// Exactly `BASE_WIDTH` outside every influence range; at a station
    /// center (or anywhere on its plateau) the class's full width.
    pub fn width_at(&self, ring_position: f64) -> f32 {
        let Some((station, distance)) = self.nearest_station(ring_position) else {
            return BASE_WIDTH;
        };
        let class = &station.class;
        let max_width = class.max_radius * 2.0;

        if distance <= class.plateau_radius {
            return max_width;
        }

        let effective_range = class.influence_half_length() - class.plateau_radius;
        let t = if effective_range <= 0.0 {
            1.0
        } else {
            ((distance - class.plateau_radius) / effective_range).clamp(0.0, 1.0)
        };
        BASE_WIDTH + (max_width - BASE_WIDTH) * cosine_blend(t)
    }

    /// Level count at a ring position, floored to an integer
    pub fn levels_at(&self, ring_position: f64) -> u32 {
        let Some((station, distance)) = self.nearest_station(ring_position) else {
            return BASE_LEVELS;
        };
        let class = &station.class;
        let t = (distance / class.influence_half_length()).clamp(0.0, 1.0);
        let additional = (class.max_levels - BASE_LEVELS) as f32;
        BASE_LEVELS + (additional * cosine_blend(t)) as u32
    }

    /// Zone half-width at a ring position, from the discrete tier table
    pub fn zone_half_width(&self, ring_position: f64) -> f32 {
        let width = self.width_at(ring_position);
        for (threshold, half_width) in ZONE_HALF_WIDTH_TIERS {
            if width >= threshold {
                return half_width;
            }
        }
        BASE_ZONE_HALF_WIDTH
    }
}

impl Default for FlareModel {
    fn default() -> Self {
        Self::with_pillar_hubs()
    }
}

/// `(1 + cos(π·t)) / 2`: 1 at t = 0, 0 at t = 1, monotone non-increasing
fn cosine_blend(t: f64) -> f32 {
    ((1.0 + (std::f64::consts::PI * t).cos()) / 2.0) as f32
}
