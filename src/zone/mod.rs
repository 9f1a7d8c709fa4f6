//! Zone types and zone decomposition
//!
//! A zone polygon turns into building sites one of two ways: regular zones
//! get a fixed-size grid of cells classified as building/park/road/plaza,
//! while industrial and agricultural lots use a bounded scatter-placement
//! loop that samples varied-size footprints directly. Both paths hand their
//! results to the generator, which runs the full validation and assembly.

pub mod planner;

pub use planner::{plan_grid_cells, plan_scatter, CellKind, GridCell, ScatterPlacement};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::math::Polygon;

/// Zone category tag.
///
/// Unknown zone names map to `Other`, which uses generic fallback tables
/// everywhere rather than failing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneKind {
    Residential,
    Commercial,
    Industrial,
    MixedUse,
    Agricultural,
    Park,
    Restricted,
    Other,
}

impl ZoneKind {
    /// Parse a zone-type string; unknown names become `Other`
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "residential" => ZoneKind::Residential,
            "commercial" => ZoneKind::Commercial,
            "industrial" => ZoneKind::Industrial,
            "mixed_use" => ZoneKind::MixedUse,
            "agricultural" => ZoneKind::Agricultural,
            "park" => ZoneKind::Park,
            "restricted" => ZoneKind::Restricted,
            _ => ZoneKind::Other,
        }
    }

    /// Stable lowercase name for serialized records
    pub fn name(self) -> &'static str {
        match self {
            ZoneKind::Residential => "residential",
            ZoneKind::Commercial => "commercial",
            ZoneKind::Industrial => "industrial",
            ZoneKind::MixedUse => "mixed_use",
            ZoneKind::Agricultural => "agricultural",
            ZoneKind::Park => "park",
            ZoneKind::Restricted => "restricted",
            ZoneKind::Other => "other",
        }
    }

    /// Whether the zone's buildings come from the scatter loop instead of
    /// grid decomposition. Industrial lots and farmsteads want varied-size
    /// footprints with subtype spacing, not a regular cell grid.
    pub fn uses_scatter(self) -> bool {
        matches!(self, ZoneKind::Industrial | ZoneKind::Agricultural)
    }
}

/// A typed zone region: a validated polygon plus kind and importance.
///
/// Constructed upstream and immutable here.
#[derive(Clone, Debug)]
pub struct ZonePolygon {
    polygon: Polygon,
    kind: ZoneKind,
    importance: f32,
}

impl ZonePolygon {
    /// Build a zone from a boundary ring. Returns `None` for degenerate
    /// rings (fewer than 3 distinct points or zero area); callers skip such
    /// zones and generate nothing for them.
    pub fn new(ring: &[Vec2], kind: ZoneKind, importance: f32) -> Option<Self> {
        let polygon = Polygon::from_ring(ring)?;
        Some(Self {
            polygon,
            kind,
            importance: importance.clamp(0.0, 1.0),
        })
    }

    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }

    pub fn kind(&self) -> ZoneKind {
        self.kind
    }

    pub fn importance(&self) -> f32 {
        self.importance
    }
}
