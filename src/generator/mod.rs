//! Generation pipeline
//!
//! A [`GenerationSession`] ties together the flare model, configuration,
//! and a color source, and turns zone polygons into building records. All
//! state is explicit: the same session, zone, and address always produce
//! the same buildings, and zones are independent so the multi-zone entry
//! point fans out across a rayon pool.

pub mod config;

use std::time::Instant;

use glam::Vec2;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::building::dimensions::{select_dimensions, BuildingDims};
use crate::building::BuildingSubtype;
use crate::facade::{self, BuildingOpenings, Facade};
use crate::flare::{FlareModel, CHUNK_LENGTH};
use crate::math::Rect;
use crate::palette::{BuildingColors, ColorLookup, PaletteLibrary};
use crate::placement::PlacementValidator;
use crate::seed::{building_seed, chunk_seed, zone_seed, GenRng};
use crate::zone::planner::{plan_grid_cells, plan_scatter, CellKind};
use crate::zone::{ZoneKind, ZonePolygon};

pub use config::GenerationConfig;

/// Where a zone lives in the world: floor, ring chunk, and its index among
/// the chunk's zones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneAddress {
    pub floor: i64,
    pub chunk_index: i64,
    pub zone_index: i64,
}

/// Chunk-level metadata derived from the flare model
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChunkParams {
    pub index: i64,
    /// Ring position of the chunk center in meters
    pub center: f64,
    pub width: f32,
    pub levels: u32,
    pub zone_half_width: f32,
    pub hub: Option<String>,
}

impl ChunkParams {
    pub fn from_flare(flare: &FlareModel, index: i64) -> Self {
        let center = index as f64 * CHUNK_LENGTH + CHUNK_LENGTH * 0.5;
        Self {
            index,
            center,
            width: flare.width_at(center),
            levels: flare.levels_at(center),
            zone_half_width: flare.zone_half_width(center),
            hub: flare.hub_name_at(center).map(str::to_string),
        }
    }
}

/// One generated building, ready for serialization
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Building {
    pub id: String,
    pub subtype: BuildingSubtype,
    pub zone: ZoneKind,
    pub floor: i64,
    /// The derived seed all of this building's randomness came from
    pub seed: u32,
    pub importance: f32,
    /// Footprint center in zone-local meters
    pub position: [f32; 2],
    /// Yaw in degrees; the entry facade always faces the ring centerline
    pub rotation: f32,
    pub width: f32,
    pub depth: f32,
    pub height: f32,
    /// Footprint corners, counter-clockwise from the min corner
    pub corners: [[f32; 2]; 4],
    pub openings: BuildingOpenings,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<BuildingColors>,
}

/// Generation context carrying the flare model, config, and color source.
///
/// Holds no mutable state; every method takes the randomness it needs from
/// seeds derived per zone and per building.
pub struct GenerationSession<C: ColorLookup = PaletteLibrary> {
    config: GenerationConfig,
    flare: FlareModel,
    palette: C,
}

impl GenerationSession<PaletteLibrary> {
    /// Session with the standard pillar hubs and default palettes
    pub fn new(config: GenerationConfig) -> Self {
        Self::with_palette(config, FlareModel::default(), PaletteLibrary::with_default_palettes())
    }
}

impl<C: ColorLookup> GenerationSession<C> {
    pub fn with_palette(config: GenerationConfig, flare: FlareModel, palette: C) -> Self {
        Self { config, flare, palette }
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    pub fn flare(&self) -> &FlareModel {
        &self.flare
    }

    pub fn chunk_params(&self, chunk_index: i64) -> ChunkParams {
        ChunkParams::from_flare(&self.flare, chunk_index)
    }

    /// Generate all buildings for one zone.
    pub fn generate_zone(&self, zone: &ZonePolygon, address: &ZoneAddress) -> Vec<Building> {
        let start = Instant::now();
        let cseed = chunk_seed(address.floor, address.chunk_index, self.config.world_seed);
        let zseed = zone_seed(cseed, address.floor, address.chunk_index, address.zone_index);
        let hub = self
            .flare
            .hub_name_at(address.chunk_index as f64 * CHUNK_LENGTH + CHUNK_LENGTH * 0.5)
            .map(str::to_string);

        let buildings = if zone.kind().uses_scatter() {
            self.generate_scattered(zone, address, zseed, hub.as_deref())
        } else {
            self.generate_gridded(zone, address, cseed, hub.as_deref())
        };

        log::debug!(
            "zone {}/{}/{} ({}): {} buildings in {:.2?}",
            address.floor,
            address.chunk_index,
            address.zone_index,
            zone.kind().name(),
            buildings.len(),
            start.elapsed()
        );
        buildings
    }

    /// Generate many zones in parallel. Output order matches input order.
    pub fn generate_zones(&self, zones: &[(ZonePolygon, ZoneAddress)]) -> Vec<Vec<Building>>
    where
        C: Sync,
    {
        let start = Instant::now();
        let results: Vec<Vec<Building>> = zones
            .par_iter()
            .map(|(zone, address)| self.generate_zone(zone, address))
            .collect();
        let total: usize = results.iter().map(Vec::len).sum();
        log::info!(
            "generated {} buildings across {} zones in {:.2?}",
            total,
            zones.len(),
            start.elapsed()
        );
        results
    }

    fn generate_scattered(
        &self,
        zone: &ZonePolygon,
        address: &ZoneAddress,
        zseed: u32,
        hub: Option<&str>,
    ) -> Vec<Building> {
        let mut zone_rng = GenRng::from_seed(zseed);
        let placements = plan_scatter(zone, &mut zone_rng);

        placements
            .iter()
            .enumerate()
            .map(|(i, placement)| {
                let id = format!(
                    "bld_{}_{}_{}_s{}",
                    address.floor, address.chunk_index, address.zone_index, i
                );
                let seed = building_seed(zseed, i as i64, 0);
                let mut rng = GenRng::from_seed(seed);
                self.assemble(id, placement.dims, placement.center, zone, address, seed, hub, &mut rng)
            })
            .collect()
    }

    fn generate_gridded(
        &self,
        zone: &ZonePolygon,
        address: &ZoneAddress,
        cseed: u32,
        hub: Option<&str>,
    ) -> Vec<Building> {
        let cell_size = self.config.cell_size;
        let cells = plan_grid_cells(zone, cseed, cell_size);
        // Leave room for the clearance band between neighboring cells.
        let max_footprint = cell_size - crate::placement::MIN_CLEARANCE;

        let mut validator = PlacementValidator::new(zone.polygon());
        let mut buildings = Vec::new();

        for cell in cells.iter().filter(|c| c.kind == CellKind::Building) {
            let cx = (cell.bounds.min.x / cell_size).round() as i64;
            let cy = (cell.bounds.min.y / cell_size).round() as i64;
            let seed = building_seed(cell.seed, 0, 0);
            let mut rng = GenRng::from_seed(seed);

            let mut dims = select_dimensions(zone.kind(), zone.importance(), &mut rng);
            dims.width = dims.width.min(max_footprint);
            dims.depth = dims.depth.min(max_footprint);

            let center = cell.bounds.center();
            let half = Vec2::new(dims.width * 0.5, dims.depth * 0.5);
            let footprint = Rect::from_center_half_extent(center, half);
            if !validator.try_accept(footprint, 0.0) {
                // Cells straddling the zone boundary lose their building.
                log::debug!("skipping unplaceable cell ({cx}, {cy})");
                continue;
            }

            let id = format!(
                "bld_{}_{}_{}_g{}x{}",
                address.floor, address.chunk_index, address.zone_index, cx, cy
            );
            buildings.push(self.assemble(id, dims, center, zone, address, seed, hub, &mut rng));
        }
        buildings
    }

    #[allow(clippy::too_many_arguments)]
    fn assemble(
        &self,
        id: String,
        dims: BuildingDims,
        center: Vec2,
        zone: &ZonePolygon,
        address: &ZoneAddress,
        seed: u32,
        hub: Option<&str>,
        rng: &mut GenRng,
    ) -> Building {
        let entry = facade::entry_facade(center.y);
        let openings = facade::generate_openings(&dims, entry, rng);
        let rotation = match entry {
            Facade::Back => 180.0,
            _ => 0.0,
        };

        let colors = if self.config.assign_colors {
            self.palette
                .colors(hub.unwrap_or(""), dims.subtype.palette_zone())
                .and_then(|palette| palette.sample(rng))
        } else {
            None
        };

        let half = Vec2::new(dims.width * 0.5, dims.depth * 0.5);
        let corners = Rect::from_center_half_extent(center, half)
            .corners()
            .map(|c| [c.x, c.y]);

        Building {
            id,
            subtype: dims.subtype,
            zone: zone.kind(),
            floor: address.floor,
            seed,
            importance: zone.importance(),
            position: [center.x, center.y],
            rotation,
            width: dims.width,
            depth: dims.depth,
            height: dims.height,
            corners,
            openings,
            colors,
        }
    }
}
