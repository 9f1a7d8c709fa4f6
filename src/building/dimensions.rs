//! Building dimension selection
//!
//! Picks a subtype from the zone's weighted table, draws width/depth from
//! the subtype's ranges, scales them by zone importance, and picks a height
//! from the subtype's discrete permitted set. Heights never scale: they stay
//! on the floor-height grid.

use crate::seed::GenRng;
use crate::zone::ZoneKind;

use super::subtype::BuildingSubtype;

/// Global width/depth clamp after importance scaling (meters)
pub const MIN_FOOTPRINT: f32 = 4.0;
const MAX_FOOTPRINT: f32 = 80.0;

/// Selected geometry for one building
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BuildingDims {
    pub subtype: BuildingSubtype,
    pub width: f32,
    pub depth: f32,
    pub height: f32,
}

/// Subtype distribution for a zone kind. Unknown kinds fall back to a
/// generic mixed table rather than failing.
pub fn subtype_table(kind: ZoneKind) -> &'static [(BuildingSubtype, f32)] {
    match kind {
        ZoneKind::Residential => &[
            (BuildingSubtype::House, 0.45),
            (BuildingSubtype::Apartment, 0.35),
            (BuildingSubtype::Campus, 0.20),
        ],
        ZoneKind::Commercial => &[(BuildingSubtype::Retail, 1.0)],
        ZoneKind::Industrial => &[
            (BuildingSubtype::Warehouse, 0.6),
            (BuildingSubtype::Factory, 0.4),
        ],
        ZoneKind::Agricultural => &[
            (BuildingSubtype::House, 0.35),
            (BuildingSubtype::Barn, 0.40),
            (BuildingSubtype::AgriIndustrial, 0.25),
        ],
        ZoneKind::MixedUse => &[
            (BuildingSubtype::House, 0.15),
            (BuildingSubtype::Apartment, 0.20),
            (BuildingSubtype::Campus, 0.10),
            (BuildingSubtype::Retail, 0.25),
            (BuildingSubtype::Warehouse, 0.15),
            (BuildingSubtype::Factory, 0.15),
        ],
        ZoneKind::Park => &[(BuildingSubtype::ParkStructure, 1.0)],
        // Restricted zones place no buildings; callers never ask, but give
        // them something harmless if they do.
        ZoneKind::Restricted | ZoneKind::Other => &[
            (BuildingSubtype::House, 0.4),
            (BuildingSubtype::Apartment, 0.2),
            (BuildingSubtype::Retail, 0.2),
            (BuildingSubtype::Warehouse, 0.2),
        ],
    }
}

/// Pick a subtype for the zone kind from its weighted table
pub fn select_subtype(kind: ZoneKind, rng: &mut GenRng) -> BuildingSubtype {
    let table = subtype_table(kind);
    let weights: Vec<f32> = table.iter().map(|(_, w)| *w).collect();
    // Tables are static and non-empty with positive weights
    let idx = rng.weighted_index(&weights).unwrap_or(0);
    table[idx].0
}

/// Select dimensions for a zone, drawing the subtype from the zone table
pub fn select_dimensions(kind: ZoneKind, importance: f32, rng: &mut GenRng) -> BuildingDims {
    let subtype = select_subtype(kind, rng);
    select_dimensions_for_subtype(subtype, importance, rng)
}

/// Select dimensions for an explicit subtype (agricultural clustering and
/// scatter re-draws use this directly)
pub fn select_dimensions_for_subtype(
    subtype: BuildingSubtype,
    importance: f32,
    rng: &mut GenRng,
) -> BuildingDims {
    let profile = subtype.profile();

    let base_width = rng.range(profile.width_range.0..=profile.width_range.1);
    let base_depth = rng.range(profile.depth_range.0..=profile.depth_range.1);
    let height_idx = rng.weighted_index(profile.height_weights).unwrap_or(0);
    let height = profile.heights[height_idx];

    // Importance scales footprint only; heights stay on the discrete grid.
    let scale = 0.7 + importance.clamp(0.0, 1.0) * 0.6;
    let width = (base_width * scale).clamp(MIN_FOOTPRINT, MAX_FOOTPRINT);
    let depth = (base_depth * scale).clamp(MIN_FOOTPRINT, MAX_FOOTPRINT);

    BuildingDims { subtype, width, depth, height }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic_for_same_seed() {
        let mut a = GenRng::from_seed(12345);
        let mut b = GenRng::from_seed(12345);
        let da = select_dimensions(ZoneKind::Industrial, 0.5, &mut a);
        let db = select_dimensions(ZoneKind::Industrial, 0.5, &mut b);
        assert_eq!(da, db);
    }

    #[test]
    fn test_commercial_always_retail_five_stories() {
        for seed in 0..50 {
            let mut rng = GenRng::from_seed(seed);
            let dims = select_dimensions(ZoneKind::Commercial, 0.5, &mut rng);
            assert_eq!(dims.subtype, BuildingSubtype::Retail);
            assert_eq!(dims.height, 20.0);
            assert!(dims.width >= 15.0 * 0.7 && dims.width <= 35.0);
        }
    }

    #[test]
    fn test_industrial_subtypes_and_heights() {
        let mut seen_warehouse = false;
        let mut seen_factory = false;
        for seed in 0..60 {
            let mut rng = GenRng::from_seed(seed);
            let dims = select_dimensions(ZoneKind::Industrial, 0.5, &mut rng);
            match dims.subtype {
                BuildingSubtype::Warehouse => {
                    seen_warehouse = true;
                    assert!([5.0, 10.0, 12.0].contains(&dims.height));
                }
                BuildingSubtype::Factory => {
                    seen_factory = true;
                    assert!(
                        [5.0, 8.0, 10.0, 12.0, 15.0, 16.0, 20.0].contains(&dims.height)
                    );
                }
                other => panic!("unexpected industrial subtype {other:?}"),
            }
        }
        assert!(seen_warehouse && seen_factory);
    }

    #[test]
    fn test_residential_heights_quantized() {
        for seed in 0..60 {
            let mut rng = GenRng::from_seed(seed);
            let dims = select_dimensions(ZoneKind::Residential, 0.5, &mut rng);
            assert!(
                [8.0, 12.0, 16.0, 20.0].contains(&dims.height),
                "height {} for {:?}",
                dims.height,
                dims.subtype
            );
        }
    }

    #[test]
    fn test_agricultural_subtype_variety() {
        let mut seen = std::collections::HashSet::new();
        for seed in 0..60 {
            let mut rng = GenRng::from_seed(seed);
            let dims = select_dimensions(ZoneKind::Agricultural, 0.4, &mut rng);
            seen.insert(dims.subtype);
            assert!([5.0, 8.0, 10.0, 12.0].contains(&dims.height));
        }
        assert!(seen.len() >= 2, "expected variety, got {seen:?}");
    }

    #[test]
    fn test_importance_scales_footprint_not_height() {
        let mut low = GenRng::from_seed(77);
        let mut high = GenRng::from_seed(77);
        let dims_low = select_dimensions_for_subtype(BuildingSubtype::Apartment, 0.0, &mut low);
        let dims_high = select_dimensions_for_subtype(BuildingSubtype::Apartment, 1.0, &mut high);
        // Same stream, so the base draws match; only the scale differs
        assert!(dims_high.width > dims_low.width);
        assert!(dims_high.depth > dims_low.depth);
        assert_eq!(dims_high.height, dims_low.height);
        let ratio = dims_high.width / dims_low.width;
        assert!((ratio - 1.3 / 0.7).abs() < 1e-3);
    }

    #[test]
    fn test_global_clamps_hold() {
        for seed in 0..100 {
            let mut rng = GenRng::from_seed(seed);
            for kind in [
                ZoneKind::Residential,
                ZoneKind::Industrial,
                ZoneKind::Park,
                ZoneKind::Other,
            ] {
                let dims = select_dimensions(kind, 1.0, &mut rng);
                assert!(dims.width >= MIN_FOOTPRINT && dims.width <= MAX_FOOTPRINT);
                assert!(dims.depth >= MIN_FOOTPRINT && dims.depth <= MAX_FOOTPRINT);
                assert!(dims.height <= 20.0);
            }
        }
    }

    #[test]
    fn test_park_structures_small() {
        for seed in 0..30 {
            let mut rng = GenRng::from_seed(seed);
            let dims = select_dimensions(ZoneKind::Park, 0.5, &mut rng);
            assert_eq!(dims.subtype, BuildingSubtype::ParkStructure);
            assert!(dims.width <= 15.0 && dims.depth <= 15.0);
            assert!([4.0, 8.0].contains(&dims.height));
        }
    }
}
