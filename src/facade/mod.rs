//! Facade opening generation
//!
//! Openings live in facade-local coordinates: `x` runs along the facade
//! width with 0 at the facade center, `z` runs up the building height with
//! 0 at mid-height. Windows are laid out per 4 m floor band, doors and
//! garage doors are placed afterwards, and a final pass removes any window
//! that ended up conflicting with a door. Doors always win.

mod doors;
mod windows;

use serde::{Deserialize, Serialize};

use crate::building::dimensions::BuildingDims;
use crate::building::GarageFacades;
use crate::seed::GenRng;

pub use doors::{DOOR_HEIGHT, DOOR_WIDTH, GARAGE_DOOR_WIDTH, UTILITY_DOOR_WIDTH};
pub use windows::FLOOR_BAND_HEIGHT;

/// Corner trim as a fraction of facade width, reserved at each end
pub(crate) const CORNER_TRIM_FRACTION: f32 = 0.02;

/// An axis-aligned opening on a facade plane, centered at (x, z)
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Opening {
    pub x: f32,
    pub z: f32,
    pub width: f32,
    pub height: f32,
}

impl Opening {
    pub fn new(x: f32, z: f32, width: f32, height: f32) -> Self {
        Self { x, z, width, height }
    }

    /// Bounding-box overlap with independent horizontal/vertical margins
    pub fn conflicts(&self, other: &Opening, h_margin: f32, v_margin: f32) -> bool {
        (self.x - other.x).abs() < (self.width + other.width) * 0.5 + h_margin
            && (self.z - other.z).abs() < (self.height + other.height) * 0.5 + v_margin
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowKind {
    FullHeight,
    Standard,
    Ceiling,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Window {
    pub kind: WindowKind,
    pub opening: Opening,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DoorKind {
    Main,
    Secondary,
    Utility,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Door {
    pub kind: DoorKind,
    pub opening: Opening,
}

/// One of the four building faces. Front faces the ring centerline side;
/// front/back span the building width, left/right span the depth.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Facade {
    Front,
    Back,
    Left,
    Right,
}

impl Facade {
    pub const ALL: [Facade; 4] = [Facade::Front, Facade::Back, Facade::Left, Facade::Right];

    pub fn name(self) -> &'static str {
        match self {
            Facade::Front => "front",
            Facade::Back => "back",
            Facade::Left => "left",
            Facade::Right => "right",
        }
    }

    fn width(self, dims: &BuildingDims) -> f32 {
        match self {
            Facade::Front | Facade::Back => dims.width,
            Facade::Left | Facade::Right => dims.depth,
        }
    }
}

/// The facade nearest the ring centerline gets the main door. Front faces
/// the centerline, so any building at or above y = 0 enters through the
/// front; ties go to the front as well.
pub fn entry_facade(center_y: f32) -> Facade {
    if center_y >= 0.0 {
        Facade::Front
    } else {
        Facade::Back
    }
}

/// Openings on one facade
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct FacadeOpenings {
    pub windows: Vec<Window>,
    pub doors: Vec<Door>,
    pub garage_doors: Vec<Opening>,
}

/// All openings on a building, keyed by facade
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct BuildingOpenings {
    pub front: FacadeOpenings,
    pub back: FacadeOpenings,
    pub left: FacadeOpenings,
    pub right: FacadeOpenings,
}

impl BuildingOpenings {
    pub fn facade(&self, facade: Facade) -> &FacadeOpenings {
        match facade {
            Facade::Front => &self.front,
            Facade::Back => &self.back,
            Facade::Left => &self.left,
            Facade::Right => &self.right,
        }
    }

    fn facade_mut(&mut self, facade: Facade) -> &mut FacadeOpenings {
        match facade {
            Facade::Front => &mut self.front,
            Facade::Back => &mut self.back,
            Facade::Left => &mut self.left,
            Facade::Right => &mut self.right,
        }
    }
}

/// Generate every opening for one building.
///
/// Order is fixed (windows on all facades, then doors, then garage doors,
/// then the window prune) so a given seed always yields the same layout.
pub fn generate_openings(dims: &BuildingDims, entry: Facade, rng: &mut GenRng) -> BuildingOpenings {
    let profile = dims.subtype.profile();
    let mut out = BuildingOpenings::default();

    for facade in Facade::ALL {
        out.facade_mut(facade).windows =
            windows::windows_for_facade(profile, facade.width(dims), dims.height, rng);
    }

    // Main door first, then the subtype's extra doors.
    let main = doors::place_main_door(
        entry.width(dims),
        dims.height,
        &out.facade(entry).windows,
        rng,
    );
    out.facade_mut(entry).doors.push(Door { kind: DoorKind::Main, opening: main });

    for facade in doors::secondary_facades(profile, entry, rng) {
        let opening = doors::place_main_door(
            facade.width(dims),
            dims.height,
            &out.facade(facade).windows,
            rng,
        );
        out.facade_mut(facade)
            .doors
            .push(Door { kind: DoorKind::Secondary, opening });
    }

    // Industrial rule: the loading side opposite the entry still needs a
    // person door.
    if profile.require_front_back_doors {
        let opposite = match entry {
            Facade::Front => Facade::Back,
            _ => Facade::Front,
        };
        if !out.facade(opposite).doors.iter().any(|d| d.kind != DoorKind::Utility) {
            let opening = doors::place_main_door(
                opposite.width(dims),
                dims.height,
                &out.facade(opposite).windows,
                rng,
            );
            out.facade_mut(opposite)
                .doors
                .push(Door { kind: DoorKind::Secondary, opening });
        }
    }

    let garage_targets: &[Facade] = match profile.garage_facades {
        GarageFacades::None => &[],
        GarageFacades::FrontOnly => &[Facade::Front],
        GarageFacades::FrontAndBack => &[Facade::Front, Facade::Back],
    };
    for &facade in garage_targets {
        let width = facade.width(dims);
        let side = out.facade_mut(facade);
        let existing: Vec<Opening> = side.doors.iter().map(|d| d.opening).collect();
        let placed = doors::place_garage_doors(profile, width, dims.height, &existing, rng);
        if profile.pair_utility_door {
            for garage in &placed {
                let blockers: Vec<Opening> = side
                    .doors
                    .iter()
                    .map(|d| d.opening)
                    .chain(placed.iter().copied())
                    .collect();
                if let Some(utility) =
                    doors::paired_utility_door(garage, width, dims.height, &blockers)
                {
                    side.doors.push(Door { kind: DoorKind::Utility, opening: utility });
                }
            }
        }
        side.garage_doors.extend(placed);
    }

    prune_conflicting_windows(&mut out);
    out
}

/// Drop windows that collide with any door or garage door on the same
/// facade. Horizontal margin widens with the window so big panes keep
/// visible clearance; vertical margin stays tight.
fn prune_conflicting_windows(openings: &mut BuildingOpenings) {
    for facade in Facade::ALL {
        let side = openings.facade_mut(facade);
        let blockers: Vec<Opening> = side
            .doors
            .iter()
            .map(|d| d.opening)
            .chain(side.garage_doors.iter().copied())
            .collect();
        side.windows.retain(|w| {
            let h_margin = (w.opening.width * 0.5).max(1.0);
            !blockers
                .iter()
                .any(|b| w.opening.conflicts(b, h_margin, 0.25))
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::building::dimensions::select_dimensions_for_subtype;
    use crate::building::BuildingSubtype;

    fn dims(subtype: BuildingSubtype, seed: u32) -> BuildingDims {
        let mut rng = GenRng::from_seed(seed);
        select_dimensions_for_subtype(subtype, 0.5, &mut rng)
    }

    #[test]
    fn test_entry_facade_prefers_centerline() {
        assert_eq!(entry_facade(25.0), Facade::Front);
        assert_eq!(entry_facade(-25.0), Facade::Back);
        assert_eq!(entry_facade(0.0), Facade::Front);
    }

    #[test]
    fn test_deterministic_openings() {
        let d = dims(BuildingSubtype::Apartment, 11);
        let mut a = GenRng::from_seed(500);
        let mut b = GenRng::from_seed(500);
        let oa = generate_openings(&d, Facade::Front, &mut a);
        let ob = generate_openings(&d, Facade::Front, &mut b);
        for f in Facade::ALL {
            assert_eq!(oa.facade(f).windows, ob.facade(f).windows);
            assert_eq!(oa.facade(f).doors, ob.facade(f).doors);
            assert_eq!(oa.facade(f).garage_doors, ob.facade(f).garage_doors);
        }
    }

    #[test]
    fn test_exactly_one_main_door() {
        for seed in 0..20 {
            let d = dims(BuildingSubtype::House, seed);
            let mut rng = GenRng::from_seed(seed + 1000);
            let openings = generate_openings(&d, Facade::Back, &mut rng);
            let mains: usize = Facade::ALL
                .iter()
                .map(|f| {
                    openings
                        .facade(*f)
                        .doors
                        .iter()
                        .filter(|d| d.kind == DoorKind::Main)
                        .count()
                })
                .sum();
            assert_eq!(mains, 1);
            assert_eq!(
                openings
                    .facade(Facade::Back)
                    .doors
                    .iter()
                    .filter(|d| d.kind == DoorKind::Main)
                    .count(),
                1
            );
        }
    }

    #[test]
    fn test_retail_has_door_on_every_facade() {
        let d = dims(BuildingSubtype::Retail, 3);
        let mut rng = GenRng::from_seed(77);
        let openings = generate_openings(&d, Facade::Front, &mut rng);
        for f in Facade::ALL {
            assert!(
                !openings.facade(f).doors.is_empty(),
                "retail facade {} has no door",
                f.name()
            );
        }
    }

    #[test]
    fn test_industrial_front_and_back_doors() {
        for seed in 0..20 {
            let d = dims(BuildingSubtype::Warehouse, seed);
            let mut rng = GenRng::from_seed(seed * 7 + 1);
            let openings = generate_openings(&d, Facade::Front, &mut rng);
            for f in [Facade::Front, Facade::Back] {
                assert!(
                    openings
                        .facade(f)
                        .doors
                        .iter()
                        .any(|d| d.kind != DoorKind::Utility),
                    "warehouse {} missing person door on {}",
                    seed,
                    f.name()
                );
            }
        }
    }

    #[test]
    fn test_windows_never_overlap_doors() {
        for seed in 0..30 {
            for subtype in BuildingSubtype::ALL {
                let d = dims(subtype, seed);
                let mut rng = GenRng::from_seed(seed * 31 + 5);
                let openings = generate_openings(&d, Facade::Front, &mut rng);
                for f in Facade::ALL {
                    let side = openings.facade(f);
                    for w in &side.windows {
                        let h_margin = (w.opening.width * 0.5).max(1.0);
                        for door in &side.doors {
                            assert!(
                                !w.opening.conflicts(&door.opening, h_margin, 0.25),
                                "{subtype:?} window/door conflict on {}",
                                f.name()
                            );
                        }
                        for garage in &side.garage_doors {
                            assert!(
                                !w.opening.conflicts(garage, h_margin, 0.25),
                                "{subtype:?} window/garage conflict on {}",
                                f.name()
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_openings_stay_within_building() {
        for seed in 0..20 {
            for subtype in BuildingSubtype::ALL {
                let d = dims(subtype, seed);
                let mut rng = GenRng::from_seed(seed + 9000);
                let openings = generate_openings(&d, Facade::Front, &mut rng);
                for f in Facade::ALL {
                    let half_w = f.width(&d) * 0.5;
                    let half_h = d.height * 0.5;
                    let side = openings.facade(f);
                    let all = side
                        .windows
                        .iter()
                        .map(|w| w.opening)
                        .chain(side.doors.iter().map(|d| d.opening))
                        .chain(side.garage_doors.iter().copied());
                    for o in all {
                        assert!(o.x.abs() + o.width * 0.5 <= half_w + 1e-3, "{subtype:?}");
                        assert!(o.z.abs() + o.height * 0.5 <= half_h + 1e-3, "{subtype:?}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_warehouse_suppresses_full_height_windows() {
        let d = dims(BuildingSubtype::Warehouse, 4);
        let mut rng = GenRng::from_seed(64);
        let openings = generate_openings(&d, Facade::Front, &mut rng);
        for f in Facade::ALL {
            assert!(openings
                .facade(f)
                .windows
                .iter()
                .all(|w| w.kind != WindowKind::FullHeight));
        }
    }

    #[test]
    fn test_serde_round_trip() {
        let d = dims(BuildingSubtype::Factory, 8);
        let mut rng = GenRng::from_seed(321);
        let openings = generate_openings(&d, Facade::Front, &mut rng);
        let json = serde_json::to_string(&openings).unwrap();
        let back: BuildingOpenings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.front.windows, openings.front.windows);
        assert_eq!(back.back.garage_doors, openings.back.garage_doors);
    }
}
