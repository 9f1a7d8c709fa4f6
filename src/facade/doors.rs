//! Door and garage-door placement
//!
//! Person doors sit on the 1 m service plinth. Main-door placement samples
//! positions away from windows with a bounded attempt count, falls back to
//! fixed offsets, and finally accepts a fixed inset position even when it
//! overlaps a window; the window prune in the orchestrator cleans that up.

use crate::building::SubtypeProfile;
use crate::seed::GenRng;

use super::{Facade, Opening, CORNER_TRIM_FRACTION};

pub const DOOR_WIDTH: f32 = 0.9;
pub const DOOR_HEIGHT: f32 = 2.1;
pub const GARAGE_DOOR_WIDTH: f32 = 3.0;
pub const UTILITY_DOOR_WIDTH: f32 = 1.2;

const MAX_GARAGE_DOOR_HEIGHT: f32 = 3.5;
/// Gap between garage doors placed side by side
const GARAGE_SPACING: f32 = 1.2;
/// Utility doors sit this far from their garage door's edge
const UTILITY_OFFSET: f32 = 0.6;

const DOOR_PLACEMENT_ATTEMPTS: usize = 20;
const WINDOW_CLEARANCE: f32 = 0.25;
const GARAGE_CLEARANCE: f32 = 0.3;

fn door_center_z(height: f32, door_height: f32) -> f32 {
    -height * 0.5 + 1.0 + door_height * 0.5
}

/// Place a person door on a facade, avoiding windows when possible.
pub(crate) fn place_main_door(
    facade_width: f32,
    height: f32,
    windows: &[super::Window],
    rng: &mut GenRng,
) -> Opening {
    let z = door_center_z(height, DOOR_HEIGHT);
    let trim = facade_width * CORNER_TRIM_FRACTION;
    let limit = facade_width * 0.5 - trim - DOOR_WIDTH * 0.5;
    if limit <= 0.0 {
        return Opening::new(0.0, z, DOOR_WIDTH, DOOR_HEIGHT);
    }

    let clear = |x: f32| {
        let candidate = Opening::new(x, z, DOOR_WIDTH, DOOR_HEIGHT);
        !windows
            .iter()
            .any(|w| candidate.conflicts(&w.opening, WINDOW_CLEARANCE, WINDOW_CLEARANCE))
    };

    for _ in 0..DOOR_PLACEMENT_ATTEMPTS {
        let x = rng.range(-limit..=limit);
        if clear(x) {
            return Opening::new(x, z, DOOR_WIDTH, DOOR_HEIGHT);
        }
    }

    // Edge-biased fixed fallbacks, then a fixed inset position that may
    // overlap a window.
    let half = facade_width * 0.5;
    for x in [-0.3 * half, 0.3 * half, 0.0] {
        let x = x.clamp(-limit, limit);
        if clear(x) {
            return Opening::new(x, z, DOOR_WIDTH, DOOR_HEIGHT);
        }
    }
    let x = (-half + trim + DOOR_WIDTH).clamp(-limit, limit);
    Opening::new(x, z, DOOR_WIDTH, DOOR_HEIGHT)
}

/// Which non-entry facades receive secondary person doors.
pub(crate) fn secondary_facades(
    profile: &SubtypeProfile,
    entry: Facade,
    rng: &mut GenRng,
) -> Vec<Facade> {
    let mut others: Vec<Facade> = Facade::ALL.into_iter().filter(|f| *f != entry).collect();

    if profile.doors_on_all_facades {
        return others;
    }
    if profile.secondary_door_count.1 == 0 || !rng.chance(profile.secondary_door_chance) {
        return Vec::new();
    }

    let (lo, hi) = profile.secondary_door_count;
    let count = (rng.range(lo..=hi) as usize).min(others.len());
    // Partial shuffle picks `count` distinct facades.
    for i in 0..count {
        let j = rng.range(i..others.len());
        others.swap(i, j);
    }
    others.truncate(count);
    others
}

/// Place a group of garage doors on one facade, centered side by side.
///
/// The drawn count shrinks until the group fits inside the trim inset. A
/// position that collides with an existing door tries one slot-pitch offset
/// to either side before being dropped.
pub(crate) fn place_garage_doors(
    profile: &SubtypeProfile,
    facade_width: f32,
    height: f32,
    existing: &[Opening],
    rng: &mut GenRng,
) -> Vec<Opening> {
    if profile.garage_count_weights.is_empty() || !rng.chance(profile.garage_chance) {
        return Vec::new();
    }

    let mut count = match rng.weighted_index(profile.garage_count_weights) {
        Some(i) => i + 1,
        None => return Vec::new(),
    };

    let door_height = MAX_GARAGE_DOOR_HEIGHT.min(height - 1.5);
    if door_height <= 0.0 {
        return Vec::new();
    }
    let z = door_center_z(height, door_height);

    let trim = facade_width * CORNER_TRIM_FRACTION;
    let usable = facade_width - 2.0 * trim;
    let group_width = |n: usize| n as f32 * GARAGE_DOOR_WIDTH + (n - 1) as f32 * GARAGE_SPACING;
    while count > 0 && group_width(count) > usable {
        count -= 1;
    }
    if count == 0 {
        return Vec::new();
    }

    let pitch = GARAGE_DOOR_WIDTH + GARAGE_SPACING;
    let limit = usable * 0.5 - GARAGE_DOOR_WIDTH * 0.5;
    let start = -group_width(count) * 0.5 + GARAGE_DOOR_WIDTH * 0.5;

    let mut placed: Vec<Opening> = Vec::with_capacity(count);
    for i in 0..count {
        let base_x = start + i as f32 * pitch;
        let fits = |x: f32, placed: &[Opening]| {
            if x.abs() > limit {
                return false;
            }
            let candidate = Opening::new(x, z, GARAGE_DOOR_WIDTH, door_height);
            !existing
                .iter()
                .chain(placed.iter())
                .any(|o| candidate.conflicts(o, GARAGE_CLEARANCE, GARAGE_CLEARANCE))
        };

        let x = [base_x, base_x - pitch, base_x + pitch]
            .into_iter()
            .find(|x| fits(*x, &placed));
        if let Some(x) = x {
            placed.push(Opening::new(x, z, GARAGE_DOOR_WIDTH, door_height));
        }
    }
    placed
}

/// Utility door beside a garage door, flipped to the far side when the near
/// side leaves the facade or hits another opening. `None` when both sides
/// are blocked.
pub(crate) fn paired_utility_door(
    garage: &Opening,
    facade_width: f32,
    height: f32,
    blockers: &[Opening],
) -> Option<Opening> {
    let trim = facade_width * CORNER_TRIM_FRACTION;
    let limit = facade_width * 0.5 - trim - UTILITY_DOOR_WIDTH * 0.5;
    let z = door_center_z(height, DOOR_HEIGHT);
    let offset = GARAGE_DOOR_WIDTH * 0.5 + UTILITY_OFFSET + UTILITY_DOOR_WIDTH * 0.5;

    for x in [garage.x + offset, garage.x - offset] {
        if x.abs() > limit {
            continue;
        }
        let candidate = Opening::new(x, z, UTILITY_DOOR_WIDTH, DOOR_HEIGHT);
        let blocked = blockers
            .iter()
            .any(|o| o != garage && candidate.conflicts(o, 0.0, 0.0));
        if !blocked {
            return Some(candidate);
        }
    }
    None
}
