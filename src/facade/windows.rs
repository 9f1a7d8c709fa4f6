//! Per-band window layout
//!
//! Each floor band draws its three treatment chances in a fixed order, then
//! lays the chosen treatments out across evenly spaced horizontal slots.
//! Full-height panes replace standard ones in a band and leave no room for
//! ceiling strips; standard and ceiling strips stack without touching.

use crate::building::SubtypeProfile;
use crate::seed::GenRng;

use super::{Opening, Window, WindowKind, CORNER_TRIM_FRACTION};

/// One floor band in meters: 1 m service strip under a 3 m occupied strip
pub const FLOOR_BAND_HEIGHT: f32 = 4.0;
const SERVICE_STRIP: f32 = 1.0;

/// Gap between adjacent window slots
const SLOT_SPACING: f32 = 1.0;
/// Chance any individual slot stays blank
const SLOT_SKIP_CHANCE: f32 = 0.10;

const STANDARD_SIZE: (f32, f32) = (1.5, 1.4);
const FULL_HEIGHT_SIZE: (f32, f32) = (1.8, 3.4);
const CEILING_SIZE: (f32, f32) = (1.5, 0.7);
/// Ceiling strips end this far below the band top
const CEILING_TOP_GAP: f32 = 0.1;

pub(crate) fn windows_for_facade(
    profile: &SubtypeProfile,
    facade_width: f32,
    height: f32,
    rng: &mut GenRng,
) -> Vec<Window> {
    let bands = ((height / FLOOR_BAND_HEIGHT).floor() as usize).max(1);
    let mut windows = Vec::new();

    for band in 0..bands {
        let band_base = -height * 0.5 + band as f32 * FLOOR_BAND_HEIGHT;

        // Fixed draw order keeps the stream identical across subtypes.
        let full = rng.chance(profile.windows.full_height);
        let standard = rng.chance(profile.windows.standard);
        let ceiling = rng.chance(profile.windows.ceiling);

        if full {
            let z = band_base + FLOOR_BAND_HEIGHT - FULL_HEIGHT_SIZE.1 * 0.5;
            fill_slots(
                &mut windows,
                WindowKind::FullHeight,
                FULL_HEIGHT_SIZE,
                z,
                facade_width,
                profile.window_density,
                rng,
            );
        } else if standard {
            let z = band_base + SERVICE_STRIP + 1.5;
            fill_slots(
                &mut windows,
                WindowKind::Standard,
                STANDARD_SIZE,
                z,
                facade_width,
                profile.window_density,
                rng,
            );
        }
        if ceiling && !full {
            let z = band_base + FLOOR_BAND_HEIGHT - CEILING_TOP_GAP - CEILING_SIZE.1 * 0.5;
            fill_slots(
                &mut windows,
                WindowKind::Ceiling,
                CEILING_SIZE,
                z,
                facade_width,
                profile.window_density,
                rng,
            );
        }
    }

    windows
}

fn fill_slots(
    out: &mut Vec<Window>,
    kind: WindowKind,
    size: (f32, f32),
    z: f32,
    facade_width: f32,
    density: f32,
    rng: &mut GenRng,
) {
    for x in slot_positions(facade_width, size.0, density) {
        if rng.chance(SLOT_SKIP_CHANCE) {
            continue;
        }
        out.push(Window {
            kind,
            opening: Opening::new(x, z, size.0, size.1),
        });
    }
}

/// Evenly spaced slot centers across the facade's inset region. The inset
/// trims the corner fraction per side plus half a window width each end so
/// outer panes never touch the corners.
fn slot_positions(facade_width: f32, window_width: f32, density: f32) -> Vec<f32> {
    let trim = facade_width * CORNER_TRIM_FRACTION;
    let inset = facade_width - 2.0 * trim - window_width;
    if inset < 0.0 {
        return Vec::new();
    }

    let raw = (inset / (window_width + SLOT_SPACING)).floor();
    let count = ((raw * density.sqrt()).floor() as usize).max(1);
    if count == 1 {
        return vec![0.0];
    }

    let step = inset / (count - 1) as f32;
    (0..count).map(|i| -inset * 0.5 + i as f32 * step).collect()
}
