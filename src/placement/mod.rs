//! Footprint placement validation
//!
//! Two checks gate every candidate footprint: full containment in the zone
//! polygon with an inward safety margin, and minimum clearance from every
//! footprint already accepted in the same zone. Accepted footprints live
//! only for one zone's placement pass; nothing persists across zones.

use crate::math::{Polygon, Rect};

/// Inflation applied to candidates before the containment test, covering
/// exterior decorations that extend slightly past the walls.
const DECORATION_EPSILON: f32 = 0.1;

/// Inward margin from the zone boundary
const CONTAINMENT_MARGIN: f32 = 0.5;

/// Minimum separation between two non-touching footprints (distance units)
pub const MIN_CLEARANCE: f32 = 5.0;

/// Validates candidate footprints against a zone polygon and the set of
/// footprints already accepted in this zone's pass.
pub struct PlacementValidator<'a> {
    zone: &'a Polygon,
    // Stored pre-buffered by half their clearance gap; see has_clearance.
    accepted: Vec<Rect>,
}

impl<'a> PlacementValidator<'a> {
    pub fn new(zone: &'a Polygon) -> Self {
        Self { zone, accepted: Vec::new() }
    }

    /// Footprints accepted so far, each grown by half its clearance gap
    pub fn accepted(&self) -> &[Rect] {
        &self.accepted
    }

    /// Containment check: the inflated footprint must lie fully inside the
    /// zone polygon with the inward margin. Full containment, not
    /// intersection: a footprint straddling the boundary fails.
    pub fn is_contained(&self, footprint: &Rect) -> bool {
        self.zone
            .contains_rect(&footprint.inflated(DECORATION_EPSILON), CONTAINMENT_MARGIN)
    }

    /// Spacing check against accepted footprints. The candidate grows by
    /// half the required gap on every side and is tested against the
    /// accepted rects, which were stored already grown by half their own
    /// gap: two footprints always end up separated by at least the mean of
    /// their gaps. A positive-area overlap is a rejection; touching
    /// (zero-area contact) is allowed.
    pub fn has_clearance(&self, footprint: &Rect, gap: f32) -> bool {
        let buffered = footprint.inflated(gap / 2.0);
        self.accepted.iter().all(|placed| !buffered.overlaps(placed))
    }

    /// Run both checks; on success record the footprint and return true
    pub fn try_accept(&mut self, footprint: Rect, gap: f32) -> bool {
        let gap = gap.max(MIN_CLEARANCE);
        if !self.is_contained(&footprint) {
            return false;
        }
        if !self.has_clearance(&footprint, gap) {
            return false;
        }
        self.accepted.push(footprint.inflated(gap / 2.0));
        true
    }
}
