//! Simple polygon predicates for zone boundaries
//!
//! Zones are closed rings of points in ring-plane coordinates. Footprints
//! are axis-aligned rects, so containment reduces to point-in-polygon plus
//! edge/rect crossing tests; no general polygon clipping is needed.

use glam::Vec2;

use super::rect::Rect;

/// A simple (non-self-intersecting) polygon without holes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
    points: Vec<Vec2>,
}

impl Polygon {
    /// Build a polygon from a ring of points.
    ///
    /// A trailing point equal to the first (closed-ring convention) is
    /// dropped. Returns `None` for degenerate input: fewer than 3 distinct
    /// points, or zero area.
    pub fn from_ring(ring: &[Vec2]) -> Option<Self> {
        let mut points: Vec<Vec2> = ring.to_vec();
        if points.len() >= 2 && points.first() == points.last() {
            points.pop();
        }
        if points.len() < 3 {
            return None;
        }
        let poly = Self { points };
        if poly.area() <= f32::EPSILON {
            return None;
        }
        Some(poly)
    }

    /// The polygon's vertices (open ring, no repeated endpoint)
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Shoelace area (always non-negative)
    pub fn area(&self) -> f32 {
        let n = self.points.len();
        let mut sum = 0.0;
        for i in 0..n {
            let a = self.points[i];
            let b = self.points[(i + 1) % n];
            sum += a.x * b.y - b.x * a.y;
        }
        (sum * 0.5).abs()
    }

    /// Axis-aligned bounding rect
    pub fn bounds(&self) -> Rect {
        let mut min = self.points[0];
        let mut max = self.points[0];
        for p in &self.points[1..] {
            min = min.min(*p);
            max = max.max(*p);
        }
        Rect::new(min, max)
    }

    /// Point-in-polygon via ray casting. Points exactly on the boundary
    /// may land on either side; callers that care use `boundary_distance`.
    pub fn contains_point(&self, p: Vec2) -> bool {
        let n = self.points.len();
        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let a = self.points[i];
            let b = self.points[j];
            if (a.y > p.y) != (b.y > p.y) {
                let x_cross = (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x;
                if p.x < x_cross {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }

    /// Distance from a point to the polygon boundary
    pub fn boundary_distance(&self, p: Vec2) -> f32 {
        let n = self.points.len();
        let mut best = f32::INFINITY;
        for i in 0..n {
            let a = self.points[i];
            let b = self.points[(i + 1) % n];
            best = best.min(point_segment_distance(p, a, b));
        }
        best
    }

    /// Check whether the polygon and a rect intersect at all (shared area,
    /// containment either way, or edge contact).
    pub fn intersects_rect(&self, rect: &Rect) -> bool {
        if rect.corners().iter().any(|c| self.contains_point(*c)) {
            return true;
        }
        if self.points.iter().any(|p| rect.contains_point(*p)) {
            return true;
        }
        let n = self.points.len();
        for i in 0..n {
            let a = self.points[i];
            let b = self.points[(i + 1) % n];
            if segment_intersects_rect(a, b, rect) {
                return true;
            }
        }
        false
    }

    /// Check that a rect lies fully inside the polygon with an inward margin.
    ///
    /// All four corners must be inside with at least `margin` clearance from
    /// the boundary, and no polygon edge may cross the rect interior. This is
    /// a true containment test, not a bounding-box intersection test.
    pub fn contains_rect(&self, rect: &Rect, margin: f32) -> bool {
        for corner in rect.corners() {
            if !self.contains_point(corner) {
                return false;
            }
            if self.boundary_distance(corner) < margin {
                return false;
            }
        }
        // Corners inside is not enough for concave zones: an edge can dip
        // through the rect between two corners.
        let n = self.points.len();
        for i in 0..n {
            let a = self.points[i];
            let b = self.points[(i + 1) % n];
            if segment_intersects_rect(a, b, rect) {
                return false;
            }
        }
        true
    }
}

/// Distance from point `p` to segment `ab`
fn point_segment_distance(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq <= f32::EPSILON {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}

/// Check whether segment `ab` passes through the rect
fn segment_intersects_rect(a: Vec2, b: Vec2, rect: &Rect) -> bool {
    if rect.contains_point(a) || rect.contains_point(b) {
        return true;
    }
    let corners = rect.corners();
    for i in 0..4 {
        if segments_intersect(a, b, corners[i], corners[(i + 1) % 4]) {
            return true;
        }
    }
    false
}

/// Proper segment intersection test via orientation signs
fn segments_intersect(p1: Vec2, p2: Vec2, q1: Vec2, q2: Vec2) -> bool {
    fn orient(a: Vec2, b: Vec2, c: Vec2) -> f32 {
        (b - a).perp_dot(c - a)
    }
    let d1 = orient(q1, q2, p1);
    let d2 = orient(q1, q2, p2);
    let d3 = orient(p1, p2, q1);
    let d4 = orient(p1, p2, q2);
    (d1 * d2 < 0.0) && (d3 * d4 < 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(size: f32) -> Polygon {
        Polygon::from_ring(&[
            Vec2::new(0.0, 0.0),
            Vec2::new(size, 0.0),
            Vec2::new(size, size),
            Vec2::new(0.0, size),
        ])
        .unwrap()
    }

    #[test]
    fn test_from_ring_closed_and_open() {
        let open = square(10.0);
        let closed = Polygon::from_ring(&[
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(0.0, 10.0),
            Vec2::new(0.0, 0.0),
        ])
        .unwrap();
        assert_eq!(open.points().len(), 4);
        assert_eq!(closed.points().len(), 4);
    }

    #[test]
    fn test_from_ring_degenerate() {
        assert!(Polygon::from_ring(&[]).is_none());
        assert!(Polygon::from_ring(&[Vec2::ZERO, Vec2::ONE]).is_none());
        // Collinear points: zero area
        assert!(
            Polygon::from_ring(&[Vec2::ZERO, Vec2::new(1.0, 0.0), Vec2::new(2.0, 0.0)]).is_none()
        );
    }

    #[test]
    fn test_area_and_bounds() {
        let p = square(10.0);
        assert!((p.area() - 100.0).abs() < 1e-4);
        assert_eq!(p.bounds(), Rect::new(Vec2::ZERO, Vec2::splat(10.0)));
    }

    #[test]
    fn test_contains_point() {
        let p = square(10.0);
        assert!(p.contains_point(Vec2::splat(5.0)));
        assert!(!p.contains_point(Vec2::splat(15.0)));
        assert!(!p.contains_point(Vec2::new(-1.0, 5.0)));
    }

    #[test]
    fn test_boundary_distance() {
        let p = square(10.0);
        assert!((p.boundary_distance(Vec2::splat(5.0)) - 5.0).abs() < 1e-4);
        assert!((p.boundary_distance(Vec2::new(1.0, 5.0)) - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_contains_rect() {
        let p = square(10.0);
        let inner = Rect::new(Vec2::splat(2.0), Vec2::splat(8.0));
        let hugging = Rect::new(Vec2::splat(0.2), Vec2::splat(9.8));
        let poking = Rect::new(Vec2::splat(5.0), Vec2::splat(12.0));
        assert!(p.contains_rect(&inner, 1.0));
        assert!(!p.contains_rect(&hugging, 1.0)); // inside but under margin
        assert!(!p.contains_rect(&poking, 0.1));
    }

    #[test]
    fn test_intersects_rect() {
        let p = square(10.0);
        // Overlapping
        assert!(p.intersects_rect(&Rect::new(Vec2::splat(5.0), Vec2::splat(15.0))));
        // Rect fully inside
        assert!(p.intersects_rect(&Rect::new(Vec2::splat(2.0), Vec2::splat(4.0))));
        // Polygon fully inside rect
        assert!(p.intersects_rect(&Rect::new(Vec2::splat(-5.0), Vec2::splat(15.0))));
        // Disjoint
        assert!(!p.intersects_rect(&Rect::new(Vec2::splat(20.0), Vec2::splat(30.0))));
    }

    #[test]
    fn test_contains_rect_concave_edge_crossing() {
        // L-shaped zone; a rect spanning the notch has all corners inside
        // the L but the notch edge crosses it.
        let l_shape = Polygon::from_ring(&[
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 4.0),
            Vec2::new(6.0, 4.0),
            Vec2::new(6.0, 10.0),
            Vec2::new(0.0, 10.0),
        ])
        .unwrap();
        let spanning = Rect::new(Vec2::new(1.0, 1.0), Vec2::new(9.0, 3.0));
        assert!(l_shape.contains_rect(&spanning, 0.1));
        let crossing = Rect::new(Vec2::new(1.0, 1.0), Vec2::new(9.0, 9.0));
        assert!(!l_shape.contains_rect(&crossing, 0.1));
    }
}
