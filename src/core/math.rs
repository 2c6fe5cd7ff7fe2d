// Math utilities: 2D transforms and AABB helpers
//
// Bounding boxes and edges are parry2d types so collision queries can use the
// same geometry as the rest of the physics code. Positions and transforms are
// glam types; the helpers below convert between the two.

use std::ops::Mul;

use glam::{Affine2, Vec2};
use parry2d::bounding_volume::{Aabb, BoundingVolume};
use parry2d::math::{Point, Real};
use parry2d::shape::Segment;

/// Convert a glam vector into a parry point
pub fn to_point(v: Vec2) -> Point<Real> {
    Point::new(v.x, v.y)
}

/// Convert a parry point into a glam vector
pub fn to_vec2(p: &Point<Real>) -> Vec2 {
    Vec2::new(p.x, p.y)
}

/// Build an AABB from two corners (in any order)
pub fn aabb(a: Vec2, b: Vec2) -> Aabb {
    Aabb::new(to_point(a.min(b)), to_point(a.max(b)))
}

/// Minimum corner of an AABB
pub fn aabb_min(aabb: &Aabb) -> Vec2 {
    to_vec2(&aabb.mins)
}

/// Maximum corner of an AABB
pub fn aabb_max(aabb: &Aabb) -> Vec2 {
    to_vec2(&aabb.maxs)
}

pub fn aabb_width(aabb: &Aabb) -> f32 {
    aabb.maxs.x - aabb.mins.x
}

pub fn aabb_center(aabb: &Aabb) -> Vec2 {
    (aabb_min(aabb) + aabb_max(aabb)) * 0.5
}

/// Closed overlap test between two boxes (touching counts)
pub fn overlaps(a: &Aabb, b: &Aabb) -> bool {
    a.intersects(b)
}

/// Build a line segment between two points
pub fn segment(a: Vec2, b: Vec2) -> Segment {
    Segment::new(to_point(a), to_point(b))
}

/// Check whether an axis-aligned segment touches an AABB.
///
/// Only horizontal and vertical segments are supported: for those the
/// segment's bounding box is the segment itself, so a box/box test is exact.
pub fn intersects_segment(aabb: &Aabb, edge: &Segment) -> bool {
    debug_assert!(
        edge.a.x == edge.b.x || edge.a.y == edge.b.y,
        "edge must be axis-aligned"
    );
    aabb.intersects(&edge.local_aabb())
}

/// 2D placement: position, scale and anchor.
///
/// A local point `p` maps to `position + scale * (p - anchor)`. The anchor is
/// the pivot for flipping, so a character flips around its feet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform2D {
    position: Vec2,
    scale: Vec2,
    anchor: Vec2,
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::new(Vec2::ZERO)
    }
}

impl Transform2D {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            scale: Vec2::ONE,
            anchor: Vec2::ZERO,
        }
    }

    /// Set the pivot point in local space
    pub fn with_anchor(mut self, anchor: Vec2) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    /// Move by an offset in world space
    pub fn translate(&mut self, offset: Vec2) {
        self.position += offset;
    }

    pub fn scale(&self) -> Vec2 {
        self.scale
    }

    pub fn set_scale(&mut self, scale: Vec2) {
        self.scale = scale;
    }

    /// The affine matrix for this placement
    pub fn matrix(&self) -> Affine2 {
        Affine2::from_translation(self.position)
            * Affine2::from_scale(self.scale)
            * Affine2::from_translation(-self.anchor)
    }

    /// Map a local point to world space
    pub fn transform_point(&self, point: Vec2) -> Vec2 {
        self.position + self.scale * (point - self.anchor)
    }

    /// Map a local AABB to world space.
    ///
    /// Both corners are transformed and re-ordered, so a negative scale still
    /// yields a well-formed box.
    pub fn transform_aabb(&self, local: &Aabb) -> Aabb {
        aabb(
            self.transform_point(aabb_min(local)),
            self.transform_point(aabb_max(local)),
        )
    }
}

impl Mul<&Aabb> for &Transform2D {
    type Output = Aabb;

    fn mul(self, rhs: &Aabb) -> Aabb {
        self.transform_aabb(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_aabb_orders_corners() {
        let b = aabb(Vec2::new(10.0, 5.0), Vec2::new(0.0, 20.0));
        assert_eq!(aabb_min(&b), Vec2::new(0.0, 5.0));
        assert_eq!(aabb_max(&b), Vec2::new(10.0, 20.0));
        assert_eq!(aabb_width(&b), 10.0);
    }

    #[test]
    fn test_transform_point_with_anchor() {
        let t = Transform2D::new(Vec2::new(400.0, 300.0)).with_anchor(Vec2::new(16.0, 38.0));
        assert_eq!(t.transform_point(Vec2::new(16.0, 38.0)), Vec2::new(400.0, 300.0));
        assert_eq!(t.transform_point(Vec2::new(8.0, 16.0)), Vec2::new(392.0, 278.0));
    }

    #[test]
    fn test_matrix_matches_transform_point() {
        let mut t = Transform2D::new(Vec2::new(50.0, -20.0)).with_anchor(Vec2::new(17.0, 44.0));
        t.set_scale(Vec2::new(-1.0, 1.0));
        let local = Vec2::new(24.0, 38.0);
        let expected = t.transform_point(local);
        let actual = t.matrix().transform_point2(local);
        assert_relative_eq!(expected.x, actual.x);
        assert_relative_eq!(expected.y, actual.y);
    }

    #[test]
    fn test_flipped_aabb_keeps_corner_order() {
        let mut t = Transform2D::new(Vec2::new(100.0, 100.0)).with_anchor(Vec2::new(17.0, 44.0));
        t.set_scale(Vec2::new(-1.0, 1.0));
        let local = aabb(Vec2::new(8.0, 16.0), Vec2::new(24.0, 38.0));
        let world = &t * &local;

        assert_eq!(aabb_width(&world), 16.0);
        assert_eq!(aabb_min(&world).x, 93.0);
        assert_eq!(aabb_max(&world).x, 109.0);
        assert!(aabb_min(&world).y <= aabb_max(&world).y);
    }

    #[test]
    fn test_segment_intersection_is_closed() {
        let b = aabb(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let touching = segment(Vec2::new(10.0, -5.0), Vec2::new(10.0, 5.0));
        let outside = segment(Vec2::new(10.5, -5.0), Vec2::new(10.5, 5.0));
        let crossing = segment(Vec2::new(-5.0, 3.0), Vec2::new(15.0, 3.0));

        assert!(intersects_segment(&b, &touching));
        assert!(!intersects_segment(&b, &outside));
        assert!(intersects_segment(&b, &crossing));
    }

    #[test]
    fn test_overlap_counts_touching() {
        let a = aabb(Vec2::ZERO, Vec2::splat(10.0));
        assert!(overlaps(&a, &aabb(Vec2::splat(10.0), Vec2::splat(20.0))));
        assert!(!overlaps(&a, &aabb(Vec2::splat(12.0), Vec2::splat(20.0))));
    }
}
