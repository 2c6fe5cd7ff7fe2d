// Static level geometry and the edge-based push-out used against it
//
// Resolution is a single pass on the X axis only. Each obstacle contributes
// its top, left and right edges as line segments; the first edge the body's
// AABB touches decides the correction and the rest are skipped.

use glam::Vec2;
use parry2d::bounding_volume::Aabb;
use parry2d::shape::Segment;

use crate::core::math::{aabb, aabb_max, aabb_min, aabb_width, intersects_segment, segment};
use crate::engine::renderer::{colors, Camera2D, Color, Renderer};

/// What a collider represents in the authored level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColliderType {
    #[default]
    Default,
    Wall,
    Plant,
    Prop,
}

/// Immutable rectangle of level geometry
#[derive(Debug, Clone, PartialEq)]
pub struct Collider {
    pub kind: ColliderType,
    /// World-space bounds
    pub aabb: Aabb,
    /// Passable from the sides: only the top edge resolves
    pub one_way: bool,
}

impl Collider {
    pub fn new(kind: ColliderType, aabb: Aabb, one_way: bool) -> Self {
        Self { kind, aabb, one_way }
    }

    /// Collider from an authored pixel rectangle; both bounds are inclusive
    pub fn from_rect(kind: ColliderType, position: Vec2, size: Vec2, one_way: bool) -> Self {
        Self::new(kind, aabb(position, position + size - Vec2::ONE), one_way)
    }

    /// Debug outline color
    pub fn debug_color(&self) -> Color {
        if self.one_way {
            colors::YELLOW
        } else {
            colors::RED
        }
    }

    pub fn draw_debug(&self, renderer: &mut impl Renderer, camera: &Camera2D) {
        renderer.draw_aabb(&(camera * &self.aabb), self.debug_color());
    }
}

/// A side of an obstacle, in test order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Left,
    Right,
}

impl Edge {
    pub const ORDER: [Edge; 3] = [Edge::Top, Edge::Left, Edge::Right];

    /// The edge as a segment, shortened by `padding` at both ends
    pub fn segment(self, bounds: &Aabb, padding: f32) -> Segment {
        let min = aabb_min(bounds);
        let max = aabb_max(bounds);
        match self {
            Edge::Top => segment(
                Vec2::new(min.x + padding, min.y),
                Vec2::new(max.x - padding, min.y),
            ),
            Edge::Left => segment(
                Vec2::new(min.x, min.y + padding),
                Vec2::new(min.x, max.y - padding),
            ),
            Edge::Right => segment(
                Vec2::new(max.x, min.y + padding),
                Vec2::new(max.x, max.y - padding),
            ),
        }
    }

    /// Side edges are ignored by one-way obstacles
    pub fn applies_to_one_way(self) -> bool {
        self == Edge::Top
    }
}

/// X correction produced by one obstacle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Correction {
    pub edge: Edge,
    /// New X position for the body's center
    pub x: f32,
}

/// Test `body` against the edges of `obstacle` and return the first push-out.
///
/// The top edge pushes the body out to the left, like the left edge does.
/// Level feel depends on this, so it stays until Y resolution exists.
pub fn resolve_edges(body: &Aabb, obstacle: &Aabb, padding: f32, one_way: bool) -> Option<Correction> {
    let half_width = aabb_width(body) * 0.5;

    Edge::ORDER
        .into_iter()
        .filter(|edge| !one_way || edge.applies_to_one_way())
        .find(|edge| intersects_segment(body, &edge.segment(obstacle, padding)))
        .map(|edge| {
            let x = match edge {
                Edge::Top | Edge::Left => obstacle.mins.x - half_width,
                Edge::Right => obstacle.maxs.x + half_width,
            };
            Correction { edge, x }
        })
}

/// Working position and velocity for a body being resolved.
///
/// Corrections from every obstacle accumulate here against the AABB taken
/// at the start of the pass; the caller writes the result back once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    pub position: Vec2,
    pub velocity: Vec2,
    pub corrections: usize,
}

impl Resolution {
    pub fn new(position: Vec2, velocity: Vec2) -> Self {
        Self {
            position,
            velocity,
            corrections: 0,
        }
    }

    pub fn apply(&mut self, correction: Correction) {
        self.position.x = correction.x;
        self.velocity.x = 0.0;
        self.corrections += 1;
    }
}
