// Shared entity data: placement, hitbox and velocity

use glam::Vec2;
use parry2d::bounding_volume::Aabb;

use super::enemy::Enemy;
use super::prop_box::PropBox;
use crate::core::math::{aabb, Transform2D};
use crate::core::Handle;
use crate::engine::renderer::{colors, Camera2D, Color, Renderer};

/// Non-owning reference to something in the level.
///
/// Resolved by the level every frame; a stale handle resolves to nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityRef {
    Player,
    Enemy(Handle<Enemy>),
    Prop(Handle<PropBox>),
}

/// Placement, local hitbox and velocity shared by all characters
#[derive(Debug, Clone)]
pub struct Entity {
    transform: Transform2D,
    /// Hitbox in sprite-local space
    aabb: Aabb,
    /// Last frame's displacement divided by its delta time
    velocity: Vec2,
}

impl Entity {
    pub fn new(position: Vec2, anchor: Vec2, aabb_min: Vec2, aabb_max: Vec2) -> Self {
        Self {
            transform: Transform2D::new(position).with_anchor(anchor),
            aabb: aabb(aabb_min, aabb_max),
            velocity: Vec2::ZERO,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.transform.position()
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.transform.set_position(position);
    }

    pub fn translate(&mut self, offset: Vec2) {
        self.transform.translate(offset);
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    /// Move by `delta` and derive velocity from the actual displacement
    pub fn move_by(&mut self, delta: Vec2, dt: f32) {
        let before = self.position();
        self.translate(delta);
        self.velocity = (self.position() - before) / dt;
    }

    pub fn transform(&self) -> &Transform2D {
        &self.transform
    }

    /// Hitbox in world space
    pub fn aabb(&self) -> Aabb {
        &self.transform * &self.aabb
    }

    /// -1 when facing left, +1 when facing right
    pub fn facing(&self) -> f32 {
        self.transform.scale().x
    }

    /// Flip toward horizontal motion; facing is kept when not moving sideways
    pub fn update_facing(&mut self) {
        let vx = self.velocity.x;
        if vx == 0.0 {
            return;
        }

        let mut scale = self.transform.scale();
        scale.x = if vx < 0.0 { -1.0 } else { 1.0 };
        self.transform.set_scale(scale);
    }

    /// Hitbox outline and state label
    pub fn draw_debug(&self, renderer: &mut impl Renderer, camera: &Camera2D, label: &str, color: Color) {
        renderer.draw_aabb(&(camera * &self.aabb()), color);
        let origin = camera.transform_point(self.position());
        renderer.draw_text(label, origin, colors::WHITE);
    }
}

/// Gate for update calls: delta time must be positive and finite.
///
/// Logs and returns false on a bad value so the caller can skip the frame.
pub fn valid_delta_time(dt: f32, who: &str) -> bool {
    if dt > 0.0 && dt.is_finite() {
        true
    } else {
        log::warn!("{who}: ignoring update with invalid delta time {dt}");
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::{aabb_max, aabb_min};
    use crate::engine::renderer::DrawList;
    use approx::assert_relative_eq;

    fn entity() -> Entity {
        Entity::new(
            Vec2::new(400.0, 300.0),
            Vec2::new(16.0, 38.0),
            Vec2::new(8.0, 16.0),
            Vec2::new(24.0, 38.0),
        )
    }

    #[test]
    fn test_world_aabb() {
        let e = entity();
        let world = e.aabb();
        assert_eq!(aabb_min(&world), Vec2::new(392.0, 278.0));
        assert_eq!(aabb_max(&world), Vec2::new(408.0, 300.0));
    }

    #[test]
    fn test_move_by_derives_velocity() {
        let mut e = entity();
        let before = e.position();
        e.move_by(Vec2::new(3.0, -1.5), 0.25);
        let after = e.position();

        assert_relative_eq!(e.velocity().x, (after.x - before.x) / 0.25);
        assert_relative_eq!(e.velocity().y, (after.y - before.y) / 0.25);
    }

    #[test]
    fn test_facing_is_sticky() {
        let mut e = entity();
        assert_eq!(e.facing(), 1.0);

        e.set_velocity(Vec2::new(-5.0, 0.0));
        e.update_facing();
        assert_eq!(e.facing(), -1.0);

        e.set_velocity(Vec2::new(0.0, 10.0));
        e.update_facing();
        assert_eq!(e.facing(), -1.0);

        e.set_velocity(Vec2::new(1.0, 0.0));
        e.update_facing();
        assert_eq!(e.facing(), 1.0);
    }

    #[test]
    fn test_flipped_aabb_stays_around_anchor() {
        let mut e = entity();
        e.set_velocity(Vec2::new(-1.0, 0.0));
        e.update_facing();
        let world = e.aabb();
        assert_eq!(aabb_min(&world).x, 392.0);
        assert_eq!(aabb_max(&world).x, 408.0);
    }

    #[test]
    fn test_valid_delta_time() {
        assert!(valid_delta_time(0.016, "test"));
        assert!(!valid_delta_time(0.0, "test"));
        assert!(!valid_delta_time(-0.1, "test"));
        assert!(!valid_delta_time(f32::NAN, "test"));
        assert!(!valid_delta_time(f32::INFINITY, "test"));
    }

    #[test]
    fn test_draw_debug() {
        let e = entity();
        let camera = Camera2D::new(Vec2::new(400.0, 300.0), 800.0, 600.0);
        let mut list = DrawList::new();
        e.draw_debug(&mut list, &camera, "Idle", colors::GREEN);
        assert_eq!(list.len(), 2);
        assert_eq!(list.texts(), vec!["Idle"]);
    }
}
