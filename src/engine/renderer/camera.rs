// Camera and viewport for 2D rendering

use std::ops::Mul;

use glam::{Affine2, Vec2};
use parry2d::bounding_volume::Aabb;

use crate::core::math::{aabb, aabb_max, aabb_min, Transform2D};

/// 2D camera mapping world space to screen space.
///
/// World and screen both grow downward in Y; the camera only pans and zooms.
#[derive(Debug, Clone)]
pub struct Camera2D {
    /// World point shown at the center of the viewport
    pub position: Vec2,
    /// Camera zoom level (1.0 = normal, 2.0 = zoomed in 2x)
    zoom: f32,
    viewport: Vec2,
}

impl Camera2D {
    pub fn new(position: Vec2, viewport_width: f32, viewport_height: f32) -> Self {
        Self {
            position,
            zoom: 1.0,
            viewport: Vec2::new(viewport_width, viewport_height),
        }
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    /// Center the camera on a world point
    pub fn follow(&mut self, target: Vec2) {
        self.position = target;
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom.max(0.1); // Prevent zoom from being too small
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Vec2::new(width, height);
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    /// World-to-screen matrix
    pub fn matrix(&self) -> Affine2 {
        Affine2::from_translation(self.viewport * 0.5)
            * Affine2::from_scale(Vec2::splat(self.zoom))
            * Affine2::from_translation(-self.position)
    }

    /// Convert world coordinates to screen coordinates
    pub fn transform_point(&self, world_pos: Vec2) -> Vec2 {
        (world_pos - self.position) * self.zoom + self.viewport * 0.5
    }

    /// Convert screen coordinates to world coordinates
    pub fn screen_to_world(&self, screen_pos: Vec2) -> Vec2 {
        (screen_pos - self.viewport * 0.5) / self.zoom + self.position
    }

    /// Map a world-space AABB to screen space
    pub fn transform_aabb(&self, world: &Aabb) -> Aabb {
        aabb(
            self.transform_point(aabb_min(world)),
            self.transform_point(aabb_max(world)),
        )
    }
}

impl Mul<&Transform2D> for &Camera2D {
    type Output = Affine2;

    fn mul(self, rhs: &Transform2D) -> Affine2 {
        self.matrix() * rhs.matrix()
    }
}

impl Mul<&Aabb> for &Camera2D {
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
    fn test_camera_centers_position() {
        let camera = Camera2D::new(Vec2::new(400.0, 300.0), 800.0, 600.0);
        assert_eq!(
            camera.transform_point(Vec2::new(400.0, 300.0)),
            Vec2::new(400.0, 300.0)
        );

        let mut camera = camera;
        camera.follow(Vec2::new(100.0, 100.0));
        assert_eq!(
            camera.transform_point(Vec2::new(100.0, 100.0)),
            Vec2::new(400.0, 300.0)
        );
    }

    #[test]
    fn test_screen_world_roundtrip() {
        let mut camera = Camera2D::new(Vec2::new(50.0, -20.0), 800.0, 600.0);
        camera.set_zoom(2.0);
        let world = Vec2::new(75.0, 10.0);
        let back = camera.screen_to_world(camera.transform_point(world));
        assert_relative_eq!(back.x, world.x);
        assert_relative_eq!(back.y, world.y);
    }

    #[test]
    fn test_matrix_matches_transform_point() {
        let mut camera = Camera2D::new(Vec2::new(10.0, 20.0), 640.0, 480.0);
        camera.set_zoom(3.0);
        let p = Vec2::new(-4.0, 7.5);
        let a = camera.matrix().transform_point2(p);
        let b = camera.transform_point(p);
        assert_relative_eq!(a.x, b.x, epsilon = 1e-4);
        assert_relative_eq!(a.y, b.y, epsilon = 1e-4);
    }

    #[test]
    fn test_compose_with_entity_transform() {
        let camera = Camera2D::new(Vec2::new(400.0, 300.0), 800.0, 600.0);
        let transform = Transform2D::new(Vec2::new(410.0, 300.0)).with_anchor(Vec2::new(16.0, 38.0));
        let placed = &camera * &transform;
        let anchor_on_screen = placed.transform_point2(Vec2::new(16.0, 38.0));
        assert_relative_eq!(anchor_on_screen.x, 410.0);
        assert_relative_eq!(anchor_on_screen.y, 300.0);
    }

    #[test]
    fn test_zoom_clamped() {
        let mut camera = Camera2D::new(Vec2::ZERO, 800.0, 600.0);
        camera.set_zoom(0.0);
        assert_eq!(camera.zoom(), 0.1);
    }
}
