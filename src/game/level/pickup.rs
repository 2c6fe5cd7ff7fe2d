// Pickups dropped by broken boxes

use glam::Vec2;
use parry2d::bounding_volume::Aabb;

use crate::game::characters::{Entity, SpriteAnim};
use crate::engine::renderer::{colors, Camera2D, Renderer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PickupKind {
    Coin,
    Heart,
}

impl PickupKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Coin => "Coin",
            Self::Heart => "Heart",
        }
    }

    fn animation(self) -> SpriteAnim {
        match self {
            Self::Coin => SpriteAnim::looping("assets/Pickups/Coin.png", 6, 10.0),
            Self::Heart => SpriteAnim::looping("assets/Pickups/Heart.png", 4, 6.0),
        }
    }
}

/// A collectible lying in the level
#[derive(Debug, Clone)]
pub struct Pickup {
    kind: PickupKind,
    entity: Entity,
    animation: SpriteAnim,
}

impl Pickup {
    /// Pickup resting with its bottom center at `position`
    pub fn new(kind: PickupKind, position: Vec2) -> Self {
        Self {
            kind,
            entity: Entity::new(position, Vec2::new(8.0, 16.0), Vec2::new(2.0, 4.0), Vec2::new(14.0, 16.0)),
            animation: kind.animation(),
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.animation.update(dt);
    }

    pub fn kind(&self) -> PickupKind {
        self.kind
    }

    pub fn position(&self) -> Vec2 {
        self.entity.position()
    }

    pub fn aabb(&self) -> Aabb {
        self.entity.aabb()
    }

    pub fn draw(&self, renderer: &mut impl Renderer, camera: &Camera2D) {
        if let Some(frame) = self.animation.current_frame() {
            renderer.draw_sprite(frame, camera * self.entity.transform());
        }
    }

    pub fn draw_debug(&self, renderer: &mut impl Renderer, camera: &Camera2D) {
        self.entity
            .draw_debug(renderer, camera, self.kind.label(), colors::GREEN);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::{aabb_max, aabb_min};

    #[test]
    fn test_pickup_rests_on_position() {
        let p = Pickup::new(PickupKind::Coin, Vec2::new(50.0, 80.0));
        assert_eq!(aabb_min(&p.aabb()), Vec2::new(44.0, 68.0));
        assert_eq!(aabb_max(&p.aabb()), Vec2::new(56.0, 80.0));
        assert_eq!(p.kind(), PickupKind::Coin);
    }

    #[test]
    fn test_pickup_animation_loops() {
        let mut p = Pickup::new(PickupKind::Heart, Vec2::ZERO);
        p.update(10.0);
        assert!(p.animation.current_frame().is_some());
    }
}
