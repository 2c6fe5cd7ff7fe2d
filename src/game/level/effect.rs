// Transient visual effects (break debris, pickup sparkles)

use glam::Vec2;

use crate::core::math::Transform2D;
use crate::game::characters::SpriteAnim;
use crate::engine::renderer::{Camera2D, Renderer};

/// A one-shot animation placed in the world, finished once it has played through
#[derive(Debug, Clone)]
pub struct Effect {
    animation: SpriteAnim,
    transform: Transform2D,
}

impl Effect {
    /// `anchor` is the sprite-local point placed at `position`
    pub fn new(animation: SpriteAnim, position: Vec2, anchor: Vec2) -> Self {
        Self {
            animation,
            transform: Transform2D::new(position).with_anchor(anchor),
        }
    }

    /// Wood debris burst from a broken box
    pub fn wood_break(position: Vec2) -> Self {
        Self::new(
            SpriteAnim::one_shot("assets/Effects/Wood Break.png", 6, 12.0),
            position,
            Vec2::new(16.0, 16.0),
        )
    }

    /// Sparkle left behind by a collected pickup
    pub fn sparkle(position: Vec2) -> Self {
        Self::new(
            SpriteAnim::one_shot("assets/Effects/Sparkle.png", 4, 12.0),
            position,
            Vec2::new(8.0, 8.0),
        )
    }

    pub fn update(&mut self, dt: f32) {
        self.animation.update(dt);
    }

    pub fn is_done(&self) -> bool {
        self.animation.is_done()
    }

    pub fn position(&self) -> Vec2 {
        self.transform.position()
    }

    pub fn animation(&self) -> &SpriteAnim {
        &self.animation
    }

    pub fn draw(&self, renderer: &mut impl Renderer, camera: &Camera2D) {
        if let Some(frame) = self.animation.current_frame() {
            renderer.draw_sprite(frame, camera * &self.transform);
        }
    }
}

/// Advance every effect and drop the finished ones, keeping the order of the rest
pub fn update_effects(effects: &mut Vec<Effect>, dt: f32) {
    effects.retain_mut(|effect| {
        effect.update(dt);
        !effect.is_done()
    });
}
