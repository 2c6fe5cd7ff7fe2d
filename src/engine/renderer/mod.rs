// Rendering interface
//
// Gameplay code draws through the `Renderer` trait; the actual rasterizer is
// an external collaborator. `DrawList` records commands so frames can be
// inspected headless (the shell logs them, tests assert on them).

mod camera;

pub use camera::Camera2D;

use glam::{Affine2, Vec2, Vec4};
use parry2d::bounding_volume::Aabb;

/// RGBA color, 1.0 = full intensity
pub type Color = Vec4;

pub mod colors {
    use super::Color;

    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
    pub const RED: Color = Color::new(1.0, 0.0, 0.0, 1.0);
    pub const YELLOW: Color = Color::new(1.0, 1.0, 0.0, 1.0);
    pub const GREEN: Color = Color::new(0.0, 1.0, 0.0, 1.0);
}

/// One frame of a sprite sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteFrame {
    /// Sprite sheet asset path
    pub sheet: &'static str,
    /// Frame index within the sheet
    pub index: usize,
}

/// Drawing capability consumed by entities and the level
pub trait Renderer {
    /// Draw a sprite frame placed by a screen-space transform
    fn draw_sprite(&mut self, frame: SpriteFrame, transform: Affine2);

    /// Draw a wireframe box in screen space (debug overlay)
    fn draw_aabb(&mut self, aabb: &Aabb, color: Color);

    /// Draw text at a screen position (debug overlay)
    fn draw_text(&mut self, text: &str, position: Vec2, color: Color);
}

/// A recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Sprite {
        frame: SpriteFrame,
        transform: Affine2,
    },
    Aabb {
        aabb: Aabb,
        color: Color,
    },
    Text {
        text: String,
        position: Vec2,
        color: Color,
    },
}

/// Renderer that records draw calls instead of rasterizing them
#[derive(Debug, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of sprite draws this frame
    pub fn sprite_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Sprite { .. }))
            .count()
    }

    /// All text drawn this frame
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Drop recorded commands, ready for the next frame
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Renderer for DrawList {
    fn draw_sprite(&mut self, frame: SpriteFrame, transform: Affine2) {
        self.commands.push(DrawCommand::Sprite { frame, transform });
    }

    fn draw_aabb(&mut self, aabb: &Aabb, color: Color) {
        self.commands.push(DrawCommand::Aabb { aabb: *aabb, color });
    }

    fn draw_text(&mut self, text: &str, position: Vec2, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            position,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::aabb;

    #[test]
    fn test_draw_list_records_commands() {
        let mut list = DrawList::new();
        let frame = SpriteFrame {
            sheet: "test.png",
            index: 2,
        };
        list.draw_sprite(frame, Affine2::IDENTITY);
        list.draw_aabb(&aabb(Vec2::ZERO, Vec2::ONE), colors::RED);
        list.draw_text("Idle", Vec2::ZERO, colors::BLACK);

        assert_eq!(list.len(), 3);
        assert_eq!(list.sprite_count(), 1);
        assert_eq!(list.texts(), vec!["Idle"]);

        list.clear();
        assert!(list.is_empty());
    }
}
