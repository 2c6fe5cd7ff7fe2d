// Authored level layout and its validation

use glam::Vec2;
use thiserror::Error;

use super::collision::ColliderType;

/// Errors raised while building a level from authored data
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LevelError {
    #[error("Collider {index} has malformed geometry (position {position}, size {size})")]
    MalformedCollider {
        index: usize,
        position: Vec2,
        size: Vec2,
    },

    #[error("Box {index} must have at least one hit point")]
    EmptyBox { index: usize },

    #[error("Non-finite spawn position for {what}: {position}")]
    InvalidSpawn { what: String, position: Vec2 },

    #[error("Invalid level config: {0}")]
    InvalidConfig(String),
}

/// A rectangle of static geometry in authored pixel units
#[derive(Debug, Clone, PartialEq)]
pub struct ColliderDef {
    pub kind: ColliderType,
    /// Top-left corner
    pub position: Vec2,
    /// Width and height; at least one pixel each
    pub size: Vec2,
    pub one_way: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoxDef {
    /// Bottom center
    pub position: Vec2,
    pub hit_points: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnemyDef {
    /// Feet position
    pub position: Vec2,
    /// Whether the enemy chases the player from the start
    pub chase_player: bool,
}

/// Everything a level needs from its authoring tool
#[derive(Debug, Clone, PartialEq)]
pub struct LevelData {
    pub name: String,
    pub player_start: Vec2,
    pub colliders: Vec<ColliderDef>,
    pub boxes: Vec<BoxDef>,
    pub enemies: Vec<EnemyDef>,
}

impl LevelData {
    /// Fail fast on layouts the collision code cannot handle
    pub fn validate(&self) -> Result<(), LevelError> {
        check_spawn("player", self.player_start)?;

        for (index, def) in self.colliders.iter().enumerate() {
            let finite = def.position.is_finite() && def.size.is_finite();
            if !finite || def.size.x < 1.0 || def.size.y < 1.0 {
                return Err(LevelError::MalformedCollider {
                    index,
                    position: def.position,
                    size: def.size,
                });
            }
        }

        for (index, def) in self.boxes.iter().enumerate() {
            check_spawn(&format!("box {index}"), def.position)?;
            if def.hit_points == 0 {
                return Err(LevelError::EmptyBox { index });
            }
        }

        for (index, def) in self.enemies.iter().enumerate() {
            check_spawn(&format!("enemy {index}"), def.position)?;
        }

        Ok(())
    }

    /// Small built-in room: floor, walls, a one-way ledge, boxes and one enemy
    pub fn demo() -> Self {
        let wall = |x: f32, y: f32, w: f32, h: f32| ColliderDef {
            kind: ColliderType::Wall,
            position: Vec2::new(x, y),
            size: Vec2::new(w, h),
            one_way: false,
        };

        Self {
            name: "Demo Room".to_string(),
            player_start: Vec2::new(160.0, 200.0),
            colliders: vec![
                wall(0.0, 0.0, 16.0, 320.0),
                wall(464.0, 0.0, 16.0, 320.0),
                wall(0.0, 304.0, 480.0, 16.0),
                ColliderDef {
                    kind: ColliderType::Default,
                    position: Vec2::new(208.0, 160.0),
                    size: Vec2::new(64.0, 8.0),
                    one_way: true,
                },
                ColliderDef {
                    kind: ColliderType::Plant,
                    position: Vec2::new(96.0, 272.0),
                    size: Vec2::new(16.0, 32.0),
                    one_way: false,
                },
            ],
            boxes: vec![
                BoxDef {
                    position: Vec2::new(240.0, 240.0),
                    hit_points: 3,
                },
                BoxDef {
                    position: Vec2::new(272.0, 240.0),
                    hit_points: 2,
                },
            ],
            enemies: vec![EnemyDef {
                position: Vec2::new(400.0, 200.0),
                chase_player: true,
            }],
        }
    }
}

fn check_spawn(what: &str, position: Vec2) -> Result<(), LevelError> {
    if position.is_finite() {
        Ok(())
    } else {
        Err(LevelError::InvalidSpawn {
            what: what.to_string(),
            position,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_is_valid() {
        assert!(LevelData::demo().validate().is_ok());
    }

    #[test]
    fn test_rejects_degenerate_collider() {
        let mut data = LevelData::demo();
        data.colliders[1].size = Vec2::new(0.0, 10.0);
        assert_eq!(
            data.validate(),
            Err(LevelError::MalformedCollider {
                index: 1,
                position: Vec2::new(464.0, 0.0),
                size: Vec2::new(0.0, 10.0),
            })
        );
    }

    #[test]
    fn test_rejects_non_finite_collider() {
        let mut data = LevelData::demo();
        data.colliders[0].position.x = f32::INFINITY;
        assert!(matches!(
            data.validate(),
            Err(LevelError::MalformedCollider { index: 0, .. })
        ));
    }

    #[test]
    fn test_rejects_empty_box() {
        let mut data = LevelData::demo();
        data.boxes[1].hit_points = 0;
        assert_eq!(data.validate(), Err(LevelError::EmptyBox { index: 1 }));
    }

    #[test]
    fn test_rejects_bad_spawn() {
        let mut data = LevelData::demo();
        data.enemies[0].position = Vec2::new(f32::NAN, 0.0);
        assert!(matches!(data.validate(), Err(LevelError::InvalidSpawn { .. })));
    }

    #[test]
    fn test_error_messages() {
        let err = LevelError::EmptyBox { index: 4 };
        assert_eq!(err.to_string(), "Box 4 must have at least one hit point");
    }
}
