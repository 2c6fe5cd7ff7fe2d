// Character tuning presets
// Every value gameplay depends on lives here, not in the state handlers

use glam::Vec2;

/// Player movement and hitbox tuning
#[derive(Debug, Clone)]
pub struct PlayerStats {
    /// Movement speed (world units/second)
    pub speed: f32,
    /// Speed multiplier while dashing
    pub dash_multiplier: f32,

    // Hitbox in sprite-local pixels
    pub aabb_min: Vec2,
    pub aabb_max: Vec2,
    /// Feet position inside the sprite; the flip pivot
    pub anchor: Vec2,
}

pub const PLAYER_STATS: PlayerStats = PlayerStats {
    speed: 60.0,
    dash_multiplier: 2.0,

    // 16 wide, centered on the anchor
    aabb_min: Vec2::new(8.0, 16.0),
    aabb_max: Vec2::new(24.0, 38.0),
    anchor: Vec2::new(16.0, 38.0),
};

impl Default for PlayerStats {
    fn default() -> Self {
        PLAYER_STATS
    }
}

/// Enemy movement, reach and hitbox tuning
#[derive(Debug, Clone)]
pub struct EnemyStats {
    /// Chase speed (world units/second)
    pub speed: f32,
    /// Distance at which a running enemy starts attacking
    pub attack_range: f32,

    pub aabb_min: Vec2,
    pub aabb_max: Vec2,
    pub anchor: Vec2,
}

pub const ENEMY_STATS: EnemyStats = EnemyStats {
    speed: 60.0,
    attack_range: 15.0,

    aabb_min: Vec2::new(8.0, 16.0),
    aabb_max: Vec2::new(24.0, 38.0),
    anchor: Vec2::new(17.0, 44.0),
};

impl Default for EnemyStats {
    fn default() -> Self {
        ENEMY_STATS
    }
}

/// Destructible box tuning
#[derive(Debug, Clone)]
pub struct BoxStats {
    /// Hits needed to break the box
    pub hit_points: u32,

    pub aabb_min: Vec2,
    pub aabb_max: Vec2,
    pub anchor: Vec2,
}

pub const BOX_STATS: BoxStats = BoxStats {
    hit_points: 3,

    aabb_min: Vec2::new(0.0, 0.0),
    aabb_max: Vec2::new(16.0, 16.0),
    anchor: Vec2::new(8.0, 16.0),
};

impl Default for BoxStats {
    fn default() -> Self {
        BOX_STATS
    }
}
