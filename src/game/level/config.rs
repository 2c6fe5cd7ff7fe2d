// Level tuning

use super::data::LevelError;

/// Environment variable that overrides the level RNG seed
pub const SEED_ENV_VAR: &str = "SPIRIT_BOXER_SEED";

/// Level-wide tuning, separate from the authored layout
#[derive(Debug, Clone, PartialEq)]
pub struct LevelConfig {
    /// Inset applied to both ends of static collider edges
    pub collision_padding: f32,
    /// How far past the player's hitbox an attack reaches
    pub attack_reach: f32,
    /// Seed for the level's random number generator
    pub seed: u64,
    /// Chance in [0, 1] that a broken box drops a pickup
    pub pickup_drop_chance: f64,
    /// Number of wood-break sound variants to choose from
    pub wood_break_sounds: usize,
    /// Draw hitboxes and state labels
    pub debug_draw: bool,
}

pub const DEFAULT_LEVEL_CONFIG: LevelConfig = LevelConfig {
    collision_padding: 3.0,
    attack_reach: 12.0,
    seed: 0x5EED,
    pickup_drop_chance: 0.5,
    wood_break_sounds: 3,
    debug_draw: cfg!(debug_assertions),
};

impl Default for LevelConfig {
    fn default() -> Self {
        DEFAULT_LEVEL_CONFIG
    }
}

impl LevelConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Take the seed from `SPIRIT_BOXER_SEED` when it is set
    pub fn with_seed_from_env(self) -> Self {
        match std::env::var(SEED_ENV_VAR) {
            Ok(value) => match value.trim().parse::<u64>() {
                Ok(seed) => {
                    log::info!("Using level seed {seed} from {SEED_ENV_VAR}");
                    self.with_seed(seed)
                }
                Err(e) => {
                    log::warn!("Ignoring {SEED_ENV_VAR}={value:?}: {e}");
                    self
                }
            },
            Err(_) => self,
        }
    }

    /// Check values the level relies on
    pub fn validate(&self) -> Result<(), LevelError> {
        if !self.collision_padding.is_finite() || self.collision_padding < 0.0 {
            return Err(LevelError::InvalidConfig(format!(
                "collision padding must be finite and non-negative, got {}",
                self.collision_padding
            )));
        }
        if !self.attack_reach.is_finite() || self.attack_reach < 0.0 {
            return Err(LevelError::InvalidConfig(format!(
                "attack reach must be finite and non-negative, got {}",
                self.attack_reach
            )));
        }
        if !(0.0..=1.0).contains(&self.pickup_drop_chance) {
            return Err(LevelError::InvalidConfig(format!(
                "pickup drop chance must be in [0, 1], got {}",
                self.pickup_drop_chance
            )));
        }
        Ok(())
    }
}
