// Character system
//
// This module contains everything that moves or reacts in a level:
// - Shared entity data (placement, hitbox, velocity)
// - A state machine with one animation per state
// - Player, enemy and destructible box behavior
// - Tuning presets

pub mod animation;
pub mod enemy;
pub mod entity;
pub mod player;
pub mod prop_box;
pub mod state;
pub mod stats;

// Re-export commonly used types
#[allow(unused_imports)]
pub use animation::SpriteAnim;
#[allow(unused_imports)]
pub use enemy::{Enemy, EnemyState};
#[allow(unused_imports)]
pub use entity::{Entity, EntityRef};
#[allow(unused_imports)]
pub use player::{Player, PlayerState};
#[allow(unused_imports)]
pub use prop_box::{BoxState, PropBox};
#[allow(unused_imports)]
pub use state::{CharacterState, StateMachine};
#[allow(unused_imports)]
pub use stats::{BoxStats, EnemyStats, PlayerStats};
