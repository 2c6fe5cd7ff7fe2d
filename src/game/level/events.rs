// Gameplay events raised during a level update
//
// The level queues these while it updates; the shell drains them once per
// frame and turns them into sound cues.

use glam::Vec2;

use super::pickup::PickupKind;
use crate::core::Handle;
use crate::game::characters::{Enemy, PropBox};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LevelEvent {
    /// The player's attack landed on a box
    BoxHit {
        handle: Handle<PropBox>,
        remaining: u32,
    },

    /// A box finished breaking and was removed
    BoxBroken {
        position: Vec2,
        /// Which wood-break sound to play
        sound_variant: usize,
    },

    /// A broken box dropped something
    PickupSpawned { kind: PickupKind, position: Vec2 },

    /// The player walked over a pickup
    PickupCollected { kind: PickupKind, position: Vec2 },

    /// The player's attack killed an enemy
    EnemyKilled {
        handle: Handle<Enemy>,
        position: Vec2,
    },

    /// An enemy attack finished with the player in reach
    PlayerKilled { position: Vec2 },
}

impl LevelEvent {
    /// Sound asset to play for this event, if any
    pub fn sound_cue(&self) -> Option<String> {
        match self {
            LevelEvent::BoxHit { .. } => Some("assets/Sounds/wood_hit.wav".to_string()),
            LevelEvent::BoxBroken { sound_variant, .. } => {
                Some(format!("assets/Sounds/wood_break_{}.wav", sound_variant + 1))
            }
            LevelEvent::PickupCollected { .. } => Some("assets/Sounds/pickup.wav".to_string()),
            LevelEvent::PickupSpawned { .. }
            | LevelEvent::EnemyKilled { .. }
            | LevelEvent::PlayerKilled { .. } => None,
        }
    }
}
