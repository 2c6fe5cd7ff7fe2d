// Level: owns everything in play and advances it once per frame
//
// Update order is fixed: player and static collisions, effects, boxes,
// enemies, pickups. Removal only happens through `retain` passes or arena
// removal, never while something else is iterating.

pub mod collision;
pub mod config;
pub mod data;
pub mod effect;
pub mod events;
pub mod pickup;

#[allow(unused_imports)]
pub use collision::{Collider, ColliderType, Edge};
#[allow(unused_imports)]
pub use config::LevelConfig;
#[allow(unused_imports)]
pub use data::{BoxDef, ColliderDef, EnemyDef, LevelData, LevelError};
#[allow(unused_imports)]
pub use effect::Effect;
#[allow(unused_imports)]
pub use events::LevelEvent;
#[allow(unused_imports)]
pub use pickup::{Pickup, PickupKind};

use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use self::collision::{resolve_edges, Resolution};
use crate::core::math::{aabb, aabb_center, overlaps};
use crate::core::{Arena, Handle};
use crate::engine::input::InputState;
use crate::engine::renderer::{colors, Camera2D, Renderer};
use crate::game::characters::entity::valid_delta_time;
use crate::game::characters::{BoxStats, Enemy, EntityRef, Player, PlayerState, PropBox};

/// Half size, in screen pixels, of the debug marker on an enemy's target
const TARGET_MARKER_HALF_SIZE: f32 = 2.0;

#[derive(Debug)]
pub struct Level {
    name: String,
    config: LevelConfig,
    player_start: Vec2,
    player: Player,
    colliders: Vec<Collider>,
    boxes: Arena<PropBox>,
    enemies: Arena<Enemy>,
    effects: Vec<Effect>,
    pickups: Vec<Pickup>,
    rng: StdRng,
    events: Vec<LevelEvent>,
}

impl Level {
    /// Build a level from authored data
    pub fn new(data: &LevelData, config: LevelConfig) -> Result<Self, LevelError> {
        config.validate()?;
        data.validate()?;

        let colliders = data
            .colliders
            .iter()
            .map(|def| Collider::from_rect(def.kind, def.position, def.size, def.one_way))
            .collect();

        let mut level = Self {
            name: data.name.clone(),
            player_start: data.player_start,
            player: Player::new(data.player_start),
            colliders,
            boxes: Arena::new(),
            enemies: Arena::new(),
            effects: Vec::new(),
            pickups: Vec::new(),
            rng: StdRng::seed_from_u64(config.seed),
            events: Vec::new(),
            config,
        };

        for def in &data.boxes {
            level.spawn_box(def.position, def.hit_points);
        }
        for def in &data.enemies {
            let target = def.chase_player.then_some(EntityRef::Player);
            level.spawn_enemy(def.position, target);
        }

        log::info!(
            "Loaded level '{}': {} colliders, {} boxes, {} enemies (seed {})",
            level.name,
            level.colliders.len(),
            level.boxes.len(),
            level.enemies.len(),
            level.config.seed
        );
        Ok(level)
    }

    /// Advance the whole level by one frame
    pub fn update(&mut self, dt: f32, input: &impl InputState) {
        if !valid_delta_time(dt, "level") {
            return;
        }

        self.update_collisions(dt, input);
        self.update_effects(dt);
        self.update_boxes(dt);
        self.update_enemies(dt);
        self.update_pickups(dt);
    }

    /// Update the player, then push it out of static geometry
    pub fn update_collisions(&mut self, dt: f32, input: &impl InputState) {
        self.player.update(dt, input);

        let body = self.player.aabb();
        let padding = self.config.collision_padding;
        let mut resolution = Resolution::new(self.player.position(), self.player.velocity());

        for collider in &self.colliders {
            if let Some(correction) = resolve_edges(&body, &collider.aabb, padding, collider.one_way) {
                log::trace!(
                    "Player pushed by {:?} edge of {:?} collider",
                    correction.edge,
                    collider.kind
                );
                resolution.apply(correction);
            }
        }

        self.apply_resolution(resolution);
    }

    /// Advance effects and drop the finished ones
    pub fn update_effects(&mut self, dt: f32) {
        effect::update_effects(&mut self.effects, dt);
    }

    /// Attack hits, player-vs-box push-out, box animation and removal
    pub fn update_boxes(&mut self, dt: f32) {
        if self.player.attack_started() {
            self.apply_attack();
        }

        // Boxes block on their full edges and have no one-way sides
        let body = self.player.aabb();
        let mut resolution = Resolution::new(self.player.position(), self.player.velocity());
        for (_, prop) in self.boxes.iter() {
            if let Some(correction) = resolve_edges(&body, &prop.aabb(), 0.0, false) {
                resolution.apply(correction);
            }
        }
        self.apply_resolution(resolution);

        for (_, prop) in self.boxes.iter_mut() {
            prop.update(dt);
        }

        let broken = self.boxes.retain(|_, prop| !prop.is_broken());
        for prop in broken {
            self.on_box_broken(&prop);
        }
    }

    /// Resolve each enemy's target, then move the enemies.
    ///
    /// An enemy whose attack plays through while the player is in reach kills
    /// the player.
    pub fn update_enemies(&mut self, dt: f32) {
        let targets: Vec<(Handle<Enemy>, Option<Vec2>)> = self
            .enemies
            .iter()
            .map(|(handle, enemy)| (handle, enemy.target().and_then(|t| self.position_of(t))))
            .collect();

        for (handle, target_position) in targets {
            let Some(enemy) = self.enemies.get_mut(handle) else {
                continue;
            };
            enemy.update(dt, target_position);

            let player_hit = enemy.attack_landed()
                && enemy.target() == Some(EntityRef::Player)
                && enemy.in_reach(self.player.position());
            if player_hit && !self.player.is_dead() {
                let position = self.player.position();
                log::info!("Player killed by enemy {:?} at {}", handle, position);
                self.player.die();
                self.events.push(LevelEvent::PlayerKilled { position });
            }
        }
    }

    /// Animate pickups and collect the ones the player touches
    pub fn update_pickups(&mut self, dt: f32) {
        let body = self.player.aabb();
        let can_collect = !self.player.is_dead();
        let mut collected = Vec::new();

        self.pickups.retain_mut(|pickup| {
            pickup.update(dt);
            if can_collect && overlaps(&body, &pickup.aabb()) {
                collected.push((pickup.kind(), pickup.position()));
                false
            } else {
                true
            }
        });

        for (kind, position) in collected {
            log::debug!("Collected {} at {}", kind.label(), position);
            self.effects.push(Effect::sparkle(position));
            self.events.push(LevelEvent::PickupCollected { kind, position });
        }
    }

    fn apply_resolution(&mut self, resolution: Resolution) {
        if resolution.corrections > 0 {
            self.player.set_position(resolution.position);
            self.player.set_velocity(resolution.velocity);
        }
    }

    fn apply_attack(&mut self) {
        let area = self.player.attack_area(self.config.attack_reach);
        for (handle, prop) in self.boxes.iter_mut() {
            if overlaps(&area, &prop.aabb()) && prop.hit() {
                let remaining = prop.hit_points();
                log::debug!("Box {:?} hit, {} hit points left", handle, remaining);
                self.events.push(LevelEvent::BoxHit { handle, remaining });
            }
        }
        for (handle, enemy) in self.enemies.iter_mut() {
            if !enemy.is_dead() && overlaps(&area, &enemy.aabb()) {
                enemy.die();
                let position = enemy.position();
                log::debug!("Enemy {:?} killed at {}", handle, position);
                self.events.push(LevelEvent::EnemyKilled { handle, position });
            }
        }
    }

    fn on_box_broken(&mut self, prop: &PropBox) {
        let center = aabb_center(&prop.aabb());
        self.effects.push(Effect::wood_break(center));

        let sound_variant = if self.config.wood_break_sounds > 0 {
            self.rng.gen_range(0..self.config.wood_break_sounds)
        } else {
            0
        };
        log::debug!("Box broke at {} (sound {})", center, sound_variant);
        self.events.push(LevelEvent::BoxBroken {
            position: center,
            sound_variant,
        });

        if self.rng.gen_bool(self.config.pickup_drop_chance) {
            let kind = if self.rng.gen_ratio(1, 4) {
                PickupKind::Heart
            } else {
                PickupKind::Coin
            };
            let position = prop.position();
            log::debug!("{} dropped at {}", kind.label(), position);
            self.pickups.push(Pickup::new(kind, position));
            self.events.push(LevelEvent::PickupSpawned { kind, position });
        }
    }

    /// Current position of a referenced entity, or `None` if it is gone
    pub fn position_of(&self, target: EntityRef) -> Option<Vec2> {
        match target {
            EntityRef::Player => Some(self.player.position()),
            EntityRef::Enemy(handle) => self.enemies.get(handle).map(Enemy::position),
            EntityRef::Prop(handle) => self.boxes.get(handle).map(PropBox::position),
        }
    }

    /// Put the player back at the start, alive
    pub fn reset(&mut self) {
        self.player.set_position(self.player_start);
        self.player.set_velocity(Vec2::ZERO);
        self.player.set_state(PlayerState::Idle);
        log::info!("Level '{}' reset", self.name);
    }

    pub fn spawn_box(&mut self, position: Vec2, hit_points: u32) -> Handle<PropBox> {
        let stats = BoxStats {
            hit_points,
            ..BoxStats::default()
        };
        self.boxes.insert(PropBox::with_stats(position, stats))
    }

    pub fn spawn_enemy(&mut self, position: Vec2, target: Option<EntityRef>) -> Handle<Enemy> {
        let mut enemy = Enemy::new(position);
        enemy.set_target(target);
        self.enemies.insert(enemy)
    }

    pub fn spawn_effect(&mut self, effect: Effect) {
        self.effects.push(effect);
    }

    /// Take the events raised since the last call
    pub fn drain_events(&mut self) -> Vec<LevelEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn events(&self) -> &[LevelEvent] {
        &self.events
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn config(&self) -> &LevelConfig {
        &self.config
    }

    pub fn debug_draw(&self) -> bool {
        self.config.debug_draw
    }

    pub fn set_debug_draw(&mut self, enabled: bool) {
        self.config.debug_draw = enabled;
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn colliders(&self) -> &[Collider] {
        &self.colliders
    }

    pub fn boxes(&self) -> &Arena<PropBox> {
        &self.boxes
    }

    pub fn box_mut(&mut self, handle: Handle<PropBox>) -> Option<&mut PropBox> {
        self.boxes.get_mut(handle)
    }

    pub fn enemies(&self) -> &Arena<Enemy> {
        &self.enemies
    }

    pub fn enemy_mut(&mut self, handle: Handle<Enemy>) -> Option<&mut Enemy> {
        self.enemies.get_mut(handle)
    }

    pub fn effects(&self) -> &[Effect] {
        &self.effects
    }

    pub fn pickups(&self) -> &[Pickup] {
        &self.pickups
    }

    /// Draw everything, back to front
    pub fn draw(&self, renderer: &mut impl Renderer, camera: &Camera2D) {
        for (_, prop) in self.boxes.iter() {
            prop.draw(renderer, camera);
        }
        for pickup in &self.pickups {
            pickup.draw(renderer, camera);
        }
        for (_, enemy) in self.enemies.iter() {
            enemy.draw(renderer, camera);
        }
        self.player.draw(renderer, camera);
        for effect in &self.effects {
            effect.draw(renderer, camera);
        }

        if self.config.debug_draw {
            self.draw_debug(renderer, camera);
        }
    }

    fn draw_debug(&self, renderer: &mut impl Renderer, camera: &Camera2D) {
        for collider in &self.colliders {
            collider.draw_debug(renderer, camera);
        }
        for (_, prop) in self.boxes.iter() {
            prop.draw_debug(renderer, camera);
        }
        for pickup in &self.pickups {
            pickup.draw_debug(renderer, camera);
        }
        for (_, enemy) in self.enemies.iter() {
            enemy.draw_debug(renderer, camera);
            if enemy.is_dead() {
                continue;
            }
            if let Some(target) = enemy.target().and_then(|t| self.position_of(t)) {
                let center = camera.transform_point(target);
                let half = Vec2::splat(TARGET_MARKER_HALF_SIZE);
                renderer.draw_aabb(&aabb(center - half, center + half), colors::WHITE);
            }
        }
        self.player.draw_debug(renderer, camera);
    }
}
