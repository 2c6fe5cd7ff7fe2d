// Enemy character: chases a target and attacks in melee range

use enum_map::Enum;
use glam::Vec2;
use parry2d::bounding_volume::Aabb;

use super::animation::SpriteAnim;
use super::entity::{valid_delta_time, Entity, EntityRef};
use super::state::{CharacterState, StateMachine};
use super::stats::EnemyStats;
use crate::engine::renderer::{colors, Camera2D, Renderer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Enum)]
pub enum EnemyState {
    None,
    Idle,
    Running,
    Attack,
    /// Terminal
    Dead,
}

impl CharacterState for EnemyState {
    fn is_repeatable(self) -> bool {
        matches!(self, Self::Attack)
    }

    fn label(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Idle => "Idle",
            Self::Running => "Running",
            Self::Attack => "Attack",
            Self::Dead => "Dead",
        }
    }
}

fn enemy_animation(state: EnemyState) -> SpriteAnim {
    match state {
        EnemyState::None => SpriteAnim::empty(),
        EnemyState::Idle => SpriteAnim::looping("assets/Spirit Boxer/Idle.png", 5, 6.0),
        EnemyState::Running => SpriteAnim::looping("assets/Spirit Boxer/Run.png", 8, 6.0),
        EnemyState::Attack => SpriteAnim::one_shot("assets/Spirit Boxer/attack 1.png", 4, 6.0),
        EnemyState::Dead => SpriteAnim::one_shot("assets/Spirit Boxer/Damaged & Death.png", 10, 6.0),
    }
}

#[derive(Debug)]
pub struct Enemy {
    entity: Entity,
    machine: StateMachine<EnemyState>,
    stats: EnemyStats,
    target: Option<EntityRef>,
}

impl Enemy {
    pub fn new(position: Vec2) -> Self {
        Self::with_stats(position, EnemyStats::default())
    }

    pub fn with_stats(position: Vec2, stats: EnemyStats) -> Self {
        let entity = Entity::new(position, stats.anchor, stats.aabb_min, stats.aabb_max);
        let mut enemy = Self {
            entity,
            machine: StateMachine::new(EnemyState::None, enemy_animation),
            stats,
            target: None,
        };
        enemy.set_state(EnemyState::Idle);
        enemy
    }

    /// Run one frame. `target_position` is the resolved position of
    /// [`Enemy::target`], or `None` when there is nothing to chase.
    pub fn update(&mut self, dt: f32, target_position: Option<Vec2>) {
        if !valid_delta_time(dt, "enemy") {
            return;
        }

        self.machine.tick(dt);
        match self.machine.state() {
            EnemyState::None => {}
            EnemyState::Idle => self.do_idle(dt, target_position),
            EnemyState::Running => self.do_running(dt, target_position),
            EnemyState::Attack => self.do_attack(dt),
            EnemyState::Dead => self.do_dead(dt),
        }
        self.entity.update_facing();
    }

    fn do_idle(&mut self, dt: f32, target_position: Option<Vec2>) {
        self.do_movement(dt, target_position);

        if self.is_moving() {
            self.set_state(EnemyState::Running);
        }

        self.machine.advance(EnemyState::Idle, dt);
    }

    fn do_running(&mut self, dt: f32, target_position: Option<Vec2>) {
        self.do_movement(dt, target_position);

        if !self.is_moving() {
            self.set_state(EnemyState::Idle);
        }
        if target_position.is_some_and(|target| self.in_reach(target)) {
            self.set_state(EnemyState::Attack);
        }

        self.machine.advance(EnemyState::Running, dt);
    }

    fn do_attack(&mut self, dt: f32) {
        self.entity.set_velocity(Vec2::ZERO);

        self.machine.advance(EnemyState::Attack, dt);
        if self.machine.is_done(EnemyState::Attack) {
            self.set_state(EnemyState::Idle);
        }
    }

    fn do_dead(&mut self, dt: f32) {
        self.entity.set_velocity(Vec2::ZERO);
        self.machine.advance(EnemyState::Dead, dt);
    }

    fn do_movement(&mut self, dt: f32, target_position: Option<Vec2>) {
        let direction = target_position
            .map(|target| (target - self.position()).normalize_or_zero())
            .unwrap_or(Vec2::ZERO);
        self.entity.move_by(direction * self.stats.speed * dt, dt);
    }

    fn is_moving(&self) -> bool {
        self.entity.velocity().length() > 0.0
    }

    pub fn set_state(&mut self, state: EnemyState) -> bool {
        // Dead has no way out
        if self.state() == EnemyState::Dead {
            return false;
        }
        self.machine.set_state(state)
    }

    pub fn state(&self) -> EnemyState {
        self.machine.state()
    }

    pub fn die(&mut self) {
        self.set_state(EnemyState::Dead);
    }

    pub fn is_dead(&self) -> bool {
        self.state() == EnemyState::Dead
    }

    /// True right after an update that played an attack through
    pub fn attack_landed(&self) -> bool {
        self.state() == EnemyState::Idle
            && self.machine.previous_state() == EnemyState::Attack
            && self.machine.state_just_changed()
    }

    /// Whether a point is within melee range
    pub fn in_reach(&self, point: Vec2) -> bool {
        self.position().distance(point) <= self.stats.attack_range
    }

    pub fn target(&self) -> Option<EntityRef> {
        self.target
    }

    pub fn set_target(&mut self, target: Option<EntityRef>) {
        self.target = target;
    }

    pub fn position(&self) -> Vec2 {
        self.entity.position()
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.entity.set_position(position);
    }

    pub fn velocity(&self) -> Vec2 {
        self.entity.velocity()
    }

    pub fn aabb(&self) -> Aabb {
        self.entity.aabb()
    }

    pub fn facing(&self) -> f32 {
        self.entity.facing()
    }

    pub fn animation(&self, state: EnemyState) -> &SpriteAnim {
        self.machine.animation(state)
    }

    pub fn draw(&self, renderer: &mut impl Renderer, camera: &Camera2D) {
        if let Some(frame) = self.machine.current_animation().current_frame() {
            renderer.draw_sprite(frame, camera * self.entity.transform());
        }
    }

    pub fn draw_debug(&self, renderer: &mut impl Renderer, camera: &Camera2D) {
        self.entity
            .draw_debug(renderer, camera, self.machine.label(), colors::RED);
    }
}
