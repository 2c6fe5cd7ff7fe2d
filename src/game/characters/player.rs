// Player character

use enum_map::Enum;
use glam::Vec2;
use parry2d::bounding_volume::Aabb;

use super::animation::SpriteAnim;
use super::entity::{valid_delta_time, Entity};
use super::state::{CharacterState, StateMachine};
use super::stats::PlayerStats;
use crate::engine::input::{Action, Axis, InputState};
use crate::engine::renderer::{colors, Camera2D, Renderer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Enum)]
pub enum PlayerState {
    /// Before construction finishes; does nothing
    None,
    Idle,
    Running,
    Attack,
    Dash,
    Dead,
}

impl CharacterState for PlayerState {
    fn is_repeatable(self) -> bool {
        matches!(self, Self::Attack | Self::Dash)
    }

    fn label(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Idle => "Idle",
            Self::Running => "Running",
            Self::Attack => "Attack",
            Self::Dash => "Dash",
            Self::Dead => "Dead",
        }
    }
}

fn player_animation(state: PlayerState) -> SpriteAnim {
    match state {
        PlayerState::None => SpriteAnim::empty(),
        PlayerState::Idle => SpriteAnim::looping("assets/Hero/Idle.png", 4, 8.0),
        PlayerState::Running => SpriteAnim::looping("assets/Hero/Run.png", 6, 12.0),
        PlayerState::Attack => SpriteAnim::one_shot("assets/Hero/Attack.png", 6, 12.0),
        PlayerState::Dash => SpriteAnim::one_shot("assets/Hero/Dash.png", 4, 16.0),
        PlayerState::Dead => SpriteAnim::one_shot("assets/Hero/Death.png", 8, 8.0),
    }
}

/// The input-driven character
#[derive(Debug)]
pub struct Player {
    entity: Entity,
    machine: StateMachine<PlayerState>,
    stats: PlayerStats,
}

impl Player {
    pub fn new(position: Vec2) -> Self {
        Self::with_stats(position, PlayerStats::default())
    }

    pub fn with_stats(position: Vec2, stats: PlayerStats) -> Self {
        let entity = Entity::new(position, stats.anchor, stats.aabb_min, stats.aabb_max);
        let mut player = Self {
            entity,
            machine: StateMachine::new(PlayerState::None, player_animation),
            stats,
        };
        player.set_state(PlayerState::Idle);
        player
    }

    /// Run one frame of the current state
    pub fn update(&mut self, dt: f32, input: &impl InputState) {
        if !valid_delta_time(dt, "player") {
            return;
        }

        self.machine.tick(dt);
        match self.machine.state() {
            PlayerState::None => {}
            PlayerState::Idle => self.do_idle(dt, input),
            PlayerState::Running => self.do_running(dt, input),
            PlayerState::Attack => self.do_attack(dt, input),
            PlayerState::Dash => self.do_dash(dt, input),
            PlayerState::Dead => self.do_dead(dt),
        }
        self.entity.update_facing();
    }

    fn do_idle(&mut self, dt: f32, input: &impl InputState) {
        self.do_movement(dt, input, 1.0);

        if self.is_moving() {
            self.set_state(PlayerState::Running);
        }
        self.check_actions(input);

        self.machine.advance(PlayerState::Idle, dt);
    }

    fn do_running(&mut self, dt: f32, input: &impl InputState) {
        self.do_movement(dt, input, 1.0);

        if !self.is_moving() {
            self.set_state(PlayerState::Idle);
        }
        self.check_actions(input);

        self.machine.advance(PlayerState::Running, dt);
    }

    fn do_attack(&mut self, dt: f32, input: &impl InputState) {
        self.do_movement(dt, input, 1.0);

        self.machine.advance(PlayerState::Attack, dt);
        if self.machine.is_done(PlayerState::Attack) {
            self.set_state(PlayerState::Idle);
        }
    }

    fn do_dash(&mut self, dt: f32, input: &impl InputState) {
        self.do_movement(dt, input, self.stats.dash_multiplier);

        self.machine.advance(PlayerState::Dash, dt);
        if self.machine.is_done(PlayerState::Dash) {
            if self.is_moving() {
                self.set_state(PlayerState::Running);
            } else {
                self.set_state(PlayerState::Idle);
            }
        }
    }

    fn do_dead(&mut self, dt: f32) {
        self.entity.set_velocity(Vec2::ZERO);
        self.machine.advance(PlayerState::Dead, dt);
    }

    /// Attack and dash presses; a dash pressed on the same frame wins
    fn check_actions(&mut self, input: &impl InputState) {
        if input.button_down(Action::Attack) {
            self.set_state(PlayerState::Attack);
        }
        if input.button_down(Action::Dash) {
            self.set_state(PlayerState::Dash);
        }
    }

    fn do_movement(&mut self, dt: f32, input: &impl InputState, multiplier: f32) {
        // Screen Y grows downward, so up on the stick is negative Y
        let direction = Vec2::new(
            input.axis(Axis::Horizontal).clamp(-1.0, 1.0),
            -input.axis(Axis::Vertical).clamp(-1.0, 1.0),
        );
        let delta = direction * self.stats.speed * multiplier * dt;
        self.entity.move_by(delta, dt);
    }

    fn is_moving(&self) -> bool {
        self.entity.velocity().length() > 0.0
    }

    /// Request a state change; see [`StateMachine::set_state`]
    pub fn set_state(&mut self, state: PlayerState) -> bool {
        self.machine.set_state(state)
    }

    pub fn state(&self) -> PlayerState {
        self.machine.state()
    }

    pub fn die(&mut self) {
        self.set_state(PlayerState::Dead);
    }

    pub fn is_dead(&self) -> bool {
        self.state() == PlayerState::Dead
    }

    /// True right after an update that entered (or restarted) Attack
    pub fn attack_started(&self) -> bool {
        self.state() == PlayerState::Attack && self.machine.state_just_changed()
    }

    /// World hitbox extended by `reach` in the facing direction
    pub fn attack_area(&self, reach: f32) -> Aabb {
        let mut area = self.aabb();
        if self.facing() < 0.0 {
            area.mins.x -= reach;
        } else {
            area.maxs.x += reach;
        }
        area
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

    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.entity.set_velocity(velocity);
    }

    pub fn aabb(&self) -> Aabb {
        self.entity.aabb()
    }

    pub fn facing(&self) -> f32 {
        self.entity.facing()
    }

    pub fn entity(&self) -> &Entity {
        &self.entity
    }

    pub fn stats(&self) -> &PlayerStats {
        &self.stats
    }

    pub fn animation(&self, state: PlayerState) -> &SpriteAnim {
        self.machine.animation(state)
    }

    pub fn draw(&self, renderer: &mut impl Renderer, camera: &Camera2D) {
        if let Some(frame) = self.machine.current_animation().current_frame() {
            renderer.draw_sprite(frame, camera * self.entity.transform());
        }
    }

    pub fn draw_debug(&self, renderer: &mut impl Renderer, camera: &Camera2D) {
        self.entity
            .draw_debug(renderer, camera, self.machine.label(), colors::GREEN);
    }
}
