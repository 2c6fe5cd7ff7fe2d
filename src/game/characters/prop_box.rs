// Destructible box prop

use enum_map::Enum;
use glam::Vec2;
use parry2d::bounding_volume::Aabb;

use super::animation::SpriteAnim;
use super::entity::{valid_delta_time, Entity};
use super::state::{CharacterState, StateMachine};
use super::stats::BoxStats;
use crate::engine::renderer::{colors, Camera2D, Renderer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Enum)]
pub enum BoxState {
    Idle,
    Hit,
    Break,
}

impl CharacterState for BoxState {
    fn is_repeatable(self) -> bool {
        matches!(self, Self::Hit)
    }

    fn label(self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Hit => "Hit",
            Self::Break => "Break",
        }
    }
}

fn box_animation(state: BoxState) -> SpriteAnim {
    match state {
        BoxState::Idle => SpriteAnim::looping("assets/Props/Box Idle.png", 1, 1.0),
        BoxState::Hit => SpriteAnim::one_shot("assets/Props/Box Hit.png", 2, 8.0),
        BoxState::Break => SpriteAnim::one_shot("assets/Props/Box Break.png", 4, 8.0),
    }
}

/// A box that takes a few hits, plays its break animation and is then
/// removed by the level
#[derive(Debug)]
pub struct PropBox {
    entity: Entity,
    machine: StateMachine<BoxState>,
    hit_points: u32,
    broken: bool,
}

impl PropBox {
    pub fn new(position: Vec2) -> Self {
        Self::with_stats(position, BoxStats::default())
    }

    pub fn with_stats(position: Vec2, stats: BoxStats) -> Self {
        Self {
            entity: Entity::new(position, stats.anchor, stats.aabb_min, stats.aabb_max),
            machine: StateMachine::new(BoxState::Idle, box_animation),
            hit_points: stats.hit_points,
            broken: false,
        }
    }

    /// Take one hit. Returns false if the box is already breaking.
    pub fn hit(&mut self) -> bool {
        if self.state() == BoxState::Break {
            return false;
        }

        self.hit_points = self.hit_points.saturating_sub(1);
        if self.hit_points == 0 {
            self.set_state(BoxState::Break);
        } else {
            self.set_state(BoxState::Hit);
        }
        true
    }

    pub fn update(&mut self, dt: f32) {
        if !valid_delta_time(dt, "box") {
            return;
        }

        self.machine.tick(dt);
        match self.machine.state() {
            BoxState::Idle => self.machine.advance(BoxState::Idle, dt),
            BoxState::Hit => self.do_hit(dt),
            BoxState::Break => self.do_break(dt),
        }
    }

    fn do_hit(&mut self, dt: f32) {
        self.machine.advance(BoxState::Hit, dt);
        if self.machine.is_done(BoxState::Hit) {
            self.set_state(BoxState::Idle);
        }
    }

    fn do_break(&mut self, dt: f32) {
        self.machine.advance(BoxState::Break, dt);
        if self.machine.is_done(BoxState::Break) {
            self.broken = true;
        }
    }

    pub fn set_state(&mut self, state: BoxState) -> bool {
        self.machine.set_state(state)
    }

    pub fn state(&self) -> BoxState {
        self.machine.state()
    }

    pub fn hit_points(&self) -> u32 {
        self.hit_points
    }

    /// Break animation finished; ready for removal
    pub fn is_broken(&self) -> bool {
        self.broken
    }

    pub fn position(&self) -> Vec2 {
        self.entity.position()
    }

    pub fn aabb(&self) -> Aabb {
        self.entity.aabb()
    }

    pub fn animation(&self, state: BoxState) -> &SpriteAnim {
        self.machine.animation(state)
    }

    pub fn draw(&self, renderer: &mut impl Renderer, camera: &Camera2D) {
        if let Some(frame) = self.machine.current_animation().current_frame() {
            renderer.draw_sprite(frame, camera * self.entity.transform());
        }
    }

    pub fn draw_debug(&self, renderer: &mut impl Renderer, camera: &Camera2D) {
        self.entity
            .draw_debug(renderer, camera, self.machine.label(), colors::YELLOW);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::{aabb_max, aabb_min};

    fn run_until_settled(b: &mut PropBox) {
        for _ in 0..100 {
            if b.state() == BoxState::Idle || b.is_broken() {
                return;
            }
            b.update(0.125);
        }
    }

    #[test]
    fn test_new_box() {
        let b = PropBox::new(Vec2::new(100.0, 200.0));
        assert_eq!(b.state(), BoxState::Idle);
        assert_eq!(b.hit_points(), 3);
        assert!(!b.is_broken());
        assert_eq!(aabb_min(&b.aabb()), Vec2::new(92.0, 184.0));
        assert_eq!(aabb_max(&b.aabb()), Vec2::new(108.0, 200.0));
    }

    #[test]
    fn test_hit_then_recover() {
        let mut b = PropBox::new(Vec2::ZERO);
        assert!(b.hit());
        assert_eq!(b.state(), BoxState::Hit);
        assert_eq!(b.hit_points(), 2);

        b.update(0.125);
        assert_eq!(b.state(), BoxState::Hit);
        b.update(0.125);
        assert_eq!(b.state(), BoxState::Idle);
    }

    #[test]
    fn test_rehit_restarts_hit_animation() {
        let mut b = PropBox::new(Vec2::ZERO);
        b.hit();
        b.update(0.125);
        assert!(b.animation(BoxState::Hit).elapsed() > 0.0);

        b.hit();
        assert_eq!(b.state(), BoxState::Hit);
        assert_eq!(b.animation(BoxState::Hit).elapsed(), 0.0);
    }

    #[test]
    fn test_breaks_when_out_of_hit_points() {
        let mut b = PropBox::new(Vec2::ZERO);
        for _ in 0..2 {
            b.hit();
            run_until_settled(&mut b);
        }
        assert_eq!(b.hit_points(), 1);

        b.hit();
        assert_eq!(b.state(), BoxState::Break);
        assert!(!b.is_broken());

        run_until_settled(&mut b);
        assert!(b.is_broken());
    }

    #[test]
    fn test_hits_while_breaking_are_ignored() {
        let mut b = PropBox::with_stats(
            Vec2::ZERO,
            BoxStats {
                hit_points: 1,
                ..BoxStats::default()
            },
        );
        assert!(b.hit());
        assert!(!b.hit());
        assert_eq!(b.hit_points(), 0);
        assert_eq!(b.state(), BoxState::Break);
    }

    #[test]
    fn test_invalid_delta_time_is_ignored() {
        let mut b = PropBox::new(Vec2::ZERO);
        b.hit();
        b.update(-0.5);
        assert_eq!(b.animation(BoxState::Hit).elapsed(), 0.0);
    }
}
