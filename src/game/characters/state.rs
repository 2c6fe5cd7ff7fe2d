// Character state machine

use std::fmt::Debug;

use enum_map::{EnumArray, EnumMap};

use super::animation::SpriteAnim;

/// A state enum usable by [`StateMachine`]
pub trait CharacterState: Copy + Eq + Debug + EnumArray<SpriteAnim> {
    /// Action states restart their animation when re-entered
    fn is_repeatable(self) -> bool;

    /// Debug overlay label
    fn label(self) -> &'static str;
}

/// State machine shared by every character: one active state plus one
/// resident animation per state.
#[derive(Debug)]
pub struct StateMachine<S: CharacterState> {
    current_state: S,
    previous_state: S,
    state_time: f32,
    animations: EnumMap<S, SpriteAnim>,
}

impl<S: CharacterState> StateMachine<S> {
    /// Create a machine in `initial`, building each state's animation with `animation_for`
    pub fn new(initial: S, animation_for: impl FnMut(S) -> SpriteAnim) -> Self {
        Self {
            current_state: initial,
            previous_state: initial,
            state_time: 0.0,
            animations: EnumMap::from_fn(animation_for),
        }
    }

    /// Get the current state
    pub fn state(&self) -> S {
        self.current_state
    }

    /// Get the previous state
    pub fn previous_state(&self) -> S {
        self.previous_state
    }

    /// Get time spent in current state
    pub fn state_time(&self) -> f32 {
        self.state_time
    }

    /// Check if the state was entered (or re-entered) since the last tick
    pub fn state_just_changed(&self) -> bool {
        self.state_time == 0.0
    }

    /// Request a transition.
    ///
    /// Re-entering the current state is a no-op unless the state is
    /// repeatable, in which case its animation restarts. Returns whether
    /// anything happened.
    pub fn set_state(&mut self, new_state: S) -> bool {
        if new_state == self.current_state && !new_state.is_repeatable() {
            return false;
        }

        self.animations[new_state].reset();
        self.state_time = 0.0;

        if new_state != self.current_state {
            log::trace!("{:?} -> {:?}", self.current_state, new_state);
            self.previous_state = self.current_state;
            self.current_state = new_state;
        } else {
            log::trace!("{:?} restarted", new_state);
        }
        true
    }

    /// Count time in the current state (called once per update, before dispatch)
    pub fn tick(&mut self, dt: f32) {
        self.state_time += dt;
    }

    /// Advance one state's animation
    pub fn advance(&mut self, state: S, dt: f32) {
        self.animations[state].update(dt);
    }

    /// Check whether a state's animation has played through
    pub fn is_done(&self, state: S) -> bool {
        self.animations[state].is_done()
    }

    pub fn animation(&self, state: S) -> &SpriteAnim {
        &self.animations[state]
    }

    /// Animation of the current state
    pub fn current_animation(&self) -> &SpriteAnim {
        &self.animations[self.current_state]
    }

    pub fn label(&self) -> &'static str {
        self.current_state.label()
    }
}
