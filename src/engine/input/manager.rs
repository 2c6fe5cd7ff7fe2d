// Input manager - routes window events to the player input state

use super::action::{Action, InputSource};
use super::config::InputConfig;
use super::player::PlayerInput;
use winit::event::{ElementState, KeyEvent, MouseButton};
use winit::keyboard::PhysicalKey;

/// Translates raw winit events into actions for the local player
#[derive(Debug)]
pub struct InputManager {
    config: InputConfig,
    player: PlayerInput,
}

impl InputManager {
    pub fn new(config: InputConfig) -> Self {
        Self {
            config,
            player: PlayerInput::new(),
        }
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        if let PhysicalKey::Code(key_code) = event.physical_key {
            // Key repeats must not re-trigger edge-triggered actions
            if event.repeat {
                return;
            }
            self.process(InputSource::key(key_code), event.state);
        }
    }

    /// Process a mouse button event from winit
    pub fn process_mouse_event(&mut self, button: MouseButton, state: ElementState) {
        self.process(InputSource::mouse(button), state);
    }

    fn process(&mut self, source: InputSource, state: ElementState) {
        let Some(action) = self.config.action_for(source) else {
            return;
        };
        match state {
            ElementState::Pressed => self.player.press(action),
            ElementState::Released => self.player.release(action),
        }
    }

    /// Start a new input frame. Call once per frame after the update.
    pub fn update(&mut self) {
        self.player.update();
    }

    pub fn player(&self) -> &PlayerInput {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut PlayerInput {
        &mut self.player
    }

    /// Check if a shell action (pause, menu, ...) was just pressed
    pub fn just_pressed(&self, action: Action) -> bool {
        self.player.just_pressed(action)
    }

    pub fn config(&self) -> &InputConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut InputConfig {
        &mut self.config
    }

    /// Drop all held input (e.g. when the window loses focus)
    pub fn reset(&mut self) {
        self.player.reset();
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new(InputConfig::with_defaults())
    }
}
