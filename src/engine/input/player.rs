// Per-frame input state for the local player

use super::action::{Action, Axis};
use enum_map::EnumMap;

/// Read-only view of the input a character needs for one frame.
///
/// Implemented by [`PlayerInput`]; tests and scripted controllers can provide
/// their own.
pub trait InputState {
    /// Analog axis value in [-1, 1]
    fn axis(&self, axis: Axis) -> f32;

    /// True only on the frame the action was pressed (edge-triggered)
    fn button_down(&self, action: Action) -> bool;

    /// True while the action is held (level-triggered)
    fn button(&self, action: Action) -> bool;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct ButtonState {
    held: bool,
    pressed: bool,
    released: bool,
}

/// Keyboard/mouse backed input state, one slot per action
#[derive(Debug, Default)]
pub struct PlayerInput {
    buttons: EnumMap<Action, ButtonState>,
}

impl PlayerInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_held(&self, action: Action) -> bool {
        self.buttons[action].held
    }

    pub fn just_pressed(&self, action: Action) -> bool {
        self.buttons[action].pressed
    }

    pub fn just_released(&self, action: Action) -> bool {
        self.buttons[action].released
    }

    /// Key or button went down. Repeats while held are ignored.
    pub fn press(&mut self, action: Action) {
        let button = &mut self.buttons[action];
        if !button.held {
            button.held = true;
            button.pressed = true;
        }
    }

    /// Key or button went up
    pub fn release(&mut self, action: Action) {
        let button = &mut self.buttons[action];
        if button.held {
            button.held = false;
            button.released = true;
        }
    }

    /// Clear edge-triggered state once the frame has consumed it
    pub fn update(&mut self) {
        for button in self.buttons.values_mut() {
            button.pressed = false;
            button.released = false;
        }
    }

    /// Forget everything (e.g. on focus loss)
    pub fn reset(&mut self) {
        self.buttons = EnumMap::default();
    }

    /// Both axes as (horizontal, vertical)
    pub fn direction(&self) -> (f32, f32) {
        (self.axis(Axis::Horizontal), self.axis(Axis::Vertical))
    }
}

impl InputState for PlayerInput {
    fn axis(&self, axis: Axis) -> f32 {
        let (negative, positive) = axis.actions();
        let value = |action| if self.is_held(action) { 1.0 } else { 0.0 };
        value(positive) - value(negative)
    }

    fn button_down(&self, action: Action) -> bool {
        self.just_pressed(action)
    }

    fn button(&self, action: Action) -> bool {
        self.is_held(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_is_held_and_edge() {
        let mut input = PlayerInput::new();
        input.press(Action::Attack);
        assert!(input.button(Action::Attack));
        assert!(input.button_down(Action::Attack));
    }

    #[test]
    fn test_button_down_is_edge_triggered() {
        let mut input = PlayerInput::new();
        input.press(Action::Dash);
        input.update();
        assert!(input.button(Action::Dash));
        assert!(!input.button_down(Action::Dash));

        // Holding does not re-trigger
        input.press(Action::Dash);
        assert!(!input.button_down(Action::Dash));
    }

    #[test]
    fn test_release_clears_hold() {
        let mut input = PlayerInput::new();
        input.press(Action::Attack);
        input.update();
        input.release(Action::Attack);
        assert!(!input.button(Action::Attack));
        assert!(input.just_released(Action::Attack));

        input.update();
        assert!(!input.just_released(Action::Attack));
    }

    #[test]
    fn test_release_without_press_is_ignored() {
        let mut input = PlayerInput::new();
        input.release(Action::Attack);
        assert!(!input.just_released(Action::Attack));
    }

    #[test]
    fn test_axes() {
        let mut input = PlayerInput::new();
        assert_eq!(input.direction(), (0.0, 0.0));

        input.press(Action::MoveRight);
        input.press(Action::MoveUp);
        assert_eq!(input.direction(), (1.0, 1.0));

        // Opposite directions cancel
        input.press(Action::MoveLeft);
        assert_eq!(input.axis(Axis::Horizontal), 0.0);

        input.release(Action::MoveRight);
        input.release(Action::MoveUp);
        input.press(Action::MoveDown);
        assert_eq!(input.direction(), (-1.0, -1.0));
    }

    #[test]
    fn test_reset_drops_everything() {
        let mut input = PlayerInput::new();
        input.press(Action::MoveLeft);
        input.press(Action::Attack);
        input.reset();
        assert!(!input.button(Action::MoveLeft));
        assert!(!input.button_down(Action::Attack));
        assert_eq!(input.direction(), (0.0, 0.0));
    }
}
