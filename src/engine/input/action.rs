// Game action definitions and mappings

use enum_map::Enum;
use winit::event::MouseButton;
use winit::keyboard::KeyCode;

/// Represents all possible in-game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Enum)]
pub enum Action {
    // Movement
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,

    // Combat
    Attack,
    Dash,

    // Meta actions
    Pause,
    Menu,
    ToggleDebug,
    Restart,
}

/// Named analog axes, each reported in [-1, 1]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Positive to the right
    Horizontal,
    /// Positive upward on screen
    Vertical,
}

impl Axis {
    /// The (negative, positive) actions that drive this axis
    pub fn actions(self) -> (Action, Action) {
        match self {
            Self::Horizontal => (Action::MoveLeft, Action::MoveRight),
            Self::Vertical => (Action::MoveDown, Action::MoveUp),
        }
    }
}

/// Represents an input source (keyboard key or mouse button)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSource {
    Keyboard(KeyCode),
    Mouse(MouseButton),
}

impl InputSource {
    /// Create a keyboard input source
    pub fn key(code: KeyCode) -> Self {
        Self::Keyboard(code)
    }

    /// Create a mouse button input source
    pub fn mouse(button: MouseButton) -> Self {
        Self::Mouse(button)
    }
}

/// Default keyboard/mouse bindings for the player
pub fn default_bindings() -> Vec<(InputSource, Action)> {
    vec![
        // Movement (WASD and arrows)
        (InputSource::key(KeyCode::KeyA), Action::MoveLeft),
        (InputSource::key(KeyCode::KeyD), Action::MoveRight),
        (InputSource::key(KeyCode::KeyW), Action::MoveUp),
        (InputSource::key(KeyCode::KeyS), Action::MoveDown),
        (InputSource::key(KeyCode::ArrowLeft), Action::MoveLeft),
        (InputSource::key(KeyCode::ArrowRight), Action::MoveRight),
        (InputSource::key(KeyCode::ArrowUp), Action::MoveUp),
        (InputSource::key(KeyCode::ArrowDown), Action::MoveDown),
        // Combat
        (InputSource::key(KeyCode::KeyJ), Action::Attack),
        (InputSource::key(KeyCode::Space), Action::Dash),
        (InputSource::mouse(MouseButton::Left), Action::Attack),
        (InputSource::mouse(MouseButton::Right), Action::Dash),
    ]
}

/// Global bindings (handled by the shell, not the player)
pub fn global_bindings() -> Vec<(InputSource, Action)> {
    vec![
        (InputSource::key(KeyCode::Escape), Action::Menu),
        (InputSource::key(KeyCode::KeyP), Action::Pause),
        (InputSource::key(KeyCode::F1), Action::ToggleDebug),
        (InputSource::key(KeyCode::KeyR), Action::Restart),
    ]
}
