// Input handling system
//
// Keyboard and mouse events from winit are mapped to game actions through an
// `InputConfig`, accumulated in a `PlayerInput`, and read by gameplay code
// through the `InputState` trait once per frame.
//
// ## Architecture
//
// - `action`: game actions, named axes and default bindings
// - `config`: binding and remapping
// - `player`: per-frame pressed / just-pressed state and the `InputState` trait
// - `manager`: routes window events to the player state
//
// ## Usage Example
//
// ```rust
// use engine::input::{Axis, InputManager, InputState};
//
// let mut input = InputManager::default();
//
// // In your event loop, process keyboard events
// input.process_keyboard_event(&key_event);
//
// // Gameplay reads the frame's state
// let horizontal = input.player().axis(Axis::Horizontal);
//
// // At the end of each frame, clear edge-triggered state
// input.update();
// ```

pub mod action;
pub mod config;
pub mod manager;
pub mod player;

// Re-export commonly used types
#[allow(unused_imports)]
pub use action::{Action, Axis, InputSource};
#[allow(unused_imports)]
pub use config::InputConfig;
#[allow(unused_imports)]
pub use manager::InputManager;
#[allow(unused_imports)]
pub use player::{InputState, PlayerInput};
