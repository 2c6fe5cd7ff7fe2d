//! Gameplay core for Spirit Boxer: animation-driven characters, destructible
//! props and edge-based collision, drawn through a renderer trait.
//! The binary in `main.rs` is the winit shell around it.

pub mod core;
pub mod engine;
pub mod game;
