// Engine modules: frame timing, input, rendering interface

pub mod game_loop;
pub mod input;
pub mod renderer;
