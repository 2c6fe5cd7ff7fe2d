// Core utilities shared by engine and game code

pub mod arena;
pub mod math;

#[allow(unused_imports)]
pub use arena::{Arena, Handle};
#[allow(unused_imports)]
pub use math::Transform2D;
