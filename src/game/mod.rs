// Gameplay: characters and the level that owns them

pub mod characters;
pub mod level;
