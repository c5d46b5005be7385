/// Falling-word game: entities, controller and renderer.
pub mod entity;
pub mod renderer;
pub mod state;

pub use entity::{Burst, FallingWord, Particle};
pub use state::GameState;
