pub mod core {
	pub mod engine;
	pub mod menu;
}

pub mod game;
pub mod persistence;

// Re-export for convenience
pub use crate::core::engine::{Engine, RoundOutcome};
pub use crate::game::GameState;
