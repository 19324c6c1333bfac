//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! Renderers read a [`GameState`]; input and timers drive a [`GameEngine`].

pub mod action;
pub mod config;
pub mod engine;
pub mod state;

// Re-export commonly used types
pub use action::Direction;
pub use config::{FoodPlacement, GameConfig};
pub use engine::{GameEngine, TickOutcome};
pub use state::{CollisionType, GameState, Position, Snake};
