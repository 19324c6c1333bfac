//! Grid Snake - a single-player Snake game for the terminal
//!
//! This library provides:
//! - Core game logic (game module), free of any I/O
//! - Keyboard normalization (input module)
//! - TUI rendering (render module)
//! - The interactive game loop (modes module)
//! - Logging setup for the binary (telemetry module)

pub mod game;
pub mod input;
pub mod modes;
pub mod render;
pub mod telemetry;
