//! Snake - the classic arcade game in a terminal window
//!
//! This library provides:
//! - Core game logic: snake movement, collisions, fruit placement (game module)
//! - Keyboard mapping (input module)
//! - Terminal drawing with ratatui (render module)
//! - Session stats (metrics module)
//! - The interactive game loop (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
