//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! The terminal front end in [`crate::modes`] drives it one tick at a time.

pub mod action;
pub mod config;
pub mod engine;
pub mod food;
pub mod state;

// Re-export commonly used types
pub use action::{Action, Direction};
pub use config::GameConfig;
pub use engine::{GameEngine, StepInfo, StepResult};
pub use food::{free_cells, place_food};
pub use state::{CollisionType, GameEnding, GameState, GameStatus, Position, Snake};
