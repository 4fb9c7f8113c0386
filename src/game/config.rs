use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Largest grid side: two terminal columns per cell plus the border
/// must still fit a `u16` screen width
pub const MAX_GRID_SIDE: usize = (u16::MAX as usize - 2) / 2;

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the game grid in cells
    pub grid_width: usize,
    /// Height of the game grid in cells
    pub grid_height: usize,
    /// Initial length of the snake
    pub initial_snake_length: usize,
    /// Milliseconds between two moves of the snake
    pub tick_interval_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 15,
            grid_height: 15,
            initial_snake_length: 3,
            // 8 cells per second
            tick_interval_ms: 1000 / 8,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Check that the starting snake and one fruit fit on the grid.
    ///
    /// The snake starts with its head one cell left of the center column
    /// and its body trailing to the right.
    pub fn validate(&self) -> Result<(), String> {
        if self.grid_width < 2 || self.grid_height < 1 {
            return Err(format!(
                "grid must be at least 2x1, got {}x{}",
                self.grid_width, self.grid_height
            ));
        }

        if self.grid_width > MAX_GRID_SIDE || self.grid_height > MAX_GRID_SIDE {
            return Err(format!(
                "grid sides must be at most {MAX_GRID_SIDE}, got {}x{}",
                self.grid_width, self.grid_height
            ));
        }

        if self.initial_snake_length == 0 {
            return Err("initial_snake_length must be at least 1".to_string());
        }

        let head_x = self.grid_width / 2 - 1;
        let room = self.grid_width - head_x;
        if self.initial_snake_length > room {
            return Err(format!(
                "initial_snake_length {} does not fit a grid {} cells wide (max {})",
                self.initial_snake_length, self.grid_width, room
            ));
        }

        let cells = self
            .grid_width
            .checked_mul(self.grid_height)
            .ok_or_else(|| format!("grid {}x{} is too large", self.grid_width, self.grid_height))?;
        if self.initial_snake_length >= cells {
            return Err(format!(
                "grid {}x{} leaves no room for food",
                self.grid_width, self.grid_height
            ));
        }

        if self.tick_interval_ms == 0 {
            return Err("tick_interval_ms must be positive".to_string());
        }

        Ok(())
    }
}
