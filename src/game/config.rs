use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// How food is relocated after it has been eaten
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodPlacement {
    /// Uniform over `[0, width - 1) x [0, height - 1)`.
    ///
    /// The last column and row never receive food. This is the historical
    /// behaviour of the game and is kept as the default; food may also land
    /// on the snake.
    #[default]
    Classic,
    /// Uniform over the whole board, avoiding the snake where possible.
    FullBoard,
}

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the game grid
    pub width: u16,
    /// Height of the game grid
    pub height: u16,
    /// Milliseconds between two ticks
    pub speed_ms: u64,
    pub food_placement: FoodPlacement,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 20,
            height: 20,
            speed_ms: 125,
            food_placement: FoodPlacement::Classic,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    pub fn with_food_placement(mut self, food_placement: FoodPlacement) -> Self {
        self.food_placement = food_placement;
        self
    }

    /// Load a configuration from a JSON file. Missing fields take their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// The engine itself does not check its dimensions; callers building a
    /// config from user input should run this first.
    pub fn validate(&self) -> Result<()> {
        ensure!(self.width > 0, "grid width must be positive");
        ensure!(self.height > 0, "grid height must be positive");
        ensure!(self.speed_ms > 0, "tick speed must be positive");
        Ok(())
    }
}
