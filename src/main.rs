use anyhow::Result;
use clap::{Parser, ValueEnum};
use grid_snake::game::{FoodPlacement, GameConfig};
use grid_snake::modes::PlayMode;
use grid_snake::telemetry;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "grid_snake")]
#[command(version, about = "Single-player Snake in the terminal")]
struct Cli {
    /// JSON file with base settings; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid width
    #[arg(long)]
    width: Option<u16>,

    /// Grid height
    #[arg(long)]
    height: Option<u16>,

    /// Milliseconds between moves
    #[arg(long)]
    speed: Option<u64>,

    /// Where eaten food reappears
    #[arg(long, value_enum)]
    food_placement: Option<Placement>,

    /// Append logs to this file (RUST_LOG sets the level)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Placement {
    /// Never uses the last row and column
    Classic,
    /// Anywhere not covered by the snake
    FullBoard,
}

impl From<Placement> for FoodPlacement {
    fn from(placement: Placement) -> Self {
        match placement {
            Placement::Classic => FoodPlacement::Classic,
            Placement::FullBoard => FoodPlacement::FullBoard,
        }
    }
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_file(path)?,
            None => GameConfig::default(),
        };

        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(speed) = self.speed {
            config.speed_ms = speed;
        }
        if let Some(placement) = self.food_placement {
            config.food_placement = placement.into();
        }

        config.validate()?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        telemetry::init_file_logging(path)?;
    }

    let config = cli.game_config()?;
    tracing::debug!(?config, "configuration loaded");

    let mut play_mode = PlayMode::new(config);
    play_mode.run().await?;

    Ok(())
}
