use anyhow::{Context, Result, anyhow};
use clap::Parser;
use snake::game::{GameConfig, GameEngine};
use snake::modes::HumanMode;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "snake")]
#[command(version, about = "Classic Snake in the terminal")]
struct Cli {
    /// Grid width in cells
    #[arg(long, default_value = "15")]
    width: usize,

    /// Grid height in cells
    #[arg(long, default_value = "15")]
    height: usize,

    /// Starting length of the snake
    #[arg(long, default_value = "3")]
    initial_length: usize,

    /// Milliseconds between moves
    #[arg(long, default_value = "125")]
    tick_ms: u64,

    /// Seed for fruit placement, random if omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file (the terminal belongs to the game)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        GameConfig {
            grid_width: self.width,
            grid_height: self.height,
            initial_snake_length: self.initial_length,
            tick_interval_ms: self.tick_ms,
        }
    }
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "snake=info".into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .init();

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let config = cli.game_config();
    config
        .validate()
        .map_err(|msg| anyhow!("Invalid game configuration: {msg}"))?;
    let config_json =
        serde_json::to_string(&config).context("Failed to serialize game configuration")?;
    tracing::info!(config = %config_json, seed = ?cli.seed, "configuration loaded");

    let mut human_mode = match cli.seed {
        Some(seed) => HumanMode::with_engine(GameEngine::with_seed(config, seed)),
        None => HumanMode::new(config),
    };
    human_mode.run().await?;

    Ok(())
}
