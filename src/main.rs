//! ffopts CLI
//!
//! Validates x264/AAC transcoding parameters and prints the matching ffmpeg
//! argument list.
//!
//! # Usage
//!
//! ```bash
//! ffopts build --input input.webm --output output.mp4 --crf 28 --preset ultrafast
//! ffopts build -i input.webm -o output.mp4 --format shell
//! ffopts presets --json
//! ```

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing::info;

use ffopts_cli::cli::{commands, Cli, Commands};
use ffopts_cli::utils::logging::{LogFormat, LogLevel, LoggingConfig, LoggingSystem};

/// Main entry point for the ffopts CLI application
fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let level: LogLevel = cli
        .log_level
        .parse()
        .map_err(|e: String| anyhow!("Invalid --log-level: {}", e))?;
    let config = LoggingConfig {
        level,
        format: if cli.log_json { LogFormat::Json } else { LogFormat::Pretty },
        ..LoggingConfig::default()
    };
    LoggingSystem::new(config)
        .initialize()
        .context("Failed to set up logging")?;

    // Execute the requested command
    match cli.command {
        Commands::Build(args) => {
            info!("Executing build command");
            commands::build(args)?;
        }
        Commands::Presets(args) => {
            info!("Executing presets command");
            commands::presets(args)?;
        }
    }

    Ok(())
}
