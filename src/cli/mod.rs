//! CLI module for ffopts
//!
//! This module handles command-line argument parsing and command execution.

use clap::{Parser, Subcommand};

pub mod args;
pub mod commands;

pub use args::{BuildArgs, OutputFormat, PresetsArgs};

/// ffopts - validated ffmpeg arguments for x264/AAC transcodes
///
/// Prints the argument list; it never runs ffmpeg itself.
#[derive(Parser, Debug)]
#[command(name = "ffopts")]
#[command(about = "Build validated ffmpeg arguments for x264/AAC transcoding")]
#[command(version)]
#[command(long_about = None)]
pub struct Cli {
    /// Logging level
    #[arg(long, default_value = "warn", env = "FFOPTS_LOG_LEVEL", global = true)]
    pub log_level: String,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate parameters and print the ffmpeg argument list
    Build(BuildArgs),
    /// List the accepted x264 presets, fastest first
    Presets(PresetsArgs),
}
