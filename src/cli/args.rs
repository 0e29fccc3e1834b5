//! Command-line argument definitions

use clap::{Args, ValueEnum};

/// How `build` prints the argument list
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One token per line
    Lines,
    /// JSON array of strings
    Json,
    /// Single shell-quoted `ffmpeg` command line
    Shell,
}

/// Arguments for the build command
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Input media file path
    #[arg(short, long)]
    pub input: String,

    /// Output media file path
    #[arg(short, long)]
    pub output: String,

    /// Constant Rate Factor (0-51, lower is higher quality)
    #[arg(long, default_value_t = 28, env = "FFOPTS_CRF", allow_negative_numbers = true)]
    pub crf: i64,

    /// x264 encoding preset
    #[arg(long, default_value = "ultrafast", env = "FFOPTS_PRESET")]
    pub preset: String,

    /// AAC audio bitrate in kbps
    #[arg(
        long,
        default_value_t = 128,
        env = "FFOPTS_AUDIO_KBPS",
        allow_negative_numbers = true
    )]
    pub audio_kbps: i64,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Lines)]
    pub format: OutputFormat,
}

/// Arguments for the presets command
#[derive(Args, Debug)]
pub struct PresetsArgs {
    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}
