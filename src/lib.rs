//! ffopts - validated ffmpeg arguments for x264/AAC transcoding
//!
//! Builds the fixed 13-token argument list handed to an external `ffmpeg`
//! process, rejecting blank paths, out-of-range CRF or audio bitrate values
//! and unknown x264 presets. Nothing here spawns processes or touches files.

pub mod cli;
pub mod domain;
pub mod error;
pub mod utils;

// Re-export commonly used types
pub use domain::errors::DomainError;
pub use domain::model::{Preset, TranscodeArgs, TranscodeRequest, AUDIO_CODEC, VIDEO_CODEC};
pub use domain::usecases::build_transcode_args;
pub use error::{FfoptsError, FfoptsResult};
