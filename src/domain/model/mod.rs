// Domain models - Core types and data structures

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use serde::Serialize;

use crate::domain::errors::DomainError;
use crate::domain::rules::RequestValidator;

/// Video encoder passed to `-c:v`
pub const VIDEO_CODEC: &str = "libx264";

/// Audio encoder passed to `-c:a`
pub const AUDIO_CODEC: &str = "aac";

/// x264 encoder preset - speed/compression tradeoff
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    Ultrafast,
    Superfast,
    Veryfast,
    Faster,
    Fast,
    Medium,
    Slow,
    Slower,
    Veryslow,
}

impl Preset {
    /// All presets, fastest first
    pub const ALL: [Preset; 9] = [
        Preset::Ultrafast,
        Preset::Superfast,
        Preset::Veryfast,
        Preset::Faster,
        Preset::Fast,
        Preset::Medium,
        Preset::Slow,
        Preset::Slower,
        Preset::Veryslow,
    ];

    /// Name as understood by x264
    pub fn as_str(&self) -> &'static str {
        match self {
            Preset::Ultrafast => "ultrafast",
            Preset::Superfast => "superfast",
            Preset::Veryfast => "veryfast",
            Preset::Faster => "faster",
            Preset::Fast => "fast",
            Preset::Medium => "medium",
            Preset::Slow => "slow",
            Preset::Slower => "slower",
            Preset::Veryslow => "veryslow",
        }
    }
}

impl FromStr for Preset {
    type Err = DomainError;

    /// Exact, case-sensitive match. No trimming.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::ALL
            .iter()
            .copied()
            .find(|preset| preset.as_str() == s)
            .ok_or_else(|| DomainError::InvalidPreset(s.to_string()))
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated transcoding parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscodeRequest {
    input_path: String,
    crf: u8,
    preset: Preset,
    audio_kbps: u64,
    output_path: String,
}

impl TranscodeRequest {
    /// Create a new transcode request from raw values, rejecting the first invalid field
    pub fn new(
        input_path: impl Into<String>,
        crf: i64,
        preset: Option<&str>,
        audio_kbps: i64,
        output_path: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let input_path = input_path.into();
        let output_path = output_path.into();

        RequestValidator::require_path("input_path", &input_path)?;
        RequestValidator::require_path("output_path", &output_path)?;
        let crf = RequestValidator::check_crf(crf)?;
        let audio_kbps = RequestValidator::check_audio_kbps(audio_kbps)?;
        let preset = RequestValidator::parse_preset(preset)?;

        Ok(Self {
            input_path,
            crf,
            preset,
            audio_kbps,
            output_path,
        })
    }

    pub fn input_path(&self) -> &str {
        &self.input_path
    }

    pub fn crf(&self) -> u8 {
        self.crf
    }

    pub fn preset(&self) -> Preset {
        self.preset
    }

    pub fn audio_kbps(&self) -> u64 {
        self.audio_kbps
    }

    pub fn output_path(&self) -> &str {
        &self.output_path
    }

    /// Render the ffmpeg argument list for this request
    pub fn to_args(&self) -> TranscodeArgs {
        TranscodeArgs(vec![
            "-i".to_string(),
            self.input_path.clone(),
            "-c:v".to_string(),
            VIDEO_CODEC.to_string(),
            "-crf".to_string(),
            self.crf.to_string(),
            "-preset".to_string(),
            self.preset.as_str().to_string(),
            "-c:a".to_string(),
            AUDIO_CODEC.to_string(),
            "-b:a".to_string(),
            format!("{}k", self.audio_kbps),
            self.output_path.clone(),
        ])
    }
}

/// Read-only ffmpeg argument list
///
/// Always exactly [`TranscodeArgs::LEN`] tokens. Only shared access to the
/// tokens is exposed, so a built list cannot be altered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TranscodeArgs(Vec<String>);

impl TranscodeArgs {
    /// Number of tokens in every argument list
    pub const LEN: usize = 13;

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Borrow the tokens as `&str`, e.g. for `Command::args`
    pub fn iter_str(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl Deref for TranscodeArgs {
    type Target = [String];

    fn deref(&self) -> &[String] {
        &self.0
    }
}

impl AsRef<[String]> for TranscodeArgs {
    fn as_ref(&self) -> &[String] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a TranscodeArgs {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
