// Domain rules - Field validation policies

use crate::domain::errors::*;
use crate::domain::model::Preset;

/// Lowest accepted constant rate factor
pub const CRF_MIN: i64 = 0;

/// Highest accepted constant rate factor
pub const CRF_MAX: i64 = 51;

/// Validation rules for transcode request fields
pub struct RequestValidator;

impl RequestValidator {
    /// Reject empty or whitespace-only paths
    pub fn require_path(field: &'static str, path: &str) -> Result<(), DomainError> {
        if path.trim().is_empty() {
            return Err(DomainError::MissingField(field));
        }
        Ok(())
    }

    /// Accept CRF values in `CRF_MIN..=CRF_MAX`
    pub fn check_crf(crf: i64) -> Result<u8, DomainError> {
        if !(CRF_MIN..=CRF_MAX).contains(&crf) {
            return Err(DomainError::OutOfRange {
                field: "crf",
                value: crf,
                expected: "0..51",
            });
        }
        // In range, so the narrowing cannot truncate
        Ok(crf as u8)
    }

    /// Accept any strictly positive bitrate in kbps
    pub fn check_audio_kbps(audio_kbps: i64) -> Result<u64, DomainError> {
        if audio_kbps <= 0 {
            return Err(DomainError::OutOfRange {
                field: "audio_kbps",
                value: audio_kbps,
                expected: "> 0",
            });
        }
        Ok(audio_kbps as u64)
    }

    /// Resolve an optional raw preset name
    pub fn parse_preset(preset: Option<&str>) -> Result<Preset, DomainError> {
        preset
            .ok_or(DomainError::MissingField("preset"))?
            .parse()
    }
}

#[cfg(test)]
mod tests;
