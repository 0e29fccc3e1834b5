// Unit tests for validation rules

use super::*;

#[test]
fn test_require_path_rejects_blank() {
    assert_eq!(
        RequestValidator::require_path("input_path", ""),
        Err(DomainError::MissingField("input_path"))
    );
    assert!(RequestValidator::require_path("input_path", "   ").is_err());
    assert!(RequestValidator::require_path("input_path", "\t\n").is_err());
    assert!(RequestValidator::require_path("input_path", "a.mp4").is_ok());
}

#[test]
fn test_crf_bounds() {
    assert_eq!(RequestValidator::check_crf(0), Ok(0));
    assert_eq!(RequestValidator::check_crf(51), Ok(51));
    assert!(RequestValidator::check_crf(-1).is_err());
    assert!(RequestValidator::check_crf(52).is_err());
    assert!(RequestValidator::check_crf(i64::MIN).is_err());
    assert!(RequestValidator::check_crf(i64::MAX).is_err());
}

#[test]
fn test_crf_error_message() {
    let err = RequestValidator::check_crf(99).unwrap_err();
    assert_eq!(err.to_string(), "crf must be 0..51 (got 99)");
}

#[test]
fn test_audio_kbps_bounds() {
    assert_eq!(RequestValidator::check_audio_kbps(1), Ok(1));
    assert_eq!(RequestValidator::check_audio_kbps(i64::MAX), Ok(i64::MAX as u64));
    assert!(RequestValidator::check_audio_kbps(0).is_err());
    assert!(RequestValidator::check_audio_kbps(-128).is_err());
}

#[test]
fn test_parse_preset_missing() {
    let err = RequestValidator::parse_preset(None).unwrap_err();
    assert_eq!(err, DomainError::MissingField("preset"));
    assert_eq!(err.to_string(), "preset required");
}

#[test]
fn test_parse_preset_unknown() {
    let err = RequestValidator::parse_preset(Some("warp-speed")).unwrap_err();
    assert_eq!(err.field(), "preset");
    assert_eq!(err.to_string(), "invalid preset: warp-speed");
}
