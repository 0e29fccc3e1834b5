// Domain use cases - Argument construction

use crate::domain::errors::*;
use crate::domain::model::*;

/// Build the ffmpeg arguments for an x264/AAC transcode from raw values.
///
/// Produces, in order:
///
/// ```text
/// -i <input> -c:v libx264 -crf <crf> -preset <preset> -c:a aac -b:a <kbps>k <output>
/// ```
///
/// Fails on the first invalid field: blank paths, `crf` outside `0..=51`,
/// non-positive `audio_kbps`, or a missing or unknown preset. Does no I/O.
///
/// ```
/// use ffopts_cli::build_transcode_args;
///
/// let args = build_transcode_args("input.webm", 28, Some("ultrafast"), 128, "output.mp4").unwrap();
/// assert_eq!(args[5], "28");
/// assert_eq!(args[11], "128k");
/// ```
pub fn build_transcode_args(
    input_path: &str,
    crf: i64,
    preset: Option<&str>,
    audio_kbps: i64,
    output_path: &str,
) -> Result<TranscodeArgs, DomainError> {
    TranscodeRequest::new(input_path, crf, preset, audio_kbps, output_path)
        .map(|request| request.to_args())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_valid_inputs() {
        let args = build_transcode_args("input.webm", 28, Some("ultrafast"), 128, "output.mp4")
            .unwrap();
        assert_eq!(
            args.as_slice(),
            [
                "-i", "input.webm", "-c:v", "libx264", "-crf", "28", "-preset", "ultrafast",
                "-c:a", "aac", "-b:a", "128k", "output.mp4",
            ]
        );
    }

    #[test]
    fn test_build_invalid_crf() {
        let err = build_transcode_args("input.webm", 99, Some("ultrafast"), 128, "output.mp4")
            .unwrap_err();
        assert_eq!(err.field(), "crf");
    }

    #[test]
    fn test_build_invalid_preset() {
        let err = build_transcode_args("input.webm", 28, Some("warp-speed"), 128, "output.mp4")
            .unwrap_err();
        assert_eq!(err, DomainError::InvalidPreset("warp-speed".to_string()));
    }

    #[test]
    fn test_build_zero_audio_kbps() {
        let err = build_transcode_args("input.webm", 28, Some("ultrafast"), 0, "output.mp4")
            .unwrap_err();
        assert_eq!(err.field(), "audio_kbps");
    }

    #[test]
    fn test_build_missing_output() {
        let err = build_transcode_args("input.webm", 28, Some("ultrafast"), 128, "")
            .unwrap_err();
        assert_eq!(err, DomainError::MissingField("output_path"));
    }
}
