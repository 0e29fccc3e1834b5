//! Command implementations

use std::borrow::Cow;
use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::cli::args::{BuildArgs, OutputFormat, PresetsArgs};
use crate::domain::model::{Preset, TranscodeArgs};
use crate::domain::usecases::build_transcode_args;
use crate::error::FfoptsResult;

/// Execute the build command
pub fn build(args: BuildArgs) -> Result<()> {
    info!("Building transcode arguments");
    debug!(
        input = %args.input,
        output = %args.output,
        crf = args.crf,
        preset = %args.preset,
        audio_kbps = args.audio_kbps,
        "Build parameters"
    );

    let tokens = build_transcode_args(
        &args.input,
        args.crf,
        Some(args.preset.as_str()),
        args.audio_kbps,
        &args.output,
    )?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_args(&tokens, args.format, &mut out).context("Failed to write arguments")?;

    info!("Wrote {} arguments", tokens.len());
    Ok(())
}

/// Execute the presets command
pub fn presets(args: PresetsArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_presets(args.json, &mut out).context("Failed to write presets")?;
    Ok(())
}

/// Print an argument list in the requested format
pub fn write_args<W: Write>(
    tokens: &TranscodeArgs,
    format: OutputFormat,
    out: &mut W,
) -> FfoptsResult<()> {
    match format {
        OutputFormat::Lines => {
            for token in tokens {
                writeln!(out, "{}", token)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, tokens)?;
            writeln!(out)?;
        }
        OutputFormat::Shell => {
            writeln!(out, "{}", shell_command(tokens))?;
        }
    }
    Ok(())
}

/// Print the accepted presets, fastest first
pub fn write_presets<W: Write>(json: bool, out: &mut W) -> FfoptsResult<()> {
    if json {
        serde_json::to_writer(&mut *out, &Preset::ALL)?;
        writeln!(out)?;
    } else {
        for preset in Preset::ALL {
            writeln!(out, "{}", preset)?;
        }
    }
    Ok(())
}

/// `ffmpeg` followed by each token quoted for a POSIX shell
fn shell_command(tokens: &TranscodeArgs) -> String {
    let mut command = String::from("ffmpeg");
    for token in tokens.iter_str() {
        command.push(' ');
        command.push_str(&shell_escape::unix::escape(Cow::Borrowed(token)));
    }
    command
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_args(input: &str) -> TranscodeArgs {
        build_transcode_args(input, 28, Some("ultrafast"), 128, "output.mp4").unwrap()
    }

    fn render(tokens: &TranscodeArgs, format: OutputFormat) -> String {
        let mut buf = Vec::new();
        write_args(tokens, format, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_write_args_lines() {
        let text = render(&sample_args("input.webm"), OutputFormat::Lines);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 13);
        assert_eq!(lines[0], "-i");
        assert_eq!(lines[11], "128k");
        assert_eq!(lines[12], "output.mp4");
    }

    #[test]
    fn test_write_args_json() {
        let text = render(&sample_args("input.webm"), OutputFormat::Json);
        let parsed: Vec<String> = serde_json::from_str(text.trim()).unwrap();
        assert_eq!(parsed, sample_args("input.webm").as_slice());
    }

    #[test]
    fn test_write_args_shell_quotes_spaces() {
        let text = render(&sample_args("my clip.webm"), OutputFormat::Shell);
        assert!(text.starts_with("ffmpeg -i 'my clip.webm' "));
        assert!(text.contains(" libx264 "));
        assert!(text.trim_end().ends_with(" 128k output.mp4"));
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn test_write_presets_plain() {
        let mut buf = Vec::new();
        write_presets(false, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().count(), 9);
        assert_eq!(text.lines().next(), Some("ultrafast"));
        assert_eq!(text.lines().last(), Some("veryslow"));
    }

    #[test]
    fn test_write_presets_json() {
        let mut buf = Vec::new();
        write_presets(true, &mut buf).unwrap();
        let parsed: Vec<String> = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed.len(), 9);
        assert_eq!(parsed[5], "medium");
    }
}
