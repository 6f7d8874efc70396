//! Argument construction for the fetch tool.
//!
//! Pure functions: same inputs always yield the same argument vector.

use std::ffi::OsString;
use std::path::Path;

use mediafetch_core::DownloadFormat;
use thiserror::Error;

/// Output file template appended to the destination directory.
pub const OUTPUT_TEMPLATE: &str = "%(title)s.%(ext)s";

/// Format selector for video: prefer an MP4 video stream with M4A audio,
/// then any single MP4, then anything.
pub const VIDEO_FORMAT_SELECTOR: &str =
    "bestvideo[ext=mp4]+bestaudio[ext=m4a]/best[ext=mp4]/bestvideo+bestaudio/best";

/// Fixed MP3 bitrate for audio extraction.
pub const AUDIO_QUALITY: &str = "192K";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ArgsError {
    #[error("Output directory is empty")]
    EmptyOutputDirectory,

    #[error("Video downloads require the ffmpeg location")]
    MissingMuxLocation,
}

/// Build the fetch tool's argument vector.
///
/// The source URL is always the final token. `mux_location` is required for
/// [`DownloadFormat::Video`] and forwarded for audio when present.
pub fn build_args(
    format: DownloadFormat,
    output_dir: &Path,
    source_url: &str,
    mux_location: Option<&Path>,
) -> Result<Vec<OsString>, ArgsError> {
    if output_dir.as_os_str().is_empty() {
        return Err(ArgsError::EmptyOutputDirectory);
    }

    // One progress report per line instead of carriage-return redraws.
    let mut args: Vec<OsString> = vec!["--newline".into()];

    match format {
        DownloadFormat::Audio => {
            args.extend(
                ["--extract-audio", "--audio-format", "mp3", "--audio-quality", AUDIO_QUALITY]
                    .map(OsString::from),
            );
            if let Some(mux) = mux_location {
                args.push("--ffmpeg-location".into());
                args.push(mux.into());
            }
        }
        DownloadFormat::Video => {
            let mux = mux_location.ok_or(ArgsError::MissingMuxLocation)?;
            args.extend(
                [
                    "-f",
                    VIDEO_FORMAT_SELECTOR,
                    "--merge-output-format",
                    "mp4",
                    "--remux-video",
                    "mp4",
                    "--ffmpeg-location",
                ]
                .map(OsString::from),
            );
            args.push(mux.into());
        }
    }

    args.push("-o".into());
    args.push(output_dir.join(OUTPUT_TEMPLATE).into_os_string());
    args.push(source_url.into());

    Ok(args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tokio_test::{assert_err, assert_ok};

    fn strings(args: &[OsString]) -> Vec<String> {
        args.iter().map(|a| a.to_string_lossy().into_owned()).collect()
    }

    #[test]
    fn audio_args_without_mux() {
        let args = assert_ok!(build_args(
            DownloadFormat::Audio,
            Path::new("/tmp/out"),
            "https://youtu.be/abc",
            None,
        ));
        let args = strings(&args);

        assert_eq!(args[0], "--newline");
        assert!(args.contains(&"--extract-audio".to_string()));
        let fmt = args.iter().position(|a| a == "--audio-format").unwrap();
        assert_eq!(args[fmt + 1], "mp3");
        assert!(!args.contains(&"--ffmpeg-location".to_string()));
        assert_eq!(args.last().unwrap(), "https://youtu.be/abc");
    }

    #[test]
    fn audio_forwards_mux_when_present() {
        let args = strings(&assert_ok!(build_args(
            DownloadFormat::Audio,
            Path::new("/tmp/out"),
            "https://youtu.be/abc",
            Some(Path::new("/opt/bin/ffmpeg")),
        )));

        let loc = args.iter().position(|a| a == "--ffmpeg-location").unwrap();
        assert_eq!(args[loc + 1], "/opt/bin/ffmpeg");
    }

    #[test]
    fn video_args_match_expected_sequence() {
        let args = strings(&assert_ok!(build_args(
            DownloadFormat::Video,
            Path::new("/tmp/out"),
            "https://youtu.be/abc",
            Some(Path::new("/opt/bin/ffmpeg")),
        )));

        let expected: Vec<String> = [
            "--newline",
            "-f",
            VIDEO_FORMAT_SELECTOR,
            "--merge-output-format",
            "mp4",
            "--remux-video",
            "mp4",
            "--ffmpeg-location",
            "/opt/bin/ffmpeg",
            "-o",
            "/tmp/out/%(title)s.%(ext)s",
            "https://youtu.be/abc",
        ]
        .iter()
        .map(ToString::to_string)
        .collect();

        #[cfg(unix)]
        assert_eq!(args, expected);
        #[cfg(not(unix))]
        assert_eq!(args.len(), expected.len());
    }

    #[test]
    fn video_requires_mux_location() {
        let err = assert_err!(build_args(
            DownloadFormat::Video,
            Path::new("/tmp/out"),
            "https://youtu.be/abc",
            None,
        ));
        assert_eq!(err, ArgsError::MissingMuxLocation);
    }

    #[test]
    fn empty_output_dir_is_rejected() {
        let err = assert_err!(build_args(
            DownloadFormat::Audio,
            &PathBuf::new(),
            "https://youtu.be/abc",
            None,
        ));
        assert_eq!(err, ArgsError::EmptyOutputDirectory);
    }

    #[test]
    fn url_is_a_single_final_token() {
        let url = "https://www.youtube.com/watch?v=abc&list=xyz";
        let args = assert_ok!(build_args(DownloadFormat::Audio, Path::new("/tmp/my out"), url, None));

        assert_eq!(args.last().unwrap(), url);
        let template = &args[args.len() - 2];
        assert!(template.to_string_lossy().starts_with("/tmp/my out"));
    }
}
