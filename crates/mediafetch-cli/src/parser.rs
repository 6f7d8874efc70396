//! Root CLI structure with global options.

use clap::Parser;

use crate::commands::Commands;

/// Download audio or video from a media URL using yt-dlp and ffmpeg.
#[derive(Parser)]
#[command(name = "mediafetch")]
#[command(about = "Download audio (MP3) or video (MP4) from a media URL")]
#[command(version)]
pub struct Cli {
    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Fall back to yt-dlp/ffmpeg on PATH when the bundled binaries are missing
    #[arg(long = "system-tools", global = true, env = "MEDIAFETCH_SEARCH_PATH")]
    pub system_tools: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use mediafetch_core::DownloadFormat;
    use std::path::PathBuf;

    #[test]
    fn cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn download_defaults_to_video() {
        let cli = Cli::parse_from(["mediafetch", "download", "https://youtu.be/abc"]);
        let Some(Commands::Download {
            url,
            format,
            output,
            choose,
        }) = cli.command
        else {
            panic!("expected download command");
        };

        assert_eq!(url, "https://youtu.be/abc");
        assert_eq!(format, DownloadFormat::Video);
        assert!(output.is_none());
        assert!(!choose);
    }

    #[test]
    fn download_accepts_format_and_output() {
        let cli = Cli::parse_from([
            "mediafetch",
            "-v",
            "download",
            "https://youtu.be/abc",
            "-f",
            "mp3",
            "-o",
            "/tmp/music",
        ]);
        assert!(cli.verbose);

        let Some(Commands::Download { format, output, .. }) = cli.command else {
            panic!("expected download command");
        };
        assert_eq!(format, DownloadFormat::Audio);
        assert_eq!(output, Some(PathBuf::from("/tmp/music")));
    }

    #[test]
    fn output_and_choose_conflict() {
        let result = Cli::try_parse_from([
            "mediafetch",
            "download",
            "https://youtu.be/abc",
            "-o",
            "/tmp",
            "--choose",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["mediafetch", "check", "--system-tools"]);
        assert!(cli.system_tools);
        assert!(matches!(cli.command, Some(Commands::Check)));
    }
}
