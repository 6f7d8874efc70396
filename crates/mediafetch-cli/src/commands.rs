//! Available subcommands.

use std::path::PathBuf;

use clap::Subcommand;
use mediafetch_core::DownloadFormat;

#[derive(Subcommand)]
pub enum Commands {
    /// Download a URL as audio (MP3) or video (MP4)
    Download {
        /// Media page URL
        url: String,
        /// Output format: audio (mp3) or video (mp4)
        #[arg(short, long, default_value = "video")]
        format: DownloadFormat,
        /// Destination folder (defaults to ~/Desktop/YouTube Videos)
        #[arg(short, long, conflicts_with = "choose")]
        output: Option<PathBuf>,
        /// Prompt for the destination folder
        #[arg(long)]
        choose: bool,
    },

    /// Check that yt-dlp and ffmpeg are installed where expected
    Check,

    /// Show resolved tool and folder paths
    Paths,

    /// Open a file or folder in the system file browser
    Open {
        /// Path to reveal
        path: PathBuf,
    },
}
