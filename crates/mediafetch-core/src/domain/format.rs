//! Requested output format.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Output format for a download.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DownloadFormat {
    /// Best audio stream, transcoded to MP3.
    Audio,
    /// Best video + audio, muxed into MP4.
    Video,
}

impl DownloadFormat {
    /// Convert to string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Audio => "audio",
            Self::Video => "video",
        }
    }

    /// Whether the mux tool location must be passed to the fetch tool.
    #[must_use]
    pub const fn requires_mux_tool(&self) -> bool {
        matches!(self, Self::Video)
    }
}

impl fmt::Display for DownloadFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DownloadFormat {
    type Err = String;

    /// Accepts the format name or its container (`mp3`/`mp4`), case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "audio" | "mp3" => Ok(Self::Audio),
            "video" | "mp4" => Ok(Self::Video),
            other => Err(format!(
                "unknown format '{other}' (expected audio, mp3, video or mp4)"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_containers() {
        assert_eq!("audio".parse::<DownloadFormat>(), Ok(DownloadFormat::Audio));
        assert_eq!("MP3".parse::<DownloadFormat>(), Ok(DownloadFormat::Audio));
        assert_eq!(" Video ".parse::<DownloadFormat>(), Ok(DownloadFormat::Video));
        assert_eq!("mp4".parse::<DownloadFormat>(), Ok(DownloadFormat::Video));
    }

    #[test]
    fn rejects_unknown_format() {
        let err = "flac".parse::<DownloadFormat>().unwrap_err();
        assert!(err.contains("flac"));
    }

    #[test]
    fn only_video_requires_mux_tool() {
        assert!(DownloadFormat::Video.requires_mux_tool());
        assert!(!DownloadFormat::Audio.requires_mux_tool());
    }

    #[test]
    fn serializes_snake_case() {
        let json = serde_json::to_string(&DownloadFormat::Audio).unwrap();
        assert_eq!(json, "\"audio\"");
    }
}
