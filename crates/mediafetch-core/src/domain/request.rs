//! Download request and identifier.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

use super::DownloadFormat;
use crate::error::DownloadFailure;

/// Opaque identifier for one `run_download` call.
///
/// Push events carry this id so a listener can ignore events that belong
/// to a request other than the one it is waiting on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DownloadId(Uuid);

impl DownloadId {
    /// Generate a fresh random id.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for DownloadId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DownloadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for DownloadId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// A validated request to download one media URL.
///
/// Fields are private: the only way to obtain a request is
/// [`DownloadRequest::new`], which guarantees a URL-shaped source and an
/// absolute output directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadRequest {
    source_url: String,
    format: DownloadFormat,
    output_directory: PathBuf,
}

impl DownloadRequest {
    /// Validate and build a request.
    ///
    /// The URL is trimmed and must parse as an absolute `http`/`https` URL
    /// with a host. The output directory must be non-empty and absolute.
    pub fn new(
        source_url: impl AsRef<str>,
        format: DownloadFormat,
        output_directory: impl Into<PathBuf>,
    ) -> Result<Self, DownloadFailure> {
        let source_url = source_url.as_ref().trim();
        if source_url.is_empty() {
            return Err(DownloadFailure::invalid_request("source URL is empty"));
        }

        let parsed = Url::parse(source_url).map_err(|e| {
            DownloadFailure::invalid_request(format!("'{source_url}' is not a valid URL: {e}"))
        })?;
        if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
            return Err(DownloadFailure::invalid_request(format!(
                "'{source_url}' is not an http(s) URL"
            )));
        }

        let output_directory = output_directory.into();
        if output_directory.as_os_str().is_empty() {
            return Err(DownloadFailure::invalid_request("output directory is empty"));
        }
        if !output_directory.is_absolute() {
            return Err(DownloadFailure::invalid_request(format!(
                "output directory must be absolute: {}",
                output_directory.display()
            )));
        }

        Ok(Self {
            source_url: source_url.to_string(),
            format,
            output_directory,
        })
    }

    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    pub const fn format(&self) -> DownloadFormat {
        self.format
    }

    pub fn output_directory(&self) -> &Path {
        &self.output_directory
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abs_dir() -> PathBuf {
        std::env::temp_dir()
    }

    #[test]
    fn accepts_well_formed_request() {
        let req =
            DownloadRequest::new(" https://youtu.be/abc ", DownloadFormat::Video, abs_dir())
                .unwrap();
        assert_eq!(req.source_url(), "https://youtu.be/abc");
        assert_eq!(req.format(), DownloadFormat::Video);
        assert_eq!(req.output_directory(), abs_dir().as_path());
    }

    #[test]
    fn rejects_empty_url() {
        let err = DownloadRequest::new("   ", DownloadFormat::Audio, abs_dir()).unwrap_err();
        assert!(matches!(err, DownloadFailure::InvalidRequest { .. }));
    }

    #[test]
    fn rejects_non_url() {
        let err =
            DownloadRequest::new("not a url", DownloadFormat::Audio, abs_dir()).unwrap_err();
        assert!(err.to_string().contains("not a valid URL"));
    }

    #[test]
    fn rejects_non_http_scheme() {
        let err = DownloadRequest::new("ftp://example.com/a.mp4", DownloadFormat::Audio, abs_dir())
            .unwrap_err();
        assert!(err.to_string().contains("http(s)"));
    }

    #[test]
    fn rejects_empty_and_relative_output_directory() {
        let empty = DownloadRequest::new("https://youtu.be/abc", DownloadFormat::Audio, "")
            .unwrap_err();
        assert!(empty.to_string().contains("empty"));

        let relative =
            DownloadRequest::new("https://youtu.be/abc", DownloadFormat::Audio, "downloads")
                .unwrap_err();
        assert!(relative.to_string().contains("absolute"));
    }

    #[test]
    fn download_id_round_trips_through_string() {
        let id = DownloadId::new();
        let parsed: DownloadId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }
}
