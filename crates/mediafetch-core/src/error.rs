//! Failure taxonomy for download requests.
//!
//! Designed to be serializable across the UI boundary, so OS errors are
//! captured as strings rather than carried as `std::io::Error`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::paths::ToolKind;

/// Message used when the fetch tool fails without writing to stderr.
pub(crate) fn fallback_execution_message(exit_code: Option<i32>) -> String {
    match exit_code {
        Some(code) => {
            format!("Download failed without diagnostic output (exit code {code}).")
        }
        None => "Download failed without diagnostic output (terminated by signal).".to_string(),
    }
}

/// Why a download request failed.
///
/// Every variant terminates the current request; none are retried.
#[derive(Clone, Debug, Error, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum DownloadFailure {
    /// The request itself is malformed (empty URL, relative directory, ...).
    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    /// A required external tool is missing or unusable. No process was spawned.
    #[error("{tool} not found at {}: {reason}. Place the {tool} executable there and try again.", path.display())]
    ToolMissing {
        tool: ToolKind,
        path: PathBuf,
        reason: String,
    },

    /// The process could not be created (bad path, permission denied, ...).
    #[error("Failed to run {tool}: {message}")]
    Launch { tool: ToolKind, message: String },

    /// The tool ran and exited unsuccessfully.
    ///
    /// `message` is the tool's stderr text verbatim so the user sees the real
    /// diagnostic (geo restriction, invalid URL, network failure).
    #[error("{message}")]
    Execution {
        message: String,
        exit_code: Option<i32>,
    },

    /// Another download is already running on this supervisor.
    #[error("A download is already in progress")]
    Busy,
}

impl DownloadFailure {
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }

    pub fn tool_missing(tool: ToolKind, path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::ToolMissing {
            tool,
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Wrap an OS error raised while creating the process.
    #[must_use]
    pub fn launch(tool: ToolKind, err: &std::io::Error) -> Self {
        Self::Launch {
            tool,
            message: err.to_string(),
        }
    }

    /// Build an execution failure from accumulated stderr text.
    ///
    /// Blank stderr falls back to a generic message naming the exit code.
    pub fn execution(stderr: impl Into<String>, exit_code: Option<i32>) -> Self {
        let stderr = stderr.into();
        let message = if stderr.trim().is_empty() {
            fallback_execution_message(exit_code)
        } else {
            stderr
        };
        Self::Execution { message, exit_code }
    }

    /// Whether the user can fix this by installing or placing a tool.
    #[must_use]
    pub const fn is_configuration_error(&self) -> bool {
        matches!(self, Self::ToolMissing { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn execution_keeps_stderr_verbatim() {
        let err = DownloadFailure::execution("ERROR: [youtube] abc: Video unavailable\n", Some(1));
        assert_eq!(err.to_string(), "ERROR: [youtube] abc: Video unavailable\n");
    }

    #[test]
    fn execution_falls_back_when_stderr_blank() {
        let err = DownloadFailure::execution("  \n", Some(2));
        assert_eq!(
            err.to_string(),
            "Download failed without diagnostic output (exit code 2)."
        );

        let err = DownloadFailure::execution("", None);
        assert!(err.to_string().contains("signal"));
    }

    #[test]
    fn launch_wraps_os_error_text() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "permission denied");
        let err = DownloadFailure::launch(ToolKind::Fetch, &io);
        assert_eq!(err.to_string(), "Failed to run yt-dlp: permission denied");
    }

    #[test]
    fn tool_missing_is_configuration_error() {
        let err = DownloadFailure::tool_missing(ToolKind::Mux, "/opt/bin/ffmpeg", "not found");
        assert!(err.is_configuration_error());
        assert!(err.to_string().contains("ffmpeg not found at /opt/bin/ffmpeg"));
    }

    #[test]
    fn serializes_with_kind_tag() {
        let json = serde_json::to_value(DownloadFailure::execution("boom", Some(1))).unwrap();
        assert_eq!(json["kind"], "execution");
        assert_eq!(json["exitCode"], 1);

        let json = serde_json::to_value(DownloadFailure::Busy).unwrap();
        assert_eq!(json["kind"], "busy");
    }
}
