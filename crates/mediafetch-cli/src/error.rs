//! CLI-specific error types and exit codes.

use mediafetch_core::{DownloadFailure, PathError};
use mediafetch_gui::GuiError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    /// The download itself failed.
    #[error("{0}")]
    Download(String),

    #[error("Invalid arguments: {0}")]
    Arguments(String),

    #[error("IO error: {0}")]
    Io(String),

    /// A tool is missing or paths cannot be resolved.
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Busy(String),

    #[error("Download cancelled")]
    Cancelled,
}

impl CliError {
    /// Map error to an exit code.
    ///
    /// - 1: download failed
    /// - 2: invalid arguments
    /// - 64-78: sysexits.h categories
    /// - 130: interrupted
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Download(_) => 1,
            Self::Arguments(_) => 2, // EX_USAGE
            Self::Io(_) => 74,       // EX_IOERR
            Self::Config(_) => 78,   // EX_CONFIG
            Self::Busy(_) => 75,     // EX_TEMPFAIL
            Self::Cancelled => 130,
        }
    }
}

impl From<DownloadFailure> for CliError {
    fn from(err: DownloadFailure) -> Self {
        match err {
            DownloadFailure::InvalidRequest { message } => Self::Arguments(message),
            DownloadFailure::ToolMissing { .. } => Self::Config(err.to_string()),
            DownloadFailure::Busy => Self::Busy(err.to_string()),
            DownloadFailure::Launch { .. } | DownloadFailure::Execution { .. } => {
                Self::Download(err.to_string())
            }
        }
    }
}

impl From<GuiError> for CliError {
    fn from(err: GuiError) -> Self {
        match err {
            GuiError::ValidationFailed(msg) => Self::Arguments(msg),
            GuiError::NotFound { .. } => Self::Config(err.to_string()),
            GuiError::Conflict(msg) => Self::Busy(msg),
            GuiError::Internal(msg) => Self::Download(msg),
        }
    }
}

impl From<PathError> for CliError {
    fn from(err: PathError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mediafetch_core::ToolKind;

    #[test]
    fn execution_failure_keeps_tool_message() {
        let err = CliError::from(DownloadFailure::execution("ERROR: Video unavailable", Some(1)));
        assert_eq!(err.to_string(), "ERROR: Video unavailable");
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn missing_tool_is_config_error() {
        let err = CliError::from(DownloadFailure::tool_missing(
            ToolKind::Fetch,
            "/opt/bin/yt-dlp",
            "not found",
        ));
        assert_eq!(err.exit_code(), 78);
    }

    #[test]
    fn validation_is_usage_error() {
        let err = CliError::from(GuiError::ValidationFailed("source URL is empty".to_string()));
        assert_eq!(err.exit_code(), 2);
        assert_eq!(CliError::Cancelled.exit_code(), 130);
    }
}
