//! Semantic error types for GUI operations.
//!
//! Shells map `GuiError` to whatever their transport needs.

use std::fmt;

use mediafetch_core::{DownloadFailure, PathError};

/// Semantic errors for GUI backend operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuiError {
    /// Something the operation needs does not exist.
    NotFound {
        /// Type of entity (e.g. "tool", "directory").
        entity: &'static str,
        /// Identifier that was not found.
        id: String,
    },

    /// Request validation failed.
    ValidationFailed(String),

    /// Operation conflicts with current state (a download is running).
    Conflict(String),

    /// Unexpected internal error.
    Internal(String),
}

impl fmt::Display for GuiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { entity, id } => write!(f, "{entity} not found: {id}"),
            Self::ValidationFailed(msg) => write!(f, "validation failed: {msg}"),
            Self::Conflict(msg) => write!(f, "conflict: {msg}"),
            Self::Internal(msg) => write!(f, "internal error: {msg}"),
        }
    }
}

impl std::error::Error for GuiError {}

impl From<DownloadFailure> for GuiError {
    fn from(err: DownloadFailure) -> Self {
        match err {
            DownloadFailure::InvalidRequest { message } => Self::ValidationFailed(message),
            DownloadFailure::ToolMissing { path, .. } => Self::NotFound {
                entity: "tool",
                id: path.display().to_string(),
            },
            DownloadFailure::Busy => Self::Conflict(err.to_string()),
            DownloadFailure::Launch { .. } | DownloadFailure::Execution { .. } => {
                Self::Internal(err.to_string())
            }
        }
    }
}

impl From<PathError> for GuiError {
    fn from(err: PathError) -> Self {
        match err {
            PathError::DirectoryNotFound(path) => Self::NotFound {
                entity: "directory",
                id: path.display().to_string(),
            },
            PathError::NotADirectory(_) => Self::ValidationFailed(err.to_string()),
            other => Self::Internal(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mediafetch_core::ToolKind;

    #[test]
    fn invalid_request_maps_to_validation() {
        let err = GuiError::from(DownloadFailure::invalid_request("source URL is empty"));
        assert_eq!(err, GuiError::ValidationFailed("source URL is empty".to_string()));
    }

    #[test]
    fn busy_maps_to_conflict() {
        assert!(matches!(GuiError::from(DownloadFailure::Busy), GuiError::Conflict(_)));
    }

    #[test]
    fn missing_tool_maps_to_not_found() {
        let err = GuiError::from(DownloadFailure::tool_missing(
            ToolKind::Fetch,
            "/app/resources/bin/yt-dlp",
            "not found",
        ));
        assert_eq!(err.to_string(), "tool not found: /app/resources/bin/yt-dlp");
    }
}
