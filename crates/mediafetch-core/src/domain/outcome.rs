//! Terminal result of a download request.

use serde::{Deserialize, Serialize};

use crate::error::DownloadFailure;

/// Confirmation message carried by every successful outcome.
pub const SUCCESS_MESSAGE: &str = "Download completed successfully.";

/// The single terminal result of one download request.
///
/// Exactly one outcome is produced per request. Progress events emitted
/// before a failure are not retracted.
///
/// # Wire Format
///
/// ```json
/// { "status": "success", "message": "Download completed successfully." }
/// { "status": "failure", "error": { "kind": "execution", "message": "...", "exitCode": 1 } }
/// { "status": "cancelled" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DownloadOutcome {
    /// The external tool exited with status zero.
    Success { message: String },
    /// The request failed at validation, launch or execution.
    Failure { error: DownloadFailure },
    /// The download was cancelled and the child process terminated.
    Cancelled,
}

impl DownloadOutcome {
    /// Successful outcome with the fixed confirmation message.
    #[must_use]
    pub fn success() -> Self {
        Self::Success {
            message: SUCCESS_MESSAGE.to_string(),
        }
    }

    #[must_use]
    pub const fn failure(error: DownloadFailure) -> Self {
        Self::Failure { error }
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// The failure, if this outcome is one.
    #[must_use]
    pub const fn error(&self) -> Option<&DownloadFailure> {
        match self {
            Self::Failure { error } => Some(error),
            _ => None,
        }
    }

    /// Human-readable message for the user.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Success { message } => message.clone(),
            Self::Failure { error } => error.to_string(),
            Self::Cancelled => "Download cancelled.".to_string(),
        }
    }
}

impl From<DownloadFailure> for DownloadOutcome {
    fn from(error: DownloadFailure) -> Self {
        Self::failure(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_carries_fixed_message() {
        let outcome = DownloadOutcome::success();
        assert!(outcome.is_success());
        assert_eq!(outcome.message(), SUCCESS_MESSAGE);
        assert!(outcome.error().is_none());
    }

    #[test]
    fn failure_message_is_error_display() {
        let outcome = DownloadOutcome::from(DownloadFailure::execution("ERROR: geo restricted", Some(1)));
        assert!(!outcome.is_success());
        assert_eq!(outcome.message(), "ERROR: geo restricted");
    }

    #[test]
    fn wire_format_is_status_tagged() {
        let json = serde_json::to_value(DownloadOutcome::Cancelled).unwrap();
        assert_eq!(json["status"], "cancelled");

        let json = serde_json::to_value(DownloadOutcome::success()).unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["message"], SUCCESS_MESSAGE);
    }
}
