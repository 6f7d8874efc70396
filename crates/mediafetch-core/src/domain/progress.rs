//! Progress events and supervisor phases.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One parsed progress report from the fetch tool.
///
/// Strictly a side channel: the final outcome never depends on whether any
/// progress events were seen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressEvent {
    /// Completion percentage in `[0, 100]`.
    pub percentage: f64,
    /// The trimmed output line the percentage was read from.
    pub raw_message: String,
}

impl ProgressEvent {
    pub fn new(percentage: f64, raw_message: impl Into<String>) -> Self {
        Self {
            percentage,
            raw_message: raw_message.into(),
        }
    }
}

/// Lifecycle phase of the supervisor for the request in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DownloadPhase {
    /// No request in flight.
    #[default]
    Idle,
    /// Resolving and checking tool locations.
    Validating,
    /// The child process has been created.
    Spawned,
    /// Output is being streamed.
    Running,
    Succeeded,
    Failed,
    Cancelled,
}

impl DownloadPhase {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Validating => "validating",
            Self::Spawned => "spawned",
            Self::Running => "running",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Whether a request is currently being processed.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::Validating | Self::Spawned | Self::Running)
    }
}

impl fmt::Display for DownloadPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
