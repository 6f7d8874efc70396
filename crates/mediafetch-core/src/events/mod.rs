//! Canonical push events for the transport bridge.
//!
//! A download produces exactly one `DownloadStarted`, any number of
//! `DownloadProgress` and exactly one `DownloadFinished`, all tagged with the
//! same [`DownloadId`].
//!
//! # Wire Format
//!
//! Events are serialized with a `type` tag:
//!
//! ```json
//! { "type": "download_progress", "downloadId": "…", "percentage": 45.2, "message": "[download]  45.2% …" }
//! ```

use serde::{Deserialize, Serialize};

use crate::domain::{DownloadFormat, DownloadId, DownloadOutcome, ProgressEvent};

/// Events relayed from the backend to a UI listener.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum AppEvent {
    /// A download request passed validation and is about to run.
    DownloadStarted {
        download_id: DownloadId,
        format: DownloadFormat,
        source_url: String,
    },

    /// One parsed progress report.
    DownloadProgress {
        download_id: DownloadId,
        percentage: f64,
        message: String,
    },

    /// The single terminal outcome of a download.
    DownloadFinished {
        download_id: DownloadId,
        outcome: DownloadOutcome,
    },
}

impl AppEvent {
    pub fn download_started(
        download_id: DownloadId,
        format: DownloadFormat,
        source_url: impl Into<String>,
    ) -> Self {
        Self::DownloadStarted {
            download_id,
            format,
            source_url: source_url.into(),
        }
    }

    #[must_use]
    pub fn download_progress(download_id: DownloadId, event: &ProgressEvent) -> Self {
        Self::DownloadProgress {
            download_id,
            percentage: event.percentage,
            message: event.raw_message.clone(),
        }
    }

    #[must_use]
    pub const fn download_finished(download_id: DownloadId, outcome: DownloadOutcome) -> Self {
        Self::DownloadFinished {
            download_id,
            outcome,
        }
    }

    /// The request this event belongs to.
    #[must_use]
    pub const fn download_id(&self) -> DownloadId {
        match self {
            Self::DownloadStarted { download_id, .. }
            | Self::DownloadProgress { download_id, .. }
            | Self::DownloadFinished { download_id, .. } => *download_id,
        }
    }

    /// Channel name used by transports that route events by name.
    #[must_use]
    pub const fn event_name(&self) -> &'static str {
        match self {
            Self::DownloadStarted { .. } => "download-started",
            Self::DownloadProgress { .. } => "download-progress",
            Self::DownloadFinished { .. } => "download-finished",
        }
    }
}
