//! Wire DTOs for shell communication.

use mediafetch_core::DownloadFormat;
use serde::{Deserialize, Serialize};

/// Title of the folder prompt.
pub const OUTPUT_DIRECTORY_PROMPT: &str = "Select download folder";

/// Request to start a download, as sent by a shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunDownloadRequest {
    pub url: String,
    pub format: DownloadFormat,
    pub output_path: String,
}
