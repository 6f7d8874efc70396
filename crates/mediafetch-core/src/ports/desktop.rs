//! Desktop integration ports: folder prompt and file-browser reveal.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;

/// Asks the user to choose a directory.
#[async_trait]
pub trait DirectoryPicker: Send + Sync {
    /// Show a folder prompt with `title`.
    ///
    /// Returns `None` when the user dismisses the prompt.
    async fn pick_directory(&self, title: &str) -> Option<PathBuf>;
}

/// Errors raised while opening the platform file browser.
#[derive(Debug, Error)]
pub enum RevealError {
    #[error("Path does not exist: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to launch file browser: {0}")]
    Launch(#[from] std::io::Error),

    #[error("File browser exited with status {0}")]
    Failed(i32),
}

/// Opens a path in the platform file browser.
pub trait FileRevealer: Send + Sync {
    fn reveal(&self, path: &Path) -> Result<(), RevealError>;
}
