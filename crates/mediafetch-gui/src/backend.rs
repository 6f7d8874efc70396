//! `GuiBackend` - the facade shells delegate to.

use std::path::{Path, PathBuf};

use mediafetch_download::DownloadOutcome;

use crate::deps::GuiDeps;
use crate::desktop::DesktopOps;
use crate::downloads::DownloadOps;
use crate::error::GuiError;
use crate::types::RunDownloadRequest;

/// Unified GUI backend facade.
///
/// # Construction
///
/// ```ignore
/// let deps = GuiDeps::new(supervisor, picker, revealer, emitter);
/// let backend = GuiBackend::new(deps);
/// ```
pub struct GuiBackend {
    deps: GuiDeps,
}

impl GuiBackend {
    pub const fn new(deps: GuiDeps) -> Self {
        Self { deps }
    }

    fn download_ops(&self) -> DownloadOps<'_> {
        DownloadOps::new(&self.deps)
    }

    fn desktop_ops(&self) -> DesktopOps<'_> {
        DesktopOps::new(&self.deps)
    }

    /// Whether the fetch tool is installed where it is expected.
    pub fn check_tool_available(&self) -> bool {
        self.download_ops().check_tool_available()
    }

    pub fn resolve_default_output_directory(&self) -> Result<PathBuf, GuiError> {
        self.desktop_ops().resolve_default_output_directory()
    }

    pub async fn prompt_output_directory(&self) -> Option<PathBuf> {
        self.desktop_ops().prompt_output_directory().await
    }

    /// Run a download to completion, relaying its events through the emitter.
    pub async fn run_download(&self, req: RunDownloadRequest) -> Result<DownloadOutcome, GuiError> {
        self.download_ops().run(req).await
    }

    pub fn cancel_download(&self) -> bool {
        self.download_ops().cancel()
    }

    pub fn reveal_in_file_browser(&self, path: &Path) {
        self.desktop_ops().reveal(path);
    }
}
