//! Dependency injection for `GuiBackend`.

use std::path::PathBuf;
use std::sync::Arc;

use mediafetch_core::{AppEventEmitter, DirectoryPicker, FileRevealer};
use mediafetch_download::DownloadSupervisor;

/// Dependencies required to construct a `GuiBackend`.
///
/// Fields are private so every dependency is supplied through
/// [`GuiDeps::new`].
pub struct GuiDeps {
    pub(crate) supervisor: Arc<DownloadSupervisor>,
    pub(crate) picker: Arc<dyn DirectoryPicker>,
    pub(crate) revealer: Arc<dyn FileRevealer>,
    pub(crate) emitter: Arc<dyn AppEventEmitter>,
    /// Base for the default output folder instead of the desktop.
    pub(crate) output_base: Option<PathBuf>,
}

impl GuiDeps {
    pub fn new(
        supervisor: Arc<DownloadSupervisor>,
        picker: Arc<dyn DirectoryPicker>,
        revealer: Arc<dyn FileRevealer>,
        emitter: Arc<dyn AppEventEmitter>,
    ) -> Self {
        Self {
            supervisor,
            picker,
            revealer,
            emitter,
            output_base: None,
        }
    }

    /// Resolve the default output folder under `base` rather than the desktop.
    #[must_use]
    pub fn with_output_base(mut self, base: impl Into<PathBuf>) -> Self {
        self.output_base = Some(base.into());
        self
    }
}
