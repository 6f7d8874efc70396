//! Output folder and file-browser operations for the GUI backend.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use mediafetch_core::paths::default_output_dir_in;
use mediafetch_core::{DirectoryPicker, FileRevealer, default_output_dir};
use tracing::warn;

use crate::deps::GuiDeps;
use crate::error::GuiError;
use crate::types::OUTPUT_DIRECTORY_PROMPT;

/// Desktop integration handler.
pub struct DesktopOps<'a> {
    picker: &'a Arc<dyn DirectoryPicker>,
    revealer: &'a Arc<dyn FileRevealer>,
    output_base: Option<&'a Path>,
}

impl<'a> DesktopOps<'a> {
    pub fn new(deps: &'a GuiDeps) -> Self {
        Self {
            picker: &deps.picker,
            revealer: &deps.revealer,
            output_base: deps.output_base.as_deref(),
        }
    }

    /// The default download folder, created if absent.
    pub fn resolve_default_output_directory(&self) -> Result<PathBuf, GuiError> {
        let dir = match self.output_base {
            Some(base) => default_output_dir_in(base)?,
            None => default_output_dir()?,
        };
        Ok(dir)
    }

    /// Ask the user for a folder. `None` when the prompt is dismissed.
    pub async fn prompt_output_directory(&self) -> Option<PathBuf> {
        self.picker.pick_directory(OUTPUT_DIRECTORY_PROMPT).await
    }

    /// Open `path` in the file browser. Failures are logged only.
    pub fn reveal(&self, path: &Path) {
        if let Err(e) = self.revealer.reveal(path) {
            warn!(path = %path.display(), error = %e, "Failed to open file browser");
        }
    }
}
