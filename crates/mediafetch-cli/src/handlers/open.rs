//! Open command handler.

use std::path::Path;

use mediafetch_gui::GuiBackend;

use crate::error::CliError;

pub fn execute(backend: &GuiBackend, path: &Path) -> Result<(), CliError> {
    if !path.exists() {
        return Err(CliError::Arguments(format!(
            "{} does not exist",
            path.display()
        )));
    }
    backend.reveal_in_file_browser(path);
    Ok(())
}
