//! Default download folder.

use std::path::{Path, PathBuf};

use super::ensure::{DirectoryCreationStrategy, ensure_directory};
use super::error::PathError;

/// Name of the folder created on the desktop for downloads.
pub const DEFAULT_OUTPUT_DIR_NAME: &str = "YouTube Videos";

/// Resolve the default download folder, creating it if absent.
///
/// Uses the platform desktop directory, falling back to `<home>/Desktop`.
pub fn default_output_dir() -> Result<PathBuf, PathError> {
    let desktop = match dirs::desktop_dir() {
        Some(dir) => dir,
        None => dirs::home_dir().ok_or(PathError::NoHomeDir)?.join("Desktop"),
    };
    default_output_dir_in(&desktop)
}

/// Default download folder under an explicit base directory, created if absent.
pub fn default_output_dir_in(base: &Path) -> Result<PathBuf, PathError> {
    let dir = base.join(DEFAULT_OUTPUT_DIR_NAME);
    ensure_directory(&dir, DirectoryCreationStrategy::AutoCreate)?;
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn creates_folder_under_base() {
        let base = tempdir().unwrap();
        let dir = default_output_dir_in(base.path()).unwrap();

        assert_eq!(dir, base.path().join(DEFAULT_OUTPUT_DIR_NAME));
        assert!(dir.is_dir());
    }

    #[test]
    fn existing_folder_is_reused() {
        let base = tempdir().unwrap();
        let first = default_output_dir_in(base.path()).unwrap();
        std::fs::write(first.join("song.mp3"), b"x").unwrap();

        let second = default_output_dir_in(base.path()).unwrap();
        assert_eq!(first, second);
        assert!(second.join("song.mp3").exists());
    }
}
