//! Directory creation and verification.

use std::fs;
use std::path::Path;

use super::error::PathError;

/// Strategy for how to handle missing directories when ensuring they exist.
///
/// Intentionally non-interactive: adapters that want to ask the user first
/// do so themselves and then pass `AutoCreate` or `Disallow`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DirectoryCreationStrategy {
    /// Create directories (and parents) if missing.
    #[default]
    AutoCreate,
    /// Return an error if missing.
    Disallow,
}

/// Ensure `path` exists and is a directory.
pub fn ensure_directory(path: &Path, strategy: DirectoryCreationStrategy) -> Result<(), PathError> {
    if path.exists() {
        if !path.is_dir() {
            return Err(PathError::NotADirectory(path.to_path_buf()));
        }
        return Ok(());
    }

    match strategy {
        DirectoryCreationStrategy::AutoCreate => {
            fs::create_dir_all(path).map_err(|e| PathError::CreateFailed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
            tracing::debug!(path = %path.display(), "Created directory");
            Ok(())
        }
        DirectoryCreationStrategy::Disallow => Err(PathError::DirectoryNotFound(path.to_path_buf())),
    }
}
