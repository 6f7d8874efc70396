//! Terminal implementations of the desktop ports.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use async_trait::async_trait;
use mediafetch_core::{DirectoryPicker, FileRevealer, RevealError};
use tracing::debug;

/// Program that opens a path in the platform file browser.
const fn opener() -> &'static str {
    if cfg!(target_os = "macos") {
        "open"
    } else if cfg!(target_os = "windows") {
        "explorer"
    } else {
        "xdg-open"
    }
}

/// Opens paths with `open`, `explorer` or `xdg-open`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemFileRevealer;

impl FileRevealer for SystemFileRevealer {
    fn reveal(&self, path: &Path) -> Result<(), RevealError> {
        if !path.exists() {
            return Err(RevealError::NotFound(path.to_path_buf()));
        }

        debug!(program = opener(), path = %path.display(), "Revealing path");
        let status = Command::new(opener())
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()?;

        // explorer.exe reports 1 even when it opened the window
        if status.success() || cfg!(target_os = "windows") {
            Ok(())
        } else {
            Err(RevealError::Failed(status.code().unwrap_or(-1)))
        }
    }
}

/// Reads a folder path from stdin. An empty line dismisses the prompt.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinDirectoryPicker;

#[async_trait]
impl DirectoryPicker for StdinDirectoryPicker {
    async fn pick_directory(&self, title: &str) -> Option<PathBuf> {
        let title = title.to_string();
        tokio::task::spawn_blocking(move || read_directory(&title, &mut io::stdin().lock()))
            .await
            .ok()
            .flatten()
    }
}

fn read_directory(title: &str, input: &mut impl BufRead) -> Option<PathBuf> {
    print!("{title}: ");
    let _ = io::stdout().flush();

    let mut line = String::new();
    input.read_line(&mut line).ok()?;
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    let path = PathBuf::from(trimmed);
    std::path::absolute(&path).ok().or(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn empty_answer_dismisses_prompt() {
        let mut input = io::Cursor::new(b"\n".to_vec());
        assert!(read_directory("Select download folder", &mut input).is_none());
    }

    #[test]
    fn answer_is_made_absolute() {
        let mut input = io::Cursor::new(b"  music  \n".to_vec());
        let dir = read_directory("Select download folder", &mut input).unwrap();
        assert!(dir.is_absolute());
        assert!(dir.ends_with("music"));
    }

    #[test]
    fn revealing_missing_path_fails_without_spawning() {
        let dir = tempdir().unwrap();
        let err = SystemFileRevealer
            .reveal(&dir.path().join("missing"))
            .unwrap_err();
        assert!(matches!(err, RevealError::NotFound(_)));
    }
}
