//! Runtime mode detection and the resource root.
//!
//! Development builds find the tools in the source checkout's `bin/`
//! directory; packaged builds find them in a `resources/bin/` directory next
//! to the executable.

use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::PathError;

/// Where the application is running from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuntimeMode {
    /// Running from the source repository.
    Development,
    /// Running as an installed/bundled application.
    Packaged,
}

impl RuntimeMode {
    /// Detect the mode for this process.
    ///
    /// Resolution order:
    /// 1. `MEDIAFETCH_MODE` environment variable (`development` / `packaged`)
    /// 2. Development if the binary was built from, and runs inside, a local repo
    /// 3. Packaged
    pub fn detect() -> Self {
        if let Ok(raw) = env::var("MEDIAFETCH_MODE") {
            match raw.parse() {
                Ok(mode) => return mode,
                Err(e) => tracing::warn!(value = %raw, error = %e, "Ignoring MEDIAFETCH_MODE"),
            }
        }

        if detect_local_repo().is_some() {
            Self::Development
        } else {
            Self::Packaged
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Packaged => "packaged",
        }
    }
}

impl fmt::Display for RuntimeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuntimeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "packaged" | "release" => Ok(Self::Packaged),
            other => Err(format!("unknown runtime mode '{other}'")),
        }
    }
}

/// Repository root recorded by the build script.
fn repo_root() -> PathBuf {
    PathBuf::from(env!("MEDIAFETCH_REPO_ROOT"))
}

/// Detect if we are running from the local repository.
///
/// Debug builds always use the repo they were built from. Release builds
/// only do so when the executable itself lives inside that repo
/// (e.g. `target/release/mediafetch`).
#[allow(clippy::unnecessary_wraps)] // Option is needed for release builds
fn detect_local_repo() -> Option<PathBuf> {
    let repo_root = repo_root();

    #[cfg(debug_assertions)]
    {
        Some(repo_root)
    }

    #[cfg(not(debug_assertions))]
    {
        if !repo_root.join("Cargo.toml").exists() {
            return None;
        }

        let exe = env::current_exe().ok()?.canonicalize().ok()?;
        let repo = repo_root.canonicalize().ok()?;
        exe.starts_with(&repo).then_some(repo_root)
    }
}

/// Root directory holding the bundled `bin/` directory for a mode.
///
/// - Development: the repository root
/// - Packaged: `<directory of the current executable>/resources`
pub fn resource_root(mode: RuntimeMode) -> Result<PathBuf, PathError> {
    match mode {
        RuntimeMode::Development => Ok(repo_root()),
        RuntimeMode::Packaged => {
            let exe =
                env::current_exe().map_err(|e| PathError::NoExecutableDir(e.to_string()))?;
            let dir = exe.parent().ok_or_else(|| {
                PathError::NoExecutableDir(format!("{} has no parent", exe.display()))
            })?;
            Ok(dir.join("resources"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_mode_names() {
        assert_eq!("dev".parse(), Ok(RuntimeMode::Development));
        assert_eq!("Packaged".parse(), Ok(RuntimeMode::Packaged));
        assert!("staging".parse::<RuntimeMode>().is_err());
    }

    #[test]
    fn development_root_is_repo_root() {
        let root = resource_root(RuntimeMode::Development).unwrap();
        assert!(root.join("Cargo.toml").exists());
    }

    #[test]
    fn packaged_root_is_next_to_executable() {
        let root = resource_root(RuntimeMode::Packaged).unwrap();
        assert!(root.ends_with("resources"));
    }

    #[cfg(debug_assertions)]
    #[test]
    fn debug_builds_detect_local_repo() {
        assert!(detect_local_repo().is_some());
    }
}
