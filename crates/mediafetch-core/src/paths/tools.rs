//! External tool locations.
//!
//! Two executables are needed: the fetch tool (`yt-dlp`) for every download
//! and the mux tool (`ffmpeg`) whose location is passed explicitly for video.

use std::env;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::error::PathError;
use super::platform::{RuntimeMode, resource_root};
use crate::error::DownloadFailure;

/// The external executables mediafetch drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolKind {
    /// Locates and retrieves media streams (`yt-dlp`).
    Fetch,
    /// Combines separate audio and video streams (`ffmpeg`).
    Mux,
}

impl ToolKind {
    /// Executable name without platform suffix.
    #[must_use]
    pub const fn program(&self) -> &'static str {
        match self {
            Self::Fetch => "yt-dlp",
            Self::Mux => "ffmpeg",
        }
    }

    /// Executable file name on this platform.
    #[must_use]
    pub fn binary_name(&self) -> String {
        if cfg!(target_os = "windows") {
            format!("{}.exe", self.program())
        } else {
            self.program().to_string()
        }
    }

    /// Environment variable holding an explicit path for this tool.
    #[must_use]
    pub const fn env_override(&self) -> &'static str {
        match self {
            Self::Fetch => "MEDIAFETCH_YTDLP_PATH",
            Self::Mux => "MEDIAFETCH_FFMPEG_PATH",
        }
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.program())
    }
}

/// How a tool location was determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolSource {
    /// Explicit path from configuration.
    Override,
    /// `<resource root>/bin/<binary>` for the runtime mode.
    Bundled,
    /// Found on the system `PATH`.
    SystemPath,
}

/// Resolved filesystem path to an external executable.
///
/// Resolution does not guarantee the file exists; call [`ToolLocation::check`]
/// before attempting a download.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolLocation {
    pub kind: ToolKind,
    pub path: PathBuf,
    pub source: ToolSource,
}

impl ToolLocation {
    pub fn new(kind: ToolKind, path: impl Into<PathBuf>, source: ToolSource) -> Self {
        Self {
            kind,
            path: path.into(),
            source,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Verify the tool exists, is a file and (on Unix) is executable.
    pub fn check(&self) -> Result<(), DownloadFailure> {
        let missing = |reason: &str| DownloadFailure::tool_missing(self.kind, &self.path, reason);

        let metadata = match std::fs::metadata(&self.path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Err(missing("not found")),
            Err(e) => return Err(missing(&e.to_string())),
        };

        if !metadata.is_file() {
            return Err(missing("not a file"));
        }

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if metadata.permissions().mode() & 0o111 == 0 {
                return Err(missing("not executable"));
            }
        }

        Ok(())
    }

    /// Convenience wrapper around [`ToolLocation::check`].
    pub fn is_available(&self) -> bool {
        self.check().is_ok()
    }
}

/// Configuration for locating the external tools.
///
/// Built once at startup (usually via [`ToolConfig::from_env`]) and treated
/// as immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolConfig {
    /// Development vs packaged resource layout.
    pub mode: RuntimeMode,
    /// Overrides the mode-derived resource root.
    pub resource_dir: Option<PathBuf>,
    /// Explicit fetch tool path.
    pub fetch_override: Option<PathBuf>,
    /// Explicit mux tool path.
    pub mux_override: Option<PathBuf>,
    /// Fall back to the system `PATH` when the bundled binary is missing.
    pub search_system_path: bool,
}

impl ToolConfig {
    /// Configuration using only the mode-derived bundled locations.
    #[must_use]
    pub const fn new(mode: RuntimeMode) -> Self {
        Self {
            mode,
            resource_dir: None,
            fetch_override: None,
            mux_override: None,
            search_system_path: false,
        }
    }

    /// Build configuration from the process environment.
    ///
    /// Reads `MEDIAFETCH_MODE`, `MEDIAFETCH_RESOURCE_DIR`,
    /// `MEDIAFETCH_YTDLP_PATH`, `MEDIAFETCH_FFMPEG_PATH` and
    /// `MEDIAFETCH_SEARCH_PATH`.
    pub fn from_env() -> Self {
        let non_empty = |key: &str| {
            env::var(key)
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
        };

        let search_system_path = env::var("MEDIAFETCH_SEARCH_PATH")
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Self {
            mode: RuntimeMode::detect(),
            resource_dir: non_empty("MEDIAFETCH_RESOURCE_DIR"),
            fetch_override: non_empty(ToolKind::Fetch.env_override()),
            mux_override: non_empty(ToolKind::Mux.env_override()),
            search_system_path,
        }
    }

    /// Use a specific resource root instead of the mode-derived one.
    #[must_use]
    pub fn with_resource_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.resource_dir = Some(dir.into());
        self
    }

    /// Pin a tool to an explicit path.
    #[must_use]
    pub fn with_override(mut self, kind: ToolKind, path: impl Into<PathBuf>) -> Self {
        match kind {
            ToolKind::Fetch => self.fetch_override = Some(path.into()),
            ToolKind::Mux => self.mux_override = Some(path.into()),
        }
        self
    }

    /// Enable or disable the system `PATH` fallback.
    #[must_use]
    pub const fn with_system_path(mut self, enabled: bool) -> Self {
        self.search_system_path = enabled;
        self
    }

    /// The directory containing `bin/`.
    pub fn resource_root(&self) -> Result<PathBuf, PathError> {
        match &self.resource_dir {
            Some(dir) => Ok(dir.clone()),
            None => resource_root(self.mode),
        }
    }

    /// Resolve where a tool should be.
    ///
    /// Resolution order:
    /// 1. Explicit override
    /// 2. `<resource root>/bin/<binary>`
    /// 3. System `PATH` (only if enabled and the bundled binary is missing)
    pub fn locate(&self, kind: ToolKind) -> Result<ToolLocation, PathError> {
        let explicit = match kind {
            ToolKind::Fetch => self.fetch_override.as_ref(),
            ToolKind::Mux => self.mux_override.as_ref(),
        };
        if let Some(path) = explicit {
            return Ok(ToolLocation::new(kind, path, ToolSource::Override));
        }

        let bundled = self.resource_root()?.join("bin").join(kind.binary_name());
        if !bundled.exists() && self.search_system_path {
            if let Ok(found) = which::which(kind.program()) {
                tracing::debug!(tool = %kind, path = %found.display(), "Using tool from PATH");
                return Ok(ToolLocation::new(kind, found, ToolSource::SystemPath));
            }
        }

        Ok(ToolLocation::new(kind, bundled, ToolSource::Bundled))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[cfg(unix)]
    fn make_executable(path: &Path) {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = fs::metadata(path).unwrap().permissions();
        perms.set_mode(0o755);
        fs::set_permissions(path, perms).unwrap();
    }

    #[test]
    fn binary_names_match_platform() {
        #[cfg(target_os = "windows")]
        assert_eq!(ToolKind::Fetch.binary_name(), "yt-dlp.exe");

        #[cfg(not(target_os = "windows"))]
        assert_eq!(ToolKind::Mux.binary_name(), "ffmpeg");
    }

    #[test]
    fn bundled_location_is_under_resource_bin() {
        let dir = tempdir().unwrap();
        let config = ToolConfig::new(RuntimeMode::Packaged).with_resource_dir(dir.path());

        let location = config.locate(ToolKind::Fetch).unwrap();
        assert_eq!(location.source, ToolSource::Bundled);
        assert_eq!(
            location.path,
            dir.path().join("bin").join(ToolKind::Fetch.binary_name())
        );
    }

    #[test]
    fn override_takes_precedence() {
        let dir = tempdir().unwrap();
        let config = ToolConfig::new(RuntimeMode::Development)
            .with_resource_dir(dir.path())
            .with_override(ToolKind::Mux, "/opt/ffmpeg/bin/ffmpeg");

        let location = config.locate(ToolKind::Mux).unwrap();
        assert_eq!(location.source, ToolSource::Override);
        assert_eq!(location.path, PathBuf::from("/opt/ffmpeg/bin/ffmpeg"));
    }

    #[test]
    fn check_reports_missing_tool() {
        let dir = tempdir().unwrap();
        let location = ToolLocation::new(ToolKind::Fetch, dir.path().join("yt-dlp"), ToolSource::Bundled);

        let err = location.check().unwrap_err();
        assert!(err.is_configuration_error());
        assert!(err.to_string().contains("not found"));
        assert!(!location.is_available());
    }

    #[test]
    fn check_rejects_directory() {
        let dir = tempdir().unwrap();
        let location = ToolLocation::new(ToolKind::Fetch, dir.path(), ToolSource::Override);

        let err = location.check().unwrap_err();
        assert!(err.to_string().contains("not a file"));
    }

    #[cfg(unix)]
    #[test]
    fn check_rejects_non_executable_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("yt-dlp");
        fs::write(&path, "#!/bin/sh\nexit 0\n").unwrap();

        let location = ToolLocation::new(ToolKind::Fetch, &path, ToolSource::Bundled);
        assert!(location.check().unwrap_err().to_string().contains("not executable"));

        make_executable(&path);
        assert!(location.check().is_ok());
    }
}
