//! Snapshot of every resolved location, for diagnostics.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use super::error::PathError;
use super::output::default_output_dir;
use super::platform::RuntimeMode;
use super::tools::{ToolConfig, ToolKind, ToolLocation};

/// All paths mediafetch would use with a given configuration.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedPaths {
    pub mode: RuntimeMode,
    pub resource_root: PathBuf,
    pub fetch: ToolLocation,
    pub mux: ToolLocation,
    /// `None` when the folder could not be resolved or created.
    pub default_output_dir: Option<PathBuf>,
}

impl ResolvedPaths {
    /// Resolve every path without spawning anything.
    pub fn resolve(config: &ToolConfig) -> Result<Self, PathError> {
        let default_output_dir = match default_output_dir() {
            Ok(dir) => Some(dir),
            Err(e) => {
                tracing::warn!(error = %e, "Default output directory unavailable");
                None
            }
        };

        Ok(Self {
            mode: config.mode,
            resource_root: config.resource_root()?,
            fetch: config.locate(ToolKind::Fetch)?,
            mux: config.locate(ToolKind::Mux)?,
            default_output_dir,
        })
    }
}

impl fmt::Display for ResolvedPaths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = |tool: &ToolLocation| if tool.is_available() { "ok" } else { "missing" };

        writeln!(f, "mode           = {}", self.mode)?;
        writeln!(f, "resource_root  = {}", self.resource_root.display())?;
        writeln!(
            f,
            "fetch_tool     = {} ({})",
            self.fetch.path.display(),
            status(&self.fetch)
        )?;
        writeln!(
            f,
            "mux_tool       = {} ({})",
            self.mux.path.display(),
            status(&self.mux)
        )?;
        match &self.default_output_dir {
            Some(dir) => write!(f, "output_dir     = {}", dir.display()),
            None => write!(f, "output_dir     = <unavailable>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn resolves_tools_under_configured_root() {
        let dir = tempdir().unwrap();
        let config = ToolConfig::new(RuntimeMode::Packaged).with_resource_dir(dir.path());

        let resolved = ResolvedPaths::resolve(&config).unwrap();
        assert_eq!(resolved.mode, RuntimeMode::Packaged);
        assert_eq!(resolved.resource_root, dir.path());
        assert!(resolved.fetch.path.starts_with(dir.path().join("bin")));
        assert!(resolved.mux.path.starts_with(dir.path().join("bin")));

        let text = resolved.to_string();
        assert!(text.contains("mode           = packaged"));
        assert!(text.contains("(missing)"));
    }
}
