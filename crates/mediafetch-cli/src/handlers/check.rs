//! Check command handler: verifies both external tools.

use mediafetch_core::{ToolConfig, ToolKind, ToolLocation};

use crate::error::CliError;

/// Status line for one tool.
fn describe(location: &ToolLocation) -> String {
    match location.check() {
        Ok(()) => format!("✓ {:<7} {}", location.kind.to_string(), location.path.display()),
        Err(e) => format!("✗ {:<7} {e}", location.kind.to_string()),
    }
}

/// Print the status of yt-dlp and ffmpeg.
///
/// Fails with a configuration error when yt-dlp is unusable. A missing
/// ffmpeg only limits downloads to audio, so it is reported but not fatal.
pub fn execute(config: &ToolConfig) -> Result<(), CliError> {
    let fetch = config.locate(ToolKind::Fetch)?;
    let mux = config.locate(ToolKind::Mux)?;

    println!("{}", describe(&fetch));
    println!("{}", describe(&mux));

    fetch.check()?;
    if !mux.is_available() {
        println!();
        println!("ffmpeg is missing: only audio downloads will work.");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mediafetch_core::{RuntimeMode, ToolSource};
    use tempfile::tempdir;

    #[test]
    fn missing_fetch_tool_is_config_error() {
        let dir = tempdir().unwrap();
        let config = ToolConfig::new(RuntimeMode::Packaged).with_resource_dir(dir.path());

        let err = execute(&config).unwrap_err();
        assert_eq!(err.exit_code(), 78);
    }

    #[test]
    fn describe_marks_missing_tool() {
        let dir = tempdir().unwrap();
        let location = ToolLocation::new(ToolKind::Mux, dir.path().join("ffmpeg"), ToolSource::Bundled);
        let line = describe(&location);
        assert!(line.starts_with("✗ ffmpeg"));
        assert!(line.contains("not found"));
    }
}
