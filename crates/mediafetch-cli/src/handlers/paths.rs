//! Paths command handler.
//!
//! Displays every resolved path in `key = value` form for diagnosing
//! tool-location problems.

use mediafetch_core::{ResolvedPaths, ToolConfig};

use crate::error::CliError;

pub fn execute(config: &ToolConfig) -> Result<(), CliError> {
    let paths = ResolvedPaths::resolve(config)?;
    println!("{paths}");
    Ok(())
}
