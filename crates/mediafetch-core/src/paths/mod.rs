//! Path utilities: runtime mode, external tool locations, output directories.
//!
//! This module provides the canonical resolution for every path mediafetch
//! touches:
//! - The resource root holding the bundled `bin/` directory
//! - The fetch (`yt-dlp`) and mux (`ffmpeg`) executables
//! - The default download folder
//!
//! # Design
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - Resolution never spawns a process; checking a tool only inspects metadata
//! - Environment variables are read in one place, `ToolConfig::from_env`

mod ensure;
mod error;
mod output;
mod platform;
mod resolver;
mod tools;

pub use ensure::{DirectoryCreationStrategy, ensure_directory};
pub use error::PathError;
pub use output::{DEFAULT_OUTPUT_DIR_NAME, default_output_dir, default_output_dir_in};
pub use platform::{RuntimeMode, resource_root};
pub use resolver::ResolvedPaths;
pub use tools::{ToolConfig, ToolKind, ToolLocation, ToolSource};
