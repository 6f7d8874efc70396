//! Process spawn seam.

use std::ffi::OsString;
use std::io;
use std::path::Path;
use std::process::Stdio;

use tokio::process::{Child, Command};

/// Creates the fetch tool process.
///
/// The returned child must have piped stdout and stderr.
pub trait ProcessLauncher: Send + Sync {
    fn launch(&self, program: &Path, args: &[OsString]) -> io::Result<Child>;
}

/// Spawns real processes with tokio.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioLauncher;

impl ProcessLauncher for TokioLauncher {
    fn launch(&self, program: &Path, args: &[OsString]) -> io::Result<Child> {
        Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
    }
}
