//! Composition root: turns CLI flags and the environment into a backend.

use std::sync::Arc;

use mediafetch_core::ToolConfig;
use mediafetch_download::DownloadSupervisor;
use mediafetch_gui::{GuiBackend, GuiDeps};
use tracing::debug;

use crate::desktop::{StdinDirectoryPicker, SystemFileRevealer};
use crate::presentation::TerminalEmitter;

/// Everything a handler needs.
pub struct CliContext {
    pub config: ToolConfig,
    pub backend: GuiBackend,
}

/// Tool configuration from the environment, widened by `--system-tools`.
pub fn tool_config(system_tools: bool) -> ToolConfig {
    let config = ToolConfig::from_env();
    if system_tools {
        config.with_system_path(true)
    } else {
        config
    }
}

/// Wire the supervisor and terminal adapters into a `GuiBackend`.
pub fn bootstrap(config: ToolConfig) -> CliContext {
    debug!(mode = %config.mode, search_path = config.search_system_path, "Bootstrapping");

    let supervisor = Arc::new(DownloadSupervisor::new(config.clone()));
    let deps = GuiDeps::new(
        supervisor,
        Arc::new(StdinDirectoryPicker),
        Arc::new(SystemFileRevealer),
        Arc::new(TerminalEmitter::new()),
    );

    CliContext {
        config,
        backend: GuiBackend::new(deps),
    }
}
