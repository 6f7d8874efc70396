#![doc = include_str!(concat!(env!("OUT_DIR"), "/README_GENERATED.md"))]
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod error;
pub mod events;
pub mod paths;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    DownloadFormat, DownloadId, DownloadOutcome, DownloadPhase, DownloadRequest, ProgressEvent,
    SUCCESS_MESSAGE,
};
pub use error::DownloadFailure;
pub use events::AppEvent;
pub use ports::{
    AppEventEmitter, ChannelProgressSink, DirectoryPicker, FileRevealer, NoopEmitter,
    NoopProgressSink, ProgressSink, RevealError,
};

// Re-export path utilities
pub use paths::{
    DirectoryCreationStrategy, PathError, ResolvedPaths, RuntimeMode, ToolConfig, ToolKind,
    ToolLocation, ToolSource, default_output_dir, ensure_directory, resource_root,
};

#[cfg(test)]
use tempfile as _;
