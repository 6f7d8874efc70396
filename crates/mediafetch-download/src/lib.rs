#![doc = include_str!(concat!(env!("OUT_DIR"), "/README_GENERATED.md"))]
#![deny(unused_crate_dependencies)]

pub mod args;
pub mod launcher;
pub mod progress;
pub mod shutdown;
pub mod supervisor;

pub use args::{ArgsError, build_args};
pub use launcher::{ProcessLauncher, TokioLauncher};
pub use progress::{ProgressParser, parse_line};
pub use supervisor::DownloadSupervisor;

// Re-export core types callers need alongside the supervisor
pub use mediafetch_core::{DownloadFormat, DownloadOutcome, DownloadRequest, ProgressEvent};
pub use tokio_util::sync::CancellationToken;
