#![doc = include_str!(concat!(env!("OUT_DIR"), "/README_GENERATED.md"))]
#![deny(unused_crate_dependencies)]

mod backend;
mod deps;
mod desktop;
mod downloads;
mod error;
pub mod types;

pub use backend::GuiBackend;
pub use deps::GuiDeps;
pub use desktop::DesktopOps;
pub use downloads::DownloadOps;
pub use error::GuiError;
pub use types::{OUTPUT_DIRECTORY_PROMPT, RunDownloadRequest};
