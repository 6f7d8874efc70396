//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the boundaries between the download core and whatever hosts
//! it. Implementations live in adapter crates (CLI, GUI shells) or are the
//! trivial ones provided here for tests.
//!
//! # Design Rules
//!
//! - No adapter-specific types (no windowing toolkit, no terminal crates)
//! - Progress delivery is push-based and must never block the supervisor
//! - Desktop interactions (folder prompt, reveal) are fire-and-forget

mod desktop;
mod event_emitter;
mod progress_sink;

pub use desktop::{DirectoryPicker, FileRevealer, RevealError};
pub use event_emitter::{AppEventEmitter, NoopEmitter};
pub use progress_sink::{ChannelProgressSink, NoopProgressSink, ProgressSink};
