//! Terminal rendering of backend events.

mod progress;

pub use progress::{CliProgress, TerminalEmitter};
