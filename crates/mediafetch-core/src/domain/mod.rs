//! Domain types for a single download request.
//!
//! These types are pure data: no I/O, no process handles. They cross the
//! process/UI boundary, so everything here is serde-serializable.

mod format;
mod outcome;
mod progress;
mod request;

pub use format::DownloadFormat;
pub use outcome::{DownloadOutcome, SUCCESS_MESSAGE};
pub use progress::{DownloadPhase, ProgressEvent};
pub use request::{DownloadId, DownloadRequest};
