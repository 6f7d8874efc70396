//! Event emitter trait for relaying download events to a UI.
//!
//! Implementations handle transport details (webview events, terminal
//! rendering, channels).

use crate::events::AppEvent;

/// Trait for emitting application events.
///
/// # Implementations
///
/// - `NoopEmitter` - For tests and contexts without a listener
/// - Adapter-specific implementations (desktop shell, CLI)
pub trait AppEventEmitter: Send + Sync {
    /// Emit an application event.
    ///
    /// This method should not block.
    fn emit(&self, event: AppEvent);

    /// Clone this emitter into a boxed trait object.
    fn clone_box(&self) -> Box<dyn AppEventEmitter>;
}

/// A no-op event emitter for tests and contexts without a listener.
#[derive(Debug, Clone, Default)]
pub struct NoopEmitter;

impl NoopEmitter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl AppEventEmitter for NoopEmitter {
    fn emit(&self, _event: AppEvent) {
        // Intentionally do nothing
    }

    fn clone_box(&self) -> Box<dyn AppEventEmitter> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DownloadId, ProgressEvent};
    use std::sync::Arc;

    #[test]
    fn noop_emitter_accepts_events() {
        let emitter = NoopEmitter::new();
        emitter.emit(AppEvent::download_progress(
            DownloadId::new(),
            &ProgressEvent::new(5.0, "[download]   5.0%"),
        ));
    }

    #[test]
    fn emitter_is_object_safe() {
        let emitter: Arc<dyn AppEventEmitter> = Arc::new(NoopEmitter::new());
        let boxed = emitter.clone_box();
        boxed.emit(AppEvent::download_finished(
            DownloadId::new(),
            crate::DownloadOutcome::Cancelled,
        ));
    }
}
