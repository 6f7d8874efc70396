//! Progress sink port.
//!
//! The supervisor pushes every parsed [`ProgressEvent`] into a sink as soon
//! as it is parsed, while the download itself is still pending.

use tokio::sync::mpsc;

use crate::domain::ProgressEvent;

/// Receiver of progress events for one download.
///
/// Implementations must not block: they are called from the task reading
/// the child's stdout.
pub trait ProgressSink: Send + Sync {
    fn emit(&self, event: ProgressEvent);
}

/// Discards all progress events.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopProgressSink;

impl ProgressSink for NoopProgressSink {
    fn emit(&self, _event: ProgressEvent) {}
}

/// Forwards progress events into an unbounded channel.
///
/// Events sent after the receiver is dropped are silently discarded; a
/// listener going away never affects the download.
#[derive(Debug, Clone)]
pub struct ChannelProgressSink {
    tx: mpsc::UnboundedSender<ProgressEvent>,
}

impl ChannelProgressSink {
    /// Create a sink and the receiver that observes it.
    #[must_use]
    pub fn new() -> (Self, mpsc::UnboundedReceiver<ProgressEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl ProgressSink for ChannelProgressSink {
    fn emit(&self, event: ProgressEvent) {
        let _ = self.tx.send(event);
    }
}

impl<F> ProgressSink for F
where
    F: Fn(ProgressEvent) + Send + Sync,
{
    fn emit(&self, event: ProgressEvent) {
        self(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[tokio::test]
    async fn channel_sink_delivers_in_order() {
        let (sink, mut rx) = ChannelProgressSink::new();
        sink.emit(ProgressEvent::new(10.0, "[download]  10.0%"));
        sink.emit(ProgressEvent::new(55.5, "[download]  55.5%"));
        drop(sink);

        assert_eq!(rx.recv().await.unwrap().percentage, 10.0);
        assert_eq!(rx.recv().await.unwrap().percentage, 55.5);
        assert!(rx.recv().await.is_none());
    }

    #[test]
    fn channel_sink_ignores_dropped_receiver() {
        let (sink, rx) = ChannelProgressSink::new();
        drop(rx);
        sink.emit(ProgressEvent::new(1.0, "[download]   1.0%"));
    }

    #[test]
    fn closures_are_sinks() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let captured = Arc::clone(&seen);
        let sink = move |event: ProgressEvent| captured.lock().unwrap().push(event.percentage);

        sink.emit(ProgressEvent::new(42.0, "[download]  42.0%"));
        assert_eq!(*seen.lock().unwrap(), vec![42.0]);
    }
}
