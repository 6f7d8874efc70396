//! Incremental progress parser for the fetch tool's stdout.
//!
//! Output arrives in arbitrary chunks: a line (or a UTF-8 sequence) may be
//! split across reads, and a single read may hold many lines. The parser
//! buffers raw bytes and only decodes complete lines.

use std::sync::LazyLock;

use mediafetch_core::ProgressEvent;
use regex::Regex;

/// Marker on every download progress line.
const PROGRESS_MARKER: &str = "[download]";

/// Longest unterminated fragment kept between reads. Anything longer is not
/// a progress line and is skipped up to its terminator.
pub const MAX_PENDING: usize = 16 * 1024;

static PERCENT_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(\d+(?:\.\d+)?)%").ok());

/// Stateful line splitter and progress extractor.
#[derive(Debug, Default)]
pub struct ProgressParser {
    pending: Vec<u8>,
    /// The current partial line already produced an event.
    pending_reported: bool,
    /// The current partial line outgrew `MAX_PENDING` and is being skipped.
    overflowed: bool,
}

impl ProgressParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume one chunk and return the events it completes, in order.
    ///
    /// Lines end at `\n` or `\r`. A trailing fragment is kept for the next
    /// call; if it already holds a complete percentage it is reported now
    /// and not again when its line ends.
    pub fn feed(&mut self, chunk: &[u8]) -> Vec<ProgressEvent> {
        self.pending.extend_from_slice(chunk);

        let mut events = Vec::new();
        while let Some(end) = self.pending.iter().position(|b| matches!(b, b'\n' | b'\r')) {
            let line: Vec<u8> = self.pending.drain(..=end).collect();
            let reported = std::mem::take(&mut self.pending_reported);
            let overflowed = std::mem::take(&mut self.overflowed);
            if reported || overflowed {
                continue;
            }
            if let Some(event) = parse_line(&String::from_utf8_lossy(&line[..end])) {
                events.push(event);
            }
        }

        if self.pending.len() > MAX_PENDING {
            tracing::debug!(len = self.pending.len(), "Skipping oversized output line");
            self.pending.clear();
            self.pending_reported = false;
            self.overflowed = true;
        }

        if !self.overflowed && !self.pending_reported && self.pending.contains(&b'%') {
            if let Ok(fragment) = std::str::from_utf8(&self.pending) {
                if let Some(event) = parse_line(fragment) {
                    self.pending_reported = true;
                    events.push(event);
                }
            }
        }

        events
    }

    /// Flush the trailing fragment at end of stream.
    pub fn finish(&mut self) -> Option<ProgressEvent> {
        let line = std::mem::take(&mut self.pending);
        let reported = std::mem::take(&mut self.pending_reported);
        if std::mem::take(&mut self.overflowed) || reported {
            return None;
        }
        parse_line(&String::from_utf8_lossy(&line))
    }

    /// Bytes held back waiting for a line terminator.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }
}

/// Parse one line of output into a progress event.
///
/// Returns `None` for non-progress lines and for percentages that do not
/// parse or fall outside `[0, 100]`.
pub fn parse_line(line: &str) -> Option<ProgressEvent> {
    let line = line.trim();
    if line.is_empty() || !line.contains(PROGRESS_MARKER) || !line.contains('%') {
        return None;
    }

    let captures = PERCENT_RE.as_ref()?.captures(line)?;
    let percentage: f64 = captures.get(1)?.as_str().parse().ok()?;
    if !(0.0..=100.0).contains(&percentage) {
        return None;
    }

    Some(ProgressEvent::new(percentage, line))
}
