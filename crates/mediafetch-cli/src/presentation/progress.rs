//! Progress display fed by `AppEvent`s.
//!
//! Interactive terminals get an indicatif bar; anything else gets one plain
//! line per whole percent.

use std::io::{self, IsTerminal};
use std::sync::{Arc, Mutex, PoisonError};

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use mediafetch_core::{AppEvent, AppEventEmitter};

/// Bar resolution: tenths of a percent.
const BAR_SCALE: f64 = 10.0;
const MAX_LABEL: usize = 60;

/// Progress display that selects terminal or plain output.
pub enum CliProgress {
    Fancy(ProgressBar),
    Plain { last_percent: Option<u32> },
}

impl CliProgress {
    pub fn new() -> Self {
        if io::stderr().is_terminal() {
            let bar = ProgressBar::with_draw_target(Some(1000), ProgressDrawTarget::stderr());
            if let Ok(style) =
                ProgressStyle::with_template("{spinner} {bar:32.cyan/blue} {percent:>3}% {msg}")
            {
                bar.set_style(style);
            }
            Self::Fancy(bar)
        } else {
            Self::Plain { last_percent: None }
        }
    }

    pub fn start(&mut self, label: &str) {
        match self {
            Self::Fancy(bar) => {
                bar.set_position(0);
                bar.set_message(truncate(label));
            }
            Self::Plain { last_percent } => {
                *last_percent = None;
                eprintln!("Downloading {label}");
            }
        }
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn update(&mut self, percentage: f64, message: &str) {
        let percentage = percentage.clamp(0.0, 100.0);
        match self {
            Self::Fancy(bar) => {
                bar.set_position((percentage * BAR_SCALE) as u64);
                bar.set_message(truncate(strip_marker(message)));
            }
            Self::Plain { last_percent } => {
                let whole = percentage.floor() as u32;
                if *last_percent != Some(whole) {
                    *last_percent = Some(whole);
                    eprintln!("{percentage:5.1}%");
                }
            }
        }
    }

    pub fn finish(&self) {
        if let Self::Fancy(bar) = self {
            bar.finish_and_clear();
        }
    }
}

impl Default for CliProgress {
    fn default() -> Self {
        Self::new()
    }
}

fn strip_marker(message: &str) -> &str {
    message.trim_start_matches("[download]").trim()
}

fn truncate(raw: &str) -> String {
    if raw.chars().count() <= MAX_LABEL {
        return raw.to_string();
    }
    let mut buf: String = raw.chars().take(MAX_LABEL - 1).collect();
    buf.push('…');
    buf
}

/// Emitter that drives a [`CliProgress`] from download events.
#[derive(Clone, Default)]
pub struct TerminalEmitter {
    progress: Arc<Mutex<CliProgress>>,
}

impl TerminalEmitter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AppEventEmitter for TerminalEmitter {
    fn emit(&self, event: AppEvent) {
        let mut progress = self.progress.lock().unwrap_or_else(PoisonError::into_inner);
        match event {
            AppEvent::DownloadStarted { source_url, .. } => progress.start(&source_url),
            AppEvent::DownloadProgress {
                percentage,
                message,
                ..
            } => progress.update(percentage, &message),
            AppEvent::DownloadFinished { .. } => progress.finish(),
        }
    }

    fn clone_box(&self) -> Box<dyn AppEventEmitter> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_labels_are_truncated() {
        let label = "x".repeat(200);
        let out = truncate(&label);
        assert_eq!(out.chars().count(), MAX_LABEL);
        assert!(out.ends_with('…'));
    }

    #[test]
    fn marker_is_stripped_from_messages() {
        assert_eq!(
            strip_marker("[download]  45.2% of 10MiB at 1MiB/s"),
            "45.2% of 10MiB at 1MiB/s"
        );
    }

    #[test]
    fn plain_progress_prints_each_whole_percent_once() {
        let mut progress = CliProgress::Plain { last_percent: None };
        progress.update(10.2, "[download] 10.2%");
        progress.update(10.7, "[download] 10.7%");
        assert!(matches!(progress, CliProgress::Plain { last_percent: Some(10) }));

        progress.update(250.0, "[download] bogus");
        assert!(matches!(progress, CliProgress::Plain { last_percent: Some(100) }));
    }
}
