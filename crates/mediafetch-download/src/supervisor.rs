//! Download supervisor: one fetch tool invocation end to end.
//!
//! The supervisor resolves and checks tool locations, builds arguments,
//! spawns the fetch tool, streams its stdout through a [`ProgressParser`]
//! into a [`ProgressSink`], accumulates stderr for diagnostics and settles
//! exactly one [`DownloadOutcome`].

use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};

use mediafetch_core::{
    DownloadFailure, DownloadFormat, DownloadOutcome, DownloadPhase, DownloadRequest,
    ProgressSink, ToolConfig, ToolKind, ToolLocation,
};
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Child;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::args::build_args;
use crate::launcher::{ProcessLauncher, TokioLauncher};
use crate::progress::ProgressParser;
use crate::shutdown::{DEFAULT_GRACE, terminate_child};

const READ_CHUNK: usize = 8 * 1024;

#[derive(Debug, Default)]
struct SupervisorState {
    phase: DownloadPhase,
    cancel: Option<CancellationToken>,
}

/// Owns the single in-flight download.
///
/// Cheap to share behind an `Arc`; all methods take `&self`.
pub struct DownloadSupervisor {
    config: ToolConfig,
    launcher: Arc<dyn ProcessLauncher>,
    state: Arc<Mutex<SupervisorState>>,
}

impl std::fmt::Debug for DownloadSupervisor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DownloadSupervisor")
            .field("config", &self.config)
            .field("phase", &self.phase())
            .finish_non_exhaustive()
    }
}

/// Clears the active slot when a run ends, even if its future is dropped.
struct ActiveRun {
    state: Arc<Mutex<SupervisorState>>,
}

impl ActiveRun {
    fn set_phase(&self, phase: DownloadPhase) {
        lock(&self.state).phase = phase;
    }
}

impl Drop for ActiveRun {
    fn drop(&mut self) {
        let mut state = lock(&self.state);
        state.cancel = None;
        if state.phase.is_active() {
            state.phase = DownloadPhase::Idle;
        }
    }
}

fn lock(state: &Mutex<SupervisorState>) -> std::sync::MutexGuard<'_, SupervisorState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

impl DownloadSupervisor {
    pub fn new(config: ToolConfig) -> Self {
        Self::with_launcher(config, Arc::new(TokioLauncher))
    }

    /// Use a custom spawn seam.
    pub fn with_launcher(config: ToolConfig, launcher: Arc<dyn ProcessLauncher>) -> Self {
        Self {
            config,
            launcher,
            state: Arc::new(Mutex::new(SupervisorState::default())),
        }
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> DownloadPhase {
        lock(&self.state).phase
    }

    /// Whether a download is in flight.
    pub fn is_busy(&self) -> bool {
        lock(&self.state).cancel.is_some()
    }

    /// Whether the fetch tool resolves and is executable. Never spawns.
    pub fn check_tool_available(&self) -> bool {
        self.resolve(ToolKind::Fetch).is_ok()
    }

    /// Cancel the in-flight download, if any.
    ///
    /// Returns `false` when nothing was running.
    pub fn cancel(&self) -> bool {
        let state = lock(&self.state);
        match &state.cancel {
            Some(token) => {
                info!("Cancelling download");
                token.cancel();
                true
            }
            None => false,
        }
    }

    /// Run one download to completion.
    ///
    /// Progress events are pushed to `sink` while the future is pending.
    /// Cancelling `cancel` (or calling [`DownloadSupervisor::cancel`])
    /// terminates the child and settles [`DownloadOutcome::Cancelled`].
    pub async fn run(
        &self,
        request: &DownloadRequest,
        sink: &dyn ProgressSink,
        cancel: CancellationToken,
    ) -> DownloadOutcome {
        let token = cancel.child_token();
        let Some(run) = self.begin(token.clone()) else {
            warn!(url = %request.source_url(), "Rejecting download: another one is running");
            return DownloadOutcome::failure(DownloadFailure::Busy);
        };

        let outcome = self.execute(&run, request, sink, &token).await;

        let phase = match &outcome {
            DownloadOutcome::Success { .. } => DownloadPhase::Succeeded,
            DownloadOutcome::Failure { .. } => DownloadPhase::Failed,
            DownloadOutcome::Cancelled => DownloadPhase::Cancelled,
        };
        run.set_phase(phase);

        match &outcome {
            DownloadOutcome::Success { .. } => info!(format = %request.format(), "Download succeeded"),
            DownloadOutcome::Failure { error } => warn!(format = %request.format(), %error, "Download failed"),
            DownloadOutcome::Cancelled => info!(format = %request.format(), "Download cancelled"),
        }

        outcome
    }

    fn begin(&self, token: CancellationToken) -> Option<ActiveRun> {
        let mut state = lock(&self.state);
        if state.cancel.is_some() {
            return None;
        }
        state.cancel = Some(token);
        state.phase = DownloadPhase::Validating;
        drop(state);

        Some(ActiveRun {
            state: Arc::clone(&self.state),
        })
    }

    fn resolve(&self, kind: ToolKind) -> Result<ToolLocation, DownloadFailure> {
        let location = self
            .config
            .locate(kind)
            .map_err(|e| DownloadFailure::tool_missing(kind, kind.binary_name(), e.to_string()))?;
        location.check()?;
        Ok(location)
    }

    /// Mux location for a format: required for video, optional for audio.
    fn mux_location(&self, format: DownloadFormat) -> Result<Option<PathBuf>, DownloadFailure> {
        if format.requires_mux_tool() {
            return self.resolve(ToolKind::Mux).map(|l| Some(l.path));
        }

        match self.resolve(ToolKind::Mux) {
            Ok(location) => Ok(Some(location.path)),
            Err(e) => {
                debug!(error = %e, "Audio download without ffmpeg location");
                Ok(None)
            }
        }
    }

    async fn execute(
        &self,
        run: &ActiveRun,
        request: &DownloadRequest,
        sink: &dyn ProgressSink,
        token: &CancellationToken,
    ) -> DownloadOutcome {
        let fetch = match self.resolve(ToolKind::Fetch) {
            Ok(location) => location,
            Err(e) => return e.into(),
        };
        let mux = match self.mux_location(request.format()) {
            Ok(mux) => mux,
            Err(e) => return e.into(),
        };

        let args = match build_args(
            request.format(),
            request.output_directory(),
            request.source_url(),
            mux.as_deref(),
        ) {
            Ok(args) => args,
            Err(e) => return DownloadFailure::invalid_request(e.to_string()).into(),
        };

        if token.is_cancelled() {
            return DownloadOutcome::Cancelled;
        }

        let mut child = match self.launcher.launch(fetch.path(), &args) {
            Ok(child) => child,
            Err(e) => {
                warn!(path = %fetch.path().display(), error = %e, "Failed to spawn fetch tool");
                return DownloadFailure::launch(ToolKind::Fetch, &e).into();
            }
        };
        run.set_phase(DownloadPhase::Spawned);
        info!(
            pid = child.id(),
            format = %request.format(),
            url = %request.source_url(),
            output = %request.output_directory().display(),
            "Spawned fetch tool"
        );

        let (Some(mut stdout), Some(stderr)) = (child.stdout.take(), child.stderr.take()) else {
            let _ = terminate_child(&mut child, DEFAULT_GRACE).await;
            let err = std::io::Error::other("stdout/stderr not captured");
            return DownloadFailure::launch(ToolKind::Fetch, &err).into();
        };
        let mut stderr_task = collect_stderr(stderr);

        run.set_phase(DownloadPhase::Running);
        let mut parser = ProgressParser::new();
        let mut buf = vec![0u8; READ_CHUNK];
        loop {
            let read = tokio::select! {
                () = token.cancelled() => None,
                read = stdout.read(&mut buf) => Some(read),
            };

            match read {
                None => return cancel_child(&mut child, stderr_task).await,
                Some(Ok(0)) => break,
                Some(Ok(n)) => {
                    for event in parser.feed(&buf[..n]) {
                        debug!(percentage = event.percentage, "Progress");
                        sink.emit(event);
                    }
                }
                Some(Err(e)) => {
                    warn!(error = %e, "Reading fetch tool output failed");
                    break;
                }
            }
        }
        if let Some(event) = parser.finish() {
            debug!(percentage = event.percentage, "Progress");
            sink.emit(event);
        }

        let waited = tokio::select! {
            () = token.cancelled() => None,
            status = child.wait() => Some(status),
        };
        let status = match waited {
            None => return cancel_child(&mut child, stderr_task).await,
            Some(Ok(status)) => status,
            Some(Err(e)) => {
                stderr_task.abort();
                return DownloadFailure::launch(ToolKind::Fetch, &e).into();
            }
        };

        // A grandchild of the fetch tool may still hold stderr open
        let stderr = tokio::select! {
            () = token.cancelled() => {
                stderr_task.abort();
                return DownloadOutcome::Cancelled;
            }
            joined = &mut stderr_task => joined.unwrap_or_default(),
        };
        let stderr = String::from_utf8_lossy(&stderr).into_owned();

        if status.success() {
            if !stderr.trim().is_empty() {
                debug!(stderr = %stderr.trim(), "Fetch tool wrote diagnostics");
            }
            DownloadOutcome::success()
        } else {
            DownloadFailure::execution(stderr, status.code()).into()
        }
    }
}

fn collect_stderr<R>(mut stderr: R) -> JoinHandle<Vec<u8>>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    tokio::spawn(async move {
        let mut buf = Vec::new();
        let _ = stderr.read_to_end(&mut buf).await;
        buf
    })
}

async fn cancel_child(child: &mut Child, stderr_task: JoinHandle<Vec<u8>>) -> DownloadOutcome {
    match terminate_child(child, DEFAULT_GRACE).await {
        Ok(status) => debug!(%status, "Fetch tool terminated"),
        Err(e) => warn!(error = %e, "Failed to terminate fetch tool"),
    }
    stderr_task.abort();
    DownloadOutcome::Cancelled
}
