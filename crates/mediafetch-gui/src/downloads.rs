//! Download operations for the GUI backend.

use std::path::Path;
use std::sync::Arc;

use mediafetch_core::{AppEvent, AppEventEmitter, DownloadId, DownloadRequest, ProgressEvent};
use mediafetch_download::{CancellationToken, DownloadOutcome, DownloadSupervisor};
use tracing::{debug, info};

use crate::deps::GuiDeps;
use crate::error::GuiError;
use crate::types::RunDownloadRequest;

/// Download operations handler.
pub struct DownloadOps<'a> {
    supervisor: &'a Arc<DownloadSupervisor>,
    emitter: &'a Arc<dyn AppEventEmitter>,
}

impl<'a> DownloadOps<'a> {
    pub fn new(deps: &'a GuiDeps) -> Self {
        Self {
            supervisor: &deps.supervisor,
            emitter: &deps.emitter,
        }
    }

    pub fn check_tool_available(&self) -> bool {
        self.supervisor.check_tool_available()
    }

    /// Validate the request, run it and relay its events.
    ///
    /// Emits `DownloadStarted`, then one `DownloadProgress` per parsed
    /// report, then `DownloadFinished`, all with the same id. A request that
    /// fails validation emits nothing.
    pub async fn run(&self, req: RunDownloadRequest) -> Result<DownloadOutcome, GuiError> {
        let request = DownloadRequest::new(&req.url, req.format, Path::new(&req.output_path))?;
        if self.supervisor.is_busy() {
            return Err(GuiError::Conflict(
                "A download is already in progress".to_string(),
            ));
        }

        let id = DownloadId::new();
        info!(download_id = %id, url = %request.source_url(), format = %request.format(), "Starting download");
        self.emitter.emit(AppEvent::download_started(
            id,
            request.format(),
            request.source_url(),
        ));

        let emitter = self.emitter;
        let sink = move |event: ProgressEvent| {
            emitter.emit(AppEvent::download_progress(id, &event));
        };
        let outcome = self
            .supervisor
            .run(&request, &sink, CancellationToken::new())
            .await;

        debug!(download_id = %id, status = ?outcome, "Download settled");
        self.emitter
            .emit(AppEvent::download_finished(id, outcome.clone()));
        Ok(outcome)
    }

    /// Cancel the running download. Returns `false` if none was running.
    pub fn cancel(&self) -> bool {
        self.supervisor.cancel()
    }
}
