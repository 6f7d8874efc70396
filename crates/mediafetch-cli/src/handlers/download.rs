//! Download command handler.

use std::path::PathBuf;

use mediafetch_core::DownloadFormat;
use mediafetch_download::DownloadOutcome;
use mediafetch_gui::{GuiBackend, RunDownloadRequest};
use tracing::info;

use crate::error::CliError;

/// Where the downloaded file should go.
pub enum Destination {
    /// Explicit folder from `-o`.
    Path(PathBuf),
    /// Ask the user.
    Prompt,
    /// `~/Desktop/YouTube Videos`.
    Default,
}

impl Destination {
    pub fn from_args(output: Option<PathBuf>, choose: bool) -> Self {
        match (output, choose) {
            (Some(path), _) => Self::Path(path),
            (None, true) => Self::Prompt,
            (None, false) => Self::Default,
        }
    }
}

async fn resolve_destination(
    backend: &GuiBackend,
    destination: Destination,
) -> Result<PathBuf, CliError> {
    match destination {
        Destination::Path(path) => Ok(std::path::absolute(path)?),
        Destination::Prompt => backend
            .prompt_output_directory()
            .await
            .ok_or_else(|| CliError::Arguments("no download folder selected".to_string())),
        Destination::Default => Ok(backend.resolve_default_output_directory()?),
    }
}

/// Run one download, cancelling it on Ctrl+C.
pub async fn execute(
    backend: &GuiBackend,
    url: String,
    format: DownloadFormat,
    destination: Destination,
) -> Result<(), CliError> {
    if !backend.check_tool_available() {
        println!("yt-dlp was not found. Run `mediafetch check` for details.");
    }

    let output_dir = resolve_destination(backend, destination).await?;
    println!("Saving {format} to {}", output_dir.display());

    let request = RunDownloadRequest {
        url,
        format,
        output_path: output_dir.display().to_string(),
    };

    let run = backend.run_download(request);
    tokio::pin!(run);

    let outcome = tokio::select! {
        outcome = &mut run => outcome?,
        _ = tokio::signal::ctrl_c() => {
            info!("Interrupted, cancelling download");
            backend.cancel_download();
            run.await?
        }
    };

    match outcome {
        DownloadOutcome::Success { message } => {
            println!("{message}");
            Ok(())
        }
        DownloadOutcome::Failure { error } => Err(error.into()),
        DownloadOutcome::Cancelled => Err(CliError::Cancelled),
    }
}
