// ============================================================================
// vidgen-core/src/generation.rs
// ============================================================================
//
// GENERATION PIPELINE: Submit, Poll, Download
//
// This module drives one video generation job end to end: pre-flight
// validation, job submission, a blocking poll loop at a fixed interval, and
// the final content download and file write. Single-threaded throughout; the
// process blocks between status checks.

use crate::api::VideoApiClient;
use crate::config::CoreConfig;
use crate::error::{CoreError, CoreResult};
use crate::job::JobStatus;
use crate::params::GenerationRequest;
use crate::progress::{ProgressCallback, ProgressEvent};
use crate::utils::prompt_preview;

use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant};

/// Result of a completed generation run.
#[derive(Debug, Clone)]
pub struct GenerationOutcome {
    /// Server-assigned job identifier
    pub job_id: String,
    /// Where the video was written
    pub output_path: PathBuf,
    /// Size of the written artifact in bytes
    pub bytes_written: u64,
    /// Wall-clock time from submission to write
    pub elapsed: Duration,
}

/// Runs one generation job to completion and writes the result to
/// `output_path`.
///
/// The request is validated before any network call. The poll loop checks
/// job status every `config.poll_interval` until the job reaches a terminal
/// state or `config.timeout` elapses. A failed job surfaces the server's
/// error message; a timeout surfaces the job id so the caller can check on
/// it out-of-band. A failed or timed-out run leaves no local artifact.
pub fn generate_video(
    client: &VideoApiClient,
    config: &CoreConfig,
    request: &GenerationRequest,
    output_path: &Path,
    callback: &dyn ProgressCallback,
) -> CoreResult<GenerationOutcome> {
    config.validate()?;
    request.validate()?;

    callback.on_progress(&ProgressEvent::SubmissionStarted {
        model: request.model.to_string(),
        duration_secs: request.duration.as_secs(),
        resolution: request.resolution.to_string(),
        prompt_preview: prompt_preview(&request.prompt),
        reference_image: request.reference_image.clone(),
    });

    let job = client.create_job(request)?;
    let job_id = job.id;
    info!("created video generation job {}", job_id);
    callback.on_progress(&ProgressEvent::JobCreated {
        job_id: job_id.clone(),
    });

    let start = Instant::now();
    loop {
        if start.elapsed() >= config.timeout {
            return Err(CoreError::Timeout {
                job_id,
                elapsed_secs: start.elapsed().as_secs(),
            });
        }

        let job = client.get_job(&job_id)?;
        let progress = job.progress_percent();
        debug!(
            "job {}: status={} progress={}%",
            job_id, job.status, progress
        );
        callback.on_progress(&ProgressEvent::PollTick {
            elapsed: start.elapsed(),
            status: job.status,
            progress,
        });

        match job.status {
            JobStatus::Completed => break,
            JobStatus::Failed => {
                let message = job
                    .error_message()
                    .unwrap_or("Unknown error")
                    .to_string();
                return Err(CoreError::GenerationFailed(message));
            }
            // queued / in_progress / unknown: wait out the interval
            _ => thread::sleep(config.poll_interval),
        }
    }

    callback.on_progress(&ProgressEvent::DownloadStarted);
    let content = client.download_content(&job_id)?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(output_path, &content)?;

    let outcome = GenerationOutcome {
        job_id,
        output_path: output_path.to_path_buf(),
        bytes_written: content.len() as u64,
        elapsed: start.elapsed(),
    };
    info!(
        "wrote {} bytes to {} after {}s",
        outcome.bytes_written,
        outcome.output_path.display(),
        outcome.elapsed.as_secs()
    );
    callback.on_progress(&ProgressEvent::Complete {
        output_path: outcome.output_path.clone(),
        bytes_written: outcome.bytes_written,
        elapsed: outcome.elapsed,
    });

    Ok(outcome)
}
