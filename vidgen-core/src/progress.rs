// ============================================================================
// vidgen-core/src/progress.rs
// ============================================================================
//
// PROGRESS REPORTING: Job Lifecycle Callbacks
//
// This module provides abstractions for reporting generation progress from
// the core library to consumers. It defines the event types that occur over
// a job's lifetime and a callback mechanism for receiving them.
//
// KEY COMPONENTS:
// - ProgressEvent: Enum of job lifecycle events
// - ProgressCallback: Trait for receiving progress events
// - NullProgressCallback: No-op implementation for when callbacks aren't needed
//
// DESIGN PHILOSOPHY:
// This follows the observer pattern, decoupling the core library from
// presentation concerns. The CLI supplies the printing implementation; tests
// use the null implementation or record events.

use crate::job::JobStatus;
use std::path::PathBuf;
use std::time::Duration;

/// Events reported over the lifetime of one generation job.
#[derive(Debug, Clone)]
pub enum ProgressEvent {
    /// The creation request is about to be sent
    SubmissionStarted {
        /// Model tier wire value
        model: String,
        /// Clip length in seconds
        duration_secs: u32,
        /// Resolution wire value (WIDTHxHEIGHT)
        resolution: String,
        /// Prompt, truncated for display
        prompt_preview: String,
        /// Reference image path, when one is attached
        reference_image: Option<PathBuf>,
    },

    /// The server accepted the request and assigned a job identifier
    JobCreated {
        job_id: String,
    },

    /// One status poll completed
    PollTick {
        /// Time since submission
        elapsed: Duration,
        /// Status reported by the server
        status: JobStatus,
        /// Completion percentage (0 when the server omits it)
        progress: u8,
    },

    /// The job completed and the content download is starting
    DownloadStarted,

    /// The artifact was written to disk
    Complete {
        output_path: PathBuf,
        bytes_written: u64,
        elapsed: Duration,
    },
}

/// Trait for receiving progress events during generation.
pub trait ProgressCallback: Send + Sync {
    /// Called when a progress event occurs.
    fn on_progress(&self, event: &ProgressEvent);
}

/// No-op implementation of ProgressCallback that does nothing.
///
/// Useful when progress reporting is not needed, such as in tests or when
/// running in a non-interactive environment.
#[derive(Debug, Clone, Default)]
pub struct NullProgressCallback;

impl ProgressCallback for NullProgressCallback {
    fn on_progress(&self, _event: &ProgressEvent) {}
}
