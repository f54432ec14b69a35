// ============================================================================
// vidgen-core/src/job.rs
// ============================================================================
//
// JOB WIRE MODEL: Server-Side Job State as Observed Through Polling
//
// A job is a server-tracked unit of work representing one video generation
// request. The client only ever reads this state; all transitions happen on
// the server and are observed through the status endpoint.

use serde::Deserialize;
use std::fmt;

/// Server-side status of a generation job.
///
/// Wire values belong to the remote service. Statuses the client does not
/// know about deserialize as [`JobStatus::Unknown`] and are treated as
/// non-terminal, so new server states do not break the poll loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Queued,
    InProgress,
    Completed,
    Failed,
    #[serde(other)]
    Unknown,
}

impl JobStatus {
    /// Whether no further server-side transition will occur.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, JobStatus::Completed | JobStatus::Failed)
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            JobStatus::Queued => "queued",
            JobStatus::InProgress => "in_progress",
            JobStatus::Completed => "completed",
            JobStatus::Failed => "failed",
            JobStatus::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

/// Error detail attached to a failed job by the server.
#[derive(Debug, Clone, Deserialize)]
pub struct JobError {
    #[serde(default)]
    pub code: Option<String>,
    pub message: String,
}

/// One video generation job as returned by the remote API.
#[derive(Debug, Clone, Deserialize)]
pub struct VideoJob {
    /// Server-assigned job identifier
    pub id: String,

    /// Current status
    pub status: JobStatus,

    /// Completion percentage, when the server reports one
    #[serde(default)]
    pub progress: Option<u8>,

    /// Error detail, present on failed jobs
    #[serde(default)]
    pub error: Option<JobError>,
}

impl VideoJob {
    /// Completion percentage, defaulting to 0 when the server omits it.
    #[must_use]
    pub fn progress_percent(&self) -> u8 {
        self.progress.unwrap_or(0)
    }

    /// Server-provided failure message, when one exists.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_ref().map(|e| e.message.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_queued_job() {
        let job: VideoJob =
            serde_json::from_str(r#"{"id":"video_123","status":"queued"}"#).unwrap();
        assert_eq!(job.id, "video_123");
        assert_eq!(job.status, JobStatus::Queued);
        assert_eq!(job.progress_percent(), 0);
        assert!(job.error_message().is_none());
        assert!(!job.status.is_terminal());
    }

    #[test]
    fn test_deserialize_in_progress_with_progress() {
        let job: VideoJob = serde_json::from_str(
            r#"{"id":"video_123","status":"in_progress","progress":42}"#,
        )
        .unwrap();
        assert_eq!(job.status, JobStatus::InProgress);
        assert_eq!(job.progress_percent(), 42);
    }

    #[test]
    fn test_deserialize_failed_job_with_error() {
        let job: VideoJob = serde_json::from_str(
            r#"{"id":"video_123","status":"failed","error":{"code":"moderation_blocked","message":"Prompt rejected"}}"#,
        )
        .unwrap();
        assert_eq!(job.status, JobStatus::Failed);
        assert!(job.status.is_terminal());
        assert_eq!(job.error_message(), Some("Prompt rejected"));
    }

    #[test]
    fn test_unknown_status_is_tolerated() {
        let job: VideoJob =
            serde_json::from_str(r#"{"id":"video_123","status":"preprocessing"}"#).unwrap();
        assert_eq!(job.status, JobStatus::Unknown);
        assert!(!job.status.is_terminal());
    }

    #[test]
    fn test_null_progress_is_tolerated() {
        let job: VideoJob = serde_json::from_str(
            r#"{"id":"video_123","status":"queued","progress":null}"#,
        )
        .unwrap();
        assert_eq!(job.progress_percent(), 0);
    }
}
