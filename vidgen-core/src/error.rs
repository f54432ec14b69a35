use thiserror::Error;

/// Custom error types for vidgen
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("OPENAI_API_KEY environment variable not set")]
    MissingApiKey,

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Invalid parameter: {0}")]
    Validation(String),

    #[error("Input image not found: {0}")]
    InputNotFound(String),

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Video generation failed: {0}")]
    GenerationFailed(String),

    #[error("Video generation timed out after {elapsed_secs} seconds (job {job_id} may still be processing)")]
    Timeout { job_id: String, elapsed_secs: u64 },
}

/// Result type for vidgen operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;
