//! Core library for submitting video generation jobs to a remote
//! generative-media API, polling them to completion, and downloading the
//! resulting file.
//!
//! The workflow is deliberately linear: validate the enumerated parameters,
//! issue one creation call, poll the job status at a fixed interval until a
//! terminal state or timeout, then fetch and persist the binary result.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use vidgen_core::{
//!     generate_video, CoreConfig, GenerationRequest, NullProgressCallback,
//!     Resolution, VideoApiClient, VideoModel, ClipDuration,
//! };
//! use std::path::Path;
//!
//! let config = CoreConfig::from_env().unwrap();
//! let client = VideoApiClient::new(&config).unwrap();
//!
//! let request = GenerationRequest::new(
//!     "A sunset over mountains",
//!     VideoModel::Sora2,
//!     ClipDuration::Seconds8,
//!     Resolution::Landscape720p,
//! );
//!
//! let outcome = generate_video(
//!     &client,
//!     &config,
//!     &request,
//!     Path::new("sunset.mp4"),
//!     &NullProgressCallback,
//! )
//! .unwrap();
//! println!("saved {} bytes", outcome.bytes_written);
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod generation;
pub mod job;
pub mod params;
pub mod progress;
pub mod utils;

// Re-exports for public API
pub use api::VideoApiClient;
pub use config::CoreConfig;
pub use error::{CoreError, CoreResult};
pub use generation::{generate_video, GenerationOutcome};
pub use job::{JobStatus, VideoJob};
pub use params::{ClipDuration, GenerationRequest, Resolution, VideoModel};
pub use progress::{NullProgressCallback, ProgressCallback, ProgressEvent};
pub use utils::{format_bytes, format_duration};
