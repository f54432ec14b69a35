// ============================================================================
// vidgen-core/src/api.rs
// ============================================================================
//
// API CLIENT: Blocking HTTP Access to the Remote Video Generation Service
//
// This module wraps the three remote operations the client needs: create a
// generation job, retrieve its status, and download the finished content.
// The protocol belongs to the remote service; this is deliberately thin glue.
//
// KEY COMPONENTS:
// - VideoApiClient: blocking reqwest client with bearer authentication
// - Error envelope handling: non-2xx responses surface the server message

use crate::config::CoreConfig;
use crate::error::{CoreError, CoreResult};
use crate::job::VideoJob;
use crate::params::GenerationRequest;

use log::debug;
use reqwest::blocking::multipart::Form;
use reqwest::blocking::Response;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How long to wait for a connection to be established.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// JSON creation payload used when no reference image is attached.
#[derive(Debug, Serialize)]
struct CreateJobBody<'a> {
    model: &'static str,
    prompt: &'a str,
    seconds: &'static str,
    size: &'static str,
}

impl<'a> From<&'a GenerationRequest> for CreateJobBody<'a> {
    fn from(request: &'a GenerationRequest) -> Self {
        Self {
            model: request.model.as_str(),
            prompt: &request.prompt,
            seconds: request.duration.as_str(),
            size: request.resolution.as_str(),
        }
    }
}

/// Server error envelope: `{"error": {"message": "..."}}`.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

/// Blocking client for the remote video generation API.
pub struct VideoApiClient {
    http: reqwest::blocking::Client,
    base_url: String,
    api_key: String,
}

impl VideoApiClient {
    /// Builds a client from the given configuration.
    ///
    /// The overall request timeout is disabled because content downloads can
    /// legitimately take a long time; only connection setup is bounded.
    pub fn new(config: &CoreConfig) -> CoreResult<Self> {
        let http = reqwest::blocking::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(None::<Duration>)
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    /// Submits a generation job and returns the server's view of it.
    ///
    /// With a reference image the request goes out as a multipart form with
    /// an `input_reference` file part; the opened handle is owned by the
    /// form and closed when the form is consumed or dropped, on every exit
    /// path. Without an image the payload is plain JSON.
    pub fn create_job(&self, request: &GenerationRequest) -> CoreResult<VideoJob> {
        let url = format!("{}/videos", self.base_url);
        debug!("POST {}", url);

        let builder = self.http.post(&url).bearer_auth(&self.api_key);
        let response = match &request.reference_image {
            Some(image) => {
                let form = Form::new()
                    .text("model", request.model.as_str())
                    .text("prompt", request.prompt.clone())
                    .text("seconds", request.duration.as_str())
                    .text("size", request.resolution.as_str())
                    .file("input_reference", image)?;
                builder.multipart(form).send()?
            }
            None => builder.json(&CreateJobBody::from(request)).send()?,
        };

        let response = check(response)?;
        Ok(response.json::<VideoJob>()?)
    }

    /// Retrieves the current state of a job.
    pub fn get_job(&self, job_id: &str) -> CoreResult<VideoJob> {
        let url = format!("{}/videos/{}", self.base_url, job_id);
        debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.api_key)
            .send()?;
        let response = check(response)?;
        Ok(response.json::<VideoJob>()?)
    }

    /// Downloads the binary video content of a completed job.
    pub fn download_content(&self, job_id: &str) -> CoreResult<Vec<u8>> {
        let url = format!("{}/videos/{}/content", self.base_url, job_id);
        debug!("GET {}?variant=video", url);

        let response = self
            .http
            .get(&url)
            .query(&[("variant", "video")])
            .bearer_auth(&self.api_key)
            .send()?;
        let response = check(response)?;
        Ok(response.bytes()?.to_vec())
    }
}

/// Maps a non-2xx response to `CoreError::Api`, surfacing the server's error
/// message verbatim when the body carries the usual envelope.
fn check(response: Response) -> CoreResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().unwrap_or_default();
    Err(CoreError::Api {
        status: status.as_u16(),
        message: extract_error_message(&body, status),
    })
}

fn extract_error_message(body: &str, status: reqwest::StatusCode) -> String {
    if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(body) {
        return envelope.error.message;
    }
    if body.trim().is_empty() {
        status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string()
    } else {
        body.to_string()
    }
}
