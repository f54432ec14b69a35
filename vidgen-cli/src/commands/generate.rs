//! Implementation of the 'generate' subcommand.
//!
//! This module resolves the credential, parses and validates the enumerated
//! parameters, and delegates the submit/poll/download workflow to the
//! vidgen-core library.

use crate::cli::GenerateArgs;
use crate::terminal::TerminalProgress;

use vidgen_core::{
    generate_video, ClipDuration, CoreConfig, CoreResult, GenerationOutcome, GenerationRequest,
    Resolution, VideoApiClient, VideoModel,
};

use log::debug;
use std::time::Duration;

/// Runs one generation job from CLI arguments to a saved file.
///
/// The credential is resolved before any other work; parameter validation
/// happens before any network call. Any error maps to a non-zero exit in
/// main.
pub fn run_generate(args: GenerateArgs) -> CoreResult<GenerationOutcome> {
    // Credential first: absence is fatal prior to any other work.
    let mut config = CoreConfig::from_env()?;
    config.timeout = Duration::from_secs(args.timeout);

    let model: VideoModel = args.model.parse()?;
    let duration: ClipDuration = args.seconds.parse()?;
    let resolution: Resolution = args.size.parse()?;

    let mut request = GenerationRequest::new(args.prompt, model, duration, resolution);
    if let Some(image) = args.input {
        request = request.with_reference_image(image);
    }
    request.validate()?;

    debug!(
        "run started {} (model={}, seconds={}, size={}, timeout={}s)",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        model,
        duration,
        resolution,
        args.timeout
    );

    let client = VideoApiClient::new(&config)?;
    generate_video(&client, &config, &request, &args.output, &TerminalProgress)
}
