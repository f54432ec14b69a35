// vidgen-cli/src/terminal.rs
//
// Terminal presentation for the CLI: the submission summary, per-poll status
// lines, and the final result. Colors are applied only when the stream is a
// terminal, so piped output stays clean.

use owo_colors::{OwoColorize, Stream};
use std::io::{self, Write};
use vidgen_core::{format_bytes, format_duration, ProgressCallback, ProgressEvent};

/// Prints an indented "Label: value" line with a bold label.
pub fn print_labeled(label: &str, value: &str) {
    let label = format!("{label}:");
    println!(
        "  {} {}",
        label.if_supports_color(Stream::Stdout, |t| t.bold()),
        value
    );
}

/// Prints a green success line.
pub fn print_success(message: &str) {
    println!(
        "{} {}",
        "SUCCESS:".if_supports_color(Stream::Stdout, |t| t.green()),
        message
    );
}

/// Prints a red error line to stderr.
pub fn print_error(message: &str) {
    eprintln!(
        "{} {}",
        "Error:".if_supports_color(Stream::Stderr, |t| t.red()),
        message
    );
}

/// [`ProgressCallback`] implementation that renders job progress as plain
/// status lines, one per poll, mirroring what the poll loop observes.
#[derive(Debug, Default)]
pub struct TerminalProgress;

impl ProgressCallback for TerminalProgress {
    fn on_progress(&self, event: &ProgressEvent) {
        match event {
            ProgressEvent::SubmissionStarted {
                model,
                duration_secs,
                resolution,
                prompt_preview,
                reference_image,
            } => {
                println!("Creating video generation job...");
                print_labeled("Model", model);
                print_labeled("Duration", &format!("{duration_secs}s"));
                print_labeled("Size", resolution);
                print_labeled("Prompt", prompt_preview);
                if let Some(image) = reference_image {
                    print_labeled("Reference image", &image.display().to_string());
                }
            }
            ProgressEvent::JobCreated { job_id } => {
                println!("Job created: {job_id}");
            }
            ProgressEvent::PollTick {
                elapsed,
                status,
                progress,
            } => {
                println!(
                    "  [{}s] Status: {} | Progress: {}%",
                    elapsed.as_secs(),
                    status,
                    progress
                );
                io::stdout().flush().ok();
            }
            ProgressEvent::DownloadStarted => {
                println!("Downloading video...");
            }
            ProgressEvent::Complete {
                output_path,
                bytes_written,
                elapsed,
            } => {
                print_success(&format!(
                    "Video saved to {} ({}, {} total)",
                    output_path.display(),
                    format_bytes(*bytes_written),
                    format_duration(elapsed.as_secs_f64())
                ));
            }
        }
    }
}
