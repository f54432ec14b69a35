// vidgen-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "Vidgen: Sora video generation client",
    long_about = "Submits video generation jobs to the Sora API via the vidgen-core library, \
polls them to completion, and downloads the result. Requires the OPENAI_API_KEY \
environment variable."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generates a video from a text prompt (optionally seeded with an image)
    Generate(GenerateArgs),
    // Add other subcommands here later (e.g., status, download)
}

#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Text prompt describing the video to generate
    #[arg(short = 'p', long, required = true, value_name = "TEXT")]
    pub prompt: String,

    /// Output file path
    #[arg(
        short = 'o',
        long,
        default_value = "generated_video.mp4",
        value_name = "OUTPUT_PATH"
    )]
    pub output: PathBuf,

    /// Optional reference image for image-to-video generation
    #[arg(short = 'i', long, value_name = "IMAGE_PATH")]
    pub input: Option<PathBuf>,

    /// Model to use (sora-2 or sora-2-pro)
    #[arg(short = 'm', long, default_value = "sora-2", value_name = "MODEL")]
    pub model: String,

    /// Video duration in seconds (4, 8, or 12)
    #[arg(short = 's', long, default_value = "8", value_name = "SECONDS")]
    pub seconds: String,

    /// Video resolution WxH (1280x720, 720x1280, 1792x1024, 1024x1792;
    /// the 1792 sizes require sora-2-pro)
    #[arg(long, default_value = "1280x720", value_name = "WIDTHxHEIGHT")]
    pub size: String,

    /// Max wait time for job completion, in seconds
    #[arg(long, default_value_t = 600, value_name = "SECONDS")]
    pub timeout: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_generate_basic_args() {
        let cli = Cli::parse_from([
            "vidgen",
            "generate",
            "--prompt",
            "A sunset over mountains",
        ]);

        match cli.command {
            Commands::Generate(args) => {
                assert_eq!(args.prompt, "A sunset over mountains");
                assert_eq!(args.output, PathBuf::from("generated_video.mp4"));
                assert!(args.input.is_none());
                assert_eq!(args.model, "sora-2");
                assert_eq!(args.seconds, "8");
                assert_eq!(args.size, "1280x720");
                assert_eq!(args.timeout, 600);
            }
        }
    }

    #[test]
    fn test_parse_generate_full_args() {
        let cli = Cli::parse_from([
            "vidgen",
            "generate",
            "-p",
            "Cinematic drone shot",
            "-o",
            "out/hd.mp4",
            "-i",
            "photo.jpg",
            "-m",
            "sora-2-pro",
            "-s",
            "12",
            "--size",
            "1792x1024",
            "--timeout",
            "900",
        ]);

        match cli.command {
            Commands::Generate(args) => {
                assert_eq!(args.prompt, "Cinematic drone shot");
                assert_eq!(args.output, PathBuf::from("out/hd.mp4"));
                assert_eq!(args.input, Some(PathBuf::from("photo.jpg")));
                assert_eq!(args.model, "sora-2-pro");
                assert_eq!(args.seconds, "12");
                assert_eq!(args.size, "1792x1024");
                assert_eq!(args.timeout, 900);
            }
        }
    }

    #[test]
    fn test_prompt_is_required() {
        assert!(Cli::try_parse_from(["vidgen", "generate"]).is_err());
    }
}
