// vidgen-cli/tests/cli_integration.rs
//
// Binary-level tests: credential and parameter failures must exit non-zero
// before any network call, and the full submit/poll/download flow is
// exercised against a mock server through the OPENAI_BASE_URL override.

use assert_cmd::Command;
use predicates::str::contains;
use std::error::Error;
use tempfile::tempdir;

// Helper function to get the path to the compiled binary with a clean
// credential environment.
fn vidgen_cmd() -> Command {
    let mut cmd = Command::cargo_bin("vidgen").expect("Failed to find vidgen binary");
    cmd.env_remove("OPENAI_API_KEY").env_remove("OPENAI_BASE_URL");
    cmd
}

#[test]
fn test_missing_api_key_is_fatal_before_anything_else() {
    let mut cmd = vidgen_cmd();
    cmd.arg("generate").arg("--prompt").arg("A sunset");

    cmd.assert()
        .failure()
        .code(1)
        .stderr(contains("OPENAI_API_KEY environment variable not set"));
}

#[test]
fn test_invalid_model_rejected() {
    let mut cmd = vidgen_cmd();
    cmd.env("OPENAI_API_KEY", "test-key")
        .arg("generate")
        .arg("--prompt")
        .arg("A sunset")
        .arg("--model")
        .arg("sora-1");

    cmd.assert()
        .failure()
        .code(1)
        .stderr(contains("Invalid model 'sora-1'"));
}

#[test]
fn test_invalid_seconds_rejected() {
    let mut cmd = vidgen_cmd();
    cmd.env("OPENAI_API_KEY", "test-key")
        .arg("generate")
        .arg("--prompt")
        .arg("A sunset")
        .arg("--seconds")
        .arg("5");

    cmd.assert()
        .failure()
        .code(1)
        .stderr(contains("Invalid seconds '5'"));
}

#[test]
fn test_pro_only_size_rejected_for_base_model() {
    let mut cmd = vidgen_cmd();
    cmd.env("OPENAI_API_KEY", "test-key")
        .arg("generate")
        .arg("--prompt")
        .arg("A sunset")
        .arg("--size")
        .arg("1792x1024");

    cmd.assert()
        .failure()
        .code(1)
        .stderr(contains("requires model 'sora-2-pro'"));
}

#[test]
fn test_missing_reference_image_rejected() {
    let mut cmd = vidgen_cmd();
    cmd.env("OPENAI_API_KEY", "test-key")
        .arg("generate")
        .arg("--prompt")
        .arg("A sunset")
        .arg("--input")
        .arg("surely/does/not/exist.png");

    cmd.assert()
        .failure()
        .code(1)
        .stderr(contains("Input image not found"));
}

#[test]
fn test_missing_prompt_rejected_by_clap() {
    let mut cmd = vidgen_cmd();
    cmd.env("OPENAI_API_KEY", "test-key").arg("generate");

    cmd.assert().failure().stderr(contains("--prompt"));
}

#[test]
fn test_full_generation_flow_saves_video() -> Result<(), Box<dyn Error>> {
    let mut server = mockito::Server::new();
    let video_bytes: &[u8] = b"fake-mp4-bytes";

    let create = server
        .mock("POST", "/videos")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id":"video_cli","status":"queued"}"#)
        .create();
    let retrieve = server
        .mock("GET", "/videos/video_cli")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id":"video_cli","status":"completed","progress":100}"#)
        .create();
    let download = server
        .mock("GET", "/videos/video_cli/content")
        .match_query(mockito::Matcher::UrlEncoded(
            "variant".into(),
            "video".into(),
        ))
        .with_status(200)
        .with_body(video_bytes)
        .create();

    let output_dir = tempdir()?;
    let output_path = output_dir.path().join("clips/sunset.mp4");

    let mut cmd = vidgen_cmd();
    cmd.env("OPENAI_API_KEY", "test-key")
        .env("OPENAI_BASE_URL", server.url())
        .arg("generate")
        .arg("--prompt")
        .arg("A sunset over mountains")
        .arg("--output")
        .arg(&output_path);

    cmd.assert()
        .success()
        .stdout(contains("Job created: video_cli"))
        .stdout(contains("Status: completed"))
        .stdout(contains("SUCCESS"))
        // Total time is rendered as HH:MM:SS; a mocked run stays under 10s.
        .stdout(contains("00:00:0"))
        .stdout(contains("total)"));

    create.assert();
    retrieve.assert();
    download.assert();

    // The client writes exactly the downloaded bytes, creating directories.
    assert_eq!(std::fs::read(&output_path)?, video_bytes);
    Ok(())
}

#[test]
fn test_failed_job_exits_nonzero_without_download() -> Result<(), Box<dyn Error>> {
    let mut server = mockito::Server::new();

    let create = server
        .mock("POST", "/videos")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id":"video_cli_bad","status":"queued"}"#)
        .create();
    let retrieve = server
        .mock("GET", "/videos/video_cli_bad")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"id":"video_cli_bad","status":"failed","error":{"message":"Prompt rejected by moderation"}}"#,
        )
        .create();
    let download = server
        .mock("GET", "/videos/video_cli_bad/content")
        .match_query(mockito::Matcher::Any)
        .expect(0)
        .create();

    let output_dir = tempdir()?;
    let output_path = output_dir.path().join("never.mp4");

    let mut cmd = vidgen_cmd();
    cmd.env("OPENAI_API_KEY", "test-key")
        .env("OPENAI_BASE_URL", server.url())
        .arg("generate")
        .arg("--prompt")
        .arg("Something disallowed")
        .arg("--output")
        .arg(&output_path);

    cmd.assert()
        .failure()
        .code(1)
        .stderr(contains("Video generation failed: Prompt rejected by moderation"));

    create.assert();
    retrieve.assert();
    download.assert();
    assert!(!output_path.exists());
    Ok(())
}
