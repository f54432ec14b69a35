// vidgen-cli/src/logging.rs
//
// Logging setup for the CLI. Uses the standard `log` facade with
// `env_logger` as the backend, honoring RUST_LOG:
// - RUST_LOG=info: normal operation logs from vidgen-core
// - RUST_LOG=debug: per-request logging from the API client
//
// User-facing output (submission summary, poll lines) goes through the
// terminal module, not the logger, so it is always visible.

use env_logger::Env;

/// Initializes env_logger with warnings visible by default.
pub fn init() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp_secs()
        .init();
}
