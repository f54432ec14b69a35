//! Command implementations for the CLI.
//!
//! Each submodule contains the implementation of a specific command.

/// Module containing the implementation of the `generate` command.
/// This command submits a video generation job, polls it, and saves the result.
pub mod generate;
