// vidgen-cli/src/main.rs
//
// Binary entry point for the vidgen CLI. Parses arguments, sets up logging,
// dispatches to the command implementation, and maps the result to the
// process exit code (0 on success, 1 on any failure).

use clap::Parser;
use std::process;

use vidgen_cli::cli::{Cli, Commands};
use vidgen_cli::{logging, run_generate, terminal};

fn main() {
    let cli = Cli::parse();

    logging::init();

    let result = match cli.command {
        Commands::Generate(args) => run_generate(args),
        // Add other command arms here -> { run_other_command(args) }
    };

    if let Err(e) = result {
        terminal::print_error(&e.to_string());
        process::exit(1);
    }
}
