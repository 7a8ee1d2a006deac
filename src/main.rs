// Entrypoint for the CLI application.
// Keeps `main` small: parse arguments, set up logging and hand over to
// `cli::run`. Errors are printed once and turn into exit status 1.

use std::process::ExitCode;

use clap::Parser;
use storecli::cli::{self, Cli};
use storecli::logging;

fn main() -> ExitCode {
    let args = Cli::parse();

    if let Err(e) = logging::setup_logging(logging::level_for(args.verbose)) {
        eprintln!("Failed to set up logging: {}", e);
    }

    match cli::run(args) {
        Ok(()) => {
            println!("Done...");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
