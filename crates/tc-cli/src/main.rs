//! transport_catalogue — build or serve the transit database.
//!
//! ```text
//! transport_catalogue make_base        < build_requests.json
//! transport_catalogue process_requests < stat_requests.json > answers.json
//! ```
//!
//! `make_base` writes the binary snapshot to the file named in the input's
//! `serialization_settings`; `process_requests` reads it back and prints the
//! response array to stdout.  Diagnostics go to stderr (`RUST_LOG=info` for
//! progress messages); the exit code is non-zero on usage, parse, build, or
//! snapshot errors.

use std::io;
use std::process::ExitCode;

use anyhow::Result;

fn print_usage() {
    eprintln!("Usage: transport_catalogue [make_base|process_requests]");
}

fn run(mode: &str) -> Result<bool> {
    match mode {
        "make_base" => {
            tc_query::make_base(io::stdin().lock())?;
            log::info!("make_base finished");
        }
        "process_requests" => {
            let stdout = io::stdout().lock();
            tc_query::process_requests(io::stdin().lock(), stdout)?;
        }
        _ => {
            print_usage();
            return Ok(false);
        }
    }
    Ok(true)
}

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        print_usage();
        return ExitCode::FAILURE;
    }

    match run(&args[1]) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(error) => {
            eprintln!("{error}");
            ExitCode::FAILURE
        }
    }
}
