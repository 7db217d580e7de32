//! Shared plumbing for the command line tools

use std::process::ExitCode;

use clap::Parser;

/// Logs warnings and errors by default (`RUST_LOG` overrides)
pub fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}

/// Parses the command line; usage errors exit with 1
pub fn parse_args<P: Parser>() -> Result<P, ExitCode> {
    P::try_parse().map_err(|e| {
        let _ = e.print();
        if e.use_stderr() {
            ExitCode::FAILURE
        } else {
            // --help and --version
            ExitCode::SUCCESS
        }
    })
}

/// Prints the error chain (if any) and returns the exit code
pub fn report(result: anyhow::Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
