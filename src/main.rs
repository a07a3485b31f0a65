use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use comphy::ComphyError;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.globals.verbose);

    match cli::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report(&err),
    }
}

/// Logs go to stderr so stdout stays a faithful copy of the child's output.
fn init_tracing(verbose: u8) {
    let fallback = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_env("COMPHY_LOG").unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn report(err: &anyhow::Error) -> ExitCode {
    match err.downcast_ref::<ComphyError>() {
        Some(ComphyError::Subprocess { code, stderr, .. }) => {
            // Nowhere left to report a failing stderr.
            relay_failure(stderr).ok();
            let code = code
                .and_then(|c| u8::try_from(c).ok())
                .filter(|c| *c != 0)
                .unwrap_or(1);
            ExitCode::from(code)
        }
        _ => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Print a failed child's stderr behind an `Error: ` prefix, newline-terminated.
fn relay_failure(stderr: &[u8]) -> io::Result<()> {
    let mut out = io::stderr().lock();
    out.write_all(b"Error: ")?;
    out.write_all(stderr)?;
    if !stderr.ends_with(b"\n") {
        out.write_all(b"\n")?;
    }
    out.flush()
}
