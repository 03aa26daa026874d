//! pwforge - Argon2 password hashing from the command line
//!
//! Reads the password from stdin (so it never shows up in process listings),
//! takes the salt and cost options from the arguments, prints the raw digest
//! and the encoded credential string, then verifies the credential against
//! the same password as a self-check.

mod args;
mod orchestrator;

use std::io;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use tracing::debug;

use pwforge_core::{Argon2Engine, Password, Result};

use crate::args::Args;

/// Exit status when the salt argument is missing (usage is shown)
const EXIT_MISSING_ARGS: u8 = 2;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if err.kind() == ErrorKind::MissingRequiredArgument => {
            let _ = err.print();
            return ExitCode::from(EXIT_MISSING_ARGS);
        }
        Err(err) if err.kind() == ErrorKind::DisplayVersion => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            // malformed or out-of-range values, unknown flags, missing values
            let _ = err.print();
            return ExitCode::FAILURE;
        }
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

// The password is owned by this frame, so its zeroize-on-drop scrub runs
// before main picks the exit status, on the error paths included.
fn run(args: &Args) -> Result<()> {
    let params = args.to_params();
    debug!("resolved parameters: {:?}", params);

    let mut stdin = io::stdin().lock();
    let password = Password::read_from(&mut stdin)?;

    let engine = Argon2Engine;
    let mut stdout = io::stdout().lock();
    orchestrator::run(&engine, &params, &password, args.salt.as_bytes(), &mut stdout)
}
