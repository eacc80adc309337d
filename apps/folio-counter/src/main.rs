//! # Folio Counter Entry Point
//!
//! The actual setup is in lib.rs so the session can be driven from tests.

use std::process::ExitCode;

fn main() -> ExitCode {
    match folio_counter::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("folio-counter: {err}");
            ExitCode::FAILURE
        }
    }
}
