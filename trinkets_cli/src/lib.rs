//! Shared plumbing for the `resize`, `pixelate` and `sort_image` binaries:
//! argument structs, image file I/O and the error type they report.

pub mod commands;
pub mod error;
pub mod image_io;
pub mod resize;

use std::process::ExitCode;

pub use error::CliError;

/// Maps a command result to the process exit code, printing the error to stderr.
pub fn exit_code(result: Result<(), CliError>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
