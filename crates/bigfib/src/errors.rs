//! Error handling and exit codes.

use bigfib_core::{exit_codes, FibError};

/// Map a calculation error to its process exit code.
#[must_use]
pub fn handle_error(err: &FibError) -> i32 {
    match err {
        FibError::Parse(_) | FibError::InvalidArgument(_) => exit_codes::ERROR_INVALID_INPUT,
        FibError::Config(_) => exit_codes::ERROR_CONFIG,
        FibError::Mismatch => exit_codes::ERROR_MISMATCH,
    }
}

/// Exit code for any error surfaced by [`crate::app::run`].
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<FibError>()
        .map_or(exit_codes::ERROR_GENERIC, handle_error)
}
