//! Process exit codes for failed commands.

use crate::error::Error;

/// Process exit code for a failed command.
///
/// Distinguishes bad input, infeasible rules and an exhausted time budget so
/// scripts can react without parsing messages.
#[must_use]
pub const fn exit_code(error: &Error) -> i32 {
    match error {
        Error::InvalidInput(_) => 3,
        Error::Infeasible(_) => 4,
        Error::SearchTimedOut { .. } => 5,
        Error::Config(_) => 6,
        Error::Json(_) | Error::Io(_) | Error::WorkerPool(_) => 1,
    }
}
