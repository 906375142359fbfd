//! Error handling utilities
//!
//! This module provides centralized fatal error handling for the binaries.

use crate::error::{describe_error_code, UtilityError};
use std::fmt::Write;
use tracing::error;

/// Exit code for an error, without printing anything
pub fn exit_code_for(error: &anyhow::Error) -> i32 {
    error
        .downcast_ref::<UtilityError>()
        .map(UtilityError::exit_code)
        .unwrap_or(1)
}

/// Text printed to stderr for a fatal error
///
/// - For `UtilityError`: the user message, plus the code description and full chain in verbose mode
/// - For other errors: the error message, plus its causes in verbose mode
pub fn fatal_report(error: &anyhow::Error, verbose: u8) -> String {
    let mut report = String::new();

    if let Some(utility_err) = error.downcast_ref::<UtilityError>() {
        let _ = writeln!(report, "{}", utility_err.user_message());

        if verbose >= 1 {
            let code = utility_err.code();
            let _ = writeln!(report, "\nError E{:04}: {}", code, describe_error_code(code));
            let _ = writeln!(report, "\nContext Chain:\n{}", utility_err.developer_message());
        }
    } else {
        let _ = writeln!(report, "Error: {error}");

        if verbose >= 1 {
            let _ = writeln!(report, "\nError chain:");
            for (i, cause) in error.chain().enumerate() {
                let _ = writeln!(report, "  {}: {}", i, cause);
            }
        }
    }

    report
}

/// Handle fatal errors and exit with appropriate status code
pub fn handle_fatal_error(error: anyhow::Error, verbose: u8) -> ! {
    error!("Fatal error: {}", error);
    eprint!("{}", fatal_report(&error, verbose));
    std::process::exit(exit_code_for(&error))
}
