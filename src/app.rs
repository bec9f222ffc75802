//! Application startup and utilities.
//!
//! This module contains the exit codes and tracing setup that support
//! the main entry point.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Application exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    /// Success (exit code 0) - a MAC address was resolved and printed.
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// No MAC address exists on this host (exit code 1). A legitimate,
    /// silent outcome.
    pub const NOT_FOUND: ExitCode = ExitCode::FAILURE;

    /// Accessor failure (exit code 2) - a command, query, or registry
    /// collaborator broke.
    ///
    /// Note: This is a function rather than a constant because `ExitCode::from()` is not `const fn`.
    pub fn accessor_error() -> ExitCode {
        ExitCode::from(2)
    }
}

/// Sets up the tracing subscriber for logging.
pub fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
