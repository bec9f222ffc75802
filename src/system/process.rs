//! External command execution for the Unix resolver.

use std::fmt;
use std::process::Command;

use thiserror::Error;

/// Error type for external command execution.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// The command could not be started.
    #[error("Failed to run '{command}': {source}")]
    Spawn {
        /// The command that failed to start.
        command: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Specification of an external command whose output the resolver parses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessCommand {
    program: &'static str,
    args: Vec<String>,
}

impl ProcessCommand {
    /// Creates a command spec from a program and its arguments.
    #[must_use]
    pub const fn new(program: &'static str, args: Vec<String>) -> Self {
        Self { program, args }
    }

    /// The "show routing table" command (`netstat -rn`).
    #[must_use]
    pub fn route_table() -> Self {
        Self::new("netstat", vec!["-rn".to_string()])
    }

    /// The "show interface configuration" command.
    ///
    /// Scoped to a single interface when a name is given (`ifconfig <name>`),
    /// otherwise listing every interface (`ifconfig -a`).
    #[must_use]
    pub fn interface_config(interface: Option<&str>) -> Self {
        let args = interface.map_or_else(|| vec!["-a".to_string()], |name| vec![name.to_string()]);
        Self::new("ifconfig", args)
    }

    /// Returns the program name.
    #[must_use]
    pub const fn program(&self) -> &'static str {
        self.program
    }

    /// Returns the program arguments.
    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl fmt::Display for ProcessCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Trait for running an external command and capturing its text output.
///
/// # Design
///
/// - All external dependencies should implement this trait
/// - Enables dependency injection for testing with mock implementations
/// - The real implementation is [`SystemProcessRunner`]
pub trait ProcessRunner: Send + Sync {
    /// Runs the command and returns its captured standard output.
    ///
    /// Missing or empty output is a normal outcome consumed by the
    /// resolver's parsing, not a fault; only a command that cannot be
    /// started is an error.
    ///
    /// # Errors
    ///
    /// Returns [`ProcessError::Spawn`] when the program cannot be started.
    fn run(&self, command: &ProcessCommand) -> Result<String, ProcessError>;
}

/// Real [`ProcessRunner`] backed by [`std::process::Command`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProcessRunner {
    _private: (),
}

impl SystemProcessRunner {
    /// Creates a new system process runner.
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }
}

impl ProcessRunner for SystemProcessRunner {
    fn run(&self, command: &ProcessCommand) -> Result<String, ProcessError> {
        tracing::debug!(command = %command, "running accessor command");

        let output = Command::new(command.program())
            .args(command.args())
            .output()
            .map_err(|source| ProcessError::Spawn {
                command: command.to_string(),
                source,
            })?;

        // A non-zero exit with no usable stdout reads as "nothing found";
        // the exit status itself carries no signal the resolver consumes.
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
