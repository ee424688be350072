//! Error types for rtr
//!
//! Check adapters report "the tool failed" through `CheckResult`, not through
//! this type. `RtrError` covers the cases where a check could not even be
//! attempted, such as the shell failing to spawn. The check registry turns
//! those into failed results, so every error still ends up as a boolean
//! failure for the aggregate.

use std::fmt;
use std::io;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
  /// Every selected check passed
  Success = 0,
  /// At least one selected check failed
  Failure = 1,
}

impl ExitCode {
  /// Map the aggregate result to an exit code
  pub fn from_aggregate(passed: bool) -> Self {
    if passed { ExitCode::Success } else { ExitCode::Failure }
  }

  /// Convert to u8 for `std::process::ExitCode`
  pub fn as_u8(self) -> u8 {
    self as u8
  }
}

impl From<ExitCode> for std::process::ExitCode {
  fn from(code: ExitCode) -> Self {
    std::process::ExitCode::from(code.as_u8())
  }
}

/// Main error type for rtr
#[derive(Debug)]
pub enum RtrError {
  /// The shell could not be started for a command line
  Spawn { command: String, source: io::Error },
}

impl RtrError {
  /// Create a spawn error for the given command line
  pub fn spawn(command: impl Into<String>, source: io::Error) -> Self {
    RtrError::Spawn {
      command: command.into(),
      source,
    }
  }
}

impl fmt::Display for RtrError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      RtrError::Spawn { command, source } => write!(f, "failed to execute '{}': {}", command, source),
    }
  }
}

impl std::error::Error for RtrError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      RtrError::Spawn { source, .. } => Some(source),
    }
  }
}

/// Result type alias for rtr operations
pub type RtrResult<T> = Result<T, RtrError>;
