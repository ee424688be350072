//! Check trait abstraction for the code-quality validations
//!
//! Every validation implements the `Check` trait. The registry owns one
//! instance per `CheckName` and runs them in a fixed order.

use crate::core::env::CheckEnv;
use crate::core::error::RtrResult;
use crate::core::exec::{CommandOutput, CommandRunner};
use clap::ValueEnum;
use std::fmt;
use tracing::info;

/// The four validations rtr knows about, in registry order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum)]
pub enum CheckName {
  /// Static analysis with cppcheck
  Cppcheck,
  /// Source formatting
  Format,
  /// CMake configure and build
  Build,
  /// Unit tests through ctest
  Tests,
}

impl CheckName {
  pub const ALL: [CheckName; 4] = [CheckName::Cppcheck, CheckName::Format, CheckName::Build, CheckName::Tests];

  pub fn as_str(self) -> &'static str {
    match self {
      CheckName::Cppcheck => "cppcheck",
      CheckName::Format => "format",
      CheckName::Build => "build",
      CheckName::Tests => "tests",
    }
  }
}

impl fmt::Display for CheckName {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Result of running a check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
  /// Name of the check that ran
  pub check_name: String,
  /// Whether the check passed
  pub passed: bool,
  /// Short human-readable outcome
  pub message: String,
}

impl CheckResult {
  /// Create a passing check result
  pub fn pass(check_name: impl Into<String>, message: impl Into<String>) -> Self {
    Self {
      check_name: check_name.into(),
      passed: true,
      message: message.into(),
    }
  }

  /// Create a failing check result
  pub fn fail(check_name: impl Into<String>, message: impl Into<String>) -> Self {
    Self {
      check_name: check_name.into(),
      passed: false,
      message: message.into(),
    }
  }
}

/// Context passed to checks
pub struct CheckContext<'a> {
  /// Executes the external tools
  pub runner: &'a dyn CommandRunner,
  /// Environment captured at startup
  pub env: &'a CheckEnv,
}

/// A single code-quality validation
pub trait Check {
  /// Registry name, as accepted by `--test`
  fn name(&self) -> CheckName;

  /// Human-readable description of what this check validates
  fn description(&self) -> &str;

  /// Run the check and return a result
  fn run(&self, ctx: &CheckContext<'_>) -> RtrResult<CheckResult>;
}

/// Report a tool run that must exit 0 with an empty stderr.
///
/// Logs `<LABEL>: successful` and stdout, or `<LABEL>: fail` and stderr.
pub(crate) fn report_clean_run(name: CheckName, label: &str, output: &CommandOutput) -> CheckResult {
  if output.is_clean() {
    info!("{}: successful", label);
    info!("{}", output.stdout_lossy());
    CheckResult::pass(name.as_str(), format!("{} passed", label.to_lowercase()))
  } else {
    info!("{}: fail", label);
    info!("{}", output.stderr_lossy());
    let reason = match output.code {
      Some(0) => "wrote to stderr".to_string(),
      Some(code) => format!("exited with code {}", code),
      None => "terminated by signal".to_string(),
    };
    CheckResult::fail(name.as_str(), format!("{} {}", label.to_lowercase(), reason))
  }
}
