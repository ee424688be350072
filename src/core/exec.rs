//! Shell command execution
//!
//! Every check ends up here: a command line is handed to the platform shell,
//! both output streams are captured, and the caller decides what the exit
//! code and stderr mean. There is no timeout and no retry.

use crate::core::error::{RtrError, RtrResult};
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::process::Command;
use tracing::debug;

/// An external tool plus the argument string taken from the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInvocation {
  pub program: &'static str,
  pub args: OsString,
}

impl CommandInvocation {
  pub fn new(program: &'static str) -> Self {
    Self {
      program,
      args: OsString::new(),
    }
  }

  /// Append raw text to the argument string
  pub fn push(mut self, part: impl AsRef<OsStr>) -> Self {
    self.args.push(part);
    self
  }

  /// Full command line as passed to the shell
  pub fn command_line(&self) -> OsString {
    let mut line = OsString::from(self.program);
    line.push(" ");
    line.push(&self.args);
    line
  }
}

impl fmt::Display for CommandInvocation {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} {}", self.program, self.args.to_string_lossy())
  }
}

/// Captured result of a finished child process
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
  /// Exit code, `None` when the child was terminated by a signal
  pub code: Option<i32>,
  pub stdout: Vec<u8>,
  pub stderr: Vec<u8>,
}

impl CommandOutput {
  /// Exit code was zero
  pub fn exited_ok(&self) -> bool {
    self.code == Some(0)
  }

  /// Exit code was zero and nothing was written to stderr
  pub fn is_clean(&self) -> bool {
    self.exited_ok() && self.stderr.is_empty()
  }

  pub fn stdout_lossy(&self) -> String {
    String::from_utf8_lossy(&self.stdout).into_owned()
  }

  pub fn stderr_lossy(&self) -> String {
    String::from_utf8_lossy(&self.stderr).into_owned()
  }
}

/// Executes command lines on behalf of the checks
pub trait CommandRunner {
  /// Run `command_line` to completion and capture its output
  fn run(&self, command_line: &OsStr) -> RtrResult<CommandOutput>;

  /// Log and run an invocation
  fn invoke(&self, invocation: &CommandInvocation) -> RtrResult<CommandOutput> {
    debug!("Executing {}", invocation);
    self.run(&invocation.command_line())
  }
}

/// Runs command lines through the platform shell, inheriting the environment
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellRunner;

impl ShellRunner {
  fn shell(command_line: &OsStr) -> Command {
    let (shell, flag) = if cfg!(windows) { ("cmd", "/C") } else { ("sh", "-c") };
    let mut cmd = Command::new(shell);
    cmd.arg(flag).arg(command_line);
    cmd
  }
}

impl CommandRunner for ShellRunner {
  fn run(&self, command_line: &OsStr) -> RtrResult<CommandOutput> {
    let output = Self::shell(command_line)
      .output()
      .map_err(|e| RtrError::spawn(command_line.to_string_lossy(), e))?;

    debug!("'{}' exited with {}", command_line.to_string_lossy(), output.status);

    Ok(CommandOutput {
      code: output.status.code(),
      stdout: output.stdout,
      stderr: output.stderr,
    })
  }
}
