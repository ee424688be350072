//! Log level and line format selection
//!
//! The configuration is built once from the CLI flags and turned into a
//! `tracing::Dispatch`. The caller installs it for the duration of the run
//! with `tracing::dispatcher::with_default`, so nothing is registered as a
//! process-wide default.

use std::io::IsTerminal;
use tracing::Dispatch;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::MakeWriter;

/// Verbosity selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionMode {
  /// Errors only, bare messages
  Quiet,
  /// Info and above, bare messages
  Normal,
  /// Debug and above, with timestamp, target and level
  Verbose,
}

impl ExecutionMode {
  /// `-q` wins over `-v` when both are given
  pub fn from_flags(quiet: bool, verbose: bool) -> Self {
    if quiet {
      ExecutionMode::Quiet
    } else if verbose {
      ExecutionMode::Verbose
    } else {
      ExecutionMode::Normal
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogConfig {
  pub mode: ExecutionMode,
}

impl LogConfig {
  pub fn new(mode: ExecutionMode) -> Self {
    Self { mode }
  }

  pub fn level(&self) -> LevelFilter {
    match self.mode {
      ExecutionMode::Quiet => LevelFilter::ERROR,
      ExecutionMode::Normal => LevelFilter::INFO,
      ExecutionMode::Verbose => LevelFilter::DEBUG,
    }
  }

  /// Dispatcher writing to stderr, colored when stderr is a terminal
  pub fn dispatch(&self) -> Dispatch {
    self.dispatch_to(std::io::stderr, std::io::stderr().is_terminal())
  }

  /// Dispatcher writing to an arbitrary writer
  pub fn dispatch_to<W>(&self, writer: W, ansi: bool) -> Dispatch
  where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
  {
    let builder = tracing_subscriber::fmt()
      .with_writer(writer)
      .with_max_level(self.level())
      .with_ansi(ansi);

    match self.mode {
      ExecutionMode::Verbose => Dispatch::new(builder.with_target(true).with_level(true).finish()),
      ExecutionMode::Quiet | ExecutionMode::Normal => {
        Dispatch::new(builder.without_time().with_target(false).with_level(false).finish())
      }
    }
  }
}
