//! Environment-driven configuration for the checks
//!
//! rtr has no config file. Every tool invocation is assembled from four
//! environment variables, captured once at startup so checks never read the
//! process environment directly. Values are kept as `OsString`; bytes that
//! are not valid UTF-8 reach the shell unchanged.

use std::ffi::{OsStr, OsString};
use tracing::warn;

/// Argument string for cppcheck
pub const CPPCHECK_ARGS: &str = "CPPCHECKARGS";
/// Argument string for the formatter
pub const FORMAT_ARGS: &str = "FORMATARGS";
/// CMake build output directory
pub const CMAKE_BUILDDIR: &str = "CMAKE_BUILDDIR";
/// CMake build configuration (Release, Debug, ...)
pub const CMAKE_BUILD_TYPE: &str = "CMAKE_BUILD_TYPE";

const KNOWN_VARS: [&str; 4] = [CPPCHECK_ARGS, FORMAT_ARGS, CMAKE_BUILDDIR, CMAKE_BUILD_TYPE];

/// Snapshot of the environment variables consumed by the checks
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckEnv {
  cppcheck_args: Option<OsString>,
  format_args: Option<OsString>,
  build_dir: Option<OsString>,
  build_type: Option<OsString>,
}

impl CheckEnv {
  /// Capture the variables from the process environment.
  ///
  /// Missing variables are not an error: they read as empty and the
  /// resulting command line is still handed to the shell. Each one is
  /// reported once here.
  pub fn from_env() -> Self {
    let mut present = Vec::new();
    for name in KNOWN_VARS {
      match std::env::var_os(name) {
        Some(value) => present.push((name, value)),
        None => warn!("{} is not set", name),
      }
    }
    Self::from_vars(present)
  }

  /// Build from explicit name/value pairs. Unknown names are ignored.
  pub fn from_vars<I, K, V>(vars: I) -> Self
  where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<OsString>,
  {
    let mut env = Self::default();
    for (name, value) in vars {
      let slot = match name.as_ref() {
        CPPCHECK_ARGS => &mut env.cppcheck_args,
        FORMAT_ARGS => &mut env.format_args,
        CMAKE_BUILDDIR => &mut env.build_dir,
        CMAKE_BUILD_TYPE => &mut env.build_type,
        _ => continue,
      };
      *slot = Some(value.into());
    }
    env
  }

  pub fn cppcheck_args(&self) -> &OsStr {
    value_or_empty(&self.cppcheck_args)
  }

  pub fn format_args(&self) -> &OsStr {
    value_or_empty(&self.format_args)
  }

  pub fn build_dir(&self) -> &OsStr {
    value_or_empty(&self.build_dir)
  }

  pub fn build_type(&self) -> &OsStr {
    value_or_empty(&self.build_type)
  }
}

fn value_or_empty(value: &Option<OsString>) -> &OsStr {
  value.as_deref().unwrap_or_default()
}
