//! `rtr -V` - Version and license message

use anyhow::{Context, Result};
use std::io::Write;

pub fn version_message() -> String {
  format!(
    "{} {}\n{}\nLicense: {}",
    env!("CARGO_PKG_NAME"),
    env!("CARGO_PKG_VERSION"),
    env!("CARGO_PKG_DESCRIPTION"),
    env!("CARGO_PKG_LICENSE"),
  )
}

/// Print the version and license message to stdout
pub fn run_version() -> Result<()> {
  let mut stdout = std::io::stdout().lock();
  writeln!(stdout, "{}", version_message()).context("Failed to write version message")?;
  Ok(())
}
