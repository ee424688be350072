//! Integration tests for flags and log output

use crate::helpers::*;
use anyhow::Result;

#[test]
fn test_default_output_is_bare_info() -> Result<()> {
  let tools = FakeToolchain::new()?;
  tools.tool("cppcheck", "echo 'Checking src/main.c ...'")?;

  let output = tools.run_rtr(&["-t", "cppcheck"], &cmake_vars())?;

  assert_eq!(output.status.code(), Some(0));
  let stderr = stderr_of(&output);
  assert!(stderr.lines().any(|l| l == "CPPCHECK: successful"), "stderr: {}", stderr);
  assert!(stderr.contains("Checking src/main.c ..."));
  assert!(!stderr.contains("Executing"));
  assert!(!stderr.contains("INFO"));
  Ok(())
}

#[test]
fn test_quiet_suppresses_info() -> Result<()> {
  let tools = FakeToolchain::new()?;
  tools.tool("cppcheck", "echo 'src/a.c:1: error' >&2")?;

  let output = tools.run_rtr(&["-q"], &cmake_vars())?;

  assert_eq!(output.status.code(), Some(1));
  let stderr = stderr_of(&output);
  assert!(!stderr.contains("CPPCHECK"), "stderr: {}", stderr);
  assert!(!stderr.contains("Configuring"));
  Ok(())
}

#[test]
fn test_verbose_adds_debug_lines() -> Result<()> {
  let tools = FakeToolchain::new()?;

  let output = tools.run_rtr(&["-v", "-t", "cppcheck"], &cmake_vars())?;

  assert_eq!(output.status.code(), Some(0));
  let stderr = stderr_of(&output);
  let executing = stderr
    .lines()
    .find(|l| l.ends_with("Executing cppcheck --enable=all src"))
    .unwrap_or_else(|| panic!("no debug line in: {}", stderr));
  let line = executing.as_bytes();
  assert!(
    line.len() > 5 && line[..4].iter().all(u8::is_ascii_digit) && line[4] == b'-',
    "no timestamp on: {}",
    executing
  );
  assert!(executing.contains("DEBUG"));
  assert!(executing.contains("rtr::"));
  Ok(())
}

#[test]
fn test_quiet_wins_over_verbose() -> Result<()> {
  let tools = FakeToolchain::new()?;

  let output = tools.run_rtr(&["-q", "-v"], &cmake_vars())?;

  assert_eq!(output.status.code(), Some(0));
  assert!(stderr_of(&output).is_empty(), "stderr: {}", stderr_of(&output));
  Ok(())
}

#[test]
fn test_verbosity_does_not_change_outcome() -> Result<()> {
  let tools = FakeToolchain::new()?;
  tools.tool("ctest", "exit 8")?;

  for flags in [&[][..], &["-q"][..], &["-v"][..]] {
    let output = tools.run_rtr(flags, &cmake_vars())?;
    assert_eq!(output.status.code(), Some(1), "flags: {:?}", flags);
  }
  Ok(())
}

#[test]
fn test_unknown_check_is_a_usage_error() -> Result<()> {
  let tools = FakeToolchain::new()?;

  let output = tools.run_rtr(&["-t", "clang-tidy"], &cmake_vars())?;

  assert_eq!(output.status.code(), Some(2));
  assert!(stderr_of(&output).contains("clang-tidy"));
  assert!(tools.invocations()?.is_empty());
  Ok(())
}

#[test]
fn test_version_flag_prints_and_exits() -> Result<()> {
  let tools = FakeToolchain::new()?;

  let output = tools.run_rtr(&["-V"], &cmake_vars())?;

  assert_eq!(output.status.code(), Some(0));
  let stdout = stdout_of(&output);
  assert!(stdout.starts_with("rtr "), "stdout: {}", stdout);
  assert!(stdout.contains("License: GPL-2.0-only"));
  assert!(tools.invocations()?.is_empty());
  Ok(())
}
