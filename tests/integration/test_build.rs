//! Integration tests for the configure + build pipeline

use crate::helpers::*;
use anyhow::Result;

const BUILD_VARS: [(&str, &str); 2] = [("CMAKE_BUILDDIR", "/tmp/build"), ("CMAKE_BUILD_TYPE", "Release")];

#[test]
fn test_build_passes_when_configure_and_build_are_clean() -> Result<()> {
  let tools = FakeToolchain::new()?;

  let output = tools.run_rtr(&["-t", "build"], &BUILD_VARS)?;

  assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr_of(&output));
  assert_eq!(
    tools.invocations()?,
    vec![
      "cmake -B /tmp/build -DCMAKE_BUILD_TYPE=Release",
      "cmake --build /tmp/build --config Release",
    ]
  );
  Ok(())
}

#[test]
fn test_build_failure_after_configure() -> Result<()> {
  let tools = FakeToolchain::new()?;
  tools.tool("cmake", r#"[ "$1" = "--build" ] && exit 1
exit 0"#)?;

  let output = tools.run_rtr(&["-t", "build"], &BUILD_VARS)?;

  assert_eq!(output.status.code(), Some(1));
  let calls = tools.invocations()?;
  assert_eq!(calls.len(), 2);
  assert!(calls[0].starts_with("cmake -B"), "configure must run first: {:?}", calls);
  assert!(calls[1].starts_with("cmake --build"));
  Ok(())
}

#[test]
fn test_failed_configure_never_runs_build() -> Result<()> {
  let tools = FakeToolchain::new()?;
  tools.tool("cmake", r#"[ "$1" = "-B" ] && { echo "CMake Error" >&2; exit 1; }
exit 0"#)?;

  let output = tools.run_rtr(&["-t", "build"], &BUILD_VARS)?;

  assert_eq!(output.status.code(), Some(1));
  assert_eq!(tools.invocations()?, vec!["cmake -B /tmp/build -DCMAKE_BUILD_TYPE=Release"]);
  Ok(())
}

#[test]
fn test_configure_stderr_is_tolerated() -> Result<()> {
  let tools = FakeToolchain::new()?;
  tools.tool("cmake", r#"[ "$1" = "-B" ] && echo "CMake Warning: manually-specified variables" >&2
exit 0"#)?;

  let output = tools.run_rtr(&["-t", "build"], &BUILD_VARS)?;

  assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr_of(&output));
  assert_eq!(tools.invocations()?.len(), 2);
  Ok(())
}

#[test]
fn test_build_stderr_fails_despite_zero_exit() -> Result<()> {
  let tools = FakeToolchain::new()?;
  tools.tool("cmake", r#"[ "$1" = "--build" ] && echo "warning: unused variable" >&2
exit 0"#)?;

  let output = tools.run_rtr(&["-t", "build"], &BUILD_VARS)?;

  assert_eq!(output.status.code(), Some(1));
  let stderr = stderr_of(&output);
  assert!(stderr.contains("BUILDING: fail"), "stderr: {}", stderr);
  assert!(stderr.contains("warning: unused variable"));
  Ok(())
}
