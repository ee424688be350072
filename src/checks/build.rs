//! CMake configure + build
//!
//! The build check is two stages. Configure runs first and only needs a zero
//! exit code. Build runs only after a successful configure and must exit 0
//! with an empty stderr.

use super::trait_def::{Check, CheckContext, CheckName, CheckResult, report_clean_run};
use crate::core::error::RtrResult;
use crate::core::exec::CommandInvocation;
use tracing::info;

/// Runs `cmake -B ...` then `cmake --build ...`
pub struct BuildCheck;

impl BuildCheck {
  fn configure_invocation(ctx: &CheckContext<'_>) -> CommandInvocation {
    CommandInvocation::new("cmake")
      .push("-B ")
      .push(ctx.env.build_dir())
      .push(" -DCMAKE_BUILD_TYPE=")
      .push(ctx.env.build_type())
  }

  fn build_invocation(ctx: &CheckContext<'_>) -> CommandInvocation {
    CommandInvocation::new("cmake")
      .push("--build ")
      .push(ctx.env.build_dir())
      .push(" --config ")
      .push(ctx.env.build_type())
  }

  /// Generate the project. Stderr is not inspected here.
  fn configure(ctx: &CheckContext<'_>) -> RtrResult<bool> {
    info!("Configuring");
    let output = ctx.runner.invoke(&Self::configure_invocation(ctx))?;
    Ok(output.exited_ok())
  }
}

impl Check for BuildCheck {
  fn name(&self) -> CheckName {
    CheckName::Build
  }

  fn description(&self) -> &str {
    "Configures and builds the project with CMake"
  }

  fn run(&self, ctx: &CheckContext<'_>) -> RtrResult<CheckResult> {
    if !Self::configure(ctx)? {
      return Ok(CheckResult::fail(self.name().as_str(), "configure step failed"));
    }

    info!("Building");
    let output = ctx.runner.invoke(&Self::build_invocation(ctx))?;
    Ok(report_clean_run(self.name(), "BUILDING", &output))
  }
}
