//! Unit tests through ctest

use super::trait_def::{Check, CheckContext, CheckName, CheckResult, report_clean_run};
use crate::core::error::RtrResult;
use crate::core::exec::CommandInvocation;

/// Runs `ctest --test-dir $CMAKE_BUILDDIR`
pub struct CtestCheck;

impl Check for CtestCheck {
  fn name(&self) -> CheckName {
    CheckName::Tests
  }

  fn description(&self) -> &str {
    "Runs the unit tests with ctest"
  }

  fn run(&self, ctx: &CheckContext<'_>) -> RtrResult<CheckResult> {
    let invocation = CommandInvocation::new("ctest").push("--test-dir ").push(ctx.env.build_dir());
    let output = ctx.runner.invoke(&invocation)?;
    Ok(report_clean_run(self.name(), "TESTING", &output))
  }
}
