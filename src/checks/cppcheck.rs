//! Static analysis through cppcheck

use super::trait_def::{Check, CheckContext, CheckName, CheckResult, report_clean_run};
use crate::core::error::RtrResult;
use crate::core::exec::CommandInvocation;

/// Runs `cppcheck $CPPCHECKARGS`; passes only on exit 0 with an empty stderr
pub struct CppcheckCheck;

impl Check for CppcheckCheck {
  fn name(&self) -> CheckName {
    CheckName::Cppcheck
  }

  fn description(&self) -> &str {
    "Runs cppcheck static analysis"
  }

  fn run(&self, ctx: &CheckContext<'_>) -> RtrResult<CheckResult> {
    let invocation = CommandInvocation::new("cppcheck").push(ctx.env.cppcheck_args());
    let output = ctx.runner.invoke(&invocation)?;
    Ok(report_clean_run(self.name(), "CPPCHECK", &output))
  }
}
