//! Check registry and sequential execution

use super::trait_def::{Check, CheckContext, CheckName, CheckResult};
use tracing::{debug, error};

/// Ordered set of checks, keyed by name
pub struct CheckRegistry {
  checks: Vec<Box<dyn Check>>,
}

impl CheckRegistry {
  /// Create an empty registry
  pub fn new() -> Self {
    Self { checks: Vec::new() }
  }

  /// Add a check. Checks run in insertion order.
  pub fn add_check(&mut self, check: Box<dyn Check>) {
    self.checks.push(check);
  }

  /// Registered checks, in run order
  #[cfg(test)]
  pub fn checks(&self) -> &[Box<dyn Check>] {
    &self.checks
  }

  /// Run the checks named in `selection`, in registry order.
  ///
  /// Every selected check runs even after an earlier failure. A check that
  /// cannot be executed at all is recorded as failed.
  pub fn run_selected(&self, selection: &[CheckName], ctx: &CheckContext<'_>) -> Vec<CheckResult> {
    let mut results = Vec::new();

    for check in &self.checks {
      if !selection.contains(&check.name()) {
        continue;
      }

      debug!("Running {} check: {}", check.name(), check.description());
      let result = match check.run(ctx) {
        Ok(result) => result,
        Err(err) => {
          error!("{} check could not run: {}", check.name(), err);
          CheckResult::fail(check.name().as_str(), format!("check failed to run: {}", err))
        }
      };
      debug!(
        "{} check {}: {}",
        result.check_name,
        if result.passed { "passed" } else { "failed" },
        result.message
      );
      results.push(result);
    }

    results
  }

  /// Run the selection and AND the results together
  pub fn run_and_aggregate(&self, selection: &[CheckName], ctx: &CheckContext<'_>) -> bool {
    let results = self.run_selected(selection, ctx);
    debug!(
      "{} of {} checks passed",
      results.iter().filter(|r| r.passed).count(),
      results.len()
    );

    results.iter().fold(true, |all_passed, result| result.passed && all_passed)
  }
}

/// Create a registry with the built-in checks
pub fn create_default_registry() -> CheckRegistry {
  let mut registry = CheckRegistry::new();

  registry.add_check(Box::new(super::cppcheck::CppcheckCheck));
  registry.add_check(Box::new(super::format::FormatCheck));
  registry.add_check(Box::new(super::build::BuildCheck));
  registry.add_check(Box::new(super::ctest::CtestCheck));

  registry
}
