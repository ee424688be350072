//! `rtr` - Run the selected checks
//!
//! Checks run one after another in registry order. A failing check does not
//! stop the ones after it; the overall result is the AND of all of them.

use crate::checks::{CheckContext, CheckName, create_default_registry};
use crate::core::env::CheckEnv;
use crate::core::exec::CommandRunner;
use tracing::debug;

/// Checks to run: the explicit selection, or every check when none was given
pub fn resolve_selection(requested: &[CheckName]) -> Vec<CheckName> {
  if requested.is_empty() {
    CheckName::ALL.to_vec()
  } else {
    requested.to_vec()
  }
}

/// Run the requested checks and return whether all of them passed
pub fn run_checks(requested: &[CheckName], env: &CheckEnv, runner: &dyn CommandRunner) -> bool {
  let selection = resolve_selection(requested);
  let ctx = CheckContext { runner, env };

  debug!(
    "Selected checks: {}",
    selection.iter().map(|c| c.as_str()).collect::<Vec<_>>().join(", ")
  );

  create_default_registry().run_and_aggregate(&selection, &ctx)
}
