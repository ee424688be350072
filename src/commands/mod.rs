//! Command implementations

mod run;
mod version;

pub use run::run_checks;
pub use version::run_version;
