//! Code-quality checks
//!
//! All checks implement the `Check` trait and are registered in
//! `create_default_registry()`, which fixes their run order.
//!
//! # Built-in Checks
//!
//! - **cppcheck**: static analysis (`cppcheck $CPPCHECKARGS`)
//! - **format**: formatting, currently not enforced
//! - **build**: `cmake -B` configure followed by `cmake --build`
//! - **tests**: `ctest --test-dir $CMAKE_BUILDDIR`
//!
//! # Example
//!
//! ```rust,ignore
//! let env = CheckEnv::from_env();
//! let ctx = CheckContext { runner: &ShellRunner, env: &env };
//!
//! let registry = create_default_registry();
//! let passed = registry.run_and_aggregate(&CheckName::ALL, &ctx);
//! ```

mod build;
mod cppcheck;
mod ctest;
mod format;
mod runner;
mod trait_def;

// Re-export public API
pub use runner::create_default_registry;
pub use trait_def::{CheckContext, CheckName};

// Individual checks are not exported - they're registered in create_default_registry()
