mod checks;
mod commands;
mod core;
mod logging;

use checks::CheckName;
use clap::Parser;
use crate::core::env::CheckEnv;
use crate::core::error::ExitCode;
use crate::core::exec::ShellRunner;
use logging::{ExecutionMode, LogConfig};

/// Tool to execute code quality validations.
#[derive(Parser)]
#[command(name = "rtr")]
#[command(about, long_about = None)]
#[command(disable_version_flag = true)]
#[command(styles = get_styles())]
struct Cli {
  /// Version and license message
  #[arg(short = 'V')]
  show_version: bool,

  /// Test to execute. If omitted, all tests will be executed
  #[arg(short = 't', long = "test", value_name = "TEST", value_enum)]
  tests: Vec<CheckName>,

  /// Quiet execution
  #[arg(short)]
  quiet: bool,

  /// Verbose
  #[arg(short)]
  verbose: bool,
}

fn get_styles() -> clap::builder::Styles {
  clap::builder::Styles::styled()
    .usage(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .header(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .literal(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))))
    .invalid(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .error(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .valid(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))),
    )
    .placeholder(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::White))))
}

fn main() -> std::process::ExitCode {
  let cli = Cli::parse();

  if cli.show_version {
    if let Err(e) = commands::run_version() {
      eprintln!("Error: {:#}", e);
      return ExitCode::Failure.into();
    }
    return ExitCode::Success.into();
  }

  let log_config = LogConfig::new(ExecutionMode::from_flags(cli.quiet, cli.verbose));
  let passed = tracing::dispatcher::with_default(&log_config.dispatch(), || {
    let env = CheckEnv::from_env();
    commands::run_checks(&cli.tests, &env, &ShellRunner)
  });

  ExitCode::from_aggregate(passed).into()
}
