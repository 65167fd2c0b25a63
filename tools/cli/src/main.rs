//! Checks Swedish identity numbers given on the command line.

use clap::Parser;
use std::io::{self, IsTerminal};
use swedish_id::IdentityNumberValidator;
use swedish_id_cli::cli::{Cli, LogFormatArg};
use swedish_id_cli::logging::{init_logging, LogConfig, LogFormat};
use swedish_id_cli::report_all;

fn main() {
    let cli = Cli::parse();
    if let Err(error) = init_logging(&log_config_from_cli(&cli)) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }

    let validator = IdentityNumberValidator::default();
    let stdout = io::stdout();
    // Invalid numbers are a normal outcome and do not change the exit code.
    if let Err(error) = report_all(
        &validator,
        &cli.identity_numbers,
        cli.details,
        &mut stdout.lock(),
    ) {
        eprintln!("error: failed to write results: {error}");
        std::process::exit(1);
    }
}

/// Build logging configuration from CLI flags.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        use_env_filter: !cli.verbosity.is_present(),
        format: match cli.log_format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        },
        with_ansi: io::stderr().is_terminal(),
    }
}
