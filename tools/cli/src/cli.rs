//! Command line arguments.

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};

#[derive(Parser, Debug)]
#[command(
    name = "swedish-id",
    version,
    about = "Checks identity number validity",
    long_about = "Checks Swedish personal, coordination and organization numbers.\n\n\
                  Accepted shapes: YYMMDDXXXX, YYMMDD-XXXX, YYMMDD+XXXX, YYYYMMDDXXXX \
                  and YYYYMMDD-XXXX. Each number is reported as valid or invalid on stdout."
)]
pub struct Cli {
    /// One or more identity numbers to be checked, space separated.
    #[arg(value_name = "N", required = true, num_args = 1..)]
    pub identity_numbers: Vec<String>,

    /// Also print the number type and date of birth, or why a number is invalid.
    #[arg(long)]
    pub details: bool,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Log output format.
    #[arg(long = "log-format", value_enum, default_value = "compact")]
    pub log_format: LogFormatArg,
}

/// CLI log format choices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
