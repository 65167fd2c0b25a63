//! Command line front end of the `swedish_id` validator.

pub mod cli;
pub mod logging;

use std::io::{self, Write};
use swedish_id::{IdentityNumber, IdentityNumberError, IdentityNumberValidator};

/// Counts of a batch of validated numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub valid: usize,
    pub invalid: usize,
}

/// Validates every number and writes one line per number to `out`.
///
/// An invalid number never stops the batch; only a failure to write does.
pub fn report_all<W: Write>(
    validator: &IdentityNumberValidator,
    identity_numbers: &[String],
    details: bool,
    out: &mut W,
) -> io::Result<Summary> {
    let mut summary = Summary::default();
    for identity_number in identity_numbers {
        let result = validator.validate(identity_number);
        if result.is_ok() {
            summary.valid += 1;
        } else {
            summary.invalid += 1;
        }
        writeln!(out, "{}", report_line(identity_number, &result, details))?;
    }
    tracing::info!(
        valid = summary.valid,
        invalid = summary.invalid,
        "validated identity numbers"
    );
    Ok(summary)
}

/// `<number> is valid` or `<number> is invalid`, followed with the details when asked.
pub fn report_line(
    identity_number: &str,
    result: &Result<IdentityNumber, IdentityNumberError>,
    details: bool,
) -> String {
    match (result, details) {
        (Ok(_), false) => format!("{identity_number} is valid"),
        (Err(_), false) => format!("{identity_number} is invalid"),
        (Ok(number), true) => match number.date_of_birth() {
            Some(date_of_birth) => format!(
                "{identity_number} is valid ({}, born {date_of_birth})",
                number.number_type()
            ),
            None => format!("{identity_number} is valid ({})", number.number_type()),
        },
        (Err(err), true) => format!("{identity_number} is invalid ({err})"),
    }
}
