use serde::Serialize;
use strum::IntoStaticStr;
use thiserror::Error;

/// Why an identity number was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, IntoStaticStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum IdentityNumberError {
    /// The input does not have one of the accepted shapes
    /// (`YYMMDD[-+]XXXX`, `YYYYMMDD[-]XXXX`).
    #[error("invalid format")]
    InvalidFormat,

    /// The last digit is not the Luhn control digit of the 9 digits before it.
    #[error("invalid control digit")]
    InvalidChecksum,

    /// The date portion of a personal or coordination number is not a calendar date.
    #[error("invalid date of birth")]
    InvalidDateOfBirth,
}

impl IdentityNumberError {
    /// Stable, machine readable name of the error, used as a metric label.
    pub fn reason(&self) -> &'static str {
        self.into()
    }
}
