mod date_of_birth;
mod error;
mod format;
mod number_type;

pub use crate::identity_number::error::IdentityNumberError;
pub use crate::identity_number::format::Separator;
pub use crate::identity_number::number_type::NumberType;

use crate::checksum::calculate_control_digit;
use crate::identity_number::date_of_birth::date_of_birth;
use crate::identity_number::format::{parse_format, SIGNIFICANT_DIGITS};
use crate::identity_number::number_type::month_and_day;
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

/// A Swedish identity number that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct IdentityNumber {
    digits: String,
    number_type: NumberType,
    separator: Separator,
    date_of_birth: Option<NaiveDate>,
}

impl IdentityNumber {
    /// The 10 significant digits, without separator or century.
    pub fn digits(&self) -> &str {
        &self.digits
    }

    pub fn number_type(&self) -> NumberType {
        self.number_type
    }

    /// The separator the number was written with.
    pub fn separator(&self) -> Separator {
        self.separator
    }

    /// Whether the number was written with the `+` marker of people aged 100 or more.
    pub fn century_marker(&self) -> bool {
        self.separator.is_century_marker()
    }

    /// Date of birth of a personal or coordination number. Organization numbers have none.
    pub fn date_of_birth(&self) -> Option<NaiveDate> {
        self.date_of_birth
    }

    pub fn control_digit(&self) -> u32 {
        self.digits
            .chars()
            .next_back()
            .and_then(|c| c.to_digit(10))
            .unwrap_or_default()
    }

    /// The 10 digit form, `YYMMDD-XXXX`, or `YYMMDD+XXXX` for numbers written with the
    /// century marker.
    pub fn normalized(&self) -> String {
        let (date, serial) = self.digits.split_at(SIGNIFICANT_DIGITS - 4);
        let separator = if self.century_marker() { '+' } else { '-' };
        format!("{date}{separator}{serial}")
    }
}

impl fmt::Display for IdentityNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.normalized())
    }
}

/// Runs every check on `identity_number`: shape, control digit, then, unless it is an
/// organization number, its date of birth.
pub(crate) fn validate_identity_number(
    identity_number: &str,
) -> Result<IdentityNumber, IdentityNumberError> {
    let parsed = parse_format(identity_number)?;

    let digits = parsed.significant_digits();
    let (payload, control) = digits.split_at(SIGNIFICANT_DIGITS - 1);
    let expected = calculate_control_digit(payload).ok_or(IdentityNumberError::InvalidFormat)?;
    if control.parse::<u32>() != Ok(expected) {
        return Err(IdentityNumberError::InvalidChecksum);
    }

    let date_part = parsed.date_part();
    let (month, stored_day) = month_and_day(date_part)?;
    let number_type = NumberType::from_month_and_day(month, stored_day);

    let date_of_birth = if number_type.has_date_of_birth() {
        let day = number_type.day_of_birth(stored_day);
        Some(date_of_birth(date_part, month, day, parsed.separator())?)
    } else {
        None
    };

    Ok(IdentityNumber {
        digits: digits.to_string(),
        number_type,
        separator: parsed.separator(),
        date_of_birth,
    })
}
