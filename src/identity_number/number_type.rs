use crate::identity_number::error::IdentityNumberError;
use serde::Serialize;
use std::ops::RangeInclusive;
use strum::{AsRefStr, Display, EnumString, IntoStaticStr};

/// Organization numbers store a value of at least 20 where a date would have the month.
const ORGANIZATION_MIN_MONTH: u32 = 20;
/// Coordination numbers store the day of birth plus 60.
const COORDINATION_DAY_OFFSET: u32 = 60;
const COORDINATION_DAYS: RangeInclusive<u32> = 61..=91;

/// The kind of identity a number was issued for, derived from its date portion.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Display,
    EnumString,
    AsRefStr,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum NumberType {
    /// Personnummer, assigned to people registered in Sweden.
    Personal,
    /// Samordningsnummer, assigned to people who are not or have not been registered.
    Coordination,
    /// Organisationsnummer, assigned to legal entities.
    Organization,
}

impl NumberType {
    /// Classifies a number from its date portion, i.e. every digit before the last four
    /// (`YYMMDD` or `YYYYMMDD`).
    pub fn classify(date_part: &str) -> Result<NumberType, IdentityNumberError> {
        let (month, day) = month_and_day(date_part)?;
        Ok(Self::from_month_and_day(month, day))
    }

    pub(crate) fn from_month_and_day(month: u32, day: u32) -> NumberType {
        if month >= ORGANIZATION_MIN_MONTH {
            NumberType::Organization
        } else if COORDINATION_DAYS.contains(&day) {
            NumberType::Coordination
        } else {
            NumberType::Personal
        }
    }

    /// Whether the date portion of this kind of number encodes a date of birth.
    pub fn has_date_of_birth(&self) -> bool {
        !matches!(self, NumberType::Organization)
    }

    /// Real day of birth for a day value as stored in the number.
    pub(crate) fn day_of_birth(&self, stored_day: u32) -> u32 {
        match self {
            NumberType::Coordination => stored_day - COORDINATION_DAY_OFFSET,
            _ => stored_day,
        }
    }
}

/// Reads the month and day fields, the last four digits of a 6 or 8 digit date portion.
pub(crate) fn month_and_day(date_part: &str) -> Result<(u32, u32), IdentityNumberError> {
    if !matches!(date_part.len(), 6 | 8) || !date_part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(IdentityNumberError::InvalidFormat);
    }
    let len = date_part.len();
    let month = parse_field(&date_part[len - 4..len - 2])?;
    let day = parse_field(&date_part[len - 2..])?;
    Ok((month, day))
}

fn parse_field(field: &str) -> Result<u32, IdentityNumberError> {
    field
        .parse()
        .map_err(|_| IdentityNumberError::InvalidFormat)
}
