use crate::identity_number::error::IdentityNumberError;
use crate::identity_number::format::Separator;
use chrono::NaiveDate;

/// Two digit years below the pivot belong to the 2000s, the others to the 1900s.
const SHORT_YEAR_PIVOT: i32 = 69;
const YEARS_PER_CENTURY: i32 = 100;

/// Resolves the date of birth encoded in a date portion.
///
/// `month` and `day` are the real month and day of birth (a coordination number's day
/// already shifted back). A `YYMMDD` portion gets its century from the short year pivot,
/// one century earlier when the number carries the `+` marker. This is what decides
/// whether a `+` number born on February 29 is valid: the year a century before the
/// pivoted one has to be a leap year.
pub(crate) fn date_of_birth(
    date_part: &str,
    month: u32,
    day: u32,
    separator: Separator,
) -> Result<NaiveDate, IdentityNumberError> {
    let year = year_of_birth(date_part, separator)?;
    NaiveDate::from_ymd_opt(year, month, day).ok_or(IdentityNumberError::InvalidDateOfBirth)
}

fn year_of_birth(date_part: &str, separator: Separator) -> Result<i32, IdentityNumberError> {
    let year_digits = date_part
        .get(..date_part.len().saturating_sub(4))
        .ok_or(IdentityNumberError::InvalidFormat)?;
    let year: i32 = year_digits
        .parse()
        .map_err(|_| IdentityNumberError::InvalidFormat)?;

    match year_digits.len() {
        4 => Ok(year),
        2 => {
            let year = if year < SHORT_YEAR_PIVOT {
                2000 + year
            } else {
                1900 + year
            };
            if separator.is_century_marker() {
                Ok(year - YEARS_PER_CENTURY)
            } else {
                Ok(year)
            }
        }
        _ => Err(IdentityNumberError::InvalidFormat),
    }
}
