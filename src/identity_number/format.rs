use crate::identity_number::error::IdentityNumberError;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

/// Number of digits carrying the identity, once the century is dropped.
pub(crate) const SIGNIFICANT_DIGITS: usize = 10;
/// Number of digits after the date portion (birth number and control digit).
const SERIAL_DIGITS: usize = 4;

lazy_static! {
    // A 6 digit date may be followed by `-` or `+`, an 8 digit date only by `-`.
    static ref IDENTITY_NUMBER_FORMAT: Regex =
        Regex::new(r"^(?:[0-9]{6}[-+]?|[0-9]{8}-?)[0-9]{4}$").unwrap();
}

/// Separator written between the date portion and the last four digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Separator {
    #[default]
    None,
    Hyphen,
    /// Marks a person aged 100 or more: the short year belongs to the previous century.
    Plus,
}

impl Separator {
    fn from_char(c: char) -> Option<Separator> {
        match c {
            '-' => Some(Separator::Hyphen),
            '+' => Some(Separator::Plus),
            _ => None,
        }
    }

    /// Whether the separator is the century marker.
    pub fn is_century_marker(&self) -> bool {
        matches!(self, Separator::Plus)
    }
}

/// An input that has the shape of an identity number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ParsedFormat {
    /// Digits of the input without separator, 10 or 12 of them.
    digits: String,
    separator: Separator,
}

impl ParsedFormat {
    /// The date portion as written, `YYMMDD` or `YYYYMMDD`.
    pub fn date_part(&self) -> &str {
        &self.digits[..self.digits.len() - SERIAL_DIGITS]
    }

    /// The last 10 digits, with any century digits dropped.
    pub fn significant_digits(&self) -> &str {
        &self.digits[self.digits.len() - SIGNIFICANT_DIGITS..]
    }

    pub fn separator(&self) -> Separator {
        self.separator
    }
}

/// Checks the shape of `identity_number` and splits it into its digits and separator.
pub(crate) fn parse_format(identity_number: &str) -> Result<ParsedFormat, IdentityNumberError> {
    if !IDENTITY_NUMBER_FORMAT.is_match(identity_number) {
        return Err(IdentityNumberError::InvalidFormat);
    }

    let separator = identity_number
        .chars()
        .find_map(Separator::from_char)
        .unwrap_or_default();
    let digits = identity_number
        .chars()
        .filter(|c| c.is_ascii_digit())
        .collect();

    Ok(ParsedFormat { digits, separator })
}
