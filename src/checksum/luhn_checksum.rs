use crate::checksum::sum_all_digits;

/// Weights applied to the 9 leading digits of an identity number.
const MULTIPLIERS: [u32; 9] = [2, 1, 2, 1, 2, 1, 2, 1, 2];

/// Computes the control digit for the 9 leading digits of an identity number.
///
/// Digits at even positions are doubled and the digits of each product are summed
/// (a doubled value above 9 loses 9). The control digit is the amount that brings
/// the total up to the next multiple of 10.
///
/// Returns `None` if `payload` is not exactly 9 ASCII digits.
pub fn calculate_control_digit(payload: &str) -> Option<u32> {
    if payload.len() != MULTIPLIERS.len() || !payload.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let total: u32 = payload
        .chars()
        .filter_map(|c| c.to_digit(10))
        .zip(MULTIPLIERS)
        .map(|(digit, multiplier)| sum_all_digits(digit * multiplier))
        .sum();

    Some((10 - (total % 10)) % 10)
}
