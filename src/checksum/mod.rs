mod luhn_checksum;

pub use crate::checksum::luhn_checksum::calculate_control_digit;

/// Sum all the digits from a number
#[inline]
fn sum_all_digits(digits: u32) -> u32 {
    let mut sum = 0;
    let mut num = digits;
    while num > 0 {
        sum += num % 10;
        num /= 10;
    }
    sum
}
