//! Checksum validation for card numbers
//!
//! Mod-10 (Luhn) checksum over a normalized digit string.

use crate::error::CardError;

/// Validate a digit string using the Luhn algorithm.
///
/// Digits are processed right to left; every second digit, starting with the
/// second from the right, is doubled and reduced by 9 when above 9. The
/// number passes when the sum is a multiple of 10.
///
/// Separators must already be removed. Any non-digit character is an error.
/// The empty string sums to zero and passes, so callers must reject it first.
pub fn luhn(digits: &str) -> Result<bool, CardError> {
    let mut sum: u64 = 0;

    for (i, (position, c)) in digits.char_indices().rev().enumerate() {
        let d = c.to_digit(10).ok_or(CardError::InvalidCharacter {
            position,
            character: c,
        })?;

        let value = if i % 2 == 1 {
            let doubled = d * 2;
            if doubled > 9 {
                doubled - 9
            } else {
                doubled
            }
        } else {
            d
        };

        sum += u64::from(value);
    }

    Ok(sum % 10 == 0)
}
