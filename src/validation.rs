//! Card validation entry points.
//!
//! Normalizes the input, checks it is all digits, detects the brand and runs
//! the Luhn checksum. Every failure is reported through [`ValidationResult`].

use rayon::prelude::*;
use tracing::{debug, instrument};

use crate::brand::Brand;
use crate::matcher;
use crate::normalize::{is_all_digits, normalize};
use crate::validators;

/// Why a card number passed or failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Characters other than digits, spaces and hyphens, or no digits at all.
    NonNumeric,
    /// Digits only, but no brand rule matched.
    UnknownBrand,
    /// Brand detected, checksum failed.
    ChecksumFailed(Brand),
    /// Brand detected, checksum passed.
    Valid(Brand),
}

impl Outcome {
    /// True only for [`Outcome::Valid`].
    pub fn is_valid(&self) -> bool {
        matches!(self, Outcome::Valid(_))
    }

    /// Detected brand, if classification got that far.
    pub fn brand(&self) -> Option<Brand> {
        match *self {
            Outcome::ChecksumFailed(brand) | Outcome::Valid(brand) => Some(brand),
            Outcome::NonNumeric | Outcome::UnknownBrand => None,
        }
    }

    /// Human-readable description of the outcome.
    pub fn message(&self) -> String {
        match self {
            Outcome::NonNumeric => "Card number must contain only digits".to_string(),
            Outcome::UnknownBrand => "Unable to identify card brand from the number".to_string(),
            Outcome::ChecksumFailed(brand) => {
                format!("Detected as {}, but failed Luhn validation", brand)
            }
            Outcome::Valid(brand) => format!("Valid {} card", brand),
        }
    }
}

/// Result of validating one card number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub bandeira: Option<Brand>,
    pub message: String,
}

impl From<Outcome> for ValidationResult {
    fn from(outcome: Outcome) -> Self {
        ValidationResult {
            is_valid: outcome.is_valid(),
            bandeira: outcome.brand(),
            message: outcome.message(),
        }
    }
}

/// Detect the brand of a card number.
///
/// Spaces and hyphens are ignored. Returns `None` for non-numeric input or
/// when no brand rule matches.
pub fn discover_bandeira(card_number: &str) -> Option<Brand> {
    let digits = normalize(card_number);
    if !is_all_digits(&digits) {
        return None;
    }

    matcher::classify(&digits)
}

/// Luhn check on a card number, ignoring spaces and hyphens.
///
/// Returns `false` for empty input or input with any other non-digit
/// character.
pub fn luhn_check(card_number: &str) -> bool {
    let digits = normalize(card_number);
    if !is_all_digits(&digits) {
        return false;
    }

    validators::luhn(&digits).unwrap_or(false)
}

/// Classify and checksum a card number in one step.
pub fn check(card_number: &str) -> Outcome {
    let digits = normalize(card_number);
    if !is_all_digits(&digits) {
        return Outcome::NonNumeric;
    }

    let Some(brand) = matcher::classify(&digits) else {
        return Outcome::UnknownBrand;
    };

    match validators::luhn(&digits) {
        Ok(true) => Outcome::Valid(brand),
        _ => Outcome::ChecksumFailed(brand),
    }
}

/// Validate a card number and describe the result.
///
/// ```
/// use bandeira::{validate_credit_card, Brand};
///
/// let result = validate_credit_card("5009 0408 2021 1049");
/// assert!(result.is_valid);
/// assert_eq!(result.bandeira, Some(Brand::Aura));
/// assert_eq!(result.message, "Valid Aura card");
/// ```
pub fn validate_credit_card(card_number: &str) -> ValidationResult {
    let outcome = check(card_number);

    debug!(
        digits = card_number.bytes().filter(u8::is_ascii_digit).count(),
        brand = outcome.brand().map(|b| b.name()),
        valid = outcome.is_valid(),
        "validated card number"
    );

    outcome.into()
}

/// Validate many card numbers in parallel.
///
/// Result `i` belongs to input `i`.
#[instrument(level = "debug", skip_all, fields(count = card_numbers.len()))]
pub fn validate_batch<S>(card_numbers: &[S]) -> Vec<ValidationResult>
where
    S: AsRef<str> + Sync,
{
    let results: Vec<ValidationResult> = card_numbers
        .par_iter()
        .map(|n| validate_credit_card(n.as_ref()))
        .collect();

    debug!(
        valid = results.iter().filter(|r| r.is_valid).count(),
        "batch validated"
    );

    results
}
