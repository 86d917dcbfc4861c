//! Locate card numbers in free text.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, instrument};

use crate::brand::Brand;
use crate::matcher;
use crate::normalize::normalize;
use crate::validators;

// Whole digit runs, optionally grouped by single spaces or hyphens
static DIGIT_RUN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[0-9](?:[ -]?[0-9])*\b").expect("digit run pattern compiles")
});

const MIN_CARD_DIGITS: usize = 12;
const MAX_CARD_DIGITS: usize = 19;

/// A card number found in text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardMatch {
    /// Byte offset of the first digit.
    pub start: usize,
    /// Byte offset just past the last digit.
    pub end: usize,
    /// Matched text, separators included.
    pub raw: String,
    pub brand: Brand,
    pub luhn_valid: bool,
}

impl CardMatch {
    /// The matched digits without separators.
    pub fn digits(&self) -> String {
        normalize(&self.raw).into_owned()
    }
}

/// Find every digit run in `text` that looks like a card number of a known
/// brand. Candidates failing the checksum are kept with `luhn_valid = false`.
///
/// A run counts only as a whole: runs longer than 19 digits are skipped, not
/// split into a card-sized piece.
#[instrument(level = "debug", skip_all, fields(len = text.len()))]
pub fn find_cards(text: &str) -> Vec<CardMatch> {
    let matches: Vec<CardMatch> = DIGIT_RUN
        .find_iter(text)
        .filter_map(|m| {
            let digits = normalize(m.as_str());
            if !(MIN_CARD_DIGITS..=MAX_CARD_DIGITS).contains(&digits.len()) {
                return None;
            }
            let brand = matcher::classify(&digits)?;
            Some(CardMatch {
                start: m.start(),
                end: m.end(),
                raw: m.as_str().to_string(),
                brand,
                luhn_valid: validators::luhn(&digits).unwrap_or(false),
            })
        })
        .collect();

    debug!(found = matches.len(), "scanned text for card numbers");
    matches
}
