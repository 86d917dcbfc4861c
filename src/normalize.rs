//! Separator stripping and digit checks.

use std::borrow::Cow;

/// Remove space and hyphen separators from a card number.
///
/// Only `' '` and `'-'` are stripped. Any other character, including tabs and
/// newlines, is left in place and will fail [`is_all_digits`].
pub fn normalize(raw: &str) -> Cow<'_, str> {
    if memchr::memchr2(b' ', b'-', raw.as_bytes()).is_none() {
        return Cow::Borrowed(raw);
    }

    Cow::Owned(raw.chars().filter(|&c| c != ' ' && c != '-').collect())
}

/// True if `s` is non-empty and made only of ASCII digits.
pub fn is_all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
