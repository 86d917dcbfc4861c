//! Payment card brand (bandeira) detection and Luhn validation.
//!
//! Pure, stateless functions: normalize a card number, detect its brand
//! from an ordered prefix table, and verify its mod-10 checksum.
//! Python bindings are available behind the `python` feature.

pub mod brand;
pub mod error;
pub mod matcher;
pub mod normalize;
pub mod scan;
pub mod validation;
pub mod validators;

#[cfg(feature = "python")]
mod python;

pub use brand::Brand;
pub use error::CardError;
pub use matcher::{classify, BrandRule, Classifier, PrefixMatcher, BRAND_RULES};
pub use normalize::{is_all_digits, normalize};
pub use scan::{find_cards, CardMatch};
pub use validation::{
    check, discover_bandeira, luhn_check, validate_batch, validate_credit_card, Outcome,
    ValidationResult,
};
