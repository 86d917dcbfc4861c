//! Brand classification from card number prefixes.
//!
//! The brand table is plain data: an ordered list of rules, each a brand and
//! the prefixes that identify it. Order matters. Several prefixes overlap
//! (Elo's `4011` is also a Visa `4`, Elo's `6277` is also an Aura `6`), and
//! the first matching rule wins.

use aho_corasick::{AhoCorasick, Anchored, Input, StartKind};
use once_cell::sync::Lazy;

use crate::brand::Brand;
use crate::error::CardError;

/// A prefix condition over the leading digits of a card number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixMatcher {
    /// Matches if the number starts with any of the literals.
    Literals(&'static [&'static str]),
    /// Matches if the first `width` digits, read as an integer, fall in
    /// `low..=high`.
    Range { width: usize, low: u32, high: u32 },
}

/// One row of the brand table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrandRule {
    pub brand: Brand,
    pub prefixes: &'static [PrefixMatcher],
}

use PrefixMatcher::{Literals, Range};

/// Built-in brand table, most specific rules first.
pub static BRAND_RULES: [BrandRule; 11] = [
    BrandRule {
        brand: Brand::Elo,
        prefixes: &[
            Literals(&[
                "4011", "4312", "4389", "4514", "4576", "5041", "5066", "5067", "6277", "6362",
                "6363", "6550",
            ]),
            // 509x
            Range {
                width: 4,
                low: 5090,
                high: 5099,
            },
        ],
    },
    BrandRule {
        brand: Brand::Visa,
        prefixes: &[Literals(&["4"])],
    },
    BrandRule {
        brand: Brand::MasterCard,
        prefixes: &[
            Range {
                width: 2,
                low: 51,
                high: 55,
            },
            Range {
                width: 4,
                low: 2221,
                high: 2720,
            },
        ],
    },
    BrandRule {
        brand: Brand::AmericanExpress,
        prefixes: &[Literals(&["34", "37"])],
    },
    BrandRule {
        brand: Brand::Discover,
        prefixes: &[
            Literals(&["6011", "65"]),
            Range {
                width: 3,
                low: 644,
                high: 649,
            },
        ],
    },
    BrandRule {
        brand: Brand::Hipercard,
        prefixes: &[Literals(&["6062"])],
    },
    BrandRule {
        brand: Brand::DinersClub,
        prefixes: &[
            Range {
                width: 3,
                low: 300,
                high: 305,
            },
            Literals(&["36", "38"]),
        ],
    },
    BrandRule {
        brand: Brand::Jcb,
        prefixes: &[Range {
            width: 4,
            low: 3528,
            high: 3589,
        }],
    },
    BrandRule {
        brand: Brand::EnRoute,
        prefixes: &[Literals(&["2014", "2149"])],
    },
    BrandRule {
        brand: Brand::Voyager,
        prefixes: &[Literals(&["8699"])],
    },
    BrandRule {
        brand: Brand::Aura,
        prefixes: &[
            Literals(&["50", "6"]),
            Range {
                width: 2,
                low: 56,
                high: 58,
            },
        ],
    },
];

static DEFAULT_CLASSIFIER: Lazy<Classifier> = Lazy::new(|| {
    Classifier::from_rules(&BRAND_RULES).expect("built-in brand table is well formed")
});

/// Classify a digit string against the built-in brand table.
///
/// `digits` should already be normalized and checked with
/// [`crate::normalize::is_all_digits`].
pub fn classify(digits: &str) -> Option<Brand> {
    DEFAULT_CLASSIFIER.classify(digits)
}

/// The shared classifier compiled from [`BRAND_RULES`].
pub fn default_classifier() -> &'static Classifier {
    &DEFAULT_CLASSIFIER
}

struct CompiledRule {
    brand: Brand,
    literals: Option<AhoCorasick>,
    ranges: Vec<(usize, u32, u32)>,
}

impl CompiledRule {
    fn matches(&self, digits: &str) -> bool {
        if let Some(ac) = &self.literals {
            if ac.is_match(Input::new(digits).anchored(Anchored::Yes)) {
                return true;
            }
        }

        self.ranges.iter().any(|&(width, low, high)| {
            leading_value(digits, width).is_some_and(|v| (low..=high).contains(&v))
        })
    }
}

/// Compiled, immutable brand table. Safe to share across threads.
pub struct Classifier {
    rules: Vec<CompiledRule>,
}

impl Classifier {
    /// Compile an ordered rule list.
    ///
    /// Literal prefixes of a rule are merged into one anchored automaton.
    pub fn from_rules(rules: &[BrandRule]) -> Result<Self, CardError> {
        let mut compiled = Vec::with_capacity(rules.len());

        for rule in rules {
            let mut literals: Vec<&str> = Vec::new();
            let mut ranges = Vec::new();

            for prefix in rule.prefixes {
                match *prefix {
                    Literals(lits) => literals.extend_from_slice(lits),
                    Range { width, low, high } => {
                        if width == 0 || width > 9 || low > high || high >= 10u32.pow(width as u32)
                        {
                            return Err(CardError::InvalidRange { low, high, width });
                        }
                        ranges.push((width, low, high));
                    }
                }
            }

            let literals = if literals.is_empty() {
                None
            } else {
                Some(
                    AhoCorasick::builder()
                        .start_kind(StartKind::Anchored)
                        .build(literals)?,
                )
            };

            compiled.push(CompiledRule {
                brand: rule.brand,
                literals,
                ranges,
            });
        }

        Ok(Classifier { rules: compiled })
    }

    /// First brand whose rule matches, or `None`.
    pub fn classify(&self, digits: &str) -> Option<Brand> {
        self.rules
            .iter()
            .find(|rule| rule.matches(digits))
            .map(|rule| rule.brand)
    }

    /// Every brand whose rule matches, in table order.
    pub fn matching(&self, digits: &str) -> Vec<Brand> {
        self.rules
            .iter()
            .filter(|rule| rule.matches(digits))
            .map(|rule| rule.brand)
            .collect()
    }

    /// Number of compiled rules
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }
}

/// Integer value of the first `width` digits, if there are that many digits.
fn leading_value(digits: &str, width: usize) -> Option<u32> {
    let head = digits.as_bytes().get(..width)?;
    head.iter().try_fold(0u32, |acc, &b| {
        b.is_ascii_digit().then(|| acc * 10 + u32::from(b - b'0'))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const ELO_PREFIXES: &[&str] = &[
        "4011", "4312", "4389", "4514", "4576", "5041", "5066", "5067", "5090", "5095", "5099",
        "6277", "6362", "6363", "6550",
    ];

    #[test]
    fn test_table_order_matches_brand_list() {
        let brands: Vec<Brand> = BRAND_RULES.iter().map(|r| r.brand).collect();
        assert_eq!(brands, Brand::ALL.to_vec());
        assert_eq!(default_classifier().rule_count(), 11);
    }

    #[test]
    fn test_one_example_per_brand() {
        let cases = [
            ("4011788888888889", Brand::Elo),
            ("4111111111111111", Brand::Visa),
            ("5500000000000004", Brand::MasterCard),
            ("2221000000000009", Brand::MasterCard),
            ("2720990000000007", Brand::MasterCard),
            ("378282246310005", Brand::AmericanExpress),
            ("340000000000000", Brand::AmericanExpress),
            ("6011111111111117", Brand::Discover),
            ("6450000000000002", Brand::Discover),
            ("6500310000000005", Brand::Discover),
            ("6062825624254001", Brand::Hipercard),
            ("30569309025904", Brand::DinersClub),
            ("36227206271667", Brand::DinersClub),
            ("38520000023237", Brand::DinersClub),
            ("3530111333300000", Brand::Jcb),
            ("3589000000000003", Brand::Jcb),
            ("201400000000009", Brand::EnRoute),
            ("214925980592653", Brand::EnRoute),
            ("869940697287073", Brand::Voyager),
            ("5009040820211049", Brand::Aura),
            ("5800000000000001", Brand::Aura),
            ("6160000000000003", Brand::Aura),
        ];

        for (digits, expected) in cases {
            assert_eq!(classify(digits), Some(expected), "{}", digits);
        }
    }

    #[test]
    fn test_elo_wins_over_visa_and_aura() {
        for prefix in ELO_PREFIXES {
            let digits = format!("{}000000000000", prefix);
            assert_eq!(classify(&digits), Some(Brand::Elo), "{}", digits);
        }

        assert_eq!(
            default_classifier().matching("4011788888888889"),
            vec![Brand::Elo, Brand::Visa]
        );
        assert_eq!(
            default_classifier().matching("6277800000000006"),
            vec![Brand::Elo, Brand::Aura]
        );
        assert_eq!(
            default_classifier().matching("6550000000000000"),
            vec![Brand::Elo, Brand::Discover, Brand::Aura]
        );
    }

    #[test]
    fn test_hipercard_before_aura() {
        assert_eq!(
            default_classifier().matching("6062825624254001"),
            vec![Brand::Hipercard, Brand::Aura]
        );
        assert_eq!(classify("6062825624254001"), Some(Brand::Hipercard));
    }

    #[test]
    fn test_range_boundaries() {
        assert_eq!(classify("2220000000000000"), None);
        assert_eq!(classify("2721000000000000"), None);
        assert_eq!(classify("5000000000000000"), Some(Brand::Aura));
        assert_eq!(classify("5900000000000000"), None);
        assert_eq!(classify("3060000000000000"), None);
        assert_eq!(classify("3500000000000000"), None);
        assert_eq!(classify("3527000000000000"), None);
        assert_eq!(classify("3590000000000000"), None);
        assert_eq!(classify("6430000000000000"), Some(Brand::Aura));
    }

    #[test]
    fn test_short_inputs() {
        assert_eq!(classify("4"), Some(Brand::Visa));
        assert_eq!(classify("6"), Some(Brand::Aura));
        // Too short for the 4-digit MasterCard range or the 2-digit one
        assert_eq!(classify("2"), None);
        assert_eq!(classify("5"), None);
        assert_eq!(classify(""), None);
    }

    #[test]
    fn test_no_match() {
        assert_eq!(classify("9999999999999999"), None);
        assert_eq!(classify("1234567890123456"), None);
        assert_eq!(classify("0000000000000000"), None);
    }

    #[test]
    fn test_deterministic() {
        let first = classify("4539148803436467");
        for _ in 0..10 {
            assert_eq!(classify("4539148803436467"), first);
        }
    }

    #[test]
    fn test_custom_rules() {
        static RULES: [BrandRule; 2] = [
            BrandRule {
                brand: Brand::Voyager,
                prefixes: &[Literals(&["12"])],
            },
            BrandRule {
                brand: Brand::Visa,
                prefixes: &[Range {
                    width: 1,
                    low: 1,
                    high: 2,
                }],
            },
        ];

        let classifier = Classifier::from_rules(&RULES).unwrap();
        assert_eq!(classifier.classify("1234"), Some(Brand::Voyager));
        assert_eq!(classifier.classify("1934"), Some(Brand::Visa));
        assert_eq!(classifier.classify("3934"), None);
    }

    #[test]
    fn test_rejects_bad_range() {
        static RULES: [BrandRule; 1] = [BrandRule {
            brand: Brand::Jcb,
            prefixes: &[Range {
                width: 2,
                low: 60,
                high: 50,
            }],
        }];

        assert!(matches!(
            Classifier::from_rules(&RULES),
            Err(CardError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_leading_value() {
        assert_eq!(leading_value("2720", 4), Some(2720));
        assert_eq!(leading_value("0305", 3), Some(30));
        assert_eq!(leading_value("27", 4), None);
        assert_eq!(leading_value("2a20", 4), None);
    }
}
