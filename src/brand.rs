//! Card brands (bandeiras) recognised by the classifier.

use std::fmt;

/// Issuing network of a payment card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Brand {
    Elo,
    Visa,
    MasterCard,
    AmericanExpress,
    Discover,
    Hipercard,
    DinersClub,
    Jcb,
    EnRoute,
    Voyager,
    Aura,
}

impl Brand {
    /// All brands, in rule-table order.
    pub const ALL: [Brand; 11] = [
        Brand::Elo,
        Brand::Visa,
        Brand::MasterCard,
        Brand::AmericanExpress,
        Brand::Discover,
        Brand::Hipercard,
        Brand::DinersClub,
        Brand::Jcb,
        Brand::EnRoute,
        Brand::Voyager,
        Brand::Aura,
    ];

    /// Display label, as reported in validation messages.
    pub fn name(&self) -> &'static str {
        match self {
            Brand::Elo => "Elo",
            Brand::Visa => "Visa",
            Brand::MasterCard => "MasterCard",
            Brand::AmericanExpress => "American Express",
            Brand::Discover => "Discover",
            Brand::Hipercard => "Hipercard",
            Brand::DinersClub => "Diners Club",
            Brand::Jcb => "JCB",
            Brand::EnRoute => "EnRoute",
            Brand::Voyager => "Voyager",
            Brand::Aura => "Aura",
        }
    }
}

impl fmt::Display for Brand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
