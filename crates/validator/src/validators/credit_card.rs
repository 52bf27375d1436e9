//! Payment card number validator with Luhn checksum.
//!
//! Every non-digit character is discarded first, so spaces, dashes and dots
//! used as group separators are all accepted. The remaining digits must
//! match the prefix and length of a known brand and pass the Luhn check.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::{Validate, ValidationError};

// ============================================================================
// CARD BRANDS
// ============================================================================

/// Card brands recognised by prefix and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CardBrand {
    /// `4`, 13 or 16 digits.
    Visa,
    /// `51`-`55`, 16 digits.
    Mastercard,
    /// `34` or `37`, 15 digits.
    Amex,
    /// `6011` or `65`, 16 digits.
    Discover,
    /// `300`-`305`, `36` or `38`, 14 digits.
    DinersClub,
    /// `2131` or `1800` with 15 digits, `35` with 16 digits.
    Jcb,
}

impl CardBrand {
    /// All brands, in detection order.
    pub const ALL: [CardBrand; 6] = [
        CardBrand::Visa,
        CardBrand::Mastercard,
        CardBrand::Amex,
        CardBrand::Discover,
        CardBrand::DinersClub,
        CardBrand::Jcb,
    ];

    const fn bit(self) -> u8 {
        1 << self as u8
    }

    const fn pattern(self) -> &'static str {
        match self {
            CardBrand::Visa => r"^4[0-9]{12}(?:[0-9]{3})?$",
            CardBrand::Mastercard => r"^5[1-5][0-9]{14}$",
            CardBrand::Amex => r"^3[47][0-9]{13}$",
            CardBrand::Discover => r"^6(?:011|5[0-9]{2})[0-9]{12}$",
            CardBrand::DinersClub => r"^3(?:0[0-5]|[68][0-9])[0-9]{11}$",
            CardBrand::Jcb => r"^(?:(?:2131|1800)[0-9]{11}|35[0-9]{14})$",
        }
    }
}

impl fmt::Display for CardBrand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CardBrand::Visa => "visa",
            CardBrand::Mastercard => "mastercard",
            CardBrand::Amex => "amex",
            CardBrand::Discover => "discover",
            CardBrand::DinersClub => "diners_club",
            CardBrand::Jcb => "jcb",
        };
        f.write_str(name)
    }
}

static BRAND_PATTERNS: LazyLock<Vec<(CardBrand, Regex)>> = LazyLock::new(|| {
    CardBrand::ALL
        .iter()
        .map(|&brand| (brand, Regex::new(brand.pattern()).unwrap()))
        .collect()
});

/// Bitmask of accepted brands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardBrands(u8);

impl CardBrands {
    /// Accept every brand.
    #[must_use]
    pub fn all() -> Self {
        Self::from_slice(&CardBrand::ALL)
    }

    /// Accept exactly the listed brands.
    #[must_use]
    pub fn from_slice(brands: &[CardBrand]) -> Self {
        Self(brands.iter().fold(0, |mask, brand| mask | brand.bit()))
    }

    /// Whether `brand` is accepted.
    #[must_use]
    pub fn contains(self, brand: CardBrand) -> bool {
        self.0 & brand.bit() != 0
    }
}

impl Default for CardBrands {
    fn default() -> Self {
        Self::all()
    }
}

// ============================================================================
// LUHN
// ============================================================================

/// Luhn mod-10 check over ASCII digits.
///
/// Returns `false` for empty input or any non-digit byte.
pub fn luhn_valid(digits: &str) -> bool {
    if digits.is_empty() {
        return false;
    }

    let mut sum = 0u32;
    for (i, b) in digits.bytes().rev().enumerate() {
        if !b.is_ascii_digit() {
            return false;
        }
        let mut d = u32::from(b - b'0');
        if i % 2 == 1 {
            d *= 2;
            if d > 9 {
                d -= 9;
            }
        }
        sum += d;
    }

    sum % 10 == 0
}

// ============================================================================
// CREDIT CARD VALIDATOR
// ============================================================================

/// Validates card numbers: brand prefix/length plus Luhn checksum.
///
/// # Examples
///
/// ```
/// use strcheck_validator::foundation::Validate;
/// use strcheck_validator::validators::{CardBrand, CreditCard};
///
/// let any = CreditCard::new();
/// assert!(any.is_valid("4111 1111 1111 1111"));
/// assert!(!any.is_valid("4111 1111 1111 1112")); // Luhn
///
/// let amex_only = CreditCard::new().only(&[CardBrand::Amex]);
/// assert!(amex_only.is_valid("378282246310005"));
/// assert!(!amex_only.is_valid("4111111111111111"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CreditCard {
    allowed: CardBrands,
}

impl CreditCard {
    /// Creates a validator accepting every brand.
    #[must_use]
    pub fn new() -> Self {
        Self {
            allowed: CardBrands::all(),
        }
    }

    /// Only accept the listed brands.
    #[must_use = "builder methods must be chained or built"]
    pub fn only(mut self, brands: &[CardBrand]) -> Self {
        self.allowed = CardBrands::from_slice(brands);
        self
    }

    /// Detects the brand of a card number, ignoring non-digit characters.
    ///
    /// Only prefix and length are considered, not the checksum.
    #[must_use]
    pub fn brand_of(input: &str) -> Option<CardBrand> {
        Self::detect(&Self::digits(input))
    }

    fn digits(input: &str) -> String {
        input.chars().filter(char::is_ascii_digit).collect()
    }

    fn detect(digits: &str) -> Option<CardBrand> {
        BRAND_PATTERNS
            .iter()
            .find(|(_, pattern)| pattern.is_match(digits))
            .map(|(brand, _)| *brand)
    }
}

impl Validate for CreditCard {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let digits = Self::digits(input);

        let brand =
            Self::detect(&digits).ok_or_else(|| ValidationError::invalid_format("credit_card"))?;

        if !self.allowed.contains(brand) {
            return Err(ValidationError::new(
                "card_brand_not_allowed",
                format!("Card brand '{brand}' is not accepted"),
            )
            .with_param("brand", brand.to_string()));
        }

        if luhn_valid(&digits) {
            Ok(())
        } else {
            tracing::trace!(code = "luhn_checksum", %brand, "card number rejected");
            Err(ValidationError::checksum("luhn_checksum", "Luhn")
                .with_param("brand", brand.to_string()))
        }
    }
}

/// Creates a credit card validator accepting every brand.
#[must_use]
pub fn credit_card() -> CreditCard {
    CreditCard::new()
}

// ============================================================================
// TESTS
// ============================================================================
