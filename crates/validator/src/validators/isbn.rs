//! ISBN-10 and ISBN-13 validators.
//!
//! ASCII whitespace and hyphens are stripped before checking, so
//! `"3-8362-2119-5"`, `"3 8362 2119 5"` and `"3836221195"` are equivalent.
//!
//! - ISBN-10: `Σ (i+1)·dᵢ` over all ten positions (an `X` check digit counts
//!   as 10) must be divisible by 11.
//! - ISBN-13: digits are weighted `1, 3, 1, 3, …`; the check digit is
//!   `(10 − Σ mod 10) mod 10`.

use crate::combinators::Or;
use crate::foundation::{Validate, ValidateExt, ValidationError};

/// Removes ASCII whitespace (space, `\t`, `\n`, `\x0C`, `\r`) and hyphens.
///
/// Other Unicode spaces such as U+00A0 or U+3000 are kept and make the input
/// invalid.
fn sanitize(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_ascii_whitespace() && *c != '-')
        .collect()
}

fn digit(b: u8) -> u32 {
    u32::from(b - b'0')
}

// ============================================================================
// ISBN-10
// ============================================================================

/// Validates ISBN-10 numbers.
///
/// The sanitized form is nine digits followed by a digit or `X` (either
/// case).
///
/// # Examples
///
/// ```
/// use strcheck_validator::foundation::Validate;
/// use strcheck_validator::validators::isbn_10;
///
/// assert!(isbn_10().is_valid("3-401-01319-X"));
/// assert!(!isbn_10().is_valid("3423214121"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Isbn10;

impl Isbn10 {
    /// Weighted checksum of a sanitized ISBN-10, or `None` if the shape is wrong.
    fn checksum(sanitized: &str) -> Option<u32> {
        let bytes = sanitized.as_bytes();
        let (body, check) = match bytes {
            [body @ .., check] if body.len() == 9 => (body, *check),
            _ => return None,
        };

        if !body.iter().all(u8::is_ascii_digit) {
            return None;
        }

        let check_value = match check {
            b'0'..=b'9' => digit(check),
            b'X' | b'x' => 10,
            _ => return None,
        };

        let body_sum: u32 = body
            .iter()
            .zip(1..)
            .map(|(&b, weight)| weight * digit(b))
            .sum();

        Some(body_sum + 10 * check_value)
    }
}

impl Validate for Isbn10 {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let sanitized = sanitize(input);

        let checksum =
            Self::checksum(&sanitized).ok_or_else(|| ValidationError::invalid_format("isbn10"))?;

        if checksum % 11 == 0 {
            Ok(())
        } else {
            tracing::trace!(code = "isbn_checksum", checksum, "isbn-10 rejected");
            Err(ValidationError::checksum("isbn_checksum", "ISBN-10")
                .with_param("remainder", (checksum % 11).to_string()))
        }
    }
}

/// Creates an ISBN-10 validator.
#[must_use]
pub const fn isbn_10() -> Isbn10 {
    Isbn10
}

// ============================================================================
// ISBN-13
// ============================================================================

/// Validates ISBN-13 numbers (EAN-13 checksum).
///
/// # Examples
///
/// ```
/// use strcheck_validator::foundation::Validate;
/// use strcheck_validator::validators::isbn_13;
///
/// assert!(isbn_13().is_valid("978-4-87311-368-5"));
/// assert!(!isbn_13().is_valid("9783836221190"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Isbn13;

impl Isbn13 {
    const FACTORS: [u32; 2] = [1, 3];

    /// Expected check digit and actual check digit of a sanitized ISBN-13.
    fn check_digits(sanitized: &str) -> Option<(u32, u32)> {
        let bytes = sanitized.as_bytes();
        if bytes.len() != 13 || !bytes.iter().all(u8::is_ascii_digit) {
            return None;
        }

        let checksum: u32 = bytes[..12]
            .iter()
            .enumerate()
            .map(|(i, &b)| Self::FACTORS[i % 2] * digit(b))
            .sum();

        let expected = (10 - checksum % 10) % 10;
        Some((expected, digit(bytes[12])))
    }
}

impl Validate for Isbn13 {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let sanitized = sanitize(input);

        let (expected, actual) = Self::check_digits(&sanitized)
            .ok_or_else(|| ValidationError::invalid_format("isbn13"))?;

        if expected == actual {
            Ok(())
        } else {
            tracing::trace!(code = "isbn_checksum", expected, actual, "isbn-13 rejected");
            Err(ValidationError::checksum("isbn_checksum", "ISBN-13")
                .with_param("expected", expected.to_string())
                .with_param("actual", actual.to_string()))
        }
    }
}

/// Creates an ISBN-13 validator.
#[must_use]
pub const fn isbn_13() -> Isbn13 {
    Isbn13
}

// ============================================================================
// EITHER
// ============================================================================

/// ISBN-10 or ISBN-13.
pub type Isbn = Or<Isbn10, Isbn13>;

/// Creates a validator accepting either ISBN form.
#[must_use]
pub fn isbn() -> Isbn {
    isbn_10().or(isbn_13())
}

// ============================================================================
// TESTS
// ============================================================================
