//! Flat boolean predicates.
//!
//! Each function classifies a string and returns `true` or `false`. They never
//! panic and never allocate long-lived state; the compiled patterns behind them
//! are process-wide statics built on first use.
//!
//! Use the typed validators in [`crate::validators`] instead when the reason
//! for a rejection matters.
//!
//! ```
//! use strcheck_validator::{is_email, is_isbn, is_in, is_uuid_v4};
//!
//! assert!(is_email("foo@bar.com"));
//! assert!(is_isbn("3 401 01319 X"));
//! assert!(is_in("moe", &["moe", "larry", "curly"]));
//! assert!(!is_uuid_v4("A987FBC9-4BED-3078-CF07-9141BA07C9F3"));
//! ```

use crate::foundation::Validate;
use crate::validators;

/// Non-empty and only ASCII letters.
pub fn is_alpha(s: &str) -> bool {
    validators::Alphabetic.is_valid(s)
}

/// Non-empty and only ASCII letters and digits.
pub fn is_alphanumeric(s: &str) -> bool {
    validators::Alphanumeric.is_valid(s)
}

/// Non-empty and only code points 0-127.
pub fn is_ascii(s: &str) -> bool {
    validators::Ascii.is_valid(s)
}

/// Non-empty and only `0-9a-fA-F`.
pub fn is_hexadecimal(s: &str) -> bool {
    validators::Hexadecimal.is_valid(s)
}

/// Optional `#` followed by exactly 3 or 6 hex digits.
pub fn is_hex_color(s: &str) -> bool {
    validators::HexColor.is_valid(s)
}

/// Email address syntax, case-insensitive, whole string.
pub fn is_email(s: &str) -> bool {
    validators::Email.is_valid(s)
}

/// Canonical `8-4-4-4-12` UUID layout, any version.
pub fn is_uuid(s: &str) -> bool {
    validators::uuid().is_valid(s)
}

/// Version 3 UUID with the RFC 4122 variant.
pub fn is_uuid_v3(s: &str) -> bool {
    validators::uuid_v3().is_valid(s)
}

/// Version 4 UUID with the RFC 4122 variant.
pub fn is_uuid_v4(s: &str) -> bool {
    validators::uuid_v4().is_valid(s)
}

/// Version 5 UUID with the RFC 4122 variant.
pub fn is_uuid_v5(s: &str) -> bool {
    validators::uuid_v5().is_valid(s)
}

/// Base-10 signed 64-bit integer.
pub fn is_int(s: &str) -> bool {
    validators::Integer.is_valid(s)
}

/// Finite decimal floating-point literal.
pub fn is_float(s: &str) -> bool {
    validators::Float.is_valid(s)
}

/// One of `1 t T TRUE true True 0 f F FALSE false False`.
pub fn is_bool(s: &str) -> bool {
    validators::BoolLiteral.is_valid(s)
}

/// ISBN-10 or ISBN-13.
pub fn is_isbn(s: &str) -> bool {
    validators::isbn().is_valid(s)
}

/// ISBN-10, ignoring ASCII whitespace and hyphens.
pub fn is_isbn_v10(s: &str) -> bool {
    validators::Isbn10.is_valid(s)
}

/// ISBN-13, ignoring ASCII whitespace and hyphens.
pub fn is_isbn_v13(s: &str) -> bool {
    validators::Isbn13.is_valid(s)
}

/// Card number of a known brand that passes the Luhn check.
///
/// Non-digit characters are ignored.
pub fn is_credit_card(s: &str) -> bool {
    validators::credit_card().is_valid(s)
}

/// Lowercasing leaves the string unchanged.
pub fn is_lower_case(s: &str) -> bool {
    validators::Lowercase.is_valid(s)
}

/// Uppercasing leaves the string unchanged.
///
/// Full case mapping applies, so `is_upper_case("ß")` is `false`.
pub fn is_upper_case(s: &str) -> bool {
    validators::Uppercase.is_valid(s)
}

/// Zero length. Whitespace is not null.
pub fn is_null(s: &str) -> bool {
    validators::Null.is_valid(s)
}

/// Exact, case-sensitive membership in `set`.
pub fn is_in<S: AsRef<str>>(s: &str, set: &[S]) -> bool {
    validators::contains_exact(s, set)
}

/// IPv4 or IPv6 address text.
pub fn is_ip(s: &str) -> bool {
    validators::IpAddress.is_valid(s)
}

/// Address with a 4-byte form (IPv4, or IPv4-mapped IPv6).
pub fn is_ipv4(s: &str) -> bool {
    validators::Ipv4.is_valid(s)
}

/// IPv6 address text.
pub fn is_ipv6(s: &str) -> bool {
    validators::Ipv6.is_valid(s)
}

/// Character count within `min..=max`. Always `false` when `min > max`.
pub fn is_length(s: &str, min: usize, max: usize) -> bool {
    validators::length_range(min, max).is_ok_and(|range| range.is_valid(s))
}

/// ISO 8601 calendar date `YYYY-MM-DD` naming a real day.
pub fn is_date(s: &str) -> bool {
    validators::date().is_valid(s)
}
