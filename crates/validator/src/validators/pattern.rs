//! Character-class and case validators
//!
//! The character classes are the POSIX ASCII classes (`[[:alpha:]]`,
//! `[[:alnum:]]`, `[[:ascii:]]`); accented or full-width letters are not
//! alphabetic here. All three reject the empty string.

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::ValidationError;

static ALPHA: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[[:alpha:]]+$").unwrap());

static ALPHANUMERIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[[:alnum:]]+$").unwrap());

static ASCII: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[[:ascii:]]+$").unwrap());

// ============================================================================
// ALPHABETIC
// ============================================================================

crate::validator! {
    /// Validates that a non-empty string contains only ASCII letters.
    ///
    /// ```
    /// use strcheck_validator::foundation::Validate;
    /// use strcheck_validator::validators::alphabetic;
    ///
    /// assert!(alphabetic().is_valid("FoOBar"));
    /// assert!(!alphabetic().is_valid("abc1"));
    /// assert!(!alphabetic().is_valid(""));
    /// ```
    pub Alphabetic for str;
    rule(input) { ALPHA.is_match(input) }
    error(input) { ValidationError::invalid_format("alpha") }
    fn alphabetic();
}

// ============================================================================
// ALPHANUMERIC
// ============================================================================

crate::validator! {
    /// Validates that a non-empty string contains only ASCII letters and digits.
    pub Alphanumeric for str;
    rule(input) { ALPHANUMERIC.is_match(input) }
    error(input) { ValidationError::invalid_format("alphanumeric") }
    fn alphanumeric();
}

// ============================================================================
// ASCII
// ============================================================================

crate::validator! {
    /// Validates that a non-empty string contains only code points 0-127.
    pub Ascii for str;
    rule(input) { ASCII.is_match(input) }
    error(input) { ValidationError::invalid_format("ascii") }
    fn ascii();
}

// ============================================================================
// LOWERCASE / UPPERCASE
// ============================================================================

crate::validator! {
    /// Validates that lowercasing the string leaves it unchanged.
    ///
    /// Strings without cased characters (`"123"`, `""`) pass, so such a string
    /// is both lowercase and uppercase.
    pub Lowercase for str;
    rule(input) { input.to_lowercase() == input }
    error(input) { ValidationError::new("lowercase", "String must be lowercase") }
    fn lowercase();
}

crate::validator! {
    /// Validates that uppercasing the string leaves it unchanged.
    ///
    /// Uses full Unicode case mapping, so characters whose uppercase form is
    /// longer fail: `"ß"` uppercases to `"SS"` and is not uppercase, although
    /// a per-character simple mapping would leave it unchanged.
    pub Uppercase for str;
    rule(input) { input.to_uppercase() == input }
    error(input) { ValidationError::new("uppercase", "String must be uppercase") }
    fn uppercase();
}

// ============================================================================
// TESTS
// ============================================================================
