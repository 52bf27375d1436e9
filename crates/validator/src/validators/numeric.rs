//! Numeric string validators
//!
//! These check whether a string *parses* as a number, they do not range-check
//! the value.

use crate::foundation::ValidationError;

crate::validator! {
    /// Validates a base-10 signed 64-bit integer.
    ///
    /// An optional leading `+` or `-` is allowed; whitespace, fractions and
    /// digit separators are not. `"-0"` is valid, values outside `i64` are not.
    pub Integer for str;
    rule(input) { input.parse::<i64>().is_ok() }
    error(input) { ValidationError::invalid_format("integer") }
    fn integer();
}

crate::validator! {
    /// Validates a decimal floating-point literal.
    ///
    /// Accepts an optional sign, optional integer part, optional fraction and
    /// optional exponent (`123.`, `.5`, `-1e-3`). The `inf` / `nan` spellings are
    /// rejected, as are values too large for an `f64`.
    ///
    /// ```
    /// use strcheck_validator::foundation::Validate;
    /// use strcheck_validator::validators::float;
    ///
    /// assert!(float().is_valid("-0.22250738585072011e-307"));
    /// assert!(!float().is_valid("1e400"));
    /// assert!(!float().is_valid("NaN"));
    /// ```
    pub Float for str;
    rule(input) { is_decimal_float(input) }
    error(input) { ValidationError::invalid_format("float") }
    fn float();
}

fn is_decimal_float(input: &str) -> bool {
    // `f64::from_str` also takes "inf", "infinity" and "nan"; none of those has a digit.
    if !input.bytes().any(|b| b.is_ascii_digit()) {
        return false;
    }
    input.parse::<f64>().is_ok_and(f64::is_finite)
}
