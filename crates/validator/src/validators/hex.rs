//! Hexadecimal digit and hex color validators

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::ValidationError;

static HEXADECIMAL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[[:xdigit:]]+$").unwrap());

static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#?(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").unwrap());

crate::validator! {
    /// Validates that a non-empty string contains only `0-9a-fA-F`.
    ///
    /// No `0x` prefix is accepted.
    pub Hexadecimal for str;
    rule(input) { HEXADECIMAL.is_match(input) }
    error(input) { ValidationError::invalid_format("hexadecimal") }
    fn hexadecimal();
}

crate::validator! {
    /// Validates a CSS-style hex color: optional `#`, then 3 or 6 hex digits.
    ///
    /// ```
    /// use strcheck_validator::foundation::Validate;
    /// use strcheck_validator::validators::hex_color;
    ///
    /// assert!(hex_color().is_valid("#f00"));
    /// assert!(hex_color().is_valid("CCCCCC"));
    /// assert!(!hex_color().is_valid("#ff12FG"));
    /// ```
    pub HexColor for str;
    rule(input) { HEX_COLOR.is_match(input) }
    error(input) { ValidationError::invalid_format("hex_color") }
    fn hex_color();
}
