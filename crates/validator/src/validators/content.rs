//! Email address validator

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::ValidationError;

// Local part: dot-separated atoms of RFC 5322 `atext`.
// Domain: dot-separated labels, letters/digits with interior hyphens, at least two labels.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^[A-Z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Z0-9!#$%&'*+/=?^_`{|}~-]+)*@(?:[A-Z0-9](?:[A-Z0-9-]*[A-Z0-9])?\.)+[A-Z0-9](?:[A-Z0-9-]*[A-Z0-9])?$",
    )
    .unwrap()
});

crate::validator! {
    /// Validates email syntax, case-insensitively.
    ///
    /// The whole input must be an address; text around an address is rejected.
    /// Only syntax is checked, nothing is resolved.
    ///
    /// ```
    /// use strcheck_validator::foundation::Validate;
    /// use strcheck_validator::validators::email;
    ///
    /// assert!(email().is_valid("foo+bar@bar.com"));
    /// assert!(!email().is_valid("invalidemail@"));
    /// ```
    pub Email for str;
    rule(input) { EMAIL_REGEX.is_match(input) }
    error(input) { ValidationError::invalid_format("email") }
    fn email();
}
