//! NOT combinator - logical negation of validators

use crate::foundation::{Validate, ValidationError};

/// Inverts a validator: succeeds when the inner validator fails and vice versa.
///
/// # Examples
///
/// ```
/// use strcheck_validator::combinators::Not;
/// use strcheck_validator::foundation::Validate;
/// use strcheck_validator::validators::null;
///
/// let required = Not::new(null());
/// assert!(required.is_valid("value"));
/// assert!(!required.is_valid(""));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Not<V> {
    pub(crate) inner: V,
}

impl<V> Not<V> {
    /// Creates a new `Not` combinator.
    pub fn new(inner: V) -> Self {
        Self { inner }
    }
}

impl<V> Validate for Not<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match self.inner.validate(input) {
            Ok(()) => Err(ValidationError::new(
                "not_failed",
                "Validation should have failed but passed",
            )),
            Err(_) => Ok(()),
        }
    }
}

/// Creates a `Not` combinator from a validator.
pub fn not<V>(validator: V) -> Not<V> {
    Not::new(validator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidateExt;
    use crate::validators::alphabetic;

    #[test]
    fn test_not_inverts_success() {
        let validator = not(alphabetic());
        let err = validator.validate("abc").unwrap_err();
        assert_eq!(err.code, "not_failed");
    }

    #[test]
    fn test_not_inverts_failure() {
        assert!(alphabetic().not().validate("abc1").is_ok());
    }

    #[test]
    fn test_double_negation() {
        let validator = alphabetic().not().not();
        assert!(validator.validate("abc").is_ok());
        assert!(validator.validate("abc1").is_err());
    }
}
