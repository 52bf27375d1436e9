//! String length validator
//!
//! Length is counted in Unicode scalar values (`chars`), not bytes, so
//! `"über"` has length 4.

use crate::foundation::ValidationError;

crate::validator! {
    /// Validates that the character count lies within `min..=max`.
    ///
    /// Construction fails with `invalid_range` when `min > max`.
    ///
    /// ```
    /// use strcheck_validator::foundation::Validate;
    /// use strcheck_validator::validators::length_range;
    ///
    /// let v = length_range(2, 4).unwrap();
    /// assert!(v.is_valid("über"));
    /// assert!(!v.is_valid("a"));
    /// assert!(!v.is_valid("abcde"));
    ///
    /// assert!(length_range(4, 2).is_err());
    /// ```
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub LengthRange { min: usize, max: usize } for str;
    rule(self, input) { (self.min..=self.max).contains(&input.chars().count()) }
    error(self, input) {
        ValidationError::length_out_of_range(self.min, self.max, input.chars().count())
    }
    new(min: usize, max: usize) -> ValidationError {
        if min > max {
            return Err(ValidationError::new("invalid_range", "min must be <= max")
                .with_param("min", min.to_string())
                .with_param("max", max.to_string()));
        }
        Ok(Self { min, max })
    }
    fn length_range(min: usize, max: usize);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;

    #[test]
    fn test_bounds_inclusive() {
        let validator = length_range(1, 3).unwrap();
        assert!(validator.validate("a").is_ok());
        assert!(validator.validate("abc").is_ok());
        assert!(validator.validate("").is_err());
        assert!(validator.validate("abcd").is_err());
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        let validator = length_range(0, 3).unwrap();
        assert!(validator.validate("ｶﾀｶ").is_ok());
        assert_eq!("ｶﾀｶ".len(), 9);
    }

    #[test]
    fn test_reversed_bounds_rejected() {
        let err = length_range(5, 2).unwrap_err();
        assert_eq!(err.code, "invalid_range");
        assert_eq!(err.param("min"), Some("5"));
        assert_eq!(err.param("max"), Some("2"));
        assert!(LengthRange::new(3, 1).is_err());
    }

    #[test]
    fn test_equal_bounds() {
        let validator = length_range(2, 2).unwrap();
        assert!(validator.validate("ab").is_ok());
        assert!(validator.validate("abc").is_err());
    }

    #[test]
    fn test_error_params() {
        let err = length_range(2, 4).unwrap().validate("abcdef").unwrap_err();
        assert_eq!(err.code, "length_out_of_range");
        assert_eq!(err.param("actual"), Some("6"));
    }
}
