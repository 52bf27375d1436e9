//! Core validation types and traits
//!
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Errors**: [`ValidationError`], [`ValidationErrors`]
//!
//! Validators are plain values. They own no mutable state, so a single
//! instance can be shared across threads and reused for any number of inputs.
//!
//! ```
//! use strcheck_validator::foundation::{Validate, ValidateExt};
//! use strcheck_validator::validators::{hexadecimal, length_range};
//!
//! let short_hex = hexadecimal().and(length_range(1, 8).unwrap());
//! assert!(short_hex.is_valid("deadBEEF"));
//! assert!(!short_hex.is_valid("deadBEEF00"));
//! ```

pub mod error;
pub mod traits;

pub use error::{ValidationError, ValidationErrors};
pub use traits::{Validate, ValidateExt};

// ============================================================================
// UTILITIES
// ============================================================================

/// Validates a value with multiple validators, collecting every failure.
///
/// # Examples
///
/// ```
/// use strcheck_validator::foundation::{Validate, validate_with_all};
/// use strcheck_validator::validators::{Alphabetic, Lowercase};
///
/// let checks: &[&dyn Validate<Input = str>] = &[&Alphabetic, &Lowercase];
/// assert!(validate_with_all("abc", checks).is_ok());
///
/// let errors = validate_with_all("AB1", checks).unwrap_err();
/// assert_eq!(errors.len(), 2);
/// ```
pub fn validate_with_all<V>(value: &V::Input, validators: &[&V]) -> Result<(), ValidationErrors>
where
    V: Validate + ?Sized,
{
    let errors: ValidationErrors = validators
        .iter()
        .filter_map(|validator| validator.validate(value).err())
        .collect();

    if errors.has_errors() {
        Err(errors)
    } else {
        Ok(())
    }
}

/// Validates a value with multiple validators (at least one must pass).
pub fn validate_with_any<V>(value: &V::Input, validators: &[&V]) -> Result<(), ValidationErrors>
where
    V: Validate + ?Sized,
{
    let mut errors = ValidationErrors::new();

    for validator in validators {
        match validator.validate(value) {
            Ok(()) => return Ok(()),
            Err(e) => errors.add(e),
        }
    }

    Err(errors)
}
