//! OR combinator - logical disjunction of validators
//!
//! [`Or`] is how the crate expresses "any of these formats", e.g. an ISBN is
//! either a valid ISBN-10 or a valid ISBN-13.

use crate::foundation::{Validate, ValidationError};

/// Combines two validators with logical OR.
///
/// If the left validator passes, the right one is not evaluated. If both fail,
/// the returned `or_failed` error nests both branch errors in order.
///
/// # Examples
///
/// ```
/// use strcheck_validator::combinators::Or;
/// use strcheck_validator::foundation::Validate;
/// use strcheck_validator::validators::{isbn_10, isbn_13};
///
/// let validator = Or::new(isbn_10(), isbn_13());
/// assert!(validator.is_valid("3-8362-2119-5"));
/// assert!(validator.is_valid("978-3-8362-2119-1"));
///
/// let err = validator.validate("foo").unwrap_err();
/// assert_eq!(err.code, "or_failed");
/// assert_eq!(err.nested.len(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Or<L, R> {
    pub(crate) left: L,
    pub(crate) right: R,
}

impl<L, R> Or<L, R> {
    /// Creates a new `Or` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }
}

impl<L, R> Validate for Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match self.left.validate(input) {
            Ok(()) => Ok(()),
            Err(left_error) => match self.right.validate(input) {
                Ok(()) => Ok(()),
                Err(right_error) => {
                    Err(ValidationError::new("or_failed", "All alternatives failed")
                        .with_nested(vec![left_error, right_error]))
                }
            },
        }
    }
}

/// Creates an `Or` combinator from two validators.
pub fn or<L, R>(left: L, right: R) -> Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    Or::new(left, right)
}
