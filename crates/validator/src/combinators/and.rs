//! AND combinator - logical conjunction of validators

use crate::foundation::{Validate, ValidationError};

/// Combines two validators with logical AND.
///
/// The left validator runs first; the right one only runs if the left passed.
/// The first error is returned unchanged.
///
/// # Examples
///
/// ```
/// use strcheck_validator::combinators::And;
/// use strcheck_validator::foundation::Validate;
/// use strcheck_validator::validators::{hexadecimal, length_range};
///
/// let validator = And::new(hexadecimal(), length_range(6, 6).unwrap());
/// assert!(validator.is_valid("ff0044"));
/// assert!(!validator.is_valid("ff00"));
/// assert!(!validator.is_valid("gg0044"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<L, R> {
    pub(crate) left: L,
    pub(crate) right: R,
}

impl<L, R> And<L, R> {
    /// Creates a new `And` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Extracts the left and right validators.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> Validate for And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.left.validate(input)?;
        self.right.validate(input)?;
        Ok(())
    }
}

/// Creates an `And` combinator from two validators.
pub fn and<L, R>(left: L, right: R) -> And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    And::new(left, right)
}
