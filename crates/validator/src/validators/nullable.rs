//! Null (empty string) validator

use crate::foundation::ValidationError;

crate::validator! {
    /// Validates that a string is empty.
    ///
    /// Whitespace-only strings are not null. Combine with
    /// [`not`](crate::foundation::ValidateExt::not) for a "required" check.
    pub Null for str;
    rule(input) { input.is_empty() }
    error(input) {
        ValidationError::new("not_null", "String must be empty")
            .with_param("actual", input.len().to_string())
    }
    fn null();
}
