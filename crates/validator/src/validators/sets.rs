//! Set membership validator

use crate::foundation::{Validate, ValidationError};

/// Whether `input` equals any element of `set`, case-sensitively.
///
/// Elements are compared in order and the scan stops at the first match.
pub fn contains_exact<S: AsRef<str>>(input: &str, set: &[S]) -> bool {
    set.iter().any(|item| item.as_ref() == input)
}

/// Checks exact membership, reporting the allowed values on failure.
///
/// Shared by [`OneOf`] and borrowed-list callers such as
/// [`Rule::OneOf`](crate::rule::Rule::OneOf).
pub fn validate_membership<S: AsRef<str>>(
    input: &str,
    set: &[S],
) -> Result<(), ValidationError> {
    if contains_exact(input, set) {
        return Ok(());
    }

    let allowed = set.iter().map(AsRef::<str>::as_ref).collect::<Vec<_>>().join(", ");
    Err(ValidationError::new("not_one_of", "Value is not one of the allowed values")
        .with_param("allowed", allowed))
}

/// Validates that a string is exactly one of an allowed list.
///
/// The list keeps its order and duplicates; comparison is case-sensitive.
///
/// # Examples
///
/// ```
/// use strcheck_validator::foundation::Validate;
/// use strcheck_validator::validators::one_of;
///
/// let stooges = one_of(["moe", "larry", "curly"]);
/// assert!(stooges.is_valid("moe"));
/// assert!(!stooges.is_valid("Moe"));
/// assert!(!stooges.is_valid("groucho"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct OneOf {
    values: Vec<String>,
}

impl OneOf {
    /// Creates a validator from any list of strings.
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// The allowed values, in order.
    #[must_use]
    pub fn values(&self) -> &[String] {
        &self.values
    }
}

impl Validate for OneOf {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        validate_membership(input, &self.values)
    }
}

/// Creates a set membership validator.
pub fn one_of<I, S>(values: I) -> OneOf
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    OneOf::new(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_exact() {
        let stooges = ["moe", "larry", "curly"];
        assert!(contains_exact("moe", &stooges));
        assert!(!contains_exact("groucho", &stooges));
        assert!(!contains_exact("", &stooges));
        assert!(!contains_exact::<&str>("moe", &[]));
    }

    #[test]
    fn test_contains_exact_owned_strings() {
        let set = vec![String::from("a"), String::from("")];
        assert!(contains_exact("", &set));
        assert!(!contains_exact("A", &set));
    }

    #[test]
    fn test_one_of_error_lists_allowed() {
        let err = one_of(["red", "green"]).validate("blue").unwrap_err();
        assert_eq!(err.code, "not_one_of");
        assert_eq!(err.param("allowed"), Some("red, green"));
    }

    #[test]
    fn test_validate_membership_borrowed_list() {
        assert!(validate_membership("larry", &["moe", "larry"]).is_ok());

        let err = validate_membership("groucho", &["moe", "larry"]).unwrap_err();
        assert_eq!(err, one_of(["moe", "larry"]).validate("groucho").unwrap_err());

        let err = validate_membership::<&str>("x", &[]).unwrap_err();
        assert_eq!(err.param("allowed"), Some(""));
    }

    #[test]
    fn test_one_of_keeps_order() {
        let v = one_of(vec!["b", "a", "b"]);
        assert_eq!(v.values(), ["b", "a", "b"]);
    }
}
