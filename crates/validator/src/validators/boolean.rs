//! Boolean literal validator

use crate::foundation::ValidationError;

/// Every spelling accepted as a boolean literal.
pub const BOOL_LITERALS: [&str; 12] = [
    "1", "t", "T", "TRUE", "true", "True", "0", "f", "F", "FALSE", "false", "False",
];

crate::validator! {
    /// Validates that a string is a boolean literal.
    ///
    /// Only the spellings in [`BOOL_LITERALS`] pass; mixed-case forms such as
    /// `"tRuE"` and padded digits such as `"01"` do not.
    pub BoolLiteral for str;
    rule(input) { BOOL_LITERALS.contains(&input) }
    error(input) { ValidationError::invalid_format("bool") }
    fn bool_literal();
}

/// Parses a boolean literal.
///
/// Returns `None` for anything [`BoolLiteral`] rejects.
pub fn parse_bool(input: &str) -> Option<bool> {
    match input {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;

    #[test]
    fn test_bool_literal() {
        let validator = bool_literal();
        for valid in BOOL_LITERALS {
            assert!(validator.validate(valid).is_ok(), "{valid}");
        }
        for invalid in ["a", "verdadero", "fv", "00", "01", "tRuE", "yes", " true", ""] {
            assert!(validator.validate(invalid).is_err(), "{invalid}");
        }
    }

    #[test]
    fn test_parse_bool_agrees_with_validator() {
        for literal in BOOL_LITERALS {
            assert!(parse_bool(literal).is_some());
        }
        assert_eq!(parse_bool("True"), Some(true));
        assert_eq!(parse_bool("0"), Some(false));
        assert_eq!(parse_bool("01"), None);
    }
}
