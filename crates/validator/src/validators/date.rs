//! Calendar date validator for ISO 8601 `YYYY-MM-DD` strings.
//!
//! The shape is checked byte by byte, then the day is checked against the
//! calendar with `chrono`, so `2024-02-29` passes and `2023-02-29` does not.

use chrono::{DateTime, NaiveDate};

use crate::foundation::{Validate, ValidationError};

// ============================================================================
// DATE VALIDATOR
// ============================================================================

/// Validates ISO 8601 calendar dates.
///
/// Supports:
/// - `YYYY-MM-DD` (always)
/// - RFC 3339 date-times such as `2011-08-04T10:00:00Z`, when built with
///   [`Date::allow_time`]
///
/// # Examples
///
/// ```
/// use strcheck_validator::foundation::Validate;
/// use strcheck_validator::validators::Date;
///
/// let v = Date::new();
/// assert!(v.is_valid("2011-08-04"));
/// assert!(!v.is_valid("2011-8-4"));
/// assert!(!v.is_valid("2011-02-30"));
///
/// let with_time = Date::new().allow_time();
/// assert!(with_time.is_valid("2011-08-04T10:00:00+02:00"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Date {
    allow_time: bool,
}

impl Date {
    /// Creates a validator for plain `YYYY-MM-DD` dates.
    #[must_use]
    pub fn new() -> Self {
        Self { allow_time: false }
    }

    /// Also accept RFC 3339 date-times.
    #[must_use = "builder methods must be chained or built"]
    pub fn allow_time(mut self) -> Self {
        self.allow_time = true;
        self
    }
}

/// Parses a fixed-width numeric field. Every byte must be an ASCII digit.
fn parse_digits(bytes: &[u8]) -> Option<u32> {
    bytes.iter().try_fold(0u32, |acc, &b| {
        b.is_ascii_digit().then(|| acc * 10 + u32::from(b - b'0'))
    })
}

/// Parses `YYYY-MM-DD` into a calendar date.
pub fn parse_date(input: &str) -> Result<NaiveDate, ValidationError> {
    let bytes = input.as_bytes();

    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return Err(ValidationError::invalid_format("date"));
    }

    let (Some(year), Some(month), Some(day)) = (
        parse_digits(&bytes[0..4]),
        parse_digits(&bytes[5..7]),
        parse_digits(&bytes[8..10]),
    ) else {
        return Err(ValidationError::invalid_format("date"));
    };

    // Four digits always fit in i32.
    NaiveDate::from_ymd_opt(year as i32, month, day).ok_or_else(|| {
        ValidationError::new("invalid_date", "Date does not exist in the calendar")
            .with_param("year", year.to_string())
            .with_param("month", month.to_string())
            .with_param("day", day.to_string())
    })
}

impl Validate for Date {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if input.is_empty() {
            return Err(ValidationError::empty("date"));
        }

        match parse_date(input) {
            Ok(_) => Ok(()),
            Err(_) if self.allow_time && DateTime::parse_from_rfc3339(input).is_ok() => Ok(()),
            Err(e) => Err(e),
        }
    }
}

/// Creates a `YYYY-MM-DD` date validator.
#[must_use]
pub fn date() -> Date {
    Date::new()
}

// ============================================================================
// TESTS
// ============================================================================
