//! Declarative validation rules.
//!
//! A [`Rule`] is a pure data description of one format check. With the
//! `serde` feature it (de)serialises as an internally tagged object, so checks
//! can live in JSON or TOML configuration:
//!
//! ```json
//! {"rule": "uuid", "version": 4}
//! {"rule": "length", "min": 1, "max": 64}
//! {"rule": "one_of", "values": ["moe", "larry", "curly"]}
//! ```
//!
//! Parameterless rules also parse from their bare name:
//!
//! ```
//! use strcheck_validator::rule::Rule;
//!
//! let rule: Rule = "hex_color".parse().unwrap();
//! assert!(rule.check("#f00"));
//! assert!(!rule.check("#ff12FG"));
//! ```

use std::fmt;
use std::str::FromStr;

use crate::foundation::{Validate, ValidationError};
use crate::validators::{self, CardBrand};

/// A declarative string format check.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "rule", rename_all = "snake_case"))]
pub enum Rule {
    /// ASCII letters only.
    Alpha,
    /// ASCII letters and digits only.
    Alphanumeric,
    /// Code points 0-127 only.
    Ascii,
    /// Hex digits only.
    Hexadecimal,
    /// `#rgb` or `#rrggbb`, `#` optional.
    HexColor,
    /// Email address syntax.
    Email,
    /// Canonical UUID, optionally pinned to a version.
    Uuid {
        #[cfg_attr(
            feature = "serde",
            serde(default, skip_serializing_if = "Option::is_none")
        )]
        version: Option<u8>,
    },
    /// Signed 64-bit integer.
    Int,
    /// Finite decimal float.
    Float,
    /// Boolean literal.
    Bool,
    /// ISBN-10 or ISBN-13.
    Isbn,
    /// ISBN-10.
    Isbn10,
    /// ISBN-13.
    Isbn13,
    /// Luhn-valid card number, optionally restricted to some brands.
    CreditCard {
        #[cfg_attr(
            feature = "serde",
            serde(default, skip_serializing_if = "Option::is_none")
        )]
        brands: Option<Vec<CardBrand>>,
    },
    /// Unchanged by lowercasing.
    LowerCase,
    /// Unchanged by uppercasing.
    UpperCase,
    /// Empty string.
    Null,
    /// Exactly one of `values`.
    OneOf { values: Vec<String> },
    /// IPv4 or IPv6 address.
    Ip,
    /// IPv4 address.
    Ipv4,
    /// IPv6 address.
    Ipv6,
    /// Character count within `min..=max`.
    Length { min: usize, max: usize },
    /// ISO 8601 date, optionally also RFC 3339 date-times.
    Date {
        #[cfg_attr(feature = "serde", serde(default))]
        allow_time: bool,
    },
}

impl Rule {
    /// Require a UUID of the given version.
    #[must_use]
    pub const fn uuid_version(version: u8) -> Self {
        Self::Uuid {
            version: Some(version),
        }
    }

    /// Require a card number of one of `brands`.
    #[must_use]
    pub fn credit_card_brands(brands: &[CardBrand]) -> Self {
        Self::CreditCard {
            brands: Some(brands.to_vec()),
        }
    }

    /// Require membership in `values`.
    #[must_use]
    pub fn one_of<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::OneOf {
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Require a character count within `min..=max`.
    #[must_use]
    pub const fn length(min: usize, max: usize) -> Self {
        Self::Length { min, max }
    }

    /// The `rule` tag of this variant.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Alpha => "alpha",
            Self::Alphanumeric => "alphanumeric",
            Self::Ascii => "ascii",
            Self::Hexadecimal => "hexadecimal",
            Self::HexColor => "hex_color",
            Self::Email => "email",
            Self::Uuid { .. } => "uuid",
            Self::Int => "int",
            Self::Float => "float",
            Self::Bool => "bool",
            Self::Isbn => "isbn",
            Self::Isbn10 => "isbn10",
            Self::Isbn13 => "isbn13",
            Self::CreditCard { .. } => "credit_card",
            Self::LowerCase => "lower_case",
            Self::UpperCase => "upper_case",
            Self::Null => "null",
            Self::OneOf { .. } => "one_of",
            Self::Ip => "ip",
            Self::Ipv4 => "ipv4",
            Self::Ipv6 => "ipv6",
            Self::Length { .. } => "length",
            Self::Date { .. } => "date",
        }
    }

    /// Runs the check, returning the typed validator's error on failure.
    pub fn validate(&self, input: &str) -> Result<(), ValidationError> {
        match self {
            Self::Alpha => validators::Alphabetic.validate(input),
            Self::Alphanumeric => validators::Alphanumeric.validate(input),
            Self::Ascii => validators::Ascii.validate(input),
            Self::Hexadecimal => validators::Hexadecimal.validate(input),
            Self::HexColor => validators::HexColor.validate(input),
            Self::Email => validators::Email.validate(input),
            Self::Uuid { version: None } => validators::uuid().validate(input),
            Self::Uuid {
                version: Some(version),
            } => validators::uuid().version(*version).validate(input),
            Self::Int => validators::Integer.validate(input),
            Self::Float => validators::Float.validate(input),
            Self::Bool => validators::BoolLiteral.validate(input),
            Self::Isbn => validators::isbn().validate(input),
            Self::Isbn10 => validators::Isbn10.validate(input),
            Self::Isbn13 => validators::Isbn13.validate(input),
            Self::CreditCard { brands: None } => validators::credit_card().validate(input),
            Self::CreditCard {
                brands: Some(brands),
            } => validators::credit_card().only(brands).validate(input),
            Self::LowerCase => validators::Lowercase.validate(input),
            Self::UpperCase => validators::Uppercase.validate(input),
            Self::Null => validators::Null.validate(input),
            Self::OneOf { values } => validators::validate_membership(input, values),
            Self::Ip => validators::IpAddress.validate(input),
            Self::Ipv4 => validators::Ipv4.validate(input),
            Self::Ipv6 => validators::Ipv6.validate(input),
            Self::Length { min, max } => validators::length_range(*min, *max)?.validate(input),
            Self::Date { allow_time: false } => validators::date().validate(input),
            Self::Date { allow_time: true } => validators::date().allow_time().validate(input),
        }
    }

    /// Whether `input` passes the check.
    #[must_use]
    pub fn check(&self, input: &str) -> bool {
        self.validate(input).is_ok()
    }
}

impl Validate for Rule {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        Self::validate(self, input)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors from parsing a [`Rule`] out of its name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    /// No rule has this name.
    #[error("unknown rule: {0}")]
    Unknown(String),

    /// The rule exists but cannot be built without parameters.
    #[error("rule '{0}' requires parameters")]
    MissingParameters(&'static str),
}

impl FromStr for Rule {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rule = match s {
            "alpha" => Self::Alpha,
            "alphanumeric" => Self::Alphanumeric,
            "ascii" => Self::Ascii,
            "hexadecimal" => Self::Hexadecimal,
            "hex_color" => Self::HexColor,
            "email" => Self::Email,
            "uuid" => Self::Uuid { version: None },
            "uuid_v3" => Self::uuid_version(3),
            "uuid_v4" => Self::uuid_version(4),
            "uuid_v5" => Self::uuid_version(5),
            "int" => Self::Int,
            "float" => Self::Float,
            "bool" => Self::Bool,
            "isbn" => Self::Isbn,
            "isbn10" => Self::Isbn10,
            "isbn13" => Self::Isbn13,
            "credit_card" => Self::CreditCard { brands: None },
            "lower_case" => Self::LowerCase,
            "upper_case" => Self::UpperCase,
            "null" => Self::Null,
            "ip" => Self::Ip,
            "ipv4" => Self::Ipv4,
            "ipv6" => Self::Ipv6,
            "date" => Self::Date { allow_time: false },
            "one_of" => return Err(RuleError::MissingParameters("one_of")),
            "length" => return Err(RuleError::MissingParameters("length")),
            other => return Err(RuleError::Unknown(other.to_owned())),
        };
        Ok(rule)
    }
}
