//! UUID validator for the canonical `8-4-4-4-12` textual form.
//!
//! Hex digits may be in either case. Braced, URN and hyphen-less forms are
//! rejected.

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::{Validate, ValidationError};

static UUID_LAYOUT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[0-9A-F]{8}-[0-9A-F]{4}-[0-9A-F]{4}-[0-9A-F]{4}-[0-9A-F]{12}$").unwrap()
});

/// Byte offset of the version nibble: `xxxxxxxx-xxxx-Vxxx-xxxx-xxxxxxxxxxxx`.
const VERSION_OFFSET: usize = 14;
/// Byte offset of the variant nibble: `xxxxxxxx-xxxx-xxxx-Nxxx-xxxxxxxxxxxx`.
const VARIANT_OFFSET: usize = 19;

// ============================================================================
// UUID VALIDATOR
// ============================================================================

/// Validates UUID strings, optionally pinned to one version.
///
/// Without a version only the layout is checked. With a version, the version
/// nibble must equal it and the variant nibble must be one of `8 9 a b`
/// (the RFC 4122 variant).
///
/// # Examples
///
/// ```
/// use strcheck_validator::foundation::Validate;
/// use strcheck_validator::validators::Uuid;
///
/// let any = Uuid::any();
/// assert!(any.is_valid("A987FBC9-4BED-3078-CF07-9141BA07C9F3"));
/// assert!(!any.is_valid("A987FBC94BED3078CF079141BA07C9F3"));
///
/// let v4 = Uuid::any().version(4);
/// assert!(v4.is_valid("713ae7e3-cb32-45f9-adcb-7c4fa86b90c1"));
/// assert!(!v4.is_valid("987FBC97-4BED-5078-AF07-9141BA07C9F3"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Uuid {
    version: Option<u8>,
}

impl Uuid {
    /// Accepts any version and variant.
    #[must_use]
    pub const fn any() -> Self {
        Self { version: None }
    }

    /// Only accept the given version (with the RFC 4122 variant).
    #[must_use = "builder methods must be chained or built"]
    pub const fn version(mut self, version: u8) -> Self {
        self.version = Some(version);
        self
    }

    /// The required version, if any.
    #[must_use]
    pub const fn required_version(&self) -> Option<u8> {
        self.version
    }

    fn nibble(uuid: &str, offset: usize) -> Option<u8> {
        uuid.as_bytes()
            .get(offset)
            .and_then(|b| char::from(*b).to_digit(16))
            .map(|v| v as u8)
    }
}

impl Validate for Uuid {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if !UUID_LAYOUT.is_match(input) {
            return Err(ValidationError::invalid_format("uuid"));
        }

        let Some(expected) = self.version else {
            return Ok(());
        };

        let actual = Self::nibble(input, VERSION_OFFSET);
        if actual != Some(expected) {
            tracing::trace!(code = "uuid_version", expected, ?actual, "uuid rejected");
            return Err(ValidationError::new(
                "uuid_version",
                format!("UUID must be version {expected}"),
            )
            .with_param("expected", expected.to_string())
            .with_param("actual", actual.map_or_else(String::new, |v| v.to_string())));
        }

        // 10xx in the top bits of the variant nibble.
        match Self::nibble(input, VARIANT_OFFSET) {
            Some(0x8..=0xB) => Ok(()),
            _ => {
                tracing::trace!(code = "uuid_variant", "uuid rejected");
                Err(ValidationError::new(
                    "uuid_variant",
                    "UUID variant must be RFC 4122 (8, 9, a or b)",
                ))
            }
        }
    }
}

/// Creates a validator accepting any UUID version.
#[must_use]
pub const fn uuid() -> Uuid {
    Uuid::any()
}

/// Creates a version 3 (MD5 name-based) UUID validator.
#[must_use]
pub const fn uuid_v3() -> Uuid {
    Uuid::any().version(3)
}

/// Creates a version 4 (random) UUID validator.
#[must_use]
pub const fn uuid_v4() -> Uuid {
    Uuid::any().version(4)
}

/// Creates a version 5 (SHA-1 name-based) UUID validator.
#[must_use]
pub const fn uuid_v5() -> Uuid {
    Uuid::any().version(5)
}

// ============================================================================
// TESTS
// ============================================================================
