//! Built-in validators
//!
//! One typed validator per string format. Each implements
//! [`Validate<Input = str>`](crate::foundation::Validate) and has a factory
//! function of the same name in snake_case.
//!
//! # Categories
//!
//! - **Character classes**: alphabetic, alphanumeric, ASCII, hexadecimal, case
//! - **Formats**: email, UUID (any, v3, v4, v5), hex color, date
//! - **Numeric literals**: integer, float, boolean
//! - **Checksums**: ISBN-10, ISBN-13, credit card (Luhn)
//! - **Network**: IP address, IPv4, IPv6
//! - **Other**: null, set membership, length range
//!
//! # Examples
//!
//! ```
//! use strcheck_validator::prelude::*;
//!
//! let product_code = isbn_10().or(isbn_13());
//! assert!(product_code.is_valid("978-3-8362-2119-1"));
//!
//! let short_id = alphanumeric().and(length_range(4, 12).unwrap());
//! assert!(short_id.is_valid("abc123"));
//! assert!(!short_id.is_valid("ab"));
//! ```

// Character-class validators
pub mod hex;
pub mod pattern;

// Format validators
pub mod content;
pub mod date;
pub mod uuid;

// Numeric literal validators
pub mod boolean;
pub mod numeric;

// Checksum validators
pub mod credit_card;
pub mod isbn;

// Network validators
pub mod ip_address;

// Other validators
pub mod length;
pub mod nullable;
pub mod sets;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use pattern::{
    Alphabetic, Alphanumeric, Ascii, Lowercase, Uppercase, alphabetic, alphanumeric, ascii,
    lowercase, uppercase,
};

pub use hex::{HexColor, Hexadecimal, hex_color, hexadecimal};

pub use content::{Email, email};
pub use date::{Date, date, parse_date};
pub use uuid::{Uuid, uuid, uuid_v3, uuid_v4, uuid_v5};

pub use boolean::{BOOL_LITERALS, BoolLiteral, bool_literal, parse_bool};
pub use numeric::{Float, Integer, float, integer};

pub use credit_card::{CardBrand, CardBrands, CreditCard, credit_card, luhn_valid};
pub use isbn::{Isbn, Isbn10, Isbn13, isbn, isbn_10, isbn_13};

pub use ip_address::{IpAddress, Ipv4, Ipv6, ip_address, ipv4, ipv6};

pub use length::{LengthRange, length_range};
pub use nullable::{Null, null};
pub use sets::{OneOf, contains_exact, one_of, validate_membership};
