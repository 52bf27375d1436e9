//! # strcheck-validator
//!
//! Stateless string format validators: character classes, numeric literals,
//! UUIDs, ISBNs, card numbers, IP addresses, dates and more.
//!
//! The crate has two layers:
//!
//! - **Predicates** ([`is_email`], [`is_isbn`], [`is_in`], ...) answer
//!   `true`/`false` and never panic.
//! - **Typed validators** ([`validators`]) return a structured
//!   [`ValidationError`](foundation::ValidationError) on failure and compose
//!   with `.and()`, `.or()` and `.not()`.
//!
//! ## Quick Start
//!
//! ```
//! use strcheck_validator::prelude::*;
//!
//! assert!(is_isbn_v13("978-4-87311-368-5"));
//! assert!(!is_hex_color("#ff12FG"));
//!
//! let err = isbn_10().validate("3423214121").unwrap_err();
//! assert_eq!(err.code, "isbn_checksum");
//!
//! let ticket = uuid_v4().or(alphanumeric().and(length_range(6, 6).unwrap()));
//! assert!(ticket.is_valid("ABC123"));
//! ```
//!
//! ## Creating Validators
//!
//! Use the [`validator!`] macro for zero-boilerplate validators,
//! or implement [`Validate`](foundation::Validate) manually for complex cases.
//!
//! ## Configuration
//!
//! [`rule::Rule`] describes one check as data. With the `serde` feature
//! (on by default) rules load from JSON or TOML.

// ValidationError is the fundamental error type for all validators;
// it is returned unboxed from every validation call.
#![allow(clippy::result_large_err)]
// Deep combinator nesting (And<Or<Not<...>, ...>, ...>) produces complex types.
#![allow(clippy::type_complexity)]

pub mod combinators;
pub mod foundation;
mod macros;
pub mod predicates;
pub mod prelude;
pub mod rule;
pub mod validators;

pub use predicates::*;
