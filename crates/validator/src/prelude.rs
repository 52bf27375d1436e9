//! Prelude module for convenient imports.
//!
//! Provides a single `use strcheck_validator::prelude::*;` import that brings
//! in the traits, error types, predicates, validators and combinators.
//!
//! # Examples
//!
//! ```
//! use strcheck_validator::prelude::*;
//!
//! let username = alphanumeric().and(length_range(3, 20).unwrap());
//! assert!(username.is_valid("alice"));
//! assert!(is_email("alice@example.org"));
//! ```

// ============================================================================
// FOUNDATION: Core traits and errors
// ============================================================================

pub use crate::foundation::{Validate, ValidateExt, ValidationError, ValidationErrors};

// ============================================================================
// PREDICATES: Boolean checks
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::predicates::*;

// ============================================================================
// VALIDATORS: All built-in validators
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;

// ============================================================================
// COMBINATORS: Composition functions and types
// ============================================================================

pub use crate::combinators::{And, Not, Or, and, not, or};

// ============================================================================
// RULES: Declarative configuration
// ============================================================================

pub use crate::rule::{Rule, RuleError};
