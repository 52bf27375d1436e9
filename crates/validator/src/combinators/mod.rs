//! Validator combinators
//!
//! Logical composition for anything implementing
//! [`Validate`](crate::foundation::Validate). Most callers reach these through
//! [`ValidateExt`](crate::foundation::ValidateExt) instead of naming the types.

pub mod and;
pub mod not;
pub mod or;

pub use and::{And, and};
pub use not::{Not, not};
pub use or::{Or, or};
