//! Foundation module - Shared domain primitives.
//!
//! Contains the value objects and error types that form the vocabulary of
//! the activity signup domain.

mod email;
mod errors;

pub use email::Email;
pub use errors::{DomainError, ErrorCode, ValidationError};
