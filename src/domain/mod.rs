//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, errors)
//! - `activity` - Activity aggregate, roster rules and seed catalog

pub mod activity;
pub mod foundation;
