//! Mergington Activities - Extracurricular Activity Signup Service
//!
//! Lists the school's extracurricular activities and lets students sign up
//! for, or unregister from, an activity by email.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
