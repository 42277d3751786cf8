//! Input validation and normalization toolkit.
//!
//! Format predicates, credential policies and phone number normalization,
//! plus the small helpers (OTP codes, PIN registry, env loading) that go
//! with them.

pub mod env;
pub mod utils;
pub mod validation;
