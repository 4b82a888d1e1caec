//! ocuscreen-auth
//!
//! Caller identity. Sign-up and sign-in happen in the hosted auth service;
//! this crate only validates the access tokens it issues.

pub mod error;
pub mod jwt;
