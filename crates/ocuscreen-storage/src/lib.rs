//! ocuscreen-storage
//!
//! Append-only record persistence. S3 operations are a thin wrapper around
//! the AWS S3 SDK; an in-memory store backs local runs and tests.

pub mod client;
pub mod error;
pub mod memory;
pub mod objects;
pub mod records;
