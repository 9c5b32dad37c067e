//! damm-checksum - Damm quasigroup check digit engine
//!
//! This crate provides functionality to:
//! - Compute the Damm check digit of digit-only strings and non-negative integers
//! - Append check digits to build checksummed identifiers
//! - Verify identifiers that carry a trailing check digit
//!
//! The scheme detects every single-digit substitution and every adjacent
//! transposition of the digits it protects.

pub mod app;
pub mod constants;
pub mod domain;

// Re-export commonly used items
pub use constants::OPERATION_TABLE;
pub use domain::checksum::{append, append_number, generate, generate_number, verify, verify_number};
pub use domain::digits::InputError;
