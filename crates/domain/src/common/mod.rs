//! Common utility functions shared across the RenoPlan crates.
//!
//! Pure functions only - no side effects, no I/O. Every validator either
//! returns the sanitized value or a [`crate::DomainError`]; nothing is
//! partially applied.

pub mod validate;

// Re-export commonly used functions at crate root for convenience
pub use validate::{meets_minimum, non_blank, non_zero_positive, zero_or_positive};
