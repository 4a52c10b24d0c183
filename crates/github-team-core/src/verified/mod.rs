//! Pure decision functions for the check and in operations.
//!
//! Everything here is deterministic: the current fingerprint, the version the
//! orchestrator supplied, and the current time all arrive as parameters.
//!
//! # Tiger Style
//!
//! - Pure functions with no side effects
//! - Time passed as explicit parameter
//! - Saturating comparisons, no arithmetic that can overflow

mod check;
mod fetch;

pub use check::*;
pub use fetch::*;
