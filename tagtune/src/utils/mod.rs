//! Utilities for tagtune: small, reusable helpers used across the crate.
//!
//! Hex rendering for logs and tag identifiers, timeout conversion, and the
//! `Delay` seam the player and control loop sleep through.

pub mod delay;
pub mod hex;
pub mod timeout;

// Re-export the most common helpers at the `utils` module level so callers can
// use `crate::utils::bytes_to_hex(...)` etc if they prefer.
pub use delay::*;
pub use hex::*;
pub use timeout::*;
