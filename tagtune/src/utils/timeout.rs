//! Timeout helpers used across the crate.
//!
//! Configuration and transports express time in milliseconds; these helpers
//! convert to `Duration` and back without silent overflow.

use std::time::{Duration, Instant};

/// Default read timeout in milliseconds used by transports when a caller
/// doesn't provide an explicit timeout.
pub const DEFAULT_READ_TIMEOUT_MS: u64 = 1000;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// Convenience: default read timeout as Duration.
pub fn default_read_timeout() -> Duration {
    ms(DEFAULT_READ_TIMEOUT_MS)
}

/// Duration as whole milliseconds, saturating at `u64::MAX`.
pub fn as_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

/// Milliseconds left until `deadline`, or `None` once it has passed.
pub fn remaining_ms(deadline: Instant) -> Option<u64> {
    let left = deadline.checked_duration_since(Instant::now())?;
    match as_ms(left) {
        0 => None,
        n => Some(n),
    }
}
