//! Time utilities for Xid generation
//!
//! Provides wall-clock time in whole Unix seconds

use std::time::{SystemTime, UNIX_EPOCH};

/// Get current wall-clock time in seconds since the Unix epoch
///
/// A clock set before the epoch reads as 0; one past 2106-02-07 reads as
/// `u32::MAX`.
#[inline(always)]
pub fn unix_time_secs() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| u32::try_from(d.as_secs()).unwrap_or(u32::MAX))
        .unwrap_or(0)
}
