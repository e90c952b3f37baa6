//! Atomic 24-bit counter
//!
//! Backed by an `AtomicU32`. Since 2^32 is a multiple of 2^24, masking the
//! wrapped u32 gives the same sequence as counting mod 2^24.

use std::sync::atomic::{AtomicU32, Ordering};

use crate::config::COUNTER_MASK;

#[derive(Debug)]
pub struct Counter(AtomicU32);

impl Counter {
    /// Mask to extract the counter from raw value
    pub const MASK: u32 = COUNTER_MASK;

    #[inline]
    pub const fn new(seed: u32) -> Self {
        Self(AtomicU32::new(seed & Self::MASK))
    }

    /// Increment and return the post-increment value, wrapping at 2^24
    #[inline(always)]
    pub fn next(&self) -> u32 {
        self.0.fetch_add(1, Ordering::Relaxed).wrapping_add(1) & Self::MASK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_post_increment() {
        let counter = Counter::new(41);
        assert_eq!(counter.next(), 42);
        assert_eq!(counter.next(), 43);
    }

    #[test]
    fn test_counter_wraps_at_24_bits() {
        let counter = Counter::new(Counter::MASK - 1);
        assert_eq!(counter.next(), Counter::MASK);
        assert_eq!(counter.next(), 0);
        assert_eq!(counter.next(), 1);
    }

    #[test]
    fn test_counter_wraps_across_u32() {
        let counter = Counter(AtomicU32::new(u32::MAX));
        assert_eq!(counter.next(), 0);
        assert_eq!(counter.next(), 1);
    }

    #[test]
    fn test_seed_is_masked() {
        let counter = Counter::new(0x0100_0005);
        assert_eq!(counter.next(), 6);
    }
}
