//! Token-bucket rate limiting for the model gateway
//!
//! The bucket holds one token per request of the per-minute budget. Tokens
//! refill in whole-minute increments proportional to elapsed time, capped at
//! the bucket size. A request that finds zero tokens is rejected immediately
//! without any network call.

use std::time::{Duration, Instant};

/// Token bucket sized to a requests-per-minute budget.
///
/// Callers wrap this in a mutex; consume and refill happen together inside
/// [`TokenBucket::try_acquire`], so the whole operation is atomic with
/// respect to concurrent callers.
#[derive(Debug)]
pub struct TokenBucket {
    capacity: u32,
    tokens: u32,
    last_refill: Instant,
}

impl TokenBucket {
    /// Create a full bucket with the given per-minute capacity.
    pub fn new(requests_per_minute: u32) -> Self {
        let capacity = requests_per_minute.max(1);
        Self {
            capacity,
            tokens: capacity,
            last_refill: Instant::now(),
        }
    }

    /// Take one token if available, refilling first. Returns false when the
    /// budget for the current window is exhausted.
    pub fn try_acquire(&mut self) -> bool {
        self.try_acquire_at(Instant::now())
    }

    /// Clock-injected variant of [`TokenBucket::try_acquire`].
    pub fn try_acquire_at(&mut self, now: Instant) -> bool {
        self.refill(now);
        if self.tokens == 0 {
            return false;
        }
        self.tokens -= 1;
        true
    }

    /// Tokens currently available.
    pub fn available(&self) -> u32 {
        self.tokens
    }

    fn refill(&mut self, now: Instant) {
        let elapsed = now.saturating_duration_since(self.last_refill);
        let whole_minutes = elapsed.as_secs() / 60;
        if whole_minutes == 0 {
            return;
        }
        let refilled = (whole_minutes as u32).saturating_mul(self.capacity);
        self.tokens = self.tokens.saturating_add(refilled).min(self.capacity);
        self.last_refill += Duration::from_secs(whole_minutes * 60);
    }
}

// =============================================================================
// TESTS
// =============================================================================
