#![forbid(unsafe_code)]

//! Monotonic time sources.
//!
//! The controller never reads a clock on its own; callers pass `now` as a
//! [`Duration`] since an arbitrary origin. Hosts that want explicit control
//! (tests, WASM embeddings stepping a frame loop) use [`DeterministicClock`];
//! hosts that just want wall time use [`WallClock`], which is backed by
//! `web-time` so it also works on `wasm32-unknown-unknown`.

use std::time::Duration;

use web_time::Instant;

/// A monotonic clock reporting time since its origin.
pub trait MonotonicClock {
    /// Current monotonic time.
    fn now_mono(&self) -> Duration;
}

/// Deterministic monotonic clock controlled by the host.
#[derive(Debug, Default, Clone)]
pub struct DeterministicClock {
    now: Duration,
}

impl DeterministicClock {
    /// Create a clock starting at `0`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            now: Duration::ZERO,
        }
    }

    /// Set current monotonic time.
    pub fn set(&mut self, now: Duration) {
        self.now = now;
    }

    /// Advance monotonic time by `dt`.
    pub fn advance(&mut self, dt: Duration) {
        self.now = self.now.saturating_add(dt);
    }
}

impl MonotonicClock for DeterministicClock {
    fn now_mono(&self) -> Duration {
        self.now
    }
}

/// Wall-clock monotonic time measured from construction.
#[derive(Debug, Clone, Copy)]
pub struct WallClock {
    origin: Instant,
}

impl WallClock {
    /// Start a clock at the current instant.
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for WallClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MonotonicClock for WallClock {
    fn now_mono(&self) -> Duration {
        self.origin.elapsed()
    }
}
