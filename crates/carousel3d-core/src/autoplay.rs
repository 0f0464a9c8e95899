#![forbid(unsafe_code)]

//! Autoplay: a host-driven repeating timer.
//!
//! [`Autoplay`] models a cancellable `setInterval`: once started it comes due
//! every `interval`, and the host polls it with the current monotonic time.
//! Nothing runs in the background; a tick happens only inside
//! [`poll`](Autoplay::poll).
//!
//! # Invariants
//!
//! 1. `start()` on a running timer is a no-op (the schedule is not reset).
//! 2. `pause()` on a stopped timer is a no-op.
//! 3. After `pause()`, no later `poll()` fires until the next `start()`.
//! 4. A disabled timer never starts.
//! 5. At most one tick per `poll()`.
//!
//! # Failure Modes
//!
//! - Zero interval: clamped to 1ms to avoid a tick on every poll.
//! - Late polls: missed periods are dropped and the schedule realigns to the
//!   original phase, so a host that stalls for ten intervals sees one tick.

use std::time::Duration;

const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Playback state of the autoplay timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoplayState {
    /// Autoplay is not configured for this carousel.
    Disabled,
    /// Configured but not currently scheduled.
    Paused,
    /// Scheduled; the next tick is due at `next_due`.
    Running {
        /// Monotonic time of the next tick.
        next_due: Duration,
    },
}

/// Repeating timer driving `next()` on a fixed interval.
#[derive(Debug, Clone)]
pub struct Autoplay {
    enabled: bool,
    interval: Duration,
    next_due: Option<Duration>,
}

impl Autoplay {
    /// Create a timer. It starts paused.
    #[must_use]
    pub fn new(enabled: bool, interval: Duration) -> Self {
        Self {
            enabled,
            interval: interval.max(MIN_INTERVAL),
            next_due: None,
        }
    }

    /// A timer that never starts.
    #[must_use]
    pub fn disabled() -> Self {
        Self::new(false, MIN_INTERVAL)
    }

    /// Configured interval.
    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Whether autoplay is configured.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether a tick is scheduled.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> AutoplayState {
        match (self.enabled, self.next_due) {
            (false, _) => AutoplayState::Disabled,
            (true, None) => AutoplayState::Paused,
            (true, Some(next_due)) => AutoplayState::Running { next_due },
        }
    }

    /// Schedule the first tick one interval from `now`.
    ///
    /// Returns `true` if the timer transitioned from paused to running.
    pub fn start(&mut self, now: Duration) -> bool {
        if !self.enabled || self.next_due.is_some() {
            return false;
        }
        self.next_due = Some(now.saturating_add(self.interval));
        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "carousel.autoplay",
            action = "start",
            interval_ms = self.interval.as_millis() as u64
        );
        true
    }

    /// Cancel future ticks.
    ///
    /// Returns `true` if the timer was running.
    pub fn pause(&mut self) -> bool {
        let was_running = self.next_due.take().is_some();
        #[cfg(feature = "tracing")]
        if was_running {
            tracing::debug!(message = "carousel.autoplay", action = "pause");
        }
        was_running
    }

    /// Returns `true` if a tick is due at `now`, and reschedules.
    pub fn poll(&mut self, now: Duration) -> bool {
        let Some(due) = self.next_due else {
            return false;
        };
        if now < due {
            return false;
        }
        self.next_due = Some(next_after(due, now, self.interval));
        #[cfg(feature = "tracing")]
        tracing::trace!(message = "carousel.autoplay", action = "tick");
        true
    }

    /// Time remaining until the next tick, if running.
    #[must_use]
    pub fn remaining(&self, now: Duration) -> Option<Duration> {
        self.next_due.map(|due| due.saturating_sub(now))
    }
}

impl Default for Autoplay {
    fn default() -> Self {
        Self::disabled()
    }
}

/// First multiple of `interval` after `due` that lies strictly past `now`.
fn next_after(due: Duration, now: Duration, interval: Duration) -> Duration {
    let late = now.saturating_sub(due).as_nanos();
    let phase = late % interval.as_nanos();
    let until_next = interval.saturating_sub(Duration::from_nanos(phase as u64));
    now.saturating_add(until_next)
}
