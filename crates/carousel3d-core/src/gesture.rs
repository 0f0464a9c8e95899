#![forbid(unsafe_code)]

//! Swipe recognition: turns touch start/end pairs into horizontal swipes.
//!
//! [`SwipeRecognizer`] records where a touch sequence began and, when it
//! ends, compares the horizontal travel against a threshold. Travel to the
//! left (finger moved toward smaller `x`) is a [`Swipe::Left`], which the
//! controller maps to `next()`; travel to the right maps to `prev()`.
//!
//! # Invariants
//!
//! 1. A swipe is emitted only when `|start - end|` strictly exceeds the
//!    threshold; travel equal to the threshold is in the dead zone.
//! 2. At most one swipe per start/end pair.
//! 3. A touch end without a recorded start emits nothing.
//! 4. After `reset()`, the recognizer is idle.
//!
//! # Failure Modes
//!
//! - A second start before an end replaces the first; the earlier contact is
//!   forgotten rather than merged.
//! - Non-finite coordinates never produce a swipe (comparisons with NaN are
//!   false).

use crate::config::DEFAULT_SWIPE_THRESHOLD;
use crate::event::{TouchEvent, TouchPhase};

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Thresholds for swipe recognition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeConfig {
    /// Horizontal travel in pixels that must be exceeded (default: 50).
    pub threshold: f32,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_SWIPE_THRESHOLD,
        }
    }
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// Direction the finger travelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Swipe {
    /// Finger moved left; content advances.
    Left,
    /// Finger moved right; content goes back.
    Right,
}

// ---------------------------------------------------------------------------
// SwipeRecognizer
// ---------------------------------------------------------------------------

/// Stateful recognizer for horizontal swipes.
#[derive(Debug, Clone, Default)]
pub struct SwipeRecognizer {
    config: SwipeConfig,
    start_x: Option<f32>,
}

impl SwipeRecognizer {
    /// Create a new recognizer with the given configuration.
    #[must_use]
    pub fn new(config: SwipeConfig) -> Self {
        Self {
            config,
            start_x: None,
        }
    }

    /// Current configuration.
    #[must_use]
    pub const fn config(&self) -> SwipeConfig {
        self.config
    }

    /// Whether a touch sequence is in progress.
    #[must_use]
    pub const fn is_tracking(&self) -> bool {
        self.start_x.is_some()
    }

    /// Process one touch event, returning a swipe when a sequence completes
    /// beyond the threshold.
    pub fn process(&mut self, event: &TouchEvent) -> Option<Swipe> {
        match event.phase {
            TouchPhase::Start => {
                self.start_x = Some(event.x);
                None
            }
            TouchPhase::End => {
                let start = self.start_x.take()?;
                classify(start - event.x, self.config.threshold)
            }
        }
    }

    /// Drop any in-progress sequence.
    pub fn reset(&mut self) {
        self.start_x = None;
    }
}

/// Classify a `start - end` travel distance.
#[must_use]
pub fn classify(delta: f32, threshold: f32) -> Option<Swipe> {
    if delta > threshold {
        Some(Swipe::Left)
    } else if delta < -threshold {
        Some(Swipe::Right)
    } else {
        None
    }
}
