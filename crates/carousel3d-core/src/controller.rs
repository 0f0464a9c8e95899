#![forbid(unsafe_code)]

//! Input adapters: canonical events in, navigation calls out.
//!
//! [`Controller`] bundles a [`Carousel`] with the stateful pieces that sit in
//! front of it (swipe recognition, the autoplay timer, hover policy) and maps
//! each [`Event`] onto at most one navigation call:
//!
//! | Event                         | Effect                                   |
//! |-------------------------------|------------------------------------------|
//! | `Key(Left)` press/repeat      | `prev()`                                 |
//! | `Key(Right)` press/repeat     | `next()`                                 |
//! | `Slide(i, Enter)`             | `go_to(i)` if hover navigation is on     |
//! | `Slide(i, Click)`             | activation of `i`; `go_to(i)` if click-select is on |
//! | `Touch` start/end             | `next()` / `prev()` past the threshold   |
//! | `Pointer(Enter)` / `Leave`    | pause / resume autoplay                  |
//! | `Indicator(i)`                | `go_to(i)`                               |
//! | `Button(Prev)` / `Next`       | `prev()` / `next()`                      |
//!
//! Autoplay ticks come from [`Controller::tick`], which the host calls with
//! its monotonic time. Events are handled strictly in call order.

use std::time::Duration;

use crate::autoplay::Autoplay;
use crate::carousel::Carousel;
use crate::config::CarouselConfig;
use crate::error::{ConstructionError, NavigationError};
use crate::event::{
    ButtonAction, Event, KeyCode, KeyEvent, PointerEvent, SlideEvent, SlideEventKind,
};
use crate::gesture::{Swipe, SwipeConfig, SwipeRecognizer};

/// Result of handling one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// The event had no effect.
    Ignored,
    /// A navigation call changed (or re-presented) the active slide.
    Navigated,
    /// A navigation call was valid but the carousel sits at a non-looping
    /// boundary.
    AtBoundary,
    /// `go_to` rejected the target.
    Rejected(NavigationError),
    /// Slide `i` was clicked; the host decides what activation means.
    Activated(usize),
    /// Autoplay was paused by this event.
    AutoplayPaused,
    /// Autoplay was resumed by this event.
    AutoplayResumed,
}

impl InputOutcome {
    /// Whether the active-index notification fired.
    #[must_use]
    pub const fn navigated(self) -> bool {
        matches!(self, Self::Navigated)
    }
}

/// Event-driven front end for a [`Carousel`].
#[derive(Debug)]
pub struct Controller {
    carousel: Carousel,
    autoplay: Autoplay,
    swipe: SwipeRecognizer,
    hover_navigates: bool,
    click_selects: bool,
    pointer_inside: bool,
}

impl Controller {
    /// Build a carousel of `slide_count` slides configured by `config`.
    pub fn new(slide_count: usize, config: &CarouselConfig) -> Result<Self, ConstructionError> {
        config.validate()?;
        let carousel = Carousel::new(slide_count, config.loop_navigation)?;
        Ok(Self::with_carousel(carousel, config))
    }

    /// Wrap an existing carousel. The carousel's own loop policy is kept.
    #[must_use]
    pub fn with_carousel(carousel: Carousel, config: &CarouselConfig) -> Self {
        Self {
            carousel,
            autoplay: Autoplay::new(config.autoplay, config.interval()),
            swipe: SwipeRecognizer::new(SwipeConfig {
                threshold: config.swipe_threshold,
            }),
            hover_navigates: config.hover_navigates,
            click_selects: config.click_selects,
            pointer_inside: false,
        }
    }

    /// The underlying state machine.
    #[must_use]
    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    /// Mutable access, e.g. to subscribe observers.
    pub fn carousel_mut(&mut self) -> &mut Carousel {
        &mut self.carousel
    }

    /// Autoplay timer state.
    #[must_use]
    pub fn autoplay(&self) -> &Autoplay {
        &self.autoplay
    }

    /// Whether the pointer is currently over the widget.
    #[must_use]
    pub const fn pointer_inside(&self) -> bool {
        self.pointer_inside
    }

    /// Override the hover policy (e.g. a host attribute disables it).
    pub fn set_hover_navigates(&mut self, enabled: bool) {
        self.hover_navigates = enabled;
    }

    /// Advance one slide.
    pub fn next(&mut self) -> InputOutcome {
        boundary(self.carousel.next())
    }

    /// Go back one slide.
    pub fn prev(&mut self) -> InputOutcome {
        boundary(self.carousel.prev())
    }

    /// Jump to slide `index`.
    pub fn go_to(&mut self, index: usize) -> InputOutcome {
        match self.carousel.go_to(index) {
            Ok(()) => InputOutcome::Navigated,
            Err(err) => InputOutcome::Rejected(err),
        }
    }

    /// Start autoplay. No-op if disabled or already running.
    pub fn start_autoplay(&mut self, now: Duration) -> bool {
        self.autoplay.start(now)
    }

    /// Pause autoplay. No-op if not running.
    pub fn pause_autoplay(&mut self) -> bool {
        self.autoplay.pause()
    }

    /// Fire a due autoplay tick. Returns `true` if `next()` was invoked.
    pub fn tick(&mut self, now: Duration) -> bool {
        if self.autoplay.poll(now) {
            self.carousel.next();
            true
        } else {
            false
        }
    }

    /// Handle one canonical event at monotonic time `now`.
    pub fn handle(&mut self, event: &Event, now: Duration) -> InputOutcome {
        match *event {
            Event::Key(key) => self.handle_key(&key),
            Event::Slide(slide) => self.handle_slide(slide),
            Event::Pointer(pointer) => self.handle_pointer(pointer, now),
            Event::Touch(touch) => match self.swipe.process(&touch) {
                Some(Swipe::Left) => self.next(),
                Some(Swipe::Right) => self.prev(),
                None => InputOutcome::Ignored,
            },
            Event::Indicator(index) => self.go_to(index),
            Event::Button(ButtonAction::Prev) => self.prev(),
            Event::Button(ButtonAction::Next) => self.next(),
        }
    }

    fn handle_key(&mut self, key: &KeyEvent) -> InputOutcome {
        if !key.is_press() {
            return InputOutcome::Ignored;
        }
        match key.code {
            KeyCode::Left => self.prev(),
            KeyCode::Right => self.next(),
            _ => InputOutcome::Ignored,
        }
    }

    fn handle_slide(&mut self, slide: SlideEvent) -> InputOutcome {
        match slide.kind {
            SlideEventKind::Enter if self.hover_navigates => self.go_to(slide.index),
            SlideEventKind::Enter => InputOutcome::Ignored,
            SlideEventKind::Click => {
                if slide.index >= self.carousel.slide_count() {
                    return InputOutcome::Rejected(NavigationError::IndexOutOfRange {
                        index: slide.index,
                        slide_count: self.carousel.slide_count(),
                    });
                }
                if self.click_selects {
                    // Index was checked above; go_to cannot fail here.
                    let _ = self.carousel.go_to(slide.index);
                }
                InputOutcome::Activated(slide.index)
            }
        }
    }

    fn handle_pointer(&mut self, pointer: PointerEvent, now: Duration) -> InputOutcome {
        match pointer {
            PointerEvent::Enter => {
                self.pointer_inside = true;
                if self.autoplay.pause() {
                    InputOutcome::AutoplayPaused
                } else {
                    InputOutcome::Ignored
                }
            }
            PointerEvent::Leave => {
                self.pointer_inside = false;
                if self.autoplay.start(now) {
                    InputOutcome::AutoplayResumed
                } else {
                    InputOutcome::Ignored
                }
            }
        }
    }
}

fn boundary(changed: bool) -> InputOutcome {
    if changed {
        InputOutcome::Navigated
    } else {
        InputOutcome::AtBoundary
    }
}
