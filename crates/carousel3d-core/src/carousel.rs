#![forbid(unsafe_code)]

//! The carousel navigation state machine.
//!
//! A [`Carousel`] owns the active index of a fixed set of slides and the
//! loop policy. It exposes three transitions ([`next`](Carousel::next),
//! [`prev`](Carousel::prev), [`go_to`](Carousel::go_to)); each one that
//! changes state recomputes the [`RoleAssignment`] and notifies every
//! subscribed observer exactly once.
//!
//! # Invariants
//!
//! 1. `slide_count >= 1` and `active_index < slide_count`, always.
//! 2. The cached role assignment equals
//!    `RoleAssignment::compute(active_index, slide_count, looping)`.
//! 3. One notification per successful call, delivered after the state change.
//! 4. `next`/`prev` at a non-looping boundary change nothing and notify no one.
//! 5. `go_to` out of range changes nothing and notifies no one.
//!
//! # Re-entry
//!
//! `go_to(active_index)` is accepted and notifies again. Hover navigation
//! relies on this: re-entering the active slide re-presents it.

use std::fmt;

use crate::error::{ConstructionError, NavigationError};
use crate::role::{Role, RoleAssignment};

/// Which transition produced a change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavCause {
    /// [`Carousel::next`].
    Next,
    /// [`Carousel::prev`].
    Prev,
    /// [`Carousel::go_to`].
    GoTo,
}

impl NavCause {
    /// Short name for logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Next => "next",
            Self::Prev => "prev",
            Self::GoTo => "go_to",
        }
    }
}

/// Payload delivered to observers after the active index changes.
#[derive(Debug, Clone, Copy)]
pub struct ActiveChange<'a> {
    /// Active index before the call.
    pub previous: usize,
    /// Active index after the call.
    pub active: usize,
    /// Number of slides.
    pub slide_count: usize,
    /// Transition that produced the change.
    pub cause: NavCause,
    /// Roles for the new state.
    pub roles: &'a RoleAssignment,
}

impl ActiveChange<'_> {
    /// Whether the index actually moved (false for a `go_to` re-entry).
    #[must_use]
    pub const fn moved(&self) -> bool {
        self.previous != self.active
    }
}

/// Handle returned by [`Carousel::on_active_changed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

type Observer = Box<dyn FnMut(&ActiveChange<'_>)>;

/// Navigation state for one carousel instance.
pub struct Carousel {
    slide_count: usize,
    active_index: usize,
    looping: bool,
    roles: RoleAssignment,
    observers: Vec<(ObserverId, Observer)>,
    next_observer_id: u64,
}

impl fmt::Debug for Carousel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Carousel")
            .field("slide_count", &self.slide_count)
            .field("active_index", &self.active_index)
            .field("looping", &self.looping)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Carousel {
    /// Create a carousel with `slide_count` slides, the first one active.
    pub fn new(slide_count: usize, looping: bool) -> Result<Self, ConstructionError> {
        if slide_count == 0 {
            #[cfg(feature = "tracing")]
            tracing::warn!(message = "carousel.construct", error = "no slides found");
            return Err(ConstructionError::NoSlides);
        }
        Ok(Self {
            slide_count,
            active_index: 0,
            looping,
            roles: RoleAssignment::compute(0, slide_count, looping),
            observers: Vec::new(),
            next_observer_id: 0,
        })
    }

    /// Start at `index` instead of the first slide. No notification is sent.
    pub fn starting_at(mut self, index: usize) -> Result<Self, NavigationError> {
        self.check_index(index)?;
        self.active_index = index;
        self.recompute();
        Ok(self)
    }

    /// Number of slides.
    #[must_use]
    pub const fn slide_count(&self) -> usize {
        self.slide_count
    }

    /// Index of the active slide.
    #[must_use]
    pub const fn active_index(&self) -> usize {
        self.active_index
    }

    /// Whether navigation wraps.
    #[must_use]
    pub const fn is_looping(&self) -> bool {
        self.looping
    }

    /// Roles for the current state.
    #[must_use]
    pub fn roles(&self) -> &RoleAssignment {
        &self.roles
    }

    /// Role of slide `index`, or `None` if out of range.
    #[must_use]
    pub fn role_of(&self, index: usize) -> Option<Role> {
        self.roles.role_of(index)
    }

    /// Whether `next()` would change state.
    #[must_use]
    pub const fn can_next(&self) -> bool {
        self.looping || self.active_index + 1 < self.slide_count
    }

    /// Whether `prev()` would change state.
    #[must_use]
    pub const fn can_prev(&self) -> bool {
        self.looping || self.active_index > 0
    }

    /// Advance one slide, wrapping to the first if looping.
    ///
    /// Returns `false` (and notifies no one) at the last slide of a
    /// non-looping carousel.
    pub fn next(&mut self) -> bool {
        let target = if self.active_index + 1 < self.slide_count {
            self.active_index + 1
        } else if self.looping {
            0
        } else {
            return false;
        };
        self.transition(target, NavCause::Next);
        true
    }

    /// Go back one slide, wrapping to the last if looping.
    ///
    /// Returns `false` (and notifies no one) at the first slide of a
    /// non-looping carousel.
    pub fn prev(&mut self) -> bool {
        let target = if self.active_index > 0 {
            self.active_index - 1
        } else if self.looping {
            self.slide_count - 1
        } else {
            return false;
        };
        self.transition(target, NavCause::Prev);
        true
    }

    /// Make slide `index` active.
    ///
    /// Targets outside `[0, slide_count)` are rejected, never clamped.
    /// Re-selecting the active slide is accepted and notifies.
    pub fn go_to(&mut self, index: usize) -> Result<(), NavigationError> {
        if let Err(err) = self.check_index(index) {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                message = "carousel.reject",
                index,
                slide_count = self.slide_count
            );
            return Err(err);
        }
        self.transition(index, NavCause::GoTo);
        Ok(())
    }

    /// Subscribe to active-index changes.
    pub fn on_active_changed<F>(&mut self, observer: F) -> ObserverId
    where
        F: FnMut(&ActiveChange<'_>) + 'static,
    {
        let id = ObserverId(self.next_observer_id);
        self.next_observer_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Unsubscribe. Returns `false` if `id` was not registered.
    pub fn remove_observer(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    /// Number of subscribed observers.
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    fn check_index(&self, index: usize) -> Result<(), NavigationError> {
        if index < self.slide_count {
            Ok(())
        } else {
            Err(NavigationError::IndexOutOfRange {
                index,
                slide_count: self.slide_count,
            })
        }
    }

    fn recompute(&mut self) {
        self.roles = RoleAssignment::compute(self.active_index, self.slide_count, self.looping);
    }

    fn transition(&mut self, target: usize, cause: NavCause) {
        let previous = self.active_index;
        self.active_index = target;
        self.recompute();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "carousel.navigate",
            cause = cause.as_str(),
            from = previous,
            to = target
        );

        let change = ActiveChange {
            previous,
            active: target,
            slide_count: self.slide_count,
            cause,
            roles: &self.roles,
        };
        for (_, observer) in &mut self.observers {
            observer(&change);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recorded(carousel: &mut Carousel) -> Rc<RefCell<Vec<(usize, usize, NavCause)>>> {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        carousel.on_active_changed(move |change| {
            sink.borrow_mut()
                .push((change.previous, change.active, change.cause));
        });
        log
    }

    #[test]
    fn zero_slides_is_construction_error() {
        assert_eq!(Carousel::new(0, true).unwrap_err(), ConstructionError::NoSlides);
    }

    #[test]
    fn starts_at_first_slide() {
        let c = Carousel::new(3, true).unwrap();
        assert_eq!(c.active_index(), 0);
        assert_eq!(c.role_of(0), Some(Role::Active));
    }

    #[test]
    fn starting_at_sets_index_without_notifying() {
        let c = Carousel::new(5, true).unwrap().starting_at(3).unwrap();
        assert_eq!(c.active_index(), 3);
        assert_eq!(c.roles().index_of(Role::Active), Some(3));
        assert!(Carousel::new(5, true).unwrap().starting_at(5).is_err());
    }

    #[test]
    fn next_wraps_when_looping() {
        let mut c = Carousel::new(3, true).unwrap().starting_at(2).unwrap();
        assert!(c.next());
        assert_eq!(c.active_index(), 0);
    }

    #[test]
    fn prev_wraps_when_looping() {
        let mut c = Carousel::new(3, true).unwrap();
        assert!(c.prev());
        assert_eq!(c.active_index(), 2);
    }

    #[test]
    fn next_at_end_is_noop_without_loop() {
        let mut c = Carousel::new(3, false).unwrap().starting_at(2).unwrap();
        let log = recorded(&mut c);
        assert!(!c.can_next());
        assert!(!c.next());
        assert_eq!(c.active_index(), 2);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn prev_at_start_is_noop_without_loop() {
        let mut c = Carousel::new(3, false).unwrap();
        let log = recorded(&mut c);
        assert!(!c.can_prev());
        assert!(!c.prev());
        assert_eq!(c.active_index(), 0);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn go_to_out_of_range_is_rejected() {
        let mut c = Carousel::new(4, true).unwrap().starting_at(1).unwrap();
        let log = recorded(&mut c);
        assert_eq!(
            c.go_to(4),
            Err(NavigationError::IndexOutOfRange {
                index: 4,
                slide_count: 4
            })
        );
        assert_eq!(c.active_index(), 1);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn go_to_same_index_renotifies() {
        let mut c = Carousel::new(4, true).unwrap();
        let log = recorded(&mut c);
        c.go_to(0).unwrap();
        assert_eq!(*log.borrow(), vec![(0, 0, NavCause::GoTo)]);
    }

    #[test]
    fn one_notification_per_call() {
        let mut c = Carousel::new(5, true).unwrap();
        let log = recorded(&mut c);
        c.next();
        c.prev();
        c.go_to(3).unwrap();
        assert_eq!(
            *log.borrow(),
            vec![
                (0, 1, NavCause::Next),
                (1, 0, NavCause::Prev),
                (0, 3, NavCause::GoTo)
            ]
        );
    }

    #[test]
    fn observers_see_new_roles() {
        let mut c = Carousel::new(5, true).unwrap();
        let seen = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&seen);
        c.on_active_changed(move |change| {
            *sink.borrow_mut() = Some(change.roles.clone());
        });
        c.go_to(2).unwrap();
        assert_eq!(seen.borrow().as_ref(), Some(&RoleAssignment::compute(2, 5, true)));
    }

    #[test]
    fn remove_observer_stops_delivery() {
        let mut c = Carousel::new(3, true).unwrap();
        let hits = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&hits);
        let id = c.on_active_changed(move |_| *sink.borrow_mut() += 1);
        c.next();
        assert!(c.remove_observer(id));
        assert!(!c.remove_observer(id));
        c.next();
        assert_eq!(*hits.borrow(), 1);
        assert_eq!(c.observer_count(), 0);
    }

    #[test]
    fn single_slide_loop_next_renotifies_in_place() {
        let mut c = Carousel::new(1, true).unwrap();
        let log = recorded(&mut c);
        assert!(c.next());
        assert!(c.prev());
        assert_eq!(c.active_index(), 0);
        assert_eq!(log.borrow().len(), 2);
    }

    #[test]
    fn change_moved_flag() {
        let mut c = Carousel::new(3, true).unwrap();
        let moved = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&moved);
        c.on_active_changed(move |change| sink.borrow_mut().push(change.moved()));
        c.go_to(0).unwrap();
        c.go_to(1).unwrap();
        assert_eq!(*moved.borrow(), vec![false, true]);
    }

    #[test]
    fn debug_omits_closures() {
        let c = Carousel::new(2, false).unwrap();
        let s = format!("{c:?}");
        assert!(s.contains("slide_count: 2"));
        assert!(s.contains("observers: 0"));
    }

    #[cfg(feature = "tracing")]
    mod trace_capture {
        use super::*;
        use std::sync::{Arc, Mutex};
        use tracing::Subscriber;
        use tracing_subscriber::Layer;
        use tracing_subscriber::layer::{Context, SubscriberExt};

        struct MessageCapture(Arc<Mutex<Vec<String>>>);

        impl<S: Subscriber> Layer<S> for MessageCapture {
            fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
                struct V(Option<String>);
                impl tracing::field::Visit for V {
                    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
                        if field.name() == "message" {
                            self.0 = Some(value.to_owned());
                        }
                    }

                    fn record_debug(
                        &mut self,
                        field: &tracing::field::Field,
                        value: &dyn std::fmt::Debug,
                    ) {
                        if field.name() == "message" && self.0.is_none() {
                            self.0 = Some(format!("{value:?}"));
                        }
                    }
                }
                let mut visitor = V(None);
                event.record(&mut visitor);
                if let Some(message) = visitor.0 {
                    self.0.lock().expect("capture lock").push(message);
                }
            }
        }

        #[test]
        fn navigation_emits_structured_events() {
            let messages = Arc::new(Mutex::new(Vec::new()));
            let subscriber =
                tracing_subscriber::registry().with(MessageCapture(Arc::clone(&messages)));
            tracing::subscriber::with_default(subscriber, || {
                assert!(Carousel::new(0, true).is_err());
                let mut c = Carousel::new(3, false).unwrap();
                c.next();
                let _ = c.go_to(9);
                c.go_to(2).unwrap();
                // Boundary no-op logs nothing.
                c.next();
            });
            assert_eq!(
                *messages.lock().expect("capture lock"),
                vec![
                    "carousel.construct",
                    "carousel.navigate",
                    "carousel.reject",
                    "carousel.navigate",
                ]
            );
        }
    }
}
