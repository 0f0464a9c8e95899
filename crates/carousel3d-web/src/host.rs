#![forbid(unsafe_code)]

//! A mounted carousel and the frames it presents to the host.
//!
//! [`CarouselHost`] couples a [`Controller`] with a [`RenderSink`]. At mount
//! and after every active-index notification it builds a [`HostFrame`]
//! (roles, indicator dots, counter text, annotation popup) and hands it to
//! the sink. The sink is the only way state leaves this crate.
//!
//! The sink is shared with the carousel's change observer, so it lives in an
//! `Rc<RefCell<_>>`. Everything runs on the host's single UI thread; the sink
//! must not call back into the carousel from `present`.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use carousel3d_core::controller::{Controller, InputOutcome};
use carousel3d_core::event::Event;
use carousel3d_core::{Carousel, CarouselConfig, ConstructionError, NavigationError, RoleAssignment};

use crate::DEFAULT_PAPER_TEXT;
use crate::page::{HostContainer, HostSlide};

/// Annotation popup state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Annotation {
    /// Popup hidden (`aria-hidden="true"`).
    Hidden,
    /// Popup shown with this text.
    Visible(String),
}

impl Annotation {
    /// Whether the popup is shown.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        matches!(self, Self::Visible(_))
    }

    fn for_slide(slide: Option<&HostSlide>) -> Self {
        match slide {
            Some(s) if s.has_paper => Self::Visible(
                s.paper_text
                    .clone()
                    .unwrap_or_else(|| DEFAULT_PAPER_TEXT.to_owned()),
            ),
            _ => Self::Hidden,
        }
    }
}

/// Everything the host draws for one carousel state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostFrame {
    /// Active slide index.
    pub active: usize,
    /// Per-slide display roles.
    pub roles: RoleAssignment,
    /// Indicator dots; exactly one is `true`.
    pub indicators: Vec<bool>,
    /// Counter text, when a counter label is configured.
    pub counter: Option<String>,
    /// Annotation popup state.
    pub annotation: Annotation,
}

/// Host-side renderer.
pub trait RenderSink {
    /// Draw a frame.
    fn present(&mut self, frame: &HostFrame);

    /// Follow a slide's link after it was clicked. Default: ignore.
    fn open_link(&mut self, url: &str) {
        let _ = url;
    }
}

/// Static per-instance data the frame builder needs.
#[derive(Debug, Clone)]
struct FrameSource {
    counter_label: Option<String>,
    slides: Rc<[HostSlide]>,
}

impl FrameSource {
    fn build(&self, active: usize, roles: &RoleAssignment) -> HostFrame {
        let slide_count = roles.len();
        HostFrame {
            active,
            roles: roles.clone(),
            indicators: (0..slide_count).map(|i| i == active).collect(),
            counter: self
                .counter_label
                .as_ref()
                .map(|label| format!("{label} {}/{slide_count}", active + 1)),
            annotation: Annotation::for_slide(self.slides.get(active)),
        }
    }
}

/// A carousel mounted in one host container.
pub struct CarouselHost<S: RenderSink> {
    id: String,
    controller: Controller,
    slides: Rc<[HostSlide]>,
    sink: Rc<RefCell<S>>,
    scroll_into_view: bool,
}

impl<S: RenderSink> fmt::Debug for CarouselHost<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CarouselHost")
            .field("id", &self.id)
            .field("controller", &self.controller)
            .field("scroll_into_view", &self.scroll_into_view)
            .finish_non_exhaustive()
    }
}

impl<S: RenderSink + 'static> CarouselHost<S> {
    /// Mount a carousel in `container`, present the initial frame, and start
    /// autoplay if configured.
    ///
    /// If `hash` names a slide in the container, that slide starts active and
    /// [`should_scroll_into_view`](Self::should_scroll_into_view) reports
    /// `true`.
    pub fn mount(
        container: &HostContainer,
        hash: Option<&str>,
        config: &CarouselConfig,
        sink: S,
        now: Duration,
    ) -> Result<Self, ConstructionError> {
        let built = Self::build(container, hash, config, sink, now);
        #[cfg(feature = "tracing")]
        match &built {
            Ok(host) => tracing::info!(
                message = "carousel.construct",
                container = %container.id,
                slides = container.slides.len(),
                active = host.controller.carousel().active_index()
            ),
            Err(err) => tracing::warn!(
                message = "carousel.construct",
                container = %container.id,
                error = %err
            ),
        }
        built
    }

    fn build(
        container: &HostContainer,
        hash: Option<&str>,
        config: &CarouselConfig,
        sink: S,
        now: Duration,
    ) -> Result<Self, ConstructionError> {
        config.validate()?;
        let initial = hash.and_then(|h| container.slide_for_hash(h));
        let mut carousel = Carousel::new(container.slides.len(), config.loop_navigation)?;
        if let Some(index) = initial {
            // slide_for_hash only returns existing indices, and no observer is
            // subscribed yet, so this neither fails nor presents.
            let _ = carousel.go_to(index);
        }

        let mut controller = Controller::with_carousel(carousel, config);
        if container.no_hover {
            controller.set_hover_navigates(false);
        }

        let slides: Rc<[HostSlide]> = container.slides.clone().into();
        let source = FrameSource {
            counter_label: config.counter_label.clone(),
            slides: Rc::clone(&slides),
        };
        let sink = Rc::new(RefCell::new(sink));

        {
            let carousel = controller.carousel();
            let frame = source.build(carousel.active_index(), carousel.roles());
            sink.borrow_mut().present(&frame);
        }

        let observer_sink = Rc::clone(&sink);
        controller.carousel_mut().on_active_changed(move |change| {
            let frame = source.build(change.active, change.roles);
            observer_sink.borrow_mut().present(&frame);
        });

        controller.start_autoplay(now);

        Ok(Self {
            id: container.id.clone(),
            controller,
            slides,
            sink,
            scroll_into_view: initial.is_some(),
        })
    }
}

impl<S: RenderSink> CarouselHost<S> {
    /// Container id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The underlying state machine.
    #[must_use]
    pub fn carousel(&self) -> &Carousel {
        self.controller.carousel()
    }

    /// The input controller.
    #[must_use]
    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    /// Whether the initial slide came from the location hash, so the host
    /// should scroll the container into view.
    #[must_use]
    pub const fn should_scroll_into_view(&self) -> bool {
        self.scroll_into_view
    }

    /// Inspect the sink.
    pub fn with_sink<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        let sink = self.sink.borrow();
        f(&*sink)
    }

    /// Handle one canonical event. Clicking a slide with a link forwards the
    /// link to [`RenderSink::open_link`].
    pub fn handle(&mut self, event: &Event, now: Duration) -> InputOutcome {
        let outcome = self.controller.handle(event, now);
        if let InputOutcome::Activated(index) = outcome
            && let Some(link) = self.slides.get(index).and_then(|s| s.link.as_deref())
        {
            self.sink.borrow_mut().open_link(link);
        }
        outcome
    }

    /// Decode and handle one host-encoded input. Kinds with no carousel
    /// meaning yield `Ok(InputOutcome::Ignored)`.
    #[cfg(feature = "input-parser")]
    pub fn handle_encoded(
        &mut self,
        json: &str,
        now: Duration,
    ) -> Result<InputOutcome, crate::input_parser::InputParseError> {
        Ok(match crate::input_parser::parse_encoded_input_to_event(json)? {
            Some(event) => self.handle(&event, now),
            None => InputOutcome::Ignored,
        })
    }

    /// Fire a due autoplay tick.
    pub fn tick(&mut self, now: Duration) -> bool {
        self.controller.tick(now)
    }

    /// Advance one slide.
    pub fn next(&mut self) -> InputOutcome {
        self.controller.next()
    }

    /// Go back one slide.
    pub fn prev(&mut self) -> InputOutcome {
        self.controller.prev()
    }

    /// Jump to slide `index`.
    pub fn go_to(&mut self, index: usize) -> Result<(), NavigationError> {
        match self.controller.go_to(index) {
            InputOutcome::Rejected(err) => Err(err),
            _ => Ok(()),
        }
    }

    /// Start autoplay (idempotent).
    pub fn start_autoplay(&mut self, now: Duration) -> bool {
        self.controller.start_autoplay(now)
    }

    /// Pause autoplay (idempotent).
    pub fn pause_autoplay(&mut self) -> bool {
        self.controller.pause_autoplay()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carousel3d_core::Role;
    use carousel3d_core::event::SlideEvent;

    #[derive(Debug, Default)]
    struct Recorder {
        frames: Vec<HostFrame>,
        links: Vec<String>,
    }

    impl RenderSink for Recorder {
        fn present(&mut self, frame: &HostFrame) {
            self.frames.push(frame.clone());
        }

        fn open_link(&mut self, url: &str) {
            self.links.push(url.to_owned());
        }
    }

    fn mount(container: &HostContainer, config: &CarouselConfig) -> CarouselHost<Recorder> {
        CarouselHost::mount(container, None, config, Recorder::default(), Duration::ZERO).unwrap()
    }

    #[test]
    fn mount_presents_initial_frame() {
        let host = mount(&HostContainer::new("c").plain_slides(3), &CarouselConfig::default());
        host.with_sink(|s| {
            assert_eq!(s.frames.len(), 1);
            let frame = &s.frames[0];
            assert_eq!(frame.active, 0);
            assert_eq!(frame.indicators, vec![true, false, false]);
            assert_eq!(frame.counter, None);
            assert_eq!(frame.annotation, Annotation::Hidden);
            assert_eq!(frame.roles.role_of(0), Some(Role::Active));
        });
    }

    #[test]
    fn counter_text_uses_label() {
        let mut host = mount(
            &HostContainer::new("c").plain_slides(4),
            &CarouselConfig::default().counter_label("Project"),
        );
        host.next();
        host.with_sink(|s| {
            let counters: Vec<_> = s.frames.iter().map(|f| f.counter.clone()).collect();
            assert_eq!(
                counters,
                vec![Some("Project 1/4".into()), Some("Project 2/4".into())]
            );
        });
    }

    #[test]
    fn annotation_follows_active_slide() {
        let container = HostContainer::new("c")
            .slide(HostSlide::new())
            .slide(HostSlide::new().paper(None))
            .slide(HostSlide::new().paper(Some("NeurIPS workshop")));
        let mut host = mount(&container, &CarouselConfig::default());
        host.next();
        host.next();
        host.with_sink(|s| {
            let annotations: Vec<_> = s.frames.iter().map(|f| f.annotation.clone()).collect();
            assert_eq!(
                annotations,
                vec![
                    Annotation::Hidden,
                    Annotation::Visible("Published paper".into()),
                    Annotation::Visible("NeurIPS workshop".into()),
                ]
            );
        });
    }

    #[test]
    fn click_opens_link_only_when_present() {
        let container = HostContainer::new("c")
            .slide(HostSlide::new().link("a.html"))
            .slide(HostSlide::new());
        let mut host = mount(&container, &CarouselConfig::default());
        host.handle(&Event::Slide(SlideEvent::click(0)), Duration::ZERO);
        host.handle(&Event::Slide(SlideEvent::click(1)), Duration::ZERO);
        host.with_sink(|s| assert_eq!(s.links, vec!["a.html".to_owned()]));
    }

    #[test]
    fn no_hover_container_ignores_hover() {
        let container = HostContainer::new("c").plain_slides(3).no_hover();
        let mut host = mount(&container, &CarouselConfig::default());
        assert_eq!(
            host.handle(&Event::Slide(SlideEvent::enter(2)), Duration::ZERO),
            InputOutcome::Ignored
        );
        assert_eq!(host.carousel().active_index(), 0);
    }

    #[test]
    fn hash_selects_initial_slide() {
        let container = HostContainer::new("c")
            .slide(HostSlide::new().id("one"))
            .slide(HostSlide::new().id("two"));
        let host = CarouselHost::mount(
            &container,
            Some("#two"),
            &CarouselConfig::default(),
            Recorder::default(),
            Duration::ZERO,
        )
        .unwrap();
        assert_eq!(host.carousel().active_index(), 1);
        assert!(host.should_scroll_into_view());
        host.with_sink(|s| assert_eq!(s.frames[0].active, 1));
    }

    #[test]
    fn unmatched_hash_keeps_first_slide() {
        let host = CarouselHost::mount(
            &HostContainer::new("c").plain_slides(2),
            Some("#missing"),
            &CarouselConfig::default(),
            Recorder::default(),
            Duration::ZERO,
        )
        .unwrap();
        assert_eq!(host.carousel().active_index(), 0);
        assert!(!host.should_scroll_into_view());
    }

    #[test]
    fn empty_container_fails() {
        let err = CarouselHost::mount(
            &HostContainer::new("c"),
            None,
            &CarouselConfig::default(),
            Recorder::default(),
            Duration::ZERO,
        )
        .unwrap_err();
        assert_eq!(err, ConstructionError::NoSlides);
    }

    #[test]
    fn autoplay_starts_at_mount() {
        let mut host = mount(
            &HostContainer::new("c").plain_slides(3),
            &CarouselConfig::default().autoplay(true).interval_ms(6000),
        );
        assert!(!host.start_autoplay(Duration::from_millis(10)));
        assert!(host.tick(Duration::from_millis(6000)));
        assert_eq!(host.carousel().active_index(), 1);
        assert!(host.pause_autoplay());
        assert!(!host.tick(Duration::from_millis(12_000)));
    }

    #[test]
    fn go_to_reports_rejection() {
        let mut host = mount(&HostContainer::new("c").plain_slides(2), &CarouselConfig::default());
        assert!(host.go_to(5).is_err());
        assert!(host.go_to(1).is_ok());
        host.with_sink(|s| assert_eq!(s.frames.len(), 2));
    }
}
