#![forbid(unsafe_code)]

//! Host page model: the DOM attributes a carousel consumes, as plain data.
//!
//! A [`HostPage`] lists carousel containers and the current location hash.
//! Mounting is per container and independent: a missing container or an
//! empty one fails that instance only.

use std::time::Duration;

use carousel3d_core::{CarouselConfig, ConstructionError};

use crate::host::{CarouselHost, RenderSink};

/// One slide element and the attributes read from it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostSlide {
    /// Element id, matched against the location hash at mount.
    pub id: Option<String>,
    /// Click target (`data-link`).
    pub link: Option<String>,
    /// Slide carries a paper (`data-has-paper`).
    pub has_paper: bool,
    /// Popup text override (`data-paper-text`).
    pub paper_text: Option<String>,
}

impl HostSlide {
    /// A slide with no attributes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the element id.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the click target.
    #[must_use]
    pub fn link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    /// Flag the slide as carrying a paper, with optional popup text.
    #[must_use]
    pub fn paper(mut self, text: Option<&str>) -> Self {
        self.has_paper = true;
        self.paper_text = text.map(str::to_owned);
        self
    }
}

/// A carousel container element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostContainer {
    /// Element id.
    pub id: String,
    /// Child slides in document order.
    pub slides: Vec<HostSlide>,
    /// `data-no-hover` is present; disables hover navigation.
    pub no_hover: bool,
}

impl HostContainer {
    /// A container with no slides.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            slides: Vec::new(),
            no_hover: false,
        }
    }

    /// Append a slide.
    #[must_use]
    pub fn slide(mut self, slide: HostSlide) -> Self {
        self.slides.push(slide);
        self
    }

    /// Append `count` attribute-less slides.
    #[must_use]
    pub fn plain_slides(mut self, count: usize) -> Self {
        self.slides
            .extend(std::iter::repeat_with(HostSlide::new).take(count));
        self
    }

    /// Mark the container `data-no-hover`.
    #[must_use]
    pub fn no_hover(mut self) -> Self {
        self.no_hover = true;
        self
    }

    /// Index of the slide whose id matches `hash` (leading `#` ignored).
    #[must_use]
    pub fn slide_for_hash(&self, hash: &str) -> Option<usize> {
        let target = hash.strip_prefix('#').unwrap_or(hash);
        if target.is_empty() {
            return None;
        }
        self.slides
            .iter()
            .position(|s| s.id.as_deref() == Some(target))
    }
}

/// The page hosting one or more carousels.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostPage {
    /// Carousel containers in document order.
    pub containers: Vec<HostContainer>,
    /// `location.hash`, with or without the leading `#`.
    pub location_hash: Option<String>,
}

impl HostPage {
    /// An empty page.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a container.
    #[must_use]
    pub fn container(mut self, container: HostContainer) -> Self {
        self.containers.push(container);
        self
    }

    /// Set the location hash.
    #[must_use]
    pub fn hash(mut self, hash: impl Into<String>) -> Self {
        self.location_hash = Some(hash.into());
        self
    }

    /// Find a container by id.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&HostContainer> {
        self.containers.iter().find(|c| c.id == id)
    }

    /// Mount the carousel in container `id`.
    pub fn mount<S: RenderSink + 'static>(
        &self,
        id: &str,
        config: &CarouselConfig,
        sink: S,
        now: Duration,
    ) -> Result<CarouselHost<S>, ConstructionError> {
        let Some(container) = self.find(id) else {
            #[cfg(feature = "tracing")]
            tracing::warn!(message = "carousel.construct", container = id, error = "not found");
            return Err(ConstructionError::ContainerNotFound(id.to_owned()));
        };
        CarouselHost::mount(container, self.location_hash.as_deref(), config, sink, now)
    }

    /// Mount every container. `configure` supplies each instance's config and
    /// sink; failures are reported per container and do not stop the rest.
    pub fn mount_all<S, F>(
        &self,
        now: Duration,
        mut configure: F,
    ) -> Vec<(String, Result<CarouselHost<S>, ConstructionError>)>
    where
        S: RenderSink + 'static,
        F: FnMut(&HostContainer) -> (CarouselConfig, S),
    {
        self.containers
            .iter()
            .map(|container| {
                let (config, sink) = configure(container);
                let mounted = CarouselHost::mount(
                    container,
                    self.location_hash.as_deref(),
                    &config,
                    sink,
                    now,
                );
                (container.id.clone(), mounted)
            })
            .collect()
    }
}
