#![forbid(unsafe_code)]

//! carousel3d public facade crate.
//!
//! Re-exports the role model and navigation state machine from
//! `carousel3d-core` and the host mounting layer from `carousel3d-web`, with
//! a single [`Error`] type covering every fallible entry point.

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use carousel3d_core::autoplay::{Autoplay, AutoplayState};
pub use carousel3d_core::clock::{DeterministicClock, MonotonicClock, WallClock};
pub use carousel3d_core::controller::{Controller, InputOutcome};
pub use carousel3d_core::event::{
    ButtonAction, Event, KeyCode, KeyEvent, KeyEventKind, Modifiers, PointerEvent, SlideEvent,
    SlideEventKind, TouchEvent, TouchPhase,
};
pub use carousel3d_core::gesture::{Swipe, SwipeConfig, SwipeRecognizer};
pub use carousel3d_core::{
    ActiveChange, Carousel, CarouselConfig, ConfigError, ConstructionError, NavCause,
    NavigationError, ObserverId, Role, RoleAssignment, compute_role,
};

// --- Web re-exports --------------------------------------------------------

pub use carousel3d_web::{
    Annotation, CarouselHost, DEFAULT_PAPER_TEXT, HostContainer, HostFrame, HostPage, HostSlide,
    RenderSink,
};
#[cfg(feature = "input-parser")]
pub use carousel3d_web::input_parser::{InputParseError, parse_encoded_input_to_event};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for carousel3d.
#[derive(Debug)]
pub enum Error {
    /// A carousel could not be mounted.
    Construction(ConstructionError),
    /// A navigation call was rejected.
    Navigation(NavigationError),
    /// Configuration could not be loaded.
    Config(ConfigError),
    /// Host input could not be decoded.
    #[cfg(feature = "input-parser")]
    Input(InputParseError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Construction(err) => write!(f, "{err}"),
            Self::Navigation(err) => write!(f, "{err}"),
            Self::Config(err) => write!(f, "{err}"),
            #[cfg(feature = "input-parser")]
            Self::Input(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Construction(err) => Some(err),
            Self::Navigation(err) => Some(err),
            Self::Config(err) => Some(err),
            #[cfg(feature = "input-parser")]
            Self::Input(err) => Some(err),
        }
    }
}

impl From<ConstructionError> for Error {
    fn from(err: ConstructionError) -> Self {
        Self::Construction(err)
    }
}

impl From<NavigationError> for Error {
    fn from(err: NavigationError) -> Self {
        Self::Navigation(err)
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

#[cfg(feature = "input-parser")]
impl From<InputParseError> for Error {
    fn from(err: InputParseError) -> Self {
        Self::Input(err)
    }
}

/// Standard result type for carousel3d APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Carousel, CarouselConfig, CarouselHost, Controller, Error, Event, HostContainer,
        HostFrame, HostPage, HostSlide, InputOutcome, RenderSink, Result, Role, RoleAssignment,
    };

    pub use crate::{core, web};
}

pub use carousel3d_core as core;
pub use carousel3d_web as web;

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    struct Null;

    impl RenderSink for Null {
        fn present(&mut self, _frame: &HostFrame) {}
    }

    fn mount_missing() -> Result<CarouselHost<Null>> {
        let page = HostPage::new();
        Ok(page.mount("gallery", &CarouselConfig::default(), Null, Duration::ZERO)?)
    }

    #[test]
    fn construction_error_converts() {
        let err = mount_missing().unwrap_err();
        assert!(matches!(
            &err,
            Error::Construction(ConstructionError::ContainerNotFound(id)) if id == "gallery"
        ));
        assert_eq!(err.to_string(), "container with id gallery not found");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn navigation_error_converts() {
        fn jump(c: &mut Carousel) -> Result<()> {
            c.go_to(7)?;
            Ok(())
        }
        let mut c = Carousel::new(3, true).unwrap();
        assert!(matches!(jump(&mut c), Err(Error::Navigation(_))));
    }

    #[cfg(feature = "input-parser")]
    #[test]
    fn input_error_converts() {
        fn decode(json: &str) -> Result<Option<Event>> {
            Ok(parse_encoded_input_to_event(json)?)
        }
        assert!(matches!(decode("[1"), Err(Error::Input(InputParseError::Json(_)))));
        assert!(matches!(
            decode(r#"{"kind":"indicator","index":1}"#),
            Ok(Some(Event::Indicator(1)))
        ));
    }
}
