#![forbid(unsafe_code)]

//! Error types for carousel construction, navigation, and configuration.
//!
//! Navigation is total except for [`Carousel::go_to`](crate::Carousel::go_to),
//! which rejects out-of-range targets instead of clamping them. Boundary
//! conditions of `next`/`prev` are handled by the loop policy and never
//! surface as errors.

use std::fmt;

/// The widget instance could not be initialized.
///
/// Fatal to that instance only; other carousels on the same page are
/// unaffected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstructionError {
    /// No host container with the given id exists.
    ContainerNotFound(String),
    /// The container holds no slides.
    NoSlides,
    /// The supplied configuration is unusable.
    InvalidConfig(&'static str),
}

impl fmt::Display for ConstructionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ContainerNotFound(id) => write!(f, "container with id {id} not found"),
            Self::NoSlides => write!(f, "no slides found"),
            Self::InvalidConfig(reason) => write!(f, "invalid carousel config: {reason}"),
        }
    }
}

impl std::error::Error for ConstructionError {}

/// A navigation request was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationError {
    /// `go_to` target outside `[0, slide_count)`.
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of slides in the carousel.
        slide_count: usize,
    },
}

impl fmt::Display for NavigationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { index, slide_count } => {
                write!(f, "slide index {index} out of range (0..{slide_count})")
            }
        }
    }
}

impl std::error::Error for NavigationError {}

/// Errors from loading a [`CarouselConfig`](crate::CarouselConfig).
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to read the config file.
    Io(std::io::Error),
    /// Malformed JSON.
    Json(String),
    /// Malformed TOML.
    Toml(String),
    /// Parsed successfully but failed validation.
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "config I/O error: {err}"),
            Self::Json(msg) => write!(f, "config JSON error: {msg}"),
            Self::Toml(msg) => write!(f, "config TOML error: {msg}"),
            Self::Invalid(reason) => write!(f, "invalid config: {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}
