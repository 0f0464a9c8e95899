#![forbid(unsafe_code)]

//! `carousel3d-web` mounts carousels against a host page.
//!
//! Design goals:
//! - **Host-driven I/O**: the embedding environment (JS) pushes input events
//!   and time; nothing here reads the DOM or a clock on its own.
//! - **Attribute model**: slides, containers, and the page are plain data
//!   mirroring the DOM attributes the widget consumes (`id`, `data-link`,
//!   `data-has-paper`, `data-paper-text`, `data-no-hover`, the location hash).
//! - **Render sink**: every state the host must draw (slide roles, indicator
//!   dots, counter text, annotation popup) arrives as one [`HostFrame`].
//!
//! This crate intentionally does not bind to `wasm-bindgen`; a thin JS shim
//! owns the DOM and forwards events.

pub mod host;
#[cfg(feature = "input-parser")]
pub mod input_parser;
pub mod page;

pub use host::{Annotation, CarouselHost, HostFrame, RenderSink};
pub use page::{HostContainer, HostPage, HostSlide};

/// Default popup text for slides flagged as carrying a paper.
pub const DEFAULT_PAPER_TEXT: &str = "Published paper";
