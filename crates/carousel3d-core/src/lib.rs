#![forbid(unsafe_code)]

//! Core: role computation, navigation, and input adapters for 3D carousels.
//!
//! # Role in carousel3d
//! `carousel3d-core` owns the only logic in the system that carries weight:
//! which display role every slide takes for a given active index, and how
//! that index moves under pointer, keyboard, touch, and timer input.
//!
//! # Primary responsibilities
//! - **Role**: pure mapping from `(index, active, count, loop)` to a display slot.
//! - **Carousel**: the navigation state machine (`next`, `prev`, `go_to`) and
//!   its change notifications.
//! - **Controller**: input adapters that normalize host stimuli into
//!   navigation calls, including swipe detection and autoplay scheduling.
//!
//! # How it fits in the system
//! `carousel3d-web` pushes host events and time into a [`controller::Controller`]
//! and presents the resulting role assignment. Nothing here touches a DOM,
//! a clock, or a thread on its own; all time is supplied by the caller.

pub mod autoplay;
pub mod carousel;
pub mod clock;
pub mod config;
pub mod controller;
pub mod error;
pub mod event;
pub mod gesture;
pub mod logging;
pub mod role;

pub use carousel::{ActiveChange, Carousel, NavCause, ObserverId};
pub use config::CarouselConfig;
pub use error::{ConfigError, ConstructionError, NavigationError};
pub use role::{Role, RoleAssignment, compute_role};

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, error, info, trace, warn};
