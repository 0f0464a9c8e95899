#![forbid(unsafe_code)]

//! Structured logging hooks.
//!
//! With the `tracing` feature the crate re-exports the `tracing` macros it
//! uses; without it, navigation compiles to no logging at all. The
//! `tracing-json` feature adds [`init_json_subscriber`] for hosts that want
//! machine-readable logs without wiring `tracing-subscriber` themselves.
//!
//! Event names follow a `carousel.<area>` convention:
//! `carousel.navigate`, `carousel.reject`, `carousel.autoplay`,
//! `carousel.construct`.

#[cfg(feature = "tracing")]
pub use tracing::{debug, debug_span, error, info, trace, warn};

/// Install a global JSON subscriber filtered by `RUST_LOG`.
///
/// Falls back to `carousel3d_core=info` when `RUST_LOG` is unset. Returns
/// `false` if a global subscriber was already installed.
#[cfg(feature = "tracing-json")]
pub fn init_json_subscriber() -> bool {
    use tracing_subscriber::EnvFilter;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("carousel3d_core=info"));
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_current_span(false)
        .try_init()
        .is_ok()
}
