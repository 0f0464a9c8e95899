#![forbid(unsafe_code)]

//! Carousel configuration.
//!
//! One parameterized component covers every carousel on a page; hosts differ
//! only in the values below. With the `config` feature the struct can be
//! loaded from TOML or JSON:
//!
//! ```toml
//! # carousel.toml
//! loop = true
//! autoplay = true
//! interval_ms = 6000
//! hover_navigates = false
//! counter_label = "Project"
//! ```
//!
//! Missing fields take their defaults, which match the widget's historical
//! behavior (looping, no autoplay, 5 s interval, hover navigation on).

#[cfg(feature = "config")]
use std::path::Path;

#[cfg(feature = "config")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "config")]
use crate::error::ConfigError;
use crate::error::ConstructionError;

/// Default autoplay interval in milliseconds.
pub const DEFAULT_INTERVAL_MS: u64 = 5000;

/// Default horizontal swipe distance, in pixels, that counts as a gesture.
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 50.0;

/// Default counter label prefix.
pub const DEFAULT_COUNTER_LABEL: &str = "Item";

/// Behavior knobs for one carousel instance.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct CarouselConfig {
    /// Wrap past the first/last slide.
    #[cfg_attr(feature = "config", serde(rename = "loop"))]
    pub loop_navigation: bool,
    /// Advance automatically on a fixed interval.
    pub autoplay: bool,
    /// Autoplay interval in milliseconds. Must be non-zero.
    pub interval_ms: u64,
    /// Pointer entering a slide makes it active.
    pub hover_navigates: bool,
    /// Clicking a slide also makes it active (for devices without hover).
    pub click_selects: bool,
    /// Horizontal swipe distance in pixels that must be exceeded.
    pub swipe_threshold: f32,
    /// Counter label; `None` disables the counter.
    pub counter_label: Option<String>,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            loop_navigation: true,
            autoplay: false,
            interval_ms: DEFAULT_INTERVAL_MS,
            hover_navigates: true,
            click_selects: false,
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            counter_label: None,
        }
    }
}

impl CarouselConfig {
    /// Set the loop policy.
    #[must_use]
    pub fn loop_navigation(mut self, enabled: bool) -> Self {
        self.loop_navigation = enabled;
        self
    }

    /// Enable or disable autoplay.
    #[must_use]
    pub fn autoplay(mut self, enabled: bool) -> Self {
        self.autoplay = enabled;
        self
    }

    /// Set the autoplay interval in milliseconds.
    #[must_use]
    pub fn interval_ms(mut self, ms: u64) -> Self {
        self.interval_ms = ms;
        self
    }

    /// Enable or disable hover navigation.
    #[must_use]
    pub fn hover_navigates(mut self, enabled: bool) -> Self {
        self.hover_navigates = enabled;
        self
    }

    /// Enable or disable click-to-select.
    #[must_use]
    pub fn click_selects(mut self, enabled: bool) -> Self {
        self.click_selects = enabled;
        self
    }

    /// Set the swipe threshold in pixels.
    #[must_use]
    pub fn swipe_threshold(mut self, px: f32) -> Self {
        self.swipe_threshold = px;
        self
    }

    /// Show a counter with the given label.
    #[must_use]
    pub fn counter_label(mut self, label: impl Into<String>) -> Self {
        self.counter_label = Some(label.into());
        self
    }

    /// Show a counter with the default label.
    #[must_use]
    pub fn with_counter(self) -> Self {
        self.counter_label(DEFAULT_COUNTER_LABEL)
    }

    /// Autoplay interval as a `Duration`.
    #[must_use]
    pub fn interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.interval_ms)
    }

    /// Check that the configuration can drive a carousel.
    pub fn validate(&self) -> Result<(), ConstructionError> {
        if self.interval_ms == 0 {
            return Err(ConstructionError::InvalidConfig("interval_ms must be > 0"));
        }
        if !self.swipe_threshold.is_finite() || self.swipe_threshold < 0.0 {
            return Err(ConstructionError::InvalidConfig(
                "swipe_threshold must be finite and non-negative",
            ));
        }
        Ok(())
    }

    /// Load from a TOML string.
    #[cfg(feature = "config")]
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s).map_err(|e| ConfigError::Toml(e.to_string()))?;
        config.checked()
    }

    /// Load from a TOML file on disk.
    #[cfg(feature = "config")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string.
    #[cfg(feature = "config")]
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(s).map_err(|e| ConfigError::Json(e.to_string()))?;
        config.checked()
    }

    /// Load from a JSON file on disk.
    #[cfg(feature = "config")]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    /// Serialize to a TOML string.
    #[cfg(feature = "config")]
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Toml(e.to_string()))
    }

    #[cfg(feature = "config")]
    fn checked(self) -> Result<Self, ConfigError> {
        match self.validate() {
            Ok(()) => Ok(self),
            Err(ConstructionError::InvalidConfig(reason)) => Err(ConfigError::Invalid(reason)),
            Err(_) => Err(ConfigError::Invalid("unusable configuration")),
        }
    }
}
