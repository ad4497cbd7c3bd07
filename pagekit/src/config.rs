//! Site configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tunables shared by all widgets on a page.
///
/// Every field has a default matching the stylesheet the widgets were built
/// against, so a config file only needs to name what it overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// `max-width` of the mobile/tablet media query. Sticky placement is
    /// disabled at or below this width.
    pub breakpoint: u32,

    /// Gap kept between the header and the sticky sidebar, and below the
    /// sidebar in scroll-tracking mode.
    pub sticky_spacing: u32,

    /// Scroll offset below which the header is never hidden.
    pub header_scroll_threshold: u32,

    /// Name of the consent cookie.
    pub cookie_name: String,

    /// Lifetime of the consent cookie, in seconds.
    pub cookie_max_age: u64,

    /// Finish height transitions instantly.
    pub reduced_motion: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            breakpoint: 991,
            sticky_spacing: 24,
            header_scroll_threshold: 100,
            cookie_name: "cookie_accepted".into(),
            cookie_max_age: 24 * 60 * 60,
            reduced_motion: false,
        }
    }
}

impl SiteConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a config from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.cookie_name.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "cookie_name",
                reason: "must not be empty".into(),
            });
        }
        Ok(())
    }

    /// Set the mobile/tablet breakpoint.
    pub fn breakpoint(mut self, px: u32) -> Self {
        self.breakpoint = px;
        self
    }

    /// Set the sticky sidebar spacing.
    pub fn sticky_spacing(mut self, px: u32) -> Self {
        self.sticky_spacing = px;
        self
    }

    /// Set the header hide threshold.
    pub fn header_scroll_threshold(mut self, px: u32) -> Self {
        self.header_scroll_threshold = px;
        self
    }

    /// Set the consent cookie name and lifetime.
    pub fn cookie(mut self, name: impl Into<String>, max_age: u64) -> Self {
        self.cookie_name = name.into();
        self.cookie_max_age = max_age;
        self
    }

    /// Finish transitions instantly.
    pub fn reduced_motion(mut self) -> Self {
        self.reduced_motion = true;
        self
    }
}

/// Errors that can occur when loading a [`SiteConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid site config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid site config field '{field}': {reason}")]
    Invalid {
        field: &'static str,
        reason: String,
    },
}
