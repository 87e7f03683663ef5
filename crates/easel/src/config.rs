//! Configuration types for Easel rendering.
//!
//! This module provides configuration structures that control how a drawing
//! is turned into text. All types implement [`serde::Deserialize`] for
//! loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration.
//! - [`RenderConfig`] - Controls which informational lines are written and
//!   in which order the stores of a drawing are rendered.
//!
//! # Example
//!
//! ```
//! # use easel::config::{AppConfig, RenderOrder};
//! let config: AppConfig = toml::from_str("[render]\nheaders = false").unwrap();
//! assert!(!config.render().headers());
//! assert!(config.render().notices());
//! assert_eq!(config.render().order(), RenderOrder::RefsFirst);
//! ```

use serde::Deserialize;

use easel_core::render::RenderOptions;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Render configuration section.
    #[serde(default)]
    render: RenderConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the given render configuration.
    pub fn new(render: RenderConfig) -> Self {
        Self { render }
    }

    /// Returns the render configuration.
    pub fn render(&self) -> &RenderConfig {
        &self.render
    }
}

/// Which store of a drawing is rendered first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderOrder {
    /// Reference slots, then owned elements.
    #[default]
    RefsFirst,
    /// Owned elements, then reference slots.
    OwnedFirst,
}

/// Render output configuration.
///
/// Fields that are not set keep their defaults: headers and notices are
/// written, references render first.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Write the "Rendering N elements" line before each store.
    headers: bool,

    /// Write empty-store and null-slot notices.
    notices: bool,

    /// Store rendering order.
    order: RenderOrder,
}

impl RenderConfig {
    /// Creates a new [`RenderConfig`].
    ///
    /// # Arguments
    ///
    /// * `headers` - Whether store headers are written.
    /// * `notices` - Whether empty-store and null-slot notices are written.
    /// * `order` - Which store renders first.
    pub fn new(headers: bool, notices: bool, order: RenderOrder) -> Self {
        Self {
            headers,
            notices,
            order,
        }
    }

    pub fn headers(&self) -> bool {
        self.headers
    }

    pub fn notices(&self) -> bool {
        self.notices
    }

    pub fn order(&self) -> RenderOrder {
        self.order
    }

    /// Returns the [`RenderOptions`] matching this configuration.
    pub fn options(&self) -> RenderOptions {
        RenderOptions::new(self.headers, self.notices)
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::new(true, true, RenderOrder::default())
    }
}
