//! Easel - describe drawings as scenes and render their elements.
//!
//! Scenes are written in TOML, turned into a [`drawing::Drawing`] and rendered
//! to text, one line per element.

pub mod config;
pub mod scene;

mod error;

pub use easel_core::{arena, drawing, element, factory, render, store};

pub use error::EaselError;

use log::{debug, info, trace};

use config::{AppConfig, RenderOrder};
use render::RenderOutput;
use scene::Scene;

/// Builder for parsing and rendering Easel scenes.
///
/// # Examples
///
/// ```rust
/// use easel::{SceneBuilder, config::AppConfig};
///
/// let source = r#"
///     [[owned]]
///     kind = "point"
///     x = 10
///     y = 15
/// "#;
///
/// let builder = SceneBuilder::new(AppConfig::default());
///
/// // Parse source to a scene
/// let scene = builder.parse(source)
///     .expect("Failed to parse");
///
/// // Render the scene to text
/// let text = builder.render_text(&scene)
///     .expect("Failed to render");
/// assert!(text.contains("Rendering a point (10, 15)"));
/// ```
#[derive(Debug, Default)]
pub struct SceneBuilder {
    config: AppConfig,
}

impl SceneBuilder {
    /// Create a new scene builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse TOML source into a scene.
    ///
    /// # Errors
    ///
    /// Returns [`EaselError::Scene`] if the source is not a valid scene.
    pub fn parse(&self, source: &str) -> Result<Scene, EaselError> {
        info!("Parsing scene");

        let scene = Scene::parse(source)?;

        debug!("Scene parsed successfully");
        trace!(scene:?; "Parsed scene");

        Ok(scene)
    }

    /// Build the scene's drawing and render both of its stores.
    ///
    /// Stores are rendered in the configured [`RenderOrder`].
    ///
    /// # Errors
    ///
    /// Returns [`EaselError::UnknownReference`] if a reference cannot be
    /// resolved.
    pub fn render(&self, scene: &Scene) -> Result<RenderOutput, EaselError> {
        let drawing = scene.to_drawing()?;
        Ok(self.render_drawing(&drawing))
    }

    /// Render both stores of an existing drawing in the configured order.
    pub fn render_drawing(&self, drawing: &drawing::Drawing) -> RenderOutput {
        let order = self.config.render().order();
        info!(order:?; "Rendering drawing");

        let (mut output, rest) = match order {
            RenderOrder::RefsFirst => (drawing.render_all_refs(), drawing.render_all()),
            RenderOrder::OwnedFirst => (drawing.render_all(), drawing.render_all_refs()),
        };
        output.merge(rest);

        debug!(elements = output.elements().count(); "Drawing rendered");
        output
    }

    /// Render a scene to text, keeping the lines selected by the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`EaselError::UnknownReference`] if a reference cannot be
    /// resolved.
    pub fn render_text(&self, scene: &Scene) -> Result<String, EaselError> {
        let output = self.render(scene)?;
        Ok(output.to_text(&self.config.render().options()))
    }
}
