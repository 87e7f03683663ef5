//! Example: Building a scene in code
//!
//! This example builds a scene with the builder methods instead of parsing
//! TOML, then renders it with a configuration that hides store headers.

use easel::{
    SceneBuilder,
    config::{AppConfig, RenderConfig, RenderOrder},
    element::{Line, Point, Rectangle},
    scene::Scene,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Building scene in code...\n");

    let scene = Scene::new()
        .with_owned(Point::new(10, 15))
        .with_owned(Line::new(25, 25, 50, 100))
        .with_owned(Rectangle::new(50, 50, 100, 75))
        .with_shared("origin", Point::new(0, 0))
        .with_ref("origin")
        .with_null_ref();

    let config = AppConfig::new(RenderConfig::new(false, true, RenderOrder::OwnedFirst));
    let builder = SceneBuilder::new(config);

    print!("{}", builder.render_text(&scene)?);

    Ok(())
}
