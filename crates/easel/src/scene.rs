//! Scene descriptions.
//!
//! A [`Scene`] describes the content of a [`Drawing`] as data, so it can be
//! written in TOML:
//!
//! ```toml
//! refs = [{ name = "house" }, {}]
//!
//! [[owned]]
//! kind = "point"
//! x = 10
//! y = 15
//!
//! [shared.house]
//! kind = "rectangle"
//! x = 50
//! y = 50
//! w = 100
//! h = 75
//! ```
//!
//! - `owned` elements are moved into the drawing's owned store.
//! - `shared` elements are placed in the drawing's arena under a name,
//!   keeping declaration order.
//! - `refs` reference shared elements by name; `{}` is an empty slot.

use std::collections::HashMap;

use indexmap::IndexMap;
use log::{debug, trace};
use serde::Deserialize;

use easel_core::{arena::ElementId, drawing::Drawing, element::Element};

use crate::EaselError;

/// A reference slot in a scene.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RefEntry {
    /// Name of the shared element, or `None` for an empty slot.
    #[serde(default)]
    name: Option<String>,
}

impl RefEntry {
    /// A slot referencing the shared element `name`.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }

    /// An empty slot.
    pub fn null() -> Self {
        Self::default()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// The declarative content of a drawing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Scene {
    owned: Vec<Element>,
    shared: IndexMap<String, Element>,
    refs: Vec<RefEntry>,
}

impl Scene {
    /// Creates an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a scene from TOML source.
    ///
    /// # Errors
    ///
    /// Returns [`EaselError::Scene`] if the source is not a valid scene.
    pub fn parse(source: &str) -> Result<Self, EaselError> {
        toml::from_str(source).map_err(|err| EaselError::new_scene_error(err, source))
    }

    /// Appends an owned element (builder style).
    pub fn with_owned(mut self, element: impl Into<Element>) -> Self {
        self.owned.push(element.into());
        self
    }

    /// Adds or replaces the shared element `name` (builder style).
    pub fn with_shared(mut self, name: impl Into<String>, element: impl Into<Element>) -> Self {
        self.shared.insert(name.into(), element.into());
        self
    }

    /// Appends a reference to the shared element `name` (builder style).
    pub fn with_ref(mut self, name: impl Into<String>) -> Self {
        self.refs.push(RefEntry::named(name));
        self
    }

    /// Appends an empty reference slot (builder style).
    pub fn with_null_ref(mut self) -> Self {
        self.refs.push(RefEntry::null());
        self
    }

    pub fn owned(&self) -> &[Element] {
        &self.owned
    }

    pub fn shared(&self) -> &IndexMap<String, Element> {
        &self.shared
    }

    pub fn refs(&self) -> &[RefEntry] {
        &self.refs
    }

    /// Build a [`Drawing`] holding this scene's elements.
    ///
    /// # Errors
    ///
    /// Returns [`EaselError::UnknownReference`] if a reference names a shared
    /// element that the scene does not declare.
    pub fn to_drawing(&self) -> Result<Drawing, EaselError> {
        let mut drawing = Drawing::new();

        for element in &self.owned {
            drawing.add_owned(*element);
        }

        let ids: HashMap<&str, ElementId> = self
            .shared
            .iter()
            .map(|(name, element)| (name.as_str(), drawing.insert(*element)))
            .collect();
        trace!(shared = ids.len(); "Placed shared elements");

        for entry in &self.refs {
            match entry.name() {
                Some(name) => {
                    let id = ids
                        .get(name)
                        .copied()
                        .ok_or_else(|| EaselError::UnknownReference(name.to_string()))?;
                    drawing.add_ref(id)?;
                }
                None => drawing.add_null_ref(),
            }
        }

        debug!(
            owned = self.owned.len(),
            shared = self.shared.len(),
            refs = self.refs.len();
            "Scene converted to drawing"
        );

        Ok(drawing)
    }
}

#[cfg(test)]
mod tests {
    use easel_core::element::{Line, Point, Rectangle, Render};

    use super::*;

    const SCENE: &str = r#"
        refs = [{ name = "path" }, {}, { name = "origin" }]

        [[owned]]
        kind = "point"
        x = 10
        y = 15

        [[owned]]
        kind = "line"
        x1 = 25
        y1 = 25
        x2 = 50
        y2 = 100

        [shared.origin]
        kind = "point"
        x = 0
        y = 0

        [shared.path]
        kind = "line"
        x1 = 1
        y1 = 2
        x2 = 3
        y2 = 4
    "#;

    #[test]
    fn test_parse_scene() {
        let scene = Scene::parse(SCENE).expect("valid scene");

        assert_eq!(
            scene.owned(),
            &[
                Element::from(Point::new(10, 15)),
                Element::from(Line::new(25, 25, 50, 100)),
            ]
        );
        assert_eq!(
            scene.shared().keys().collect::<Vec<_>>(),
            vec!["origin", "path"]
        );
        assert_eq!(
            scene.refs(),
            &[
                RefEntry::named("path"),
                RefEntry::null(),
                RefEntry::named("origin")
            ]
        );
    }

    #[test]
    fn test_parse_empty_scene() {
        let scene = Scene::parse("").expect("empty scene is valid");
        assert_eq!(scene, Scene::new());
    }

    #[test]
    fn test_parse_invalid_scene_keeps_source() {
        let source = "[[owned]]\nkind = \"hexagon\"\n";
        match Scene::parse(source) {
            Err(EaselError::Scene { src, .. }) => assert_eq!(src, source),
            other => panic!("Expected scene error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_section() {
        assert!(matches!(
            Scene::parse("[[circles]]\nr = 1"),
            Err(EaselError::Scene { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_unknown_element_field() {
        let source = "[[owned]]\nkind = \"point\"\nx = 1\ny = 2\nw = 99\n";
        match Scene::parse(source) {
            Err(EaselError::Scene { err, .. }) => {
                assert!(err.message().contains("unknown field `w`"));
            }
            other => panic!("Expected scene error, got {other:?}"),
        }
    }

    #[test]
    fn test_to_drawing() {
        let drawing = Scene::parse(SCENE)
            .expect("valid scene")
            .to_drawing()
            .expect("references resolve");

        let owned = drawing.render_all();
        assert_eq!(
            owned.elements().collect::<Vec<_>>(),
            vec![
                "Rendering a point (10, 15)",
                "Rendering a line from (25, 25) to (50, 100)",
            ]
        );

        let refs = drawing.render_all_refs();
        assert_eq!(
            refs.elements().collect::<Vec<_>>(),
            vec![
                "Rendering a line from (1, 2) to (3, 4)",
                "Rendering a point (0, 0)",
            ]
        );
        assert_eq!(refs.null_count(), 1);
    }

    #[test]
    fn test_to_drawing_unknown_reference() {
        let scene = Scene::new()
            .with_shared("known", Point::new(1, 1))
            .with_ref("missing");

        match scene.to_drawing() {
            Err(EaselError::UnknownReference(name)) => assert_eq!(name, "missing"),
            other => panic!("Expected unknown reference error, got {other:?}"),
        }
    }

    #[test]
    fn test_builder_style_scene() {
        let scene = Scene::new()
            .with_owned(Rectangle::new(50, 50, 100, 75))
            .with_shared("dot", Point::new(3, 3))
            .with_ref("dot")
            .with_null_ref()
            .with_ref("dot");

        let drawing = scene.to_drawing().expect("references resolve");
        assert_eq!(drawing.shared_len(), 1);
        assert_eq!(drawing.refs_len(), 3);
        assert_eq!(
            drawing.owned().iter().map(|e| e.render()).collect::<Vec<_>>(),
            vec!["Rendering a rectangle of dimension 100x75, from (50, 50)"]
        );
    }

    #[test]
    fn test_shared_element_replaced_by_name() {
        let scene = Scene::new()
            .with_shared("dot", Point::new(1, 1))
            .with_shared("dot", Point::new(2, 2));

        assert_eq!(scene.shared().len(), 1);
        assert_eq!(scene.shared()["dot"], Element::from(Point::new(2, 2)));
    }
}
