//! The `.bbmodel` document model
//!
//! Field names and nesting mirror the target format exactly; serde derives
//! keep declaration order, so the structs below double as the wire layout.

use crate::{Error, Result};
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Format metadata attached to every document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meta {
    pub format_version: String,
    pub model_format: String,
    pub box_uv: bool,
}

impl Default for Meta {
    fn default() -> Self {
        Self {
            format_version: "4.0".to_string(),
            model_format: "free".to_string(),
            box_uv: false,
        }
    }
}

/// One face of an element: a default UV rectangle and a texture slot
///
/// Texturing is out of scope; every face gets the same fixed values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Face {
    pub uv: [f32; 4],
    pub texture: u32,
}

impl Default for Face {
    fn default() -> Self {
        Self {
            uv: [0.0, 0.0, 1.0, 1.0],
            texture: 0,
        }
    }
}

/// The six cardinal faces of a box element
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FaceTable {
    pub north: Face,
    pub east: Face,
    pub south: Face,
    pub west: Face,
    pub up: Face,
    pub down: Face,
}

/// One axis-aligned box in the target model, with its own pivot and
/// rotation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Element {
    pub name: String,
    pub from: [f32; 3],
    pub to: [f32; 3],
    pub origin: [f32; 3],
    pub rotation: [f32; 3],
    pub autouv: u8,
    pub faces: FaceTable,
}

impl Element {
    /// Build an element from target-space vectors, with the fixed face
    /// table and autouv disabled
    pub fn new(name: impl Into<String>, from: Vec3, to: Vec3, origin: Vec3, rotation: Vec3) -> Self {
        Self {
            name: name.into(),
            from: from.to_array(),
            to: to.to_array(),
            origin: origin.to_array(),
            rotation: rotation.to_array(),
            autouv: 0,
            faces: FaceTable::default(),
        }
    }
}

/// A complete model document, ready for serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub meta: Meta,
    pub name: String,
    pub elements: Vec<Element>,
    /// Hierarchy re-export is out of scope; the outliner stays empty
    pub outliner: Vec<serde_json::Value>,
}

/// Collect elements into a document, attaching format metadata
///
/// An empty element list means nothing qualified for export; the caller
/// gets [`Error::EmptySelection`] instead of a degenerate file.
pub fn assemble(elements: Vec<Element>, model_name: &str, meta: Meta) -> Result<Document> {
    if elements.is_empty() {
        return Err(Error::EmptySelection);
    }
    Ok(Document {
        meta,
        name: model_name.to_string(),
        elements,
        outliner: Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assemble_rejects_empty_selection() {
        let result = assemble(Vec::new(), "empty", Meta::default());
        assert!(matches!(result, Err(Error::EmptySelection)));
    }

    #[test]
    fn assemble_preserves_element_order() {
        let elements = vec![
            Element::new("a", Vec3::ZERO, Vec3::ONE, Vec3::ZERO, Vec3::ZERO),
            Element::new("b", Vec3::ZERO, Vec3::ONE, Vec3::ZERO, Vec3::ZERO),
        ];
        let doc = assemble(elements, "model", Meta::default()).unwrap();
        assert_eq!(doc.elements[0].name, "a");
        assert_eq!(doc.elements[1].name, "b");
        assert!(doc.outliner.is_empty());
    }

    #[test]
    fn serialized_layout_matches_target_format() {
        let doc = assemble(
            vec![Element::new("cube", Vec3::ZERO, Vec3::ONE, Vec3::ZERO, Vec3::ZERO)],
            "model",
            Meta::default(),
        )
        .unwrap();
        let value: serde_json::Value = serde_json::to_value(&doc).unwrap();

        assert_eq!(value["meta"]["format_version"], "4.0");
        assert_eq!(value["meta"]["model_format"], "free");
        assert_eq!(value["meta"]["box_uv"], false);
        assert_eq!(value["outliner"], serde_json::json!([]));

        let element = &value["elements"][0];
        assert_eq!(element["autouv"], 0);
        for face in ["north", "east", "south", "west", "up", "down"] {
            assert_eq!(element["faces"][face]["uv"], serde_json::json!([0.0, 0.0, 1.0, 1.0]));
            assert_eq!(element["faces"][face]["texture"], 0);
        }
    }
}
