//! Scene-to-model conversion
//!
//! One pass over a scene snapshot: each qualifying object becomes one box
//! element via [`build_element`], and [`convert_scene`] collects them into
//! a document. Every knob — axis mapping, rotation strategy, box policy,
//! format metadata — rides in [`ExportConfig`] rather than ambient state,
//! so runs are deterministic and tests can vary the configuration.

mod axis;
mod bounds;
mod rotation;

pub use axis::{AxisMapping, DEFAULT_PERMUTATION, UNIT_SCALE};
pub use bounds::{BoxPolicy, scaled_bounds};
pub use rotation::RotationStrategy;

use crate::Result;
use crate::document::{Document, Element, Meta, assemble};
use crate::scene::SceneObject;

/// Per-invocation conversion configuration
#[derive(Debug, Clone, Default)]
pub struct ExportConfig {
    pub mapping: AxisMapping,
    pub strategy: RotationStrategy,
    pub policy: BoxPolicy,
    pub meta: Meta,
}

/// Convert one scene object into a box element
///
/// Returns `None` for non-mesh objects; filtering is a skip, not an
/// error. The element's pivot is the remapped world translation, the box
/// comes from the configured placement policy, and the rotation from the
/// configured strategy. The source object is untouched.
pub fn build_element(object: &SceneObject, config: &ExportConfig) -> Option<Element> {
    if !object.kind.is_exportable() {
        tracing::debug!(name = %object.name, kind = ?object.kind, "skipping non-mesh object");
        return None;
    }

    let transform = &object.transform;
    let origin = config.mapping.remap(transform.translation);

    let (min, max) = scaled_bounds(&object.bounds.corners, transform.scale);
    let (from, to) = config
        .policy
        .place(min, max, transform.translation, &config.mapping);

    let rotation = config.strategy.convert(transform.rotation);

    Some(Element::new(&object.name, from, to, origin, rotation))
}

/// Convert a scene snapshot into a complete document
///
/// Element order follows input iteration order, so identical snapshots
/// produce identical documents. Fails with
/// [`Error::EmptySelection`](crate::Error::EmptySelection) when no object
/// qualifies.
pub fn convert_scene(
    objects: &[SceneObject],
    model_name: &str,
    config: &ExportConfig,
) -> Result<Document> {
    let elements: Vec<Element> = objects
        .iter()
        .filter_map(|object| build_element(object, config))
        .collect();

    tracing::debug!(
        total = objects.len(),
        exported = elements.len(),
        "converted scene snapshot"
    );

    assemble(elements, model_name, config.meta.clone())
}
