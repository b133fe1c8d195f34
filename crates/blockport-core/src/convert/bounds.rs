//! Local bounding-box extraction and box placement
//!
//! The local bounding box is defined in the object's unrotated rest pose,
//! so scale is applied in local space before anything else. Rotation is
//! never baked into the box: Blockbench elements are axis-aligned boxes
//! with a separately stored rotation, so the box only ever gets translated
//! and remapped.

use super::axis::AxisMapping;
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Scale the eight corners component-wise and fold them to per-axis
/// extremes
///
/// Handles non-uniform scale and boxes not centered at the local origin.
/// A zero-size axis (min == max) is valid and degenerates the box to a
/// plane, which the target format accepts.
pub fn scaled_bounds(corners: &[Vec3; 8], scale: Vec3) -> (Vec3, Vec3) {
    let mut min = corners[0] * scale;
    let mut max = min;
    for corner in &corners[1..] {
        let scaled = *corner * scale;
        min = min.min(scaled);
        max = max.max(scaled);
    }
    (min, max)
}

/// How the scaled local box combines with the object's world placement
///
/// The two policies are not numerically equivalent when the mesh data is
/// off-center relative to its own origin; which one a model was authored
/// against is observable in the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoxPolicy {
    /// Add the raw world translation to the local extremes, remap both
    /// points independently, then sort per axis (remapping can invert the
    /// min/max ordering)
    WorldSpace,

    /// Remap the local box-center offset, add it to the remapped pivot,
    /// and take center ± half-extent in target space
    #[default]
    OriginCentered,
}

impl BoxPolicy {
    /// Place a scaled local box `(min, max)` in target space, returning
    /// the element's `from`/`to` pair with `from[i] <= to[i]` on every
    /// axis
    pub fn place(
        self,
        min: Vec3,
        max: Vec3,
        translation: Vec3,
        mapping: &AxisMapping,
    ) -> (Vec3, Vec3) {
        let (a, b) = match self {
            Self::WorldSpace => (
                mapping.remap(min + translation),
                mapping.remap(max + translation),
            ),
            Self::OriginCentered => {
                let center = mapping.remap(translation) + mapping.remap((min + max) / 2.0);
                let half_extent = mapping.remap(max - min) / 2.0;
                (center - half_extent, center + half_extent)
            }
        };
        (a.min(b), a.max(b))
    }
}
