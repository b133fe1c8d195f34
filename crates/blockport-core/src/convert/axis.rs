//! Axis remapping between the source and target coordinate conventions
//!
//! The source convention is right-handed with X forward, Y to the side and
//! Z up; Blockbench expects the side axis east/west (X), the up axis
//! vertical (Y) and the forward axis north/south (Z), measured in 16ths of
//! a world unit. Every vector quantity in the pipeline — positions,
//! offsets, origins, extents — goes through the same mapping. Applying it
//! inconsistently between positions and rotations is the classic source of
//! visually "flipped" exports, which is why the mapping lives in one place.

use crate::{Error, Result};
use glam::Vec3;

/// Blockbench subdivisions per world unit
pub const UNIT_SCALE: f32 = 16.0;

/// Default permutation: source X (front) → target 2, source Y (side) →
/// target 0, source Z (up) → target 1
pub const DEFAULT_PERMUTATION: [usize; 3] = [2, 0, 1];

/// A fixed axis permutation plus a uniform unit-scale multiplier
///
/// `permutation[i]` is the target axis index fed by source axis `i`. The
/// permutation is always a bijection on {0, 1, 2}; the constructor rejects
/// anything degenerate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisMapping {
    permutation: [usize; 3],
    unit_scale: f32,
}

impl AxisMapping {
    /// Create a mapping, validating that `permutation` is a bijection
    pub fn new(permutation: [usize; 3], unit_scale: f32) -> Result<Self> {
        let mut seen = [false; 3];
        for &target in &permutation {
            if target > 2 || seen[target] {
                return Err(Error::InvalidMapping(format!(
                    "{permutation:?} is not a permutation of {{0, 1, 2}}"
                )));
            }
            seen[target] = true;
        }
        Ok(Self {
            permutation,
            unit_scale,
        })
    }

    /// The uniform scale applied to every remapped component
    pub fn unit_scale(&self) -> f32 {
        self.unit_scale
    }

    /// Remap a vector into target axis order and target units
    ///
    /// With the default mapping this is `(v.y, v.z, v.x) * 16`.
    pub fn remap(&self, v: Vec3) -> Vec3 {
        let mut out = [0.0f32; 3];
        let src = v.to_array();
        for (i, &target) in self.permutation.iter().enumerate() {
            out[target] = src[i] * self.unit_scale;
        }
        Vec3::from_array(out)
    }

    /// The mapping that undoes this one, including the unit scale
    pub fn inverse(&self) -> Self {
        let mut inv = [0usize; 3];
        for (i, &target) in self.permutation.iter().enumerate() {
            inv[target] = i;
        }
        // permutation is a bijection, so inv is too
        Self {
            permutation: inv,
            unit_scale: 1.0 / self.unit_scale,
        }
    }
}

impl Default for AxisMapping {
    fn default() -> Self {
        Self {
            permutation: DEFAULT_PERMUTATION,
            unit_scale: UNIT_SCALE,
        }
    }
}
