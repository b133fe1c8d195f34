//! Rotation re-expression for the target format
//!
//! Two incompatible conversions exist in the wild for carrying a world
//! rotation across the axis permutation, and neither subsumes the other:
//! they agree for rotations about a single principal axis and disagree for
//! compound rotations. Both are kept selectable rather than unified.
//! Neither is a true change of basis (that would conjugate the rotation by
//! the permutation matrix); the component swaps below are the observed
//! behaviors, preserved deliberately.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Strategy for converting a world rotation into the target rotation
/// triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RotationStrategy {
    /// Decompose to Euler XYZ in source order, then permute the three
    /// angle values like vector components. Cheap, but Euler components
    /// are not vector components: compound rotations visibly flip. Kept
    /// as a known limitation.
    EulerSwap,

    /// Permute the quaternion's imaginary components — (w, x, y, z)
    /// becomes (w, y, z, x) — then decompose the result. Removes the
    /// single-axis flipping EulerSwap exhibits, though still a component
    /// permutation rather than a conjugation.
    #[default]
    QuaternionSwap,
}

impl RotationStrategy {
    /// Convert a world rotation to degrees in target axis order
    ///
    /// The quaternion is re-normalized before decomposition; NaN/Inf
    /// inputs propagate to the output.
    pub fn convert(self, world_rotation: Quat) -> Vec3 {
        let q = world_rotation.normalize();
        let radians = match self {
            Self::EulerSwap => {
                let e = euler_xyz(q);
                // Same index permutation the axis remapper applies
                Vec3::new(e.y, e.z, e.x)
            }
            Self::QuaternionSwap => {
                let swapped = Quat::from_xyzw(q.y, q.z, q.x, q.w);
                euler_xyz(swapped)
            }
        };
        Vec3::new(
            radians.x.to_degrees(),
            radians.y.to_degrees(),
            radians.z.to_degrees(),
        )
    }
}

/// Decompose a unit quaternion to Euler angles in fixed XYZ order
/// (R = Rz · Ry · Rx on column vectors), radians
///
/// The pitch argument is clamped to [-1, 1] before the inverse sine so
/// results stay deterministic near ±90° pitch instead of going NaN from
/// rounding spill.
fn euler_xyz(q: Quat) -> Vec3 {
    let (x, y, z, w) = (q.x, q.y, q.z, q.w);

    let sin_pitch = (2.0 * (w * y - x * z)).clamp(-1.0, 1.0);
    Vec3::new(
        (2.0 * (w * x + y * z)).atan2(1.0 - 2.0 * (x * x + y * y)),
        sin_pitch.asin(),
        (2.0 * (w * z + x * y)).atan2(1.0 - 2.0 * (y * y + z * z)),
    )
}
