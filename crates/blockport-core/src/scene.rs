//! Scene snapshot types
//!
//! The conversion core never touches a live scene graph. Callers copy the
//! values they need — name, object kind, world transform, local bounding
//! box — into these records before converting, so the export pass is
//! independent of host object lifetimes and mutation during iteration.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Host object type discriminator. Only `Mesh` objects are exported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectKind {
    Mesh,
    Camera,
    Light,
    Empty,
    Armature,
    Curve,
    /// Anything the host knows about that we don't
    Other,
}

impl ObjectKind {
    /// Whether objects of this kind produce an element
    pub fn is_exportable(self) -> bool {
        self == Self::Mesh
    }
}

/// Decomposed world transform of one object
///
/// Rotation carries a unit-length invariant from the host's matrix
/// decomposition; the rotation converter still re-normalizes defensively
/// before Euler extraction. Scale components are positive.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WorldTransform {
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl WorldTransform {
    pub fn new(translation: Vec3, rotation: Quat, scale: Vec3) -> Self {
        Self {
            translation,
            rotation,
            scale,
        }
    }
}

impl Default for WorldTransform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

/// Axis-aligned bounding box of an object's mesh data in its own local,
/// unrotated and unscaled space, given as the eight box corners
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LocalBounds {
    pub corners: [Vec3; 8],
}

impl LocalBounds {
    pub fn new(corners: [Vec3; 8]) -> Self {
        Self { corners }
    }

    /// Build the eight corners from per-axis extremes
    pub fn from_min_max(min: Vec3, max: Vec3) -> Self {
        Self {
            corners: [
                Vec3::new(min.x, min.y, min.z),
                Vec3::new(min.x, min.y, max.z),
                Vec3::new(min.x, max.y, min.z),
                Vec3::new(min.x, max.y, max.z),
                Vec3::new(max.x, min.y, min.z),
                Vec3::new(max.x, min.y, max.z),
                Vec3::new(max.x, max.y, min.z),
                Vec3::new(max.x, max.y, max.z),
            ],
        }
    }

    /// A unit cube centered on the local origin
    pub fn unit_cube() -> Self {
        Self::from_min_max(Vec3::splat(-0.5), Vec3::splat(0.5))
    }
}

/// One object copied out of the host scene
///
/// Names are passed through verbatim; duplicates are the host's business.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneObject {
    pub name: String,
    pub kind: ObjectKind,
    pub transform: WorldTransform,
    pub bounds: LocalBounds,
}

impl SceneObject {
    /// Convenience constructor for a mesh object
    pub fn mesh(name: impl Into<String>, transform: WorldTransform, bounds: LocalBounds) -> Self {
        Self {
            name: name.into(),
            kind: ObjectKind::Mesh,
            transform,
            bounds,
        }
    }
}
