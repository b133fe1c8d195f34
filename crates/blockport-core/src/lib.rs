//! # Blockport Core
//!
//! Converts rigid-body mesh objects from a right-handed Z-up scene into
//! Blockbench `.bbmodel` documents built from axis-aligned box elements.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use blockport_core::prelude::*;
//!
//! let objects = vec![SceneObject::mesh(
//!     "Cube",
//!     WorldTransform::default(),
//!     LocalBounds::unit_cube(),
//! )];
//!
//! let doc = convert_scene(&objects, "model", &ExportConfig::default())?;
//! doc.write_bbmodel("model.bbmodel")?;
//! ```
//!
//! ## Units and Conventions
//!
//! - **Source space**: right-handed, Z-up, X forward; 1.0 = 1 world unit
//! - **Target space**: Blockbench axes (side → X, up → Y, front → Z),
//!   16 subdivisions per world unit
//! - **Angles**: output rotations are degrees, Euler XYZ in target order
//! - **Precision**: `f32` throughout, matching the host's transforms
//!
//! The conversion is single-threaded, synchronous, and pure: it reads an
//! immutable snapshot and produces an in-memory document; the only I/O is
//! the optional file writer in [`export`].

pub mod convert;
pub mod document;
pub mod export;
pub mod scene;

mod error;

pub use error::{Error, Result};

/// Prelude module for convenient imports
pub mod prelude {
    // Scene snapshots
    pub use crate::scene::{LocalBounds, ObjectKind, SceneObject, WorldTransform};

    // Conversion
    pub use crate::convert::{
        AxisMapping, BoxPolicy, ExportConfig, RotationStrategy, build_element, convert_scene,
    };

    // Document model
    pub use crate::document::{Document, Element, Meta};

    // Export
    pub use crate::export::{DocumentExport, write_bbmodel};

    // Math (re-export glam)
    pub use glam::{Quat, Vec3};

    // Error handling
    pub use crate::{Error, Result};
}
