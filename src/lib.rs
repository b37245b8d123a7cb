//! This crate contains tools for generating synthetic 3D scenes made of randomly placed
//! primitive solids. Placement is done by rejection sampling: each candidate shape is realized
//! by a collaborator which reports its world-space axis-aligned bounding box, and the candidate
//! is kept only if that box does not overlap the boxes accepted so far.
//!
//! The actual creation of visual geometry (meshes in a host application, sensor scans, renders)
//! is deliberately out of scope; it lives behind the `ShapeRealizer` trait, for which a
//! host-free `AnalyticRealizer` is provided.

use std::error::Error;

pub mod config;
pub mod errors;
pub mod overlap;
pub mod scene;

pub use parry3d_f64::na;

pub type Result<T> = std::result::Result<T, Box<dyn Error>>;

/// A point in 3D space
pub type Point3 = na::Point3<f64>;

/// A vector in 3D space
pub type Vector3 = na::Vector3<f64>;

/// An isometry (rigid transformation) in 3D space
pub type Iso3 = na::Isometry3<f64>;

/// A 3D axis-aligned bounding box, stored as a min/max corner pair
pub use parry3d_f64::bounding_volume::Aabb;

pub use config::{SceneDefaults, SystemConfig};
pub use errors::{ValidationError, Violation};
pub use overlap::{OverlapResult, classify, overlaps_any};
pub use scene::{
    AnalyticRealizer, GeneratedScene, ObjectRecord, Pose, PrimitiveKind, SceneGenerator,
    SceneParams, ShapeParams, ShapeRealizer,
};
