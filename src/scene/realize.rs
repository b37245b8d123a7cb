//! This module defines the boundary between the placement planner and whatever subsystem turns
//! a sampled pose into concrete geometry. In production that subsystem is a stateful host
//! scene graph; for testing and for pure bounding-box work the `AnalyticRealizer` stands in
//! for it by computing world-space AABBs directly from the primitive dimensions.

use crate::scene::PrimitiveKind;
use crate::{Aabb, Iso3, Point3, Vector3, na};
use serde::Serialize;

/// The size parameters of a sampled primitive: three per-axis extents for a box, or a
/// radius/depth pair for the turned shapes (cylinder, cone, pyramids).
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ShapeParams {
    Extents { size: [f64; 3] },
    Turned { radius: f64, depth: f64 },
}

/// Everything needed to instantiate one concrete object: a shape kind, a world location, an
/// XYZ Euler rotation in radians, the sampled size parameters, and the segment count used for
/// the turned shapes (3 and 4 for the pyramids, 32 otherwise).
#[derive(Clone, Debug)]
pub struct Pose {
    pub kind: PrimitiveKind,
    pub location: Point3,
    pub rotation: Vector3,
    pub shape: ShapeParams,
    pub segments: u32,
}

impl Pose {
    /// The rigid transformation placing the local primitive frame in the world
    pub fn isometry(&self) -> Iso3 {
        let rotation =
            na::UnitQuaternion::from_euler_angles(self.rotation.x, self.rotation.y, self.rotation.z);
        Iso3::from_parts(na::Translation3::from(self.location.coords), rotation)
    }
}

/// A descriptive record of one placed object, serializing with a `type` tag, the location and
/// rotation, and the shape-specific size fields (`size`, or `radius` and `depth`).
#[derive(Clone, Debug, Serialize)]
pub struct ObjectRecord {
    #[serde(rename = "type")]
    pub kind: PrimitiveKind,
    pub location: [f64; 3],
    pub rotation: [f64; 3],
    #[serde(flatten)]
    pub shape: ShapeParams,
}

impl From<&Pose> for ObjectRecord {
    fn from(pose: &Pose) -> Self {
        Self {
            kind: pose.kind,
            location: pose.location.coords.into(),
            rotation: pose.rotation.into(),
            shape: pose.shape,
        }
    }
}

/// The collaborator which turns a sampled pose into a concrete shape and reports its
/// world-space bounding box. Implementations are assumed to be stateful in the manner of a
/// host scene graph: `realize` appends a shape, and `discard_last` undoes the most recently
/// realized one when the planner rejects it.
pub trait ShapeRealizer {
    fn realize(&mut self, pose: &Pose) -> crate::Result<(Aabb, ObjectRecord)>;

    fn discard_last(&mut self) -> crate::Result<()>;
}

/// A host-free realizer which computes the world AABB of each primitive analytically: the
/// local bounding box of the shape is taken from its sampled dimensions, its eight corners are
/// transformed by the pose isometry, and the world box is the per-axis min/max of the result.
/// Created records are kept in order so rejected shapes can be discarded.
#[derive(Debug, Default)]
pub struct AnalyticRealizer {
    created: Vec<ObjectRecord>,
}

impl AnalyticRealizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The records of every realized shape that has not been discarded, in creation order
    pub fn created(&self) -> &[ObjectRecord] {
        &self.created
    }

    /// Remove every created record, as when the owning scene is cleaned between batches
    pub fn clear(&mut self) {
        self.created.clear();
    }

    fn local_half_extents(shape: &ShapeParams) -> Vector3 {
        match shape {
            ShapeParams::Extents { size } => {
                Vector3::new(size[0] / 2.0, size[1] / 2.0, size[2] / 2.0)
            }
            // Turned shapes have their principal axis along local z
            ShapeParams::Turned { radius, depth } => Vector3::new(*radius, *radius, depth / 2.0),
        }
    }
}

impl ShapeRealizer for AnalyticRealizer {
    fn realize(&mut self, pose: &Pose) -> crate::Result<(Aabb, ObjectRecord)> {
        let h = Self::local_half_extents(&pose.shape);
        let iso = pose.isometry();

        let mut corners = Vec::with_capacity(8);
        for sx in [-1.0, 1.0] {
            for sy in [-1.0, 1.0] {
                for sz in [-1.0, 1.0] {
                    let local = Point3::new(sx * h.x, sy * h.y, sz * h.z);
                    corners.push(iso * local);
                }
            }
        }

        let aabb = Aabb::from_points(&corners);
        let record = ObjectRecord::from(pose);
        self.created.push(record.clone());

        Ok((aabb, record))
    }

    fn discard_last(&mut self) -> crate::Result<()> {
        self.created.pop();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    fn box_pose(location: Point3, rotation: Vector3, size: [f64; 3]) -> Pose {
        Pose {
            kind: PrimitiveKind::Box,
            location,
            rotation,
            shape: ShapeParams::Extents { size },
            segments: 32,
        }
    }

    #[test]
    fn unrotated_box_aabb_matches_extents() {
        let mut realizer = AnalyticRealizer::new();
        let pose = box_pose(
            Point3::new(1.0, 2.0, 3.0),
            Vector3::zeros(),
            [2.0, 4.0, 6.0],
        );
        let (aabb, record) = realizer.realize(&pose).unwrap();

        assert_relative_eq!(aabb.mins.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(aabb.mins.y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(aabb.mins.z, 0.0, epsilon = 1e-12);
        assert_relative_eq!(aabb.maxs.x, 2.0, epsilon = 1e-12);
        assert_relative_eq!(aabb.maxs.y, 4.0, epsilon = 1e-12);
        assert_relative_eq!(aabb.maxs.z, 6.0, epsilon = 1e-12);
        assert_eq!(record.kind, PrimitiveKind::Box);
    }

    #[test]
    fn quarter_turn_swaps_planar_extents() {
        let mut realizer = AnalyticRealizer::new();
        let pose = box_pose(
            Point3::origin(),
            Vector3::new(0.0, 0.0, PI / 2.0),
            [2.0, 6.0, 1.0],
        );
        let (aabb, _) = realizer.realize(&pose).unwrap();

        assert_relative_eq!(aabb.maxs.x - aabb.mins.x, 6.0, epsilon = 1e-9);
        assert_relative_eq!(aabb.maxs.y - aabb.mins.y, 2.0, epsilon = 1e-9);
        assert_relative_eq!(aabb.maxs.z - aabb.mins.z, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn cylinder_aabb_spans_diameter_and_depth() {
        let mut realizer = AnalyticRealizer::new();
        let pose = Pose {
            kind: PrimitiveKind::Cylinder,
            location: Point3::origin(),
            rotation: Vector3::zeros(),
            shape: ShapeParams::Turned {
                radius: 1.5,
                depth: 4.0,
            },
            segments: 32,
        };
        let (aabb, _) = realizer.realize(&pose).unwrap();

        assert_relative_eq!(aabb.maxs.x - aabb.mins.x, 3.0, epsilon = 1e-12);
        assert_relative_eq!(aabb.maxs.y - aabb.mins.y, 3.0, epsilon = 1e-12);
        assert_relative_eq!(aabb.maxs.z - aabb.mins.z, 4.0, epsilon = 1e-12);
    }

    #[test]
    fn discard_last_pops_most_recent_record() {
        let mut realizer = AnalyticRealizer::new();
        let p0 = box_pose(Point3::origin(), Vector3::zeros(), [1.0, 1.0, 1.0]);
        let p1 = box_pose(Point3::new(5.0, 0.0, 0.0), Vector3::zeros(), [1.0, 1.0, 1.0]);
        realizer.realize(&p0).unwrap();
        realizer.realize(&p1).unwrap();

        realizer.discard_last().unwrap();
        assert_eq!(realizer.created().len(), 1);
        assert_relative_eq!(realizer.created()[0].location[0], 0.0);
    }

    #[test]
    fn record_serializes_with_exact_keys() {
        let pose = Pose {
            kind: PrimitiveKind::Cone,
            location: Point3::new(1.0, 2.0, 3.0),
            rotation: Vector3::zeros(),
            shape: ShapeParams::Turned {
                radius: 0.5,
                depth: 2.0,
            },
            segments: 32,
        };
        let record = ObjectRecord::from(&pose);
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["type"], "cone");
        assert_eq!(value["location"][2], 3.0);
        assert_eq!(value["radius"], 0.5);
        assert_eq!(value["depth"], 2.0);
        assert!(value.get("size").is_none());

        let boxed = ObjectRecord::from(&Pose {
            kind: PrimitiveKind::Box,
            location: Point3::origin(),
            rotation: Vector3::zeros(),
            shape: ShapeParams::Extents {
                size: [1.0, 2.0, 3.0],
            },
            segments: 32,
        });
        let value = serde_json::to_value(&boxed).unwrap();
        assert_eq!(value["type"], "box");
        assert_eq!(value["size"][1], 2.0);
        assert!(value.get("radius").is_none());
    }
}
