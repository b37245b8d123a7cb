//! This module contains the placement planner: a single-pass rejection-sampling loop which
//! scatters primitive solids over a planar domain and keeps only the ones whose bounding
//! boxes do not collide with anything accepted earlier.

mod params;
mod realize;

pub use params::{PrimitiveKind, SceneParams};
pub use realize::{AnalyticRealizer, ObjectRecord, Pose, ShapeParams, ShapeRealizer};

use crate::overlap::overlaps_any;
use crate::{Aabb, Point3, Vector3};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::f64::consts::PI;

/// The outcome of one placement batch: the accepted object records and, in the same order,
/// their world-space bounding boxes.
#[derive(Debug, Clone, Default)]
pub struct GeneratedScene {
    pub records: Vec<ObjectRecord>,
    pub aabbs: Vec<Aabb>,
}

impl GeneratedScene {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Plans one batch of non-overlapping object placements by rejection sampling.
///
/// The planner draws a target count from the request's count range and attempts exactly that
/// many placements. A rejected placement is discarded and never resampled, so when overlap is
/// disallowed the accepted count may undershoot the drawn target. This mirrors the behavior
/// of the system it models and is part of the observable contract, not an accident to repair
/// with retries.
#[derive(Debug, Default)]
pub struct SceneGenerator {}

impl SceneGenerator {
    /// Segment count used for cylinders and cones; the pyramids use their own face counts.
    pub const SEGMENTS: u32 = 32;

    pub fn new() -> Self {
        Self {}
    }

    /// Run one placement batch against the given realizer.
    ///
    /// Candidates are realized one at a time and tested against every box accepted so far,
    /// in order, so the sequential accept/reject loop is part of the contract. Any error
    /// raised by the realizer aborts the batch immediately, leaving the realizer's state as
    /// the failed attempt left it; nothing is retried or repaired.
    ///
    /// # Arguments
    ///
    /// * `params`: the validated placement request
    /// * `realizer`: the collaborator which creates shapes and reports their bounding boxes
    /// * `rng`: the source of randomness for all draws in this batch
    ///
    /// returns: Result<GeneratedScene, Box<dyn Error, Global>>
    pub fn generate_scene<H, R>(
        &self,
        params: &SceneParams,
        realizer: &mut H,
        rng: &mut R,
    ) -> crate::Result<GeneratedScene>
    where
        H: ShapeRealizer,
        R: Rng + ?Sized,
    {
        let (lo, hi) = params.object_count_range();
        let count = rng.random_range(lo..=hi);

        let mut scene = GeneratedScene::default();
        for _ in 0..count {
            let pose = sample_pose(params, rng);
            let (aabb, record) = realizer.realize(&pose)?;

            if !params.allow_overlap() && overlaps_any(&aabb, &scene.aabbs) {
                realizer.discard_last()?;
                continue;
            }

            scene.aabbs.push(aabb);
            scene.records.push(record);
        }

        Ok(scene)
    }
}

/// Draw a single candidate pose: a uniform shape kind, a planar location uniform over the
/// scene extent, a height jittered uniformly around the distribution mean, uniform Euler
/// rotations, and size parameters uniform over the size range (radii are halved, as the
/// size range describes full diameters).
fn sample_pose<R: Rng + ?Sized>(params: &SceneParams, rng: &mut R) -> Pose {
    // Safe to unwrap because the kind list was validated non-empty at construction
    let kind = *params.objects_to_generate().choose(rng).unwrap();

    let s = params.scene_size();
    let (mean, std) = params.object_height_distribution();
    let location = Point3::new(
        rng.random_range(-s / 2.0..s / 2.0),
        rng.random_range(-s / 2.0..s / 2.0),
        mean + rng.random_range(-std..=std),
    );

    let rotation = Vector3::new(
        rng.random_range(0.0..2.0 * PI),
        rng.random_range(0.0..2.0 * PI),
        rng.random_range(0.0..2.0 * PI),
    );

    let (a, b) = params.object_size_range();
    let shape = match kind {
        PrimitiveKind::Box => ShapeParams::Extents {
            size: [
                rng.random_range(a..=b),
                rng.random_range(a..=b),
                rng.random_range(a..=b),
            ],
        },
        _ => ShapeParams::Turned {
            radius: rng.random_range(a..=b) / 2.0,
            depth: rng.random_range(a..=b),
        },
    };

    let segments = match kind {
        PrimitiveKind::TriangularPyramid => 3,
        PrimitiveKind::RectangularPyramid => 4,
        _ => SceneGenerator::SEGMENTS,
    };

    Pose {
        kind,
        location,
        rotation,
        shape,
        segments,
    }
}
