use crate::errors::{ValidationError, Violation};
use serde::{Deserialize, Serialize};

/// Enumerates the primitive solids the generator knows how to request from a realizer
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimitiveKind {
    Box,
    Cone,
    TriangularPyramid,
    RectangularPyramid,
    Cylinder,
}

/// The parameters governing one batch of object placement. Validation happens once, in the
/// constructor, which collects every violated constraint instead of stopping at the first; a
/// successfully constructed value can be assumed well-formed for the rest of its life.
#[derive(Debug, Clone)]
pub struct SceneParams {
    scene_size: f64,
    objects_to_generate: Vec<PrimitiveKind>,
    object_count_range: (usize, usize),
    object_size_range: (f64, f64),
    object_height_distribution: (f64, f64),
    allow_overlap: bool,
}

impl SceneParams {
    /// Create a new set of placement parameters, validating every field eagerly.
    ///
    /// # Arguments
    ///
    /// * `scene_size`: the edge length of the square planar domain objects are scattered over;
    ///   locations are drawn from [-scene_size/2, scene_size/2) on each horizontal axis
    /// * `objects_to_generate`: the shape kinds to draw from, uniformly; must not be empty
    /// * `object_count_range`: inclusive [lo, hi] range the target object count is drawn from
    /// * `object_size_range`: inclusive [a, b] range the size parameters are drawn from
    /// * `object_height_distribution`: (mean, stddev) pair; heights are drawn as
    ///   mean + uniform(-stddev, stddev), a bounded jitter rather than a Gaussian
    /// * `allow_overlap`: when true, every realized object is accepted unconditionally
    ///
    /// returns: Result<SceneParams, ValidationError>
    pub fn new(
        scene_size: f64,
        objects_to_generate: Vec<PrimitiveKind>,
        object_count_range: (usize, usize),
        object_size_range: (f64, f64),
        object_height_distribution: (f64, f64),
        allow_overlap: bool,
    ) -> Result<Self, ValidationError> {
        let mut violations = Vec::new();

        if !scene_size.is_finite() || scene_size <= 0.0 {
            violations.push(Violation::new(
                "scene_size",
                format!("must be a positive finite number, got {}", scene_size),
            ));
        }

        if objects_to_generate.is_empty() {
            violations.push(Violation::new("objects_to_generate", "must not be empty"));
        }

        if object_count_range.0 > object_count_range.1 {
            violations.push(Violation::new(
                "object_count_range",
                format!(
                    "lower bound must not exceed upper bound, got ({}, {})",
                    object_count_range.0, object_count_range.1
                ),
            ));
        }

        let (a, b) = object_size_range;
        if !a.is_finite() || !b.is_finite() || a < 0.0 || a > b {
            violations.push(Violation::new(
                "object_size_range",
                format!(
                    "bounds must be finite with 0 <= a <= b, got ({}, {})",
                    a, b
                ),
            ));
        }

        let (mean, std) = object_height_distribution;
        if !mean.is_finite() || !std.is_finite() || std < 0.0 {
            violations.push(Violation::new(
                "object_height_distribution",
                format!(
                    "mean and stddev must be finite with stddev >= 0, got ({}, {})",
                    mean, std
                ),
            ));
        }

        if violations.is_empty() {
            Ok(Self {
                scene_size,
                objects_to_generate,
                object_count_range,
                object_size_range,
                object_height_distribution,
                allow_overlap,
            })
        } else {
            Err(ValidationError::new(violations))
        }
    }

    pub fn scene_size(&self) -> f64 {
        self.scene_size
    }

    pub fn objects_to_generate(&self) -> &[PrimitiveKind] {
        &self.objects_to_generate
    }

    pub fn object_count_range(&self) -> (usize, usize) {
        self.object_count_range
    }

    pub fn object_size_range(&self) -> (f64, f64) {
        self.object_size_range
    }

    pub fn object_height_distribution(&self) -> (f64, f64) {
        self.object_height_distribution
    }

    pub fn allow_overlap(&self) -> bool {
        self.allow_overlap
    }
}
