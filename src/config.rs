//! This module contains the system configuration, loaded once at startup from a JSON file and
//! passed explicitly to whatever needs it. There is no process-wide singleton; ownership of
//! the configuration value is the caller's.

use crate::scene::{PrimitiveKind, SceneParams};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Default values for the scene generation parameters, overridable from the configuration
/// file field by field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneDefaults {
    pub scene_size: f64,
    pub object_count_range: (usize, usize),
    pub object_size_range: (f64, f64),
    pub object_height_distribution: (f64, f64),
    pub allow_overlap: bool,
}

impl Default for SceneDefaults {
    fn default() -> Self {
        Self {
            scene_size: 10.0,
            object_count_range: (5, 8),
            object_size_range: (2.0, 4.0),
            object_height_distribution: (5.0, 2.0),
            allow_overlap: false,
        }
    }
}

/// The system configuration: the vocabulary of shape kinds to generate, plus the scene
/// parameter defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    pub objects_to_generate: Vec<PrimitiveKind>,

    #[serde(default)]
    pub scene: SceneDefaults,
}

impl SystemConfig {
    /// Load the configuration from a JSON file on disk.
    ///
    /// # Arguments
    ///
    /// * `path`: the path of the JSON file to read
    ///
    /// returns: Result<SystemConfig, Box<dyn Error, Global>>
    pub fn from_path(path: impl AsRef<Path>) -> crate::Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_reader(reader: impl Read) -> crate::Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Build a validated set of placement parameters from the configured defaults. Any
    /// constraint violated by the configured values is reported through the same validation
    /// error the direct constructor produces.
    pub fn scene_params(&self) -> crate::Result<SceneParams> {
        let params = SceneParams::new(
            self.scene.scene_size,
            self.objects_to_generate.clone(),
            self.scene.object_count_range,
            self.scene.object_size_range,
            self.scene.object_height_distribution,
            self.scene.allow_overlap,
        )?;
        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_vocabulary_and_defaults() {
        let raw = r#"{"objects_to_generate": ["box", "cylinder", "triangular_pyramid"]}"#;
        let config = SystemConfig::from_reader(raw.as_bytes()).unwrap();

        assert_eq!(config.objects_to_generate.len(), 3);
        assert_eq!(config.objects_to_generate[1], PrimitiveKind::Cylinder);
        assert_eq!(config.scene.scene_size, 10.0);
        assert_eq!(config.scene.object_count_range, (5, 8));

        let params = config.scene_params().unwrap();
        assert_eq!(params.object_size_range(), (2.0, 4.0));
    }

    #[test]
    fn overrides_defaults_field_by_field() {
        let raw = r#"{
            "objects_to_generate": ["box"],
            "scene": {"scene_size": 25.0, "allow_overlap": true}
        }"#;
        let config = SystemConfig::from_reader(raw.as_bytes()).unwrap();

        assert_eq!(config.scene.scene_size, 25.0);
        assert!(config.scene.allow_overlap);
        assert_eq!(config.scene.object_height_distribution, (5.0, 2.0));
    }

    #[test]
    fn invalid_configured_values_fail_validation() {
        let raw = r#"{
            "objects_to_generate": ["box"],
            "scene": {"object_size_range": [4.0, 2.0]}
        }"#;
        let config = SystemConfig::from_reader(raw.as_bytes()).unwrap();

        let err = config.scene_params().unwrap_err();
        assert!(err.to_string().contains("object_size_range"));
    }

    #[test]
    fn unknown_kind_is_a_parse_error() {
        let raw = r#"{"objects_to_generate": ["dodecahedron"]}"#;
        assert!(SystemConfig::from_reader(raw.as_bytes()).is_err());
    }
}
