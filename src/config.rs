//! # World Configuration
//!
//! Everything the parameter collaborator can change: grid dimensions, terrain
//! parameters and the generation mode. Any change is applied by regenerating the whole
//! world from a new [`WorldConfig`].
//!
//! Configurations can be built in code or read from a JSON document. Missing fields take
//! their defaults, so `{"terrain": {"seed": 17}}` is a complete config.
//!
//! ```
//! use voxel_terrain::config::WorldConfig;
//!
//! let config = WorldConfig::from_json_str(r#"{ "width": 16, "terrain": { "seed": 17 } }"#).unwrap();
//! assert_eq!(config.width, 16);
//! assert_eq!(config.height, 32);
//! assert_eq!(config.terrain.seed, 17);
//! ```

use std::ops::RangeInclusive;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::engine_state::terrain::TerrainParameters;
use crate::engine_state::voxels::grid::validate_dimensions;
use crate::error::VoxelError;

/// Width used when none is configured.
pub const DEFAULT_WIDTH: i32 = 64;
/// Height used when none is configured.
pub const DEFAULT_HEIGHT: i32 = 32;

/// Width range offered by the parameter panel.
pub const WIDTH_UI_RANGE: RangeInclusive<i32> = 8..=128;
/// Height range offered by the parameter panel.
pub const HEIGHT_UI_RANGE: RangeInclusive<i32> = 8..=64;
/// Seed range offered by the parameter panel.
pub const SEED_UI_RANGE: RangeInclusive<i64> = 0..=10_000;
/// Scale range offered by the parameter panel.
pub const SCALE_UI_RANGE: RangeInclusive<f64> = 10.0..=100.0;
/// Magnitude range offered by the parameter panel.
pub const MAGNITUDE_UI_RANGE: RangeInclusive<f64> = 0.0..=1.0;
/// Offset range offered by the parameter panel.
pub const OFFSET_UI_RANGE: RangeInclusive<f64> = 0.0..=1.0;

/// How terrain generation and instance compaction are scheduled.
///
/// Both modes produce identical grids and instance tables.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMode {
    /// Single-threaded scan on the calling thread.
    #[default]
    Sequential,
    /// Column-parallel generation and two-pass compaction on the `rayon` pool.
    Parallel,
}

/// Full description of a world to generate.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Extent of the X and Z axes. Must be positive.
    pub width: i32,
    /// Extent of the Y axis. Must be positive.
    pub height: i32,
    /// Noise and height mapping parameters.
    pub terrain: TerrainParameters,
    /// Scheduling of the generation passes.
    pub generation_mode: GenerationMode,
}

impl Default for WorldConfig {
    fn default() -> Self {
        WorldConfig {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            terrain: TerrainParameters::default(),
            generation_mode: GenerationMode::default(),
        }
    }
}

/// Errors from reading a configuration document.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not valid JSON for a [`WorldConfig`].
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// The document parsed but describes a world that cannot be generated.
    #[error(transparent)]
    Invalid(#[from] VoxelError),
}

impl WorldConfig {
    /// Checks every field without allocating anything.
    ///
    /// # Errors
    /// [`VoxelError::InvalidConfiguration`] naming the first rejected value.
    pub fn validate(&self) -> Result<(), VoxelError> {
        validate_dimensions(self.width, self.height)?;
        self.terrain.validate()
    }

    /// Number of cells in a grid of this shape.
    pub fn cell_count(&self) -> Result<usize, VoxelError> {
        validate_dimensions(self.width, self.height)
    }

    /// Parses and validates a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: WorldConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates the JSON file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Serializes this config as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine_state::terrain::NoiseKind;
    use crate::error::ConfigIssue;

    #[test]
    fn defaults_match_the_documented_values() {
        let config = WorldConfig::default();
        assert_eq!(config.width, 64);
        assert_eq!(config.height, 32);
        assert_eq!(config.terrain.seed, 0);
        assert_eq!(config.terrain.scale, 30.0);
        assert_eq!(config.terrain.magnitude, 0.5);
        assert_eq!(config.terrain.offset, 0.2);
        assert_eq!(config.terrain.noise, NoiseKind::Simplex);
        assert_eq!(config.generation_mode, GenerationMode::Sequential);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_fills_in_defaults() {
        let config = WorldConfig::from_json_str(
            r#"{ "height": 8, "terrain": { "scale": 12.5, "noise": "perlin" }, "generation_mode": "parallel" }"#,
        )
        .unwrap();
        assert_eq!(config.width, DEFAULT_WIDTH);
        assert_eq!(config.height, 8);
        assert_eq!(config.terrain.scale, 12.5);
        assert_eq!(config.terrain.magnitude, 0.5);
        assert_eq!(config.terrain.noise, NoiseKind::Perlin);
        assert_eq!(config.generation_mode, GenerationMode::Parallel);
    }

    #[test]
    fn invalid_values_are_rejected_on_load() {
        let error = WorldConfig::from_json_str(r#"{ "width": 0 }"#).unwrap_err();
        assert!(matches!(
            error,
            ConfigError::Invalid(VoxelError::InvalidConfiguration(ConfigIssue::NonPositiveWidth(0)))
        ));

        let error = WorldConfig::from_json_str(r#"{ "terrain": { "scale": -3.0 } }"#).unwrap_err();
        assert!(matches!(
            error,
            ConfigError::Invalid(VoxelError::InvalidConfiguration(ConfigIssue::NonPositiveScale(_)))
        ));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let error = WorldConfig::from_json_str("{ width: ").unwrap_err();
        assert!(matches!(error, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let error = WorldConfig::load("/definitely/not/a/config.json").unwrap_err();
        assert!(matches!(error, ConfigError::Io(_)));
    }

    #[test]
    fn json_round_trip_preserves_the_config() {
        let config = WorldConfig {
            width: 10,
            height: 5,
            generation_mode: GenerationMode::Parallel,
            ..Default::default()
        };
        let json = config.to_json_string().unwrap();
        assert_eq!(WorldConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn ui_ranges_contain_the_defaults() {
        let config = WorldConfig::default();
        assert!(WIDTH_UI_RANGE.contains(&config.width));
        assert!(HEIGHT_UI_RANGE.contains(&config.height));
        assert!(SEED_UI_RANGE.contains(&config.terrain.seed));
        assert!(SCALE_UI_RANGE.contains(&config.terrain.scale));
        assert!(MAGNITUDE_UI_RANGE.contains(&config.terrain.magnitude));
        assert!(OFFSET_UI_RANGE.contains(&config.terrain.offset));
    }
}
