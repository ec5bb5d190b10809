//! # Terrain Parameters
//!
//! The value object controlling how noise maps to column height:
//!
//! ```text
//! n           = noise.sample(x / scale, z / scale)
//! scaled      = offset + magnitude * n
//! column_top  = clamp(floor(grid_height * scaled), 0, grid_height - 1)
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{ConfigIssue, VoxelError};

use super::noise_field::NoiseKind;

/// Seed used when none is configured.
pub const DEFAULT_SEED: i64 = 0;
/// Horizontal noise period used when none is configured.
pub const DEFAULT_SCALE: f64 = 30.0;
/// Noise amplitude used when none is configured.
pub const DEFAULT_MAGNITUDE: f64 = 0.5;
/// Height bias used when none is configured.
pub const DEFAULT_OFFSET: f64 = 0.2;

/// Parameters of the height function.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainParameters {
    /// Seed for the random source that builds the noise field. Any integer is valid.
    pub seed: i64,
    /// Horizontal noise period. Larger values give smoother terrain. Must be positive.
    pub scale: f64,
    /// Multiplier applied to the raw noise sample.
    pub magnitude: f64,
    /// Constant added after scaling by `magnitude`.
    pub offset: f64,
    /// The noise function to sample.
    pub noise: NoiseKind,
}

impl Default for TerrainParameters {
    fn default() -> Self {
        TerrainParameters {
            seed: DEFAULT_SEED,
            scale: DEFAULT_SCALE,
            magnitude: DEFAULT_MAGNITUDE,
            offset: DEFAULT_OFFSET,
            noise: NoiseKind::default(),
        }
    }
}

impl TerrainParameters {
    /// Rejects a scale that is not a positive finite number and a non-finite magnitude
    /// or offset.
    pub fn validate(&self) -> Result<(), VoxelError> {
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(ConfigIssue::NonPositiveScale(self.scale).into());
        }
        if !self.magnitude.is_finite() {
            return Err(ConfigIssue::NonFiniteMagnitude(self.magnitude).into());
        }
        if !self.offset.is_finite() {
            return Err(ConfigIssue::NonFiniteOffset(self.offset).into());
        }
        Ok(())
    }

    /// Maps a raw noise sample to a column top for a grid of `grid_height` cells.
    ///
    /// The result is always in `[0, grid_height - 1]`.
    pub fn column_top(&self, sample: f64, grid_height: i32) -> i32 {
        let scaled = self.offset + self.magnitude * sample;
        let top = (f64::from(grid_height) * scaled).floor();
        top.clamp(0.0, f64::from((grid_height - 1).max(0))) as i32
    }
}
