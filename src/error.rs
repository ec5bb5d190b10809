//! # Error Types
//!
//! The voxel core has exactly two failure modes: a coordinate outside the grid and a
//! configuration that cannot produce a grid. Both are reported to the immediate caller
//! and never retried. Loading a configuration from disk adds its own I/O and parse
//! failures, which live in [`crate::config::ConfigError`].

use std::fmt;

use thiserror::Error;

use crate::config::ConfigError;

/// Errors raised by the voxel grid, the terrain generator and the world owner.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VoxelError {
    /// A coordinate fell outside `[0,width) x [0,height) x [0,width)`.
    #[error("voxel ({x}, {y}, {z}) is outside the {width}x{height}x{width} grid")]
    OutOfBounds {
        /// Requested X coordinate
        x: i32,
        /// Requested Y coordinate
        y: i32,
        /// Requested Z coordinate
        z: i32,
        /// Horizontal extent of the grid
        width: i32,
        /// Vertical extent of the grid
        height: i32,
    },

    /// A configuration value was rejected before any generation work started.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(ConfigIssue),
}

/// The specific configuration value that failed validation.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigIssue {
    /// Width must be at least one.
    NonPositiveWidth(i32),
    /// Height must be at least one.
    NonPositiveHeight(i32),
    /// Scale must be a positive, finite number.
    NonPositiveScale(f64),
    /// Magnitude must be finite.
    NonFiniteMagnitude(f64),
    /// Offset must be finite.
    NonFiniteOffset(f64),
    /// `width * height * width` does not fit in the instance index space.
    TooManyCells {
        /// Requested width
        width: i32,
        /// Requested height
        height: i32,
    },
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigIssue::NonPositiveWidth(width) => {
                write!(f, "width must be positive, got {}", width)
            }
            ConfigIssue::NonPositiveHeight(height) => {
                write!(f, "height must be positive, got {}", height)
            }
            ConfigIssue::NonPositiveScale(scale) => {
                write!(f, "scale must be a positive finite number, got {}", scale)
            }
            ConfigIssue::NonFiniteMagnitude(magnitude) => {
                write!(f, "magnitude must be finite, got {}", magnitude)
            }
            ConfigIssue::NonFiniteOffset(offset) => {
                write!(f, "offset must be finite, got {}", offset)
            }
            ConfigIssue::TooManyCells { width, height } => write!(
                f,
                "a {}x{}x{} grid exceeds the addressable instance count",
                width, height, width
            ),
        }
    }
}

impl From<ConfigIssue> for VoxelError {
    fn from(issue: ConfigIssue) -> Self {
        VoxelError::InvalidConfiguration(issue)
    }
}

/// Errors surfaced by the headless [`crate::run`] entry point.
#[derive(Error, Debug)]
pub enum RunError {
    /// The configuration file could not be read, parsed or validated.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Generation was rejected.
    #[error(transparent)]
    Voxel(#[from] VoxelError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_message_names_the_coordinate() {
        let error = VoxelError::OutOfBounds {
            x: 4,
            y: 0,
            z: 0,
            width: 4,
            height: 4,
        };
        assert_eq!(
            error.to_string(),
            "voxel (4, 0, 0) is outside the 4x4x4 grid"
        );
    }

    #[test]
    fn config_issue_converts_into_voxel_error() {
        let error: VoxelError = ConfigIssue::NonPositiveWidth(0).into();
        assert_eq!(
            error,
            VoxelError::InvalidConfiguration(ConfigIssue::NonPositiveWidth(0))
        );
        assert_eq!(
            error.to_string(),
            "invalid configuration: width must be positive, got 0"
        );
    }
}
