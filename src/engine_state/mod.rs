//! # Engine State Module
//!
//! The world model and its generation pipeline.
//!
//! ## Key Components
//!
//! * `terrain` - Seeded random source, noise field, terrain parameters and generator
//! * `voxels` - Voxel grid, instance compaction and the world owner
//! * `rendering` - Instance records handed to the external renderer
//!
//! ## Control Flow
//!
//! Terrain parameters seed the random source, which builds the noise field. The terrain
//! generator samples the field to fill a voxel grid, the compactor turns the grid into an
//! instance table, and the caller publishes the result to its renderer.

pub mod rendering;
pub mod terrain;
pub mod voxels;
