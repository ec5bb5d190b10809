//! # Voxel World Model
//!
//! This module contains the voxel data model and the steps that turn a configuration
//! into a renderable world.
//!
//! ## Architecture
//!
//! * **Block**: Block materials and the per-cell [`block::Voxel`] record
//! * **Grid**: The dense, bounds-checked 3D array of cells
//! * **Instances**: Compaction of solid cells onto a contiguous instance index range
//! * **World**: The `generate` entry point and the published world owner
//!
//! ## Data Flow
//!
//! 1. A `WorldConfig` is validated
//! 2. A fresh grid is allocated and every column is written by the terrain generator
//! 3. The compactor assigns instance indices in raster order and builds the instance table
//! 4. The finished world replaces the published one in a single swap
//!
//! ## Thread Safety
//!
//! * A generated world is immutable once published and can be read from any thread
//! * Regeneration never mutates a published world; it builds a new one

pub mod block;
pub mod grid;
pub mod instances;
pub mod world;
