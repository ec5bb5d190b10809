//! # Terrain Module
//!
//! The procedural generation pipeline, leaf first:
//!
//! * **random**: [`SeededRandom`], a reproducible pseudo-random stream keyed by an integer seed
//! * **noise_field**: [`NoiseField`], coherent 2D noise seeded once from the random stream
//! * **parameters**: [`TerrainParameters`], the seed and the noise-to-height mapping
//! * **generator**: [`TerrainGenerator`], which writes columns into a voxel grid
//!
//! For a fixed seed and fixed parameters the whole pipeline is bit-for-bit deterministic.

pub mod generator;
pub mod noise_field;
pub mod parameters;
pub mod random;

pub use generator::TerrainGenerator;
pub use noise_field::{NoiseField, NoiseKind};
pub use parameters::TerrainParameters;
pub use random::SeededRandom;
