//! # Terrain Generator
//!
//! Populates every cell of a [`VoxelGrid`] from a [`NoiseField`] and
//! [`TerrainParameters`]. Each `(x, z)` column gets a solid prefix `[0, top]` with
//! `GRASS` at `top` and `DIRT` below it; every cell above `top` is reset to air, so a
//! grid that held an older world is fully overwritten.
//!
//! Columns are independent: a column only reads the shared noise field and only writes
//! its own cells. [`GenerationMode::Parallel`] exploits that by handing each X slab of the
//! grid to a `rayon` worker.

use log::debug;
use rayon::prelude::*;
use web_time::Instant;

use crate::config::GenerationMode;
use crate::engine_state::voxels::{
    block::{block_type::BlockType, Voxel},
    grid::VoxelGrid,
};
use crate::error::VoxelError;

use super::{noise_field::NoiseField, parameters::TerrainParameters, random::SeededRandom};

/// Writes terrain into voxel grids for one fixed set of parameters.
#[derive(Clone, Debug)]
pub struct TerrainGenerator {
    /// Height function parameters
    params: TerrainParameters,
    /// Noise field built from `params.seed`
    noise: NoiseField,
}

impl TerrainGenerator {
    /// Validates `params` and builds the seeded noise field.
    ///
    /// # Arguments
    /// * `params` - Seed, noise kind and height mapping
    ///
    /// # Returns
    /// A generator that produces the same terrain for every call.
    ///
    /// # Errors
    /// [`VoxelError::InvalidConfiguration`] if the parameters are rejected.
    pub fn new(params: &TerrainParameters) -> Result<Self, VoxelError> {
        params.validate()?;
        let mut random = SeededRandom::new(params.seed);
        let noise = NoiseField::new(params.noise, &mut random);
        Ok(TerrainGenerator {
            params: *params,
            noise,
        })
    }

    /// The parameters this generator was built from.
    pub fn params(&self) -> &TerrainParameters {
        &self.params
    }

    /// Computes the top solid Y of a column.
    ///
    /// # Arguments
    /// * `x` - X coordinate of the column
    /// * `z` - Z coordinate of the column
    /// * `grid_height` - Number of layers in the target grid
    ///
    /// # Returns
    /// A value in `[0, grid_height - 1]`.
    pub fn column_top(&self, x: i32, z: i32, grid_height: i32) -> i32 {
        let scale = self.params.scale;
        let sample = self
            .noise
            .sample(f64::from(x) / scale, f64::from(z) / scale);
        self.params.column_top(sample, grid_height)
    }

    /// Overwrites every cell of `grid` with freshly generated terrain.
    ///
    /// # Arguments
    /// * `grid` - The grid to fill; its previous contents are discarded
    /// * `mode` - Whether columns are written on this thread or across the `rayon` pool
    ///
    /// Instance indices are cleared along the way; run the compactor afterwards.
    pub fn generate(&self, grid: &mut VoxelGrid, mode: GenerationMode) {
        let start = Instant::now();
        let width = grid.width();
        let height = grid.height();
        let slab_len = grid.slab_len();
        let slabs = grid.voxels_mut();

        match mode {
            GenerationMode::Sequential => slabs
                .chunks_mut(slab_len)
                .enumerate()
                .for_each(|(x, slab)| self.fill_slab(x as i32, slab, width, height)),
            GenerationMode::Parallel => slabs
                .par_chunks_mut(slab_len)
                .enumerate()
                .for_each(|(x, slab)| self.fill_slab(x as i32, slab, width, height)),
        }

        debug!(
            "Generated {}x{}x{} terrain from {:?} noise ({:?}) in {:?}",
            width,
            height,
            width,
            self.noise.kind(),
            mode,
            start.elapsed()
        );
    }

    /// Fills the `height * width` cells belonging to X coordinate `x`.
    fn fill_slab(&self, x: i32, slab: &mut [Voxel], width: i32, height: i32) {
        let row = width as usize;
        for z in 0..width {
            let top = self.column_top(x, z, height);
            for y in 0..height {
                let voxel = match y.cmp(&top) {
                    std::cmp::Ordering::Less => Voxel::new(BlockType::DIRT),
                    std::cmp::Ordering::Equal => Voxel::new(BlockType::GRASS),
                    std::cmp::Ordering::Greater => Voxel::AIR,
                };
                slab[y as usize * row + z as usize] = voxel;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine_state::terrain::noise_field::NoiseKind;

    fn params(seed: i64) -> TerrainParameters {
        TerrainParameters {
            seed,
            scale: 30.0,
            magnitude: 0.5,
            offset: 0.2,
            ..Default::default()
        }
    }

    #[test]
    fn keeps_the_parameters_it_was_built_from() {
        let perlin = TerrainParameters {
            noise: NoiseKind::Perlin,
            ..params(21)
        };
        let generator = TerrainGenerator::new(&perlin).unwrap();
        assert_eq!(generator.params(), &perlin);
        assert_eq!(generator.noise.kind(), NoiseKind::Perlin);
    }

    #[test]
    fn rejects_invalid_scale_before_generating() {
        let bad = TerrainParameters {
            scale: 0.0,
            ..Default::default()
        };
        assert!(TerrainGenerator::new(&bad).is_err());
    }

    #[test]
    fn every_column_is_a_solid_prefix() {
        let generator = TerrainGenerator::new(&params(42)).unwrap();
        let mut grid = VoxelGrid::new(16, 12).unwrap();
        generator.generate(&mut grid, GenerationMode::Sequential);

        for x in 0..16 {
            for z in 0..16 {
                let top = generator.column_top(x, z, 12);
                assert!((0..12).contains(&top));
                for y in 0..12 {
                    let voxel = grid.get_voxel(x, y, z).unwrap();
                    assert_eq!(voxel.is_solid(), y <= top, "({x}, {y}, {z})");
                    assert_eq!(voxel.instance_index, None);
                }
                assert_eq!(
                    grid.get_voxel(x, top, z).unwrap().block_type(),
                    Some(BlockType::GRASS)
                );
            }
        }
    }

    #[test]
    fn regeneration_clears_stale_cells() {
        let mut grid = VoxelGrid::new(6, 8).unwrap();
        for x in 0..6 {
            for y in 0..8 {
                for z in 0..6 {
                    grid.set_block_id(x, y, z, BlockType::WOOD.id()).unwrap();
                    grid.set_instance_index(x, y, z, Some(3)).unwrap();
                }
            }
        }

        let flat = TerrainParameters {
            magnitude: 0.0,
            offset: 0.0,
            ..Default::default()
        };
        TerrainGenerator::new(&flat)
            .unwrap()
            .generate(&mut grid, GenerationMode::Sequential);

        assert_eq!(grid.solid_count(), 36);
        assert!(grid.voxels().iter().all(|voxel| voxel.instance_index.is_none()));
        for x in 0..6 {
            for z in 0..6 {
                assert_eq!(grid.column_height(x, z).unwrap(), Some(0));
            }
        }
    }

    #[test]
    fn parallel_matches_sequential() {
        let generator = TerrainGenerator::new(&params(7)).unwrap();
        let mut sequential = VoxelGrid::new(20, 10).unwrap();
        let mut parallel = VoxelGrid::new(20, 10).unwrap();
        generator.generate(&mut sequential, GenerationMode::Sequential);
        generator.generate(&mut parallel, GenerationMode::Parallel);
        assert_eq!(sequential, parallel);
    }
}
