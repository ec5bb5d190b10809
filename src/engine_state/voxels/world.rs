//! # World Module
//!
//! This module ties terrain generation and instance compaction together into the single
//! regeneration entry point, and owns the world that is currently published to readers.
//!
//! ## Regeneration
//!
//! [`generate`] is a pure function of a [`WorldConfig`]: it validates the config, allocates
//! a fresh grid, writes terrain, compacts instances and returns the finished
//! [`GeneratedWorld`]. Nothing is shared with any previous world.
//!
//! [`World`] keeps the latest result in an [`MtSnapshot`]. [`World::regenerate`] builds the
//! replacement in full before swapping it in, so readers observe either the old world or
//! the new one. A rejected config leaves the published world untouched.

use std::sync::Arc;

use cgmath::Point3;
use log::{info, warn};
use web_time::Instant;

use crate::config::WorldConfig;
use crate::core::MtSnapshot;
use crate::engine_state::terrain::TerrainGenerator;
use crate::error::VoxelError;

use super::{
    block::Voxel,
    grid::VoxelGrid,
    instances::{compact, InstanceTable},
};

/// A fully generated and compacted world.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratedWorld {
    /// The configuration this world was generated from
    pub config: WorldConfig,
    /// Cell data, with instance indices assigned
    pub grid: VoxelGrid,
    /// Instance positions in index order
    pub instances: InstanceTable,
}

impl GeneratedWorld {
    /// Gets the cell at `(x, y, z)`.
    pub fn get_voxel(&self, x: i32, y: i32, z: i32) -> Result<&Voxel, VoxelError> {
        self.grid.get_voxel(x, y, z)
    }

    /// Number of render instances, equal to the number of solid voxels.
    pub fn instance_count(&self) -> usize {
        self.instances.len()
    }

    /// Instance positions in index order.
    pub fn instance_positions(&self) -> &[Point3<i32>] {
        self.instances.positions()
    }
}

/// Generates a complete world from `config`.
///
/// # Arguments
/// * `config` - Dimensions, terrain parameters and generation mode
///
/// # Returns
/// The generated grid together with its instance table.
///
/// # Errors
/// [`VoxelError::InvalidConfiguration`] if `config` is rejected. Validation happens
/// before any allocation or generation work.
///
/// # Examples
///
/// ```
/// use voxel_terrain::config::WorldConfig;
/// use voxel_terrain::engine_state::voxels::world::generate;
///
/// let config = WorldConfig { width: 8, height: 8, ..Default::default() };
/// let world = generate(&config).unwrap();
/// assert_eq!(world.instance_count(), world.grid.solid_count());
/// ```
pub fn generate(config: &WorldConfig) -> Result<GeneratedWorld, VoxelError> {
    config.validate()?;
    let start = Instant::now();

    let generator = TerrainGenerator::new(&config.terrain)?;
    let mut grid = VoxelGrid::new(config.width, config.height)?;
    generator.generate(&mut grid, config.generation_mode);
    let instances = compact(&mut grid, config.generation_mode);

    info!(
        "Generated {}x{}x{} world (seed {}) with {} instances in {:?}",
        config.width,
        config.height,
        config.width,
        generator.params().seed,
        instances.len(),
        start.elapsed()
    );

    Ok(GeneratedWorld {
        config: *config,
        grid,
        instances,
    })
}

/// Owner of the currently published world.
///
/// Cloning a `World` yields another handle to the same published slot, so a renderer
/// thread can hold one while the configuration side regenerates through another.
///
/// # Examples
///
/// ```
/// use voxel_terrain::config::WorldConfig;
/// use voxel_terrain::engine_state::voxels::world::World;
///
/// let world = World::new(WorldConfig { width: 8, height: 8, ..Default::default() }).unwrap();
/// let before = world.snapshot();
///
/// let mut next = world.config();
/// next.terrain.seed = 5;
/// world.regenerate(next).unwrap();
///
/// assert_eq!(before.config.terrain.seed, 0);
/// assert_eq!(world.config().terrain.seed, 5);
/// ```
#[derive(Clone)]
pub struct World {
    /// The latest successfully generated world
    published: MtSnapshot<GeneratedWorld>,
}

impl World {
    /// Generates the initial world from `config`.
    pub fn new(config: WorldConfig) -> Result<Self, VoxelError> {
        let initial = generate(&config)?;
        Ok(World {
            published: MtSnapshot::new(initial),
        })
    }

    /// Regenerates the whole world from `config` and publishes it.
    ///
    /// On error nothing changes: the previous world stays published.
    ///
    /// # Arguments
    /// * `config` - The configuration of the replacement world
    ///
    /// # Returns
    /// The world built from `config`, even if another thread publishes right after.
    pub fn regenerate(&self, config: WorldConfig) -> Result<Arc<GeneratedWorld>, VoxelError> {
        let next = generate(&config).map_err(|error| {
            warn!("Rejected world regeneration: {}", error);
            error
        })?;
        Ok(self.published.publish(next))
    }

    /// The currently published world.
    pub fn snapshot(&self) -> Arc<GeneratedWorld> {
        self.published.snapshot()
    }

    /// The configuration of the currently published world.
    pub fn config(&self) -> WorldConfig {
        self.published.snapshot().config
    }

    /// Copies the cell at `(x, y, z)` out of the currently published world.
    pub fn get_voxel(&self, x: i32, y: i32, z: i32) -> Result<Voxel, VoxelError> {
        self.published.snapshot().get_voxel(x, y, z).copied()
    }

    /// Instance count of the currently published world.
    pub fn instance_count(&self) -> usize {
        self.published.snapshot().instance_count()
    }
}
