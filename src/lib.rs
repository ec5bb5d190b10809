#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_rust_codeblocks)]

//! # Voxel Terrain
//!
//! The world model and procedural generation pipeline of a voxel terrain viewer.
//!
//! A world is a dense `width x height x width` grid of typed cells. A seeded noise field
//! drives a column-based terrain generator that fills the grid, and an instance compactor
//! maps the solid cells onto a contiguous index range for an instanced-rendering backend.
//!
//! ## Key Modules
//!
//! * `config` - World configuration, defaults and JSON loading
//! * `core` - Concurrency primitives for publishing whole worlds
//! * `engine_state` - Terrain generation, the voxel grid, compaction and instance data
//! * `error` - Error types
//!
//! ## Usage
//!
//! ```rust
//! use voxel_terrain::config::WorldConfig;
//! use voxel_terrain::engine_state::voxels::world::World;
//!
//! let mut config = WorldConfig { width: 16, height: 16, ..Default::default() };
//! let world = World::new(config).unwrap();
//!
//! // Any parameter change regenerates the whole world.
//! config.terrain.seed = 42;
//! let published = world.regenerate(config).unwrap();
//!
//! for (index, position) in published.instances.iter() {
//!     assert_eq!(world.get_voxel(position.x, position.y, position.z).unwrap().instance_index, Some(index));
//! }
//! ```
//!
//! Rendering, camera, the parameter panel and the render loop are external
//! collaborators; this crate only produces the data they consume.

use log::{debug, info};

use config::WorldConfig;
use engine_state::voxels::world::generate;
use error::RunError;

pub mod config;
pub mod core;
pub mod engine_state;
pub mod error;

pub use config::GenerationMode;
pub use engine_state::terrain::TerrainParameters;
pub use engine_state::voxels::world::{GeneratedWorld, World};
pub use error::VoxelError;

/// Generates one world headlessly and logs a summary.
///
/// The first command line argument, if present, is the path of a JSON [`WorldConfig`];
/// otherwise the defaults are used. Logging goes to stdout at `info` unless `RUST_LOG`
/// says otherwise.
pub fn run() -> Result<(), RunError> {
    let mut log_builder = env_logger::Builder::new();
    log_builder
        .target(env_logger::Target::Stdout)
        .filter_level(log::LevelFilter::Info)
        .parse_env("RUST_LOG")
        .init();

    info!("Logger initialized");

    let config = match std::env::args().nth(1) {
        Some(path) => {
            info!("Loading world config from {}", path);
            WorldConfig::load(path)?
        }
        None => WorldConfig::default(),
    };

    debug!("World config:\n{}", config.to_json_string()?);

    let world = generate(&config)?;

    let mut lowest = i32::MAX;
    let mut highest = i32::MIN;
    for x in 0..config.width {
        for z in 0..config.width {
            if let Some(top) = world.grid.column_height(x, z)? {
                lowest = lowest.min(top);
                highest = highest.max(top);
            }
        }
    }

    info!(
        "World {}x{}x{}: {} instances, column tops {}..={}",
        config.width,
        config.height,
        config.width,
        world.instance_count(),
        lowest,
        highest
    );

    Ok(())
}
