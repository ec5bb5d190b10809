//! # Voxel Terrain Entry Point
//!
//! Generates a single world headlessly and logs a summary.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --release -- [world.json]
//! ```

fn main() {
    if let Err(error) = voxel_terrain::run() {
        eprintln!("voxel-terrain: {}", error);
        std::process::exit(1);
    }
}
