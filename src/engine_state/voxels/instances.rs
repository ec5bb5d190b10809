//! # Instance Compaction Module
//!
//! Maps the sparse set of solid voxels onto the dense index space `[0, count)` used by
//! instanced rendering.
//!
//! ## Ordering
//!
//! Cells are visited X ascending, then Y, then Z. The N-th solid cell in that order
//! receives instance index N and is recorded at position N of the [`InstanceTable`].
//! The renderer's notion of "instance N" relies on this order staying fixed, so
//! regenerating unchanged geometry reproduces identical assignments.
//!
//! ## Parallel compaction
//!
//! The running counter is a sequential dependency. [`GenerationMode::Parallel`] breaks it
//! with two passes over the X slabs of the grid: count the solid cells of each slab, turn
//! the counts into starting offsets with an exclusive prefix sum, then assign indices
//! within every slab from its own offset. The result is identical to the sequential scan.

use cgmath::Point3;
use log::debug;
use rayon::prelude::*;
use web_time::Instant;

use crate::config::GenerationMode;
use crate::engine_state::rendering::instance::InstanceRaw;

use super::{
    block::{InstanceIndex, Voxel},
    grid::VoxelGrid,
};

/// The ordered table of instance positions produced by [`compact`].
///
/// Entry `i` is the coordinate of the voxel whose `instance_index` is `Some(i)`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InstanceTable {
    positions: Vec<Point3<i32>>,
}

impl InstanceTable {
    /// Number of instances, equal to the number of solid voxels at compaction time.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether the compacted grid had no solid voxels.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Coordinate of instance `index`.
    pub fn get(&self, index: InstanceIndex) -> Option<Point3<i32>> {
        self.positions.get(index as usize).copied()
    }

    /// All positions in instance index order.
    pub fn positions(&self) -> &[Point3<i32>] {
        &self.positions
    }

    /// Iterates `(instance_index, position)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (InstanceIndex, Point3<i32>)> + '_ {
        self.positions
            .iter()
            .enumerate()
            .map(|(index, position)| (index as InstanceIndex, *position))
    }

    /// Per-instance transforms ready for upload into an instance buffer.
    pub fn instance_data(&self) -> Vec<InstanceRaw> {
        self.positions
            .iter()
            .map(|position| InstanceRaw::at_voxel(*position))
            .collect()
    }
}

/// Assigns instance indices to every solid voxel of `grid` and builds the matching table.
///
/// Every empty voxel has its instance index cleared, so a grid compacted twice ends up
/// with the same assignments as one compacted once.
///
/// # Arguments
/// * `grid` - The grid to compact; instance indices are written back into it
/// * `mode` - Whether to run the sequential scan or the two-pass parallel scheme
///
/// # Returns
/// The instance table, whose length equals the number of solid voxels.
pub fn compact(grid: &mut VoxelGrid, mode: GenerationMode) -> InstanceTable {
    let start = Instant::now();
    let width = grid.width();
    let height = grid.height();
    let slab_len = grid.slab_len();

    // Upper bound: every cell solid.
    let mut positions = Vec::with_capacity(grid.len());
    let voxels = grid.voxels_mut();

    match mode {
        GenerationMode::Sequential => {
            let mut next_index: InstanceIndex = 0;
            for (x, slab) in voxels.chunks_mut(slab_len).enumerate() {
                next_index =
                    assign_slab(x as i32, slab, next_index, width, height, &mut positions);
            }
        }
        GenerationMode::Parallel => {
            let counts: Vec<InstanceIndex> = voxels
                .par_chunks(slab_len)
                .map(|slab| slab.iter().filter(|voxel| voxel.is_solid()).count() as InstanceIndex)
                .collect();

            let offsets: Vec<InstanceIndex> = counts
                .iter()
                .scan(0, |running, count| {
                    let offset = *running;
                    *running += count;
                    Some(offset)
                })
                .collect();

            let slab_positions: Vec<Vec<Point3<i32>>> = voxels
                .par_chunks_mut(slab_len)
                .zip(offsets.par_iter())
                .enumerate()
                .map(|(x, (slab, &offset))| {
                    let mut local = Vec::new();
                    assign_slab(x as i32, slab, offset, width, height, &mut local);
                    local
                })
                .collect();

            for local in slab_positions {
                positions.extend(local);
            }
        }
    }

    debug!(
        "Compacted {} instances ({:?}) in {:?}",
        positions.len(),
        mode,
        start.elapsed()
    );

    InstanceTable { positions }
}

/// Assigns consecutive indices from `first_index` to the solid cells of slab `x`,
/// appending their coordinates to `positions`. Returns the next unused index.
fn assign_slab(
    x: i32,
    slab: &mut [Voxel],
    first_index: InstanceIndex,
    width: i32,
    height: i32,
    positions: &mut Vec<Point3<i32>>,
) -> InstanceIndex {
    let mut next_index = first_index;
    let row = width as usize;
    for y in 0..height {
        for z in 0..width {
            let voxel = &mut slab[y as usize * row + z as usize];
            if voxel.is_solid() {
                voxel.instance_index = Some(next_index);
                positions.push(Point3::new(x, y, z));
                next_index += 1;
            } else {
                voxel.instance_index = None;
            }
        }
    }
    next_index
}
