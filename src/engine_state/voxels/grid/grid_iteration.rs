//! # Grid Iteration Module
//!
//! An iterator over the solid cells of a [`VoxelGrid`] in raster order, skipping air.
//! Since the flat storage is already laid out in raster order, the iterator is a
//! single forward scan over the buffer.

use cgmath::Point3;

use crate::engine_state::voxels::block::Voxel;

use super::VoxelGrid;

/// Iterates `(position, voxel)` pairs for every solid cell of a grid.
///
/// Positions are yielded with X outermost and Z innermost, the same order in which
/// the instance compactor assigns indices.
pub struct SolidVoxelIterator<'a> {
    /// The grid being scanned
    grid_ref: &'a VoxelGrid,
    /// Next flat index to inspect
    current_offset: usize,
}

impl<'a> SolidVoxelIterator<'a> {
    /// Creates an iterator positioned before the first cell of `grid_ref`.
    pub fn new(grid_ref: &'a VoxelGrid) -> Self {
        SolidVoxelIterator {
            grid_ref,
            current_offset: 0,
        }
    }
}

impl<'a> Iterator for SolidVoxelIterator<'a> {
    type Item = (Point3<i32>, &'a Voxel);

    fn next(&mut self) -> Option<Self::Item> {
        let voxels = self.grid_ref.voxels();
        while self.current_offset < voxels.len() {
            let offset = self.current_offset;
            self.current_offset += 1;

            let voxel = &voxels[offset];
            if voxel.is_solid() {
                return Some((self.grid_ref.position_of(offset), voxel));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.grid_ref.len() - self.current_offset))
    }
}
