//! # Voxel Grid Module
//!
//! This module provides the [`VoxelGrid`], the dense 3D array of cells that owns all voxel
//! state for one generated world.
//!
//! ## Storage Layout
//!
//! The grid is a single flat `Vec<Voxel>` of `width * height * width` cells addressed by
//!
//! ```text
//! index(x, y, z) = x * height * width + y * width + z
//! ```
//!
//! so `x` is the outermost axis and `z` the innermost. Walking the buffer front to back
//! therefore visits cells in the raster order used by the instance compactor, and each
//! `x` value owns one contiguous slab of `height * width` cells. Terrain generation and
//! parallel compaction both split work along those slabs.
//!
//! ## Bounds
//!
//! [`VoxelGrid::in_bounds`] is the only place coordinates are range-checked. Every
//! accessor goes through it and reports [`VoxelError::OutOfBounds`] rather than handing
//! back a default cell.

use cgmath::Point3;

use crate::error::{ConfigIssue, VoxelError};

use super::block::{BlockTypeSize, InstanceIndex, Voxel};

pub mod grid_iteration;

use grid_iteration::SolidVoxelIterator;

/// Checks a pair of grid dimensions and returns the total cell count.
///
/// Width and height must be positive, and `width * height * width` must fit in the
/// [`InstanceIndex`] space since every cell could in principle become an instance.
pub fn validate_dimensions(width: i32, height: i32) -> Result<usize, VoxelError> {
    if width <= 0 {
        return Err(ConfigIssue::NonPositiveWidth(width).into());
    }
    if height <= 0 {
        return Err(ConfigIssue::NonPositiveHeight(height).into());
    }

    let w = u64::from(width.unsigned_abs());
    let h = u64::from(height.unsigned_abs());
    let cells = w * h * w;
    if cells > u64::from(InstanceIndex::MAX) {
        return Err(ConfigIssue::TooManyCells { width, height }.into());
    }

    usize::try_from(cells).map_err(|_| ConfigIssue::TooManyCells { width, height }.into())
}

/// A dense, fixed-shape 3D array of [`Voxel`] cells.
///
/// The shape is fixed at construction; resizing means allocating a new grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VoxelGrid {
    /// Extent of both horizontal axes (X and Z)
    width: i32,
    /// Extent of the vertical axis (Y)
    height: i32,
    /// Flat cell storage, see the module docs for the layout
    voxels: Vec<Voxel>,
}

impl VoxelGrid {
    /// Allocates a grid filled with air.
    ///
    /// # Arguments
    /// * `width` - Extent of the X and Z axes
    /// * `height` - Extent of the Y axis
    ///
    /// # Returns
    /// A grid of `width * height * width` air cells.
    ///
    /// # Errors
    /// [`VoxelError::InvalidConfiguration`] if the dimensions are rejected by
    /// [`validate_dimensions`]. Nothing is allocated in that case.
    pub fn new(width: i32, height: i32) -> Result<Self, VoxelError> {
        let cells = validate_dimensions(width, height)?;
        Ok(VoxelGrid {
            width,
            height,
            voxels: vec![Voxel::AIR; cells],
        })
    }

    /// Extent of the X and Z axes.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Extent of the Y axis.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Total number of cells, solid or not.
    pub fn len(&self) -> usize {
        self.voxels.len()
    }

    /// Always `false`; a grid has at least one cell.
    pub fn is_empty(&self) -> bool {
        self.voxels.is_empty()
    }

    /// Number of cells in one X slab (`height * width`).
    pub fn slab_len(&self) -> usize {
        self.height as usize * self.width as usize
    }

    /// Checks whether `(x, y, z)` lies inside the grid.
    ///
    /// True iff `0 <= x < width`, `0 <= y < height` and `0 <= z < width`.
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32, z: i32) -> bool {
        (0..self.width).contains(&x) && (0..self.height).contains(&y) && (0..self.width).contains(&z)
    }

    /// Flat buffer index of an in-bounds coordinate.
    #[inline]
    fn index(&self, x: i32, y: i32, z: i32) -> Result<usize, VoxelError> {
        if !self.in_bounds(x, y, z) {
            return Err(VoxelError::OutOfBounds {
                x,
                y,
                z,
                width: self.width,
                height: self.height,
            });
        }
        let (x, y, z) = (x as usize, y as usize, z as usize);
        let (width, height) = (self.width as usize, self.height as usize);
        Ok(x * height * width + y * width + z)
    }

    /// Gets the cell at `(x, y, z)`.
    ///
    /// # Arguments
    /// * `x` - X coordinate (0..width)
    /// * `y` - Y coordinate (0..height)
    /// * `z` - Z coordinate (0..width)
    ///
    /// # Returns
    /// A reference to the stored cell.
    ///
    /// # Errors
    /// [`VoxelError::OutOfBounds`] if the coordinate is outside the grid.
    pub fn get_voxel(&self, x: i32, y: i32, z: i32) -> Result<&Voxel, VoxelError> {
        let index = self.index(x, y, z)?;
        Ok(&self.voxels[index])
    }

    /// Same as [`VoxelGrid::get_voxel`], taking a point.
    pub fn get_voxel_at(&self, position: Point3<i32>) -> Result<&Voxel, VoxelError> {
        self.get_voxel(position.x, position.y, position.z)
    }

    /// Sets the material of the cell at `(x, y, z)`, leaving its instance index alone.
    ///
    /// # Arguments
    /// * `x`, `y`, `z` - Coordinate of the cell
    /// * `block_id` - The new material id, `0` for air
    ///
    /// # Errors
    /// [`VoxelError::OutOfBounds`] if the coordinate is outside the grid.
    pub fn set_block_id(
        &mut self,
        x: i32,
        y: i32,
        z: i32,
        block_id: BlockTypeSize,
    ) -> Result<(), VoxelError> {
        let index = self.index(x, y, z)?;
        self.voxels[index].block_id = block_id;
        Ok(())
    }

    /// Sets the instance index of the cell at `(x, y, z)`, leaving its material alone.
    ///
    /// # Arguments
    /// * `x`, `y`, `z` - Coordinate of the cell
    /// * `instance_index` - The new index, or `None` to clear it
    ///
    /// # Errors
    /// [`VoxelError::OutOfBounds`] if the coordinate is outside the grid.
    pub fn set_instance_index(
        &mut self,
        x: i32,
        y: i32,
        z: i32,
        instance_index: Option<InstanceIndex>,
    ) -> Result<(), VoxelError> {
        let index = self.index(x, y, z)?;
        self.voxels[index].instance_index = instance_index;
        Ok(())
    }

    /// Finds the top solid cell of a column.
    ///
    /// # Arguments
    /// * `x` - X coordinate of the column
    /// * `z` - Z coordinate of the column
    ///
    /// # Returns
    /// The highest solid Y, or `None` if the column holds no material.
    pub fn column_height(&self, x: i32, z: i32) -> Result<Option<i32>, VoxelError> {
        for y in (0..self.height).rev() {
            if self.get_voxel(x, y, z)?.is_solid() {
                return Ok(Some(y));
            }
        }
        Ok(None)
    }

    /// Counts the cells holding material.
    pub fn solid_count(&self) -> usize {
        self.voxels.iter().filter(|voxel| voxel.is_solid()).count()
    }

    /// Iterates the solid cells in raster order (X, then Y, then Z ascending).
    pub fn iter_solid(&self) -> SolidVoxelIterator<'_> {
        SolidVoxelIterator::new(self)
    }

    /// Raw cell storage in raster order.
    pub fn voxels(&self) -> &[Voxel] {
        &self.voxels
    }

    /// Mutable raw cell storage, for passes that rewrite whole slabs.
    pub(crate) fn voxels_mut(&mut self) -> &mut [Voxel] {
        &mut self.voxels
    }

    /// Coordinate of the cell stored at flat `index`.
    pub(crate) fn position_of(&self, index: usize) -> Point3<i32> {
        let width = self.width as usize;
        let slab = self.slab_len();
        let x = index / slab;
        let y = (index % slab) / width;
        let z = index % width;
        Point3::new(x as i32, y as i32, z as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine_state::voxels::block::block_type::BlockType;

    #[test]
    fn new_grid_is_all_air() {
        let grid = VoxelGrid::new(3, 2).unwrap();
        assert_eq!(grid.len(), 18);
        assert_eq!(grid.solid_count(), 0);
        assert!(grid.voxels().iter().all(|voxel| *voxel == Voxel::AIR));
    }

    #[test]
    fn rejects_non_positive_dimensions() {
        assert_eq!(
            VoxelGrid::new(0, 4),
            Err(VoxelError::InvalidConfiguration(ConfigIssue::NonPositiveWidth(0)))
        );
        assert_eq!(
            VoxelGrid::new(4, -1),
            Err(VoxelError::InvalidConfiguration(ConfigIssue::NonPositiveHeight(-1)))
        );
    }

    #[test]
    fn rejects_grids_larger_than_the_instance_space() {
        assert_eq!(
            validate_dimensions(100_000, 1_000),
            Err(VoxelError::InvalidConfiguration(ConfigIssue::TooManyCells {
                width: 100_000,
                height: 1_000,
            }))
        );
    }

    #[test]
    fn in_bounds_matches_the_half_open_ranges() {
        let grid = VoxelGrid::new(4, 2).unwrap();
        for x in -1..=4 {
            for y in -1..=2 {
                for z in -1..=4 {
                    let expected = (0..4).contains(&x) && (0..2).contains(&y) && (0..4).contains(&z);
                    assert_eq!(grid.in_bounds(x, y, z), expected, "({x}, {y}, {z})");
                    assert_eq!(grid.get_voxel(x, y, z).is_ok(), expected, "({x}, {y}, {z})");
                }
            }
        }
    }

    #[test]
    fn out_of_bounds_is_reported_not_defaulted() {
        let grid = VoxelGrid::new(4, 4).unwrap();
        assert_eq!(
            grid.get_voxel(4, 0, 0),
            Err(VoxelError::OutOfBounds {
                x: 4,
                y: 0,
                z: 0,
                width: 4,
                height: 4,
            })
        );
    }

    #[test]
    fn setters_touch_only_their_field() {
        let mut grid = VoxelGrid::new(2, 2).unwrap();
        grid.set_block_id(1, 1, 0, BlockType::DIRT.id()).unwrap();
        assert_eq!(grid.get_voxel(1, 1, 0).unwrap().instance_index, None);

        grid.set_instance_index(1, 1, 0, Some(7)).unwrap();
        let voxel = grid.get_voxel(1, 1, 0).unwrap();
        assert_eq!(voxel.block_id, BlockType::DIRT.id());
        assert_eq!(voxel.instance_index, Some(7));

        assert!(grid.set_block_id(2, 0, 0, 1).is_err());
        assert!(grid.set_instance_index(0, 2, 0, Some(0)).is_err());
    }

    #[test]
    fn flat_index_follows_x_y_z_order() {
        let grid = VoxelGrid::new(3, 2).unwrap();
        let mut expected = 0;
        for x in 0..3 {
            for y in 0..2 {
                for z in 0..3 {
                    assert_eq!(grid.index(x, y, z).unwrap(), expected);
                    assert_eq!(grid.position_of(expected), Point3::new(x, y, z));
                    expected += 1;
                }
            }
        }
    }

    #[test]
    fn column_height_finds_the_top_solid_cell() {
        let mut grid = VoxelGrid::new(2, 4).unwrap();
        assert_eq!(grid.column_height(0, 0).unwrap(), None);
        grid.set_block_id(0, 0, 0, 1).unwrap();
        grid.set_block_id(0, 2, 0, 1).unwrap();
        assert_eq!(grid.column_height(0, 0).unwrap(), Some(2));
        assert!(grid.column_height(2, 0).is_err());
    }
}
