//! # Block Module
//!
//! This module provides the per-cell data stored in the voxel grid: the material id and
//! the optional back-reference into the render instance buffer.

use block_type::BlockType;

pub mod block_type;

/// The underlying integer type used to represent block ids in memory.
pub type BlockTypeSize = u8;

/// The integer type of a render instance index.
pub type InstanceIndex = u32;

/// A single cell of the voxel grid.
///
/// `block_id == 0` means air. `instance_index` is `None` until the instance compactor
/// assigns one; after a completed compaction pass it is `Some` for exactly the solid
/// cells.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Voxel {
    /// The material of this cell, encoded as a [`BlockTypeSize`].
    pub block_id: BlockTypeSize,
    /// Position of this cell in the instance table, if it has been compacted.
    pub instance_index: Option<InstanceIndex>,
}

impl Voxel {
    /// An empty cell with no instance assigned.
    pub const AIR: Voxel = Voxel {
        block_id: 0,
        instance_index: None,
    };

    /// Creates an uncompacted cell of the given material.
    pub fn new(block_type: BlockType) -> Self {
        Voxel {
            block_id: block_type.id(),
            instance_index: None,
        }
    }

    /// Whether the cell holds any material.
    #[inline]
    pub fn is_solid(&self) -> bool {
        self.block_id != 0
    }

    /// The decoded material, or `None` for an id outside [`BlockType`].
    pub fn block_type(&self) -> Option<BlockType> {
        BlockType::from_id(self.block_id)
    }
}
