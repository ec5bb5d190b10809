//! # Block Type Module
//!
//! This module defines the materials a voxel can hold. Block ids are stored in the grid
//! as a compact [`BlockTypeSize`]; id `0` is always air and every other id is solid.

use num_derive::FromPrimitive;
use num_traits::FromPrimitive;
use serde::{Deserialize, Serialize};

use super::BlockTypeSize;

/// Enumerates all block materials known to the world.
///
/// The discriminants are the on-grid block ids. `FromPrimitive` allows decoding an id
/// read back from the grid into the rich enum type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, FromPrimitive, Serialize, Deserialize)]
pub enum BlockType {
    /// An empty cell.
    AIR = 0,

    /// The fill material below the surface of a terrain column.
    DIRT = 1,

    /// The topmost solid cell of a terrain column.
    GRASS = 2,

    /// A wooden block.
    WOOD = 3,

    /// A plain white block, used for testing.
    WHITE = 4,
}

impl BlockType {
    /// Decodes a stored block id.
    ///
    /// # Returns
    /// `None` if `id` does not name a known material.
    pub fn from_id(id: BlockTypeSize) -> Option<Self> {
        FromPrimitive::from_u8(id)
    }

    /// The id written into the grid for this material.
    pub fn id(self) -> BlockTypeSize {
        self as BlockTypeSize
    }

    /// Whether cells of this material occupy space and receive a render instance.
    pub fn is_solid(self) -> bool {
        self != BlockType::AIR
    }
}
