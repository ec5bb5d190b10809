//! Instance data handed to the rendering collaborator.
//!
//! The core never draws anything itself. After each generation it exposes the instance
//! table; this module turns that table into the per-instance records an instanced draw
//! call consumes, and into raw bytes for a GPU buffer write.

use bytemuck::NoUninit;
use cgmath::Point3;

/// Per-instance transform for one solid voxel.
///
/// Unit cubes are placed at the centre of their cell, matching a cube mesh spanning
/// `[-0.5, 0.5]` on every axis.
///
/// # Memory Layout
/// - Translation: 3x f32 (12 bytes)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceRaw {
    /// World-space translation of the instance
    pub translation: [f32; 3],
}

impl InstanceRaw {
    /// The transform for the voxel at grid coordinate `position`.
    pub fn at_voxel(position: Point3<i32>) -> Self {
        InstanceRaw {
            translation: [
                position.x as f32 + 0.5,
                position.y as f32 + 0.5,
                position.z as f32 + 0.5,
            ],
        }
    }
}

/// A trait for types that can be viewed as raw bytes for a buffer upload.
pub trait AsBytes {
    /// Returns the value's bytes.
    fn as_bytes(&self) -> &[u8];
}

impl<T> AsBytes for Vec<T>
where
    T: NoUninit + Send + Sync,
{
    fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self)
    }
}

impl<T> AsBytes for [T]
where
    T: NoUninit + Send + Sync,
{
    fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self)
    }
}
