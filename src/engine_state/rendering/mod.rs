//! Outbound interface to the rendering collaborator.
//!
//! Scene graph, camera, lighting and draw calls live outside this crate. What the
//! renderer needs from a generated world is the instance count, to size its instance
//! buffer, and one transform per instance in index order. Both come from
//! [`crate::engine_state::voxels::instances::InstanceTable`]; this module defines the
//! transform record and its byte view.

pub mod instance;

pub use instance::{AsBytes, InstanceRaw};
