//! # Core Module
//!
//! Concurrency primitives shared by the rest of the crate.
//!
//! ## Key Components
//! - `MtSnapshot`: Thread-safe slot that publishes whole immutable versions of a value
//!
//! ## Usage
//! ```rust
//! use voxel_terrain::core::MtSnapshot;
//!
//! let counter = MtSnapshot::new(0);
//! counter.publish(*counter.snapshot() + 1);
//! assert_eq!(*counter.snapshot(), 1);
//! ```

pub mod mt_snapshot;

pub use mt_snapshot::MtSnapshot;
