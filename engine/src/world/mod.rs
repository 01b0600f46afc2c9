//! World Module
//!
//! The collision-query contract between the camera and whatever world the
//! host simulates, plus a simple block-grid implementation for tests and
//! the simulator binary.

pub mod grid;

pub use grid::BlockGrid;

use crate::physics::types::Aabb;

/// Read-only collision query over the host's world.
///
/// Implementations answer whether a box overlaps any solid geometry. The
/// query must be pure: no mutation, and the same box against the same world
/// state always gives the same answer.
pub trait CollisionWorld {
    /// Returns `true` if `bounds` overlaps nothing solid.
    fn is_space_empty(&self, bounds: &Aabb) -> bool;
}
