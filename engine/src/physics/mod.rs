//! Physics module for the freecam engine
//!
//! Custom, dependency-free movement physics for the virtual camera: shared
//! geometry types and axis-separated solid-geometry collision. The world
//! itself is abstract; everything here works through an emptiness query.
//!
//! # Unit System
//!
//! **1 unit = 1 meter**, velocities in meters per tick (the simulation is
//! fixed-step, so per-tick velocities stand in for m/s).
//!
//! # Submodules
//!
//! - [`types`] - Math types (`DVec3`, `Vec3` from glam) and the [`types::Aabb`] box
//! - [`collision`] - Axis-separated swept-AABB movement resolution

pub mod collision;
pub mod types;

// Re-export commonly used items at the physics module level
pub use collision::resolve_movement;
pub use types::{Aabb, DVec3, Vec3};
