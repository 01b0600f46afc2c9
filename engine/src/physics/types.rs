//! Physics type re-exports and shared geometry
//!
//! Camera positions, velocities, and collision volumes use double precision
//! (`DVec3`) so that coordinates far from the origin keep sub-millimeter
//! accuracy. Rotations stay `f32`. Both types come from glam.

pub use glam::{DVec3, Vec3};

/// Axis-aligned box in world space.
///
/// The camera's collision footprint is one of these, rebuilt from the camera
/// position every tick. Boxes are plain values; offsetting produces a new box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner (smallest x/y/z).
    pub min: DVec3,
    /// Maximum corner (largest x/y/z).
    pub max: DVec3,
}

impl Aabb {
    /// Creates a box from its two corners.
    pub fn new(min: DVec3, max: DVec3) -> Self {
        Self { min, max }
    }

    /// Builds an upright footprint box centered horizontally on `base`,
    /// with its bottom face at `base.y`.
    ///
    /// # Arguments
    ///
    /// * `base` - Feet position: horizontal center, vertical bottom
    /// * `width` - Horizontal extent on both X and Z
    /// * `height` - Vertical extent upward from `base.y`
    pub fn from_footprint(base: DVec3, width: f64, height: f64) -> Self {
        let half = width * 0.5;
        Self {
            min: DVec3::new(base.x - half, base.y, base.z - half),
            max: DVec3::new(base.x + half, base.y + height, base.z + half),
        }
    }

    /// Returns this box translated by `delta`.
    pub fn offset(&self, delta: DVec3) -> Self {
        Self {
            min: self.min + delta,
            max: self.max + delta,
        }
    }

    /// Center of the box.
    pub fn center(&self) -> DVec3 {
        (self.min + self.max) * 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footprint_is_centered_horizontally() {
        let base = DVec3::new(10.0, 64.0, -3.0);
        let bounds = Aabb::from_footprint(base, 0.6, 1.8);

        assert_eq!(bounds.min, DVec3::new(9.7, 64.0, -3.3));
        assert_eq!(bounds.max, DVec3::new(10.3, 65.8, -2.7));
        // Bottom face sits exactly at the base height
        assert_eq!(bounds.min.y, base.y);
    }

    #[test]
    fn test_offset_translates_both_corners() {
        let bounds = Aabb::new(DVec3::ZERO, DVec3::ONE);
        let moved = bounds.offset(DVec3::new(1.0, -2.0, 0.5));

        assert_eq!(moved.min, DVec3::new(1.0, -2.0, 0.5));
        assert_eq!(moved.max, DVec3::new(2.0, -1.0, 1.5));
        // Original box is untouched
        assert_eq!(bounds.min, DVec3::ZERO);
    }

    #[test]
    fn test_center() {
        let bounds = Aabb::new(DVec3::new(-1.0, 0.0, 2.0), DVec3::new(1.0, 4.0, 4.0));
        assert_eq!(bounds.center(), DVec3::new(0.0, 2.0, 3.0));
    }
}
