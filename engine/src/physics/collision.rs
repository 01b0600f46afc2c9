//! Collision resolution module
//!
//! Axis-separated swept-AABB movement against an abstract world query.
//! A 3D motion vector is resolved as three sequential 1D moves (X, then Y,
//! then Z); an axis whose destination is occupied is simply discarded, so a
//! diagonal move into a wall keeps its wall-parallel component and the mover
//! slides along the obstruction.
//!
//! # Example
//!
//! ```ignore
//! use freecam_engine::physics::{Aabb, resolve_movement};
//! use glam::DVec3;
//!
//! let bounds = Aabb::from_footprint(DVec3::ZERO, 0.6, 1.8);
//! let resolved = resolve_movement(DVec3::ZERO, DVec3::new(0.2, 0.0, 0.1), bounds, |_| true);
//! assert_eq!(resolved, DVec3::new(0.2, 0.0, 0.1));
//! ```

use crate::physics::types::{Aabb, DVec3};

/// Motion below this squared magnitude is treated as noise: resolving it
/// would waste world queries and accumulate float jitter.
const MIN_MOVEMENT_THRESHOLD: f64 = 1e-4;

/// Moves `position` along `motion`, discarding any axis component whose
/// destination space is occupied.
///
/// Axes are tested in fixed order X, Y, Z. Each test offsets a running box
/// by the axis-isolated motion component and asks `is_space_empty` about the
/// result; on success both the returned position and the running box advance,
/// on failure neither does. Advancing the box only on success means each
/// later axis is tested from wherever the mover actually ended up.
///
/// Pure function: its only effect is invoking the supplied emptiness query.
///
/// # Arguments
///
/// * `position` - Starting position
/// * `motion` - Desired movement vector for this tick
/// * `bounds` - Collision box at the starting position
/// * `is_space_empty` - World query; `true` means the box overlaps nothing solid
///
/// # Returns
///
/// The final position after per-axis collision resolution.
pub fn resolve_movement<F>(position: DVec3, motion: DVec3, bounds: Aabb, is_space_empty: F) -> DVec3
where
    F: Fn(&Aabb) -> bool,
{
    if motion.length_squared() < MIN_MOVEMENT_THRESHOLD {
        return position;
    }

    let mut position = position;
    let mut bounds = bounds;

    let steps = [
        DVec3::new(motion.x, 0.0, 0.0),
        DVec3::new(0.0, motion.y, 0.0),
        DVec3::new(0.0, 0.0, motion.z),
    ];

    for step in steps {
        let test = bounds.offset(step);
        if is_space_empty(&test) {
            position += step;
            bounds = test;
        }
    }

    position
}
