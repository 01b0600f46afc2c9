//! Player Module
//!
//! The avatar's pose as the host hands it to the session controller. The
//! avatar stays fully owned and physically simulated by the host; while the
//! freecam is active the controller re-imposes a frozen horizontal position
//! and rotation onto this state every tick, leaving the vertical coordinate
//! to gravity.

use crate::physics::types::DVec3;

/// Mutable avatar pose, owned by the host and passed into the tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AvatarState {
    /// Feet position in world space.
    pub position: DVec3,
    /// Velocity in meters per tick.
    pub velocity: DVec3,
    /// Horizontal look angle in degrees.
    pub yaw: f32,
    /// Vertical look angle in degrees (positive looks down).
    pub pitch: f32,
}

impl AvatarState {
    /// Creates an avatar at rest at the given pose.
    pub fn new(position: DVec3, yaw: f32, pitch: f32) -> Self {
        Self {
            position,
            velocity: DVec3::ZERO,
            yaw,
            pitch,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_avatar_is_at_rest() {
        let avatar = AvatarState::new(DVec3::new(0.0, 64.0, 0.0), 90.0, -10.0);
        assert_eq!(avatar.velocity, DVec3::ZERO);
        assert_eq!(avatar.yaw, 90.0);
        assert_eq!(avatar.pitch, -10.0);
    }
}
