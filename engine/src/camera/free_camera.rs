//! Free Camera Module
//!
//! The detached flying camera: position, rotation, and velocity with
//! per-tick physics. Movement is inertial (exponential smoothing toward a
//! target velocity), collides with solid geometry through the axis-separated
//! resolver, and is tethered to the avatar by a soft sphere barrier.
//!
//! Angles are in degrees: yaw 0 faces +Z, yaw grows turning right, and
//! positive pitch looks down. Positions are double precision; see
//! [`crate::physics::types`].
//!
//! The camera is created when a freecam session activates, ticked once per
//! simulation step, and dropped on deactivation. Rendering at a higher rate
//! than the tick rate reads [`FreeCamera::get_interpolated_position`].

use crate::config::FreecamConfig;
use crate::input::FlightKeys;
use crate::physics::collision::resolve_movement;
use crate::physics::types::{Aabb, DVec3};
use crate::world::CollisionWorld;

/// Camera collision footprint width (matches a player hitbox).
const CAMERA_WIDTH: f64 = 0.6;
/// Camera collision footprint height (matches a player hitbox).
const CAMERA_HEIGHT: f64 = 1.8;

/// Per-tick blend factor toward the target velocity.
const ACCELERATION_FACTOR: f64 = 0.5;
/// Velocities below this squared magnitude skip collision entirely.
const MIN_VELOCITY_THRESHOLD: f64 = 1e-5;

/// Mouse sensitivity curve: slope applied to the host sensitivity setting.
const MOUSE_SENSITIVITY_BASE: f64 = 0.6;
/// Mouse sensitivity curve: offset applied to the host sensitivity setting.
const MOUSE_SENSITIVITY_OFFSET: f64 = 0.2;
/// Multiplier applied to the cubed sensitivity.
const MOUSE_MULTIPLIER: f64 = 8.0;
/// Final scale from adjusted cursor delta to degrees.
const MOUSE_SMOOTHING: f64 = 0.15;

/// Pitch limit in degrees (straight down).
const MAX_PITCH: f32 = 90.0;
/// Pitch limit in degrees (straight up).
const MIN_PITCH: f32 = -90.0;

/// The free-flying virtual camera.
///
/// Velocity never jumps except at creation or an explicit reset: every tick
/// it is blended halfway toward the input-derived target, which gives
/// inertial starts and smooth deceleration to rest.
#[derive(Debug, Clone)]
pub struct FreeCamera {
    /// Current position in world space.
    pub position: DVec3,
    /// Position at the start of this tick, for render interpolation.
    /// Updated exactly once per tick, before any movement is applied.
    prev_position: DVec3,
    /// Horizontal look angle in degrees. Unrestricted.
    pub yaw: f32,
    /// Vertical look angle in degrees, clamped to `[-90, 90]`.
    pub pitch: f32,
    /// Current velocity in meters per tick.
    pub velocity: DVec3,
}

impl FreeCamera {
    /// Creates a camera at the given pose with zero velocity.
    ///
    /// Typically seeded from the avatar's pose at session activation.
    pub fn new(position: DVec3, yaw: f32, pitch: f32) -> Self {
        Self {
            position,
            prev_position: position,
            yaw,
            pitch: pitch.clamp(MIN_PITCH, MAX_PITCH),
            velocity: DVec3::ZERO,
        }
    }

    /// Updates camera rotation from a cursor delta.
    ///
    /// The host sensitivity setting is shaped by the conventional
    /// first-person cubic curve rather than a linear scale:
    /// `s = sensitivity * 0.6 + 0.2`, then `multiplier = s³ * 8.0`.
    /// Pitch is clamped to `[-90, 90]` after every update.
    ///
    /// Driven at pointer-event frequency, independent of the tick rate.
    ///
    /// # Arguments
    ///
    /// * `cursor_delta_x` - Horizontal cursor movement (positive = right)
    /// * `cursor_delta_y` - Vertical cursor movement (positive = down)
    /// * `mouse_sensitivity` - Host sensitivity setting, pre-clamped to `[0.1, 3.0]`
    pub fn change_look_direction(
        &mut self,
        cursor_delta_x: f64,
        cursor_delta_y: f64,
        mouse_sensitivity: f32,
    ) {
        let sensitivity =
            f64::from(mouse_sensitivity) * MOUSE_SENSITIVITY_BASE + MOUSE_SENSITIVITY_OFFSET;
        let multiplier = sensitivity * sensitivity * sensitivity * MOUSE_MULTIPLIER;

        self.yaw += (cursor_delta_x * multiplier * MOUSE_SMOOTHING) as f32;
        self.pitch += (cursor_delta_y * multiplier * MOUSE_SMOOTHING) as f32;

        // Clamp pitch to prevent camera flip
        self.pitch = self.pitch.clamp(MIN_PITCH, MAX_PITCH);
    }

    /// Advances the camera by one simulation step.
    ///
    /// Order matters: the previous position is banked first (interpolation
    /// anchor), then velocity eases toward the input target, then solid
    /// geometry clips the move, and finally the sphere barrier against
    /// `anchor` clamps position and strips outward velocity. The barrier is
    /// layered on top of block collision, not merged with it: it is a soft
    /// global constraint while the resolver handles local geometry.
    ///
    /// # Arguments
    ///
    /// * `keys` - Held flight keys for this tick
    /// * `world` - Collision query over the host's world
    /// * `anchor` - The avatar position the camera is tethered to
    /// * `config` - Validated tunables
    pub fn tick<W>(&mut self, keys: &FlightKeys, world: &W, anchor: DVec3, config: &FreecamConfig)
    where
        W: CollisionWorld + ?Sized,
    {
        self.prev_position = self.position;

        let target = self.target_velocity(keys, config);
        self.velocity = self.velocity.lerp(target, ACCELERATION_FACTOR);

        if self.velocity.length_squared() >= MIN_VELOCITY_THRESHOLD {
            let bounds = Aabb::from_footprint(self.position, CAMERA_WIDTH, CAMERA_HEIGHT);
            self.position = resolve_movement(self.position, self.velocity, bounds, |test| {
                world.is_space_empty(test)
            });
        }

        self.apply_distance_limit(anchor, f64::from(config.max_distance));
    }

    /// Target velocity for the current input state.
    ///
    /// Returns zero when no directional key is held so the smoothing in
    /// [`FreeCamera::tick`] decelerates to rest instead of stopping dead.
    fn target_velocity(&self, keys: &FlightKeys, config: &FreecamConfig) -> DVec3 {
        let forward = f64::from(keys.forward_axis());
        let strafe = f64::from(keys.strafe_axis());
        let vertical = f64::from(keys.vertical_axis());

        if forward == 0.0 && strafe == 0.0 && vertical == 0.0 {
            return DVec3::ZERO;
        }

        let mut speed = f64::from(config.move_speed);
        if keys.is_sprinting() {
            speed *= f64::from(config.sprint_multiplier);
        }

        let horizontal = self.horizontal_motion(forward, strafe, speed);
        horizontal + DVec3::new(0.0, vertical * speed, 0.0)
    }

    /// Horizontal motion from the forward/strafe pair.
    ///
    /// Direction comes from yaw alone. Pitch deliberately plays no part in
    /// translation, so holding forward moves level regardless of where the
    /// camera looks; vertical travel is the separate up/down axis.
    fn horizontal_motion(&self, forward: f64, strafe: f64, speed: f64) -> DVec3 {
        let mut forward = forward;
        let mut strafe = strafe;

        // Diagonal input must not outrun a single axis
        let magnitude = (forward * forward + strafe * strafe).sqrt();
        if magnitude > 1.0 {
            forward /= magnitude;
            strafe /= magnitude;
        }

        let yaw = f64::from(self.yaw).to_radians();
        let forward_dir = DVec3::new(-yaw.sin(), 0.0, yaw.cos());
        let left_dir = DVec3::new(yaw.cos(), 0.0, yaw.sin());

        (forward_dir * forward + left_dir * strafe) * speed
    }

    /// Sphere barrier: keeps the camera within `max_distance` of `anchor`.
    ///
    /// Outside the sphere the position is clamped to the surface and only
    /// the outward-pointing velocity component is removed; inward and
    /// tangential velocity pass through, so the camera slides along the
    /// inside of the sphere instead of stopping dead or snapping back.
    fn apply_distance_limit(&mut self, anchor: DVec3, max_distance: f64) {
        let offset = self.position - anchor;
        let distance = offset.length();
        if distance <= max_distance {
            return;
        }

        // distance > max_distance >= 0, so the division is safe
        let outward = offset / distance;
        self.position = anchor + outward * max_distance;

        let outward_speed = self.velocity.dot(outward);
        if outward_speed > 0.0 {
            self.velocity -= outward * outward_speed;
        }
    }

    /// Authoritative (un-interpolated) position.
    #[inline]
    pub fn get_position(&self) -> DVec3 {
        self.position
    }

    /// Position interpolated between the previous and current tick.
    ///
    /// `tick_fraction` is the render frame's progress through the current
    /// simulation step, in `[0, 1]`: 0 gives the previous tick's position,
    /// 1 the current one, linearly per axis in between.
    pub fn get_interpolated_position(&self, tick_fraction: f64) -> DVec3 {
        self.prev_position.lerp(self.position, tick_fraction)
    }

    /// Teleports the camera, resetting interpolation and momentum so the
    /// render position cannot sweep across the jump.
    pub fn set_position(&mut self, position: DVec3) {
        self.position = position;
        self.prev_position = position;
        self.velocity = DVec3::ZERO;
    }

    /// Current yaw in degrees.
    #[inline]
    pub fn get_yaw(&self) -> f32 {
        self.yaw
    }

    /// Current pitch in degrees.
    #[inline]
    pub fn get_pitch(&self) -> f32 {
        self.pitch
    }

    /// Sets pitch directly, clamped to `[-90, 90]`.
    pub fn set_pitch(&mut self, pitch: f32) {
        self.pitch = pitch.clamp(MIN_PITCH, MAX_PITCH);
    }

    /// Current velocity in meters per tick.
    #[inline]
    pub fn get_velocity(&self) -> DVec3 {
        self.velocity
    }

    /// Unit look-direction vector from yaw and pitch.
    pub fn get_forward(&self) -> DVec3 {
        let yaw = f64::from(self.yaw).to_radians();
        let pitch = f64::from(self.pitch).to_radians();
        DVec3::new(
            -yaw.sin() * pitch.cos(),
            -pitch.sin(),
            yaw.cos() * pitch.cos(),
        )
    }
}
