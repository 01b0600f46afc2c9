//! Freecam Session Controller Module
//!
//! The toggle state machine that coordinates the camera lifecycle with
//! avatar freezing. Two states, `Disabled` and `Enabled`, transition only
//! through [`FreecamController::toggle`]. While enabled the controller owns
//! the [`FreeCamera`], re-imposes the frozen avatar pose every tick, and is
//! the single source of truth for "is freecam active".
//!
//! Host interception points (suppressing outgoing avatar movement,
//! suppressing avatar action inputs, overriding the render camera's pose)
//! are deliberately not implemented here: hosts gate those behaviors on the
//! cheap, side-effect-free queries [`FreecamController::is_enabled`] and
//! [`FreecamController::camera`]. The only host surface the controller calls
//! into is the narrow [`SessionHost`] contract used during transitions.

use crate::camera::free_camera::FreeCamera;
use crate::config::FreecamConfig;
use crate::input::FlightKeys;
use crate::player::AvatarState;
use crate::world::CollisionWorld;

/// Confirmation shown when a session starts.
pub const MSG_ENABLED: &str = "[Freecam] enabled - toggle again to return";
/// Confirmation shown when a session ends.
pub const MSG_DISABLED: &str = "[Freecam] disabled";

/// Host camera perspective, saved on activation and restored on deactivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Camera at the avatar's eyes.
    #[default]
    FirstPerson,
    /// Camera behind the avatar.
    ThirdPersonBack,
    /// Camera in front of the avatar, facing it.
    ThirdPersonFront,
}

/// Narrow host contract used during session transitions.
///
/// Covers exactly what activation and deactivation need from the host:
/// reading/switching the view perspective and delivering a short user-facing
/// confirmation. Everything else the host does in reaction to a session
/// (input suppression, pose override) is keyed off the controller's queries.
pub trait SessionHost {
    /// Current camera perspective.
    fn view_mode(&self) -> ViewMode;

    /// Switches the camera perspective.
    fn set_view_mode(&mut self, mode: ViewMode);

    /// Shows a short status message to the user.
    fn notify(&mut self, message: &str);
}

/// Freecam session state machine.
///
/// One controller exists per host session; it is handed to the tick entry
/// point explicitly rather than living in a global. The `camera` is `Some`
/// exactly while the session is enabled. The frozen pose fields are only
/// meaningful while enabled and hold the avatar pose captured at activation.
#[derive(Debug, Default)]
pub struct FreecamController {
    enabled: bool,
    camera: Option<FreeCamera>,
    frozen_x: f64,
    frozen_z: f64,
    frozen_yaw: f32,
    frozen_pitch: f32,
    saved_view_mode: Option<ViewMode>,
}

impl FreecamController {
    /// Creates a controller in the `Disabled` state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips the session on or off.
    ///
    /// With no avatar context (avatar or world missing on the host side)
    /// this logs a warning and leaves the state untouched.
    pub fn toggle<H: SessionHost>(&mut self, avatar: Option<&AvatarState>, host: &mut H) {
        let Some(avatar) = avatar else {
            log::warn!("cannot toggle freecam: avatar or world is unavailable");
            return;
        };

        self.enabled = !self.enabled;

        if self.enabled {
            self.activate(avatar, host);
        } else {
            self.deactivate(host);
        }
    }

    /// Starts a session: captures the frozen pose, seeds the camera from the
    /// avatar, and switches the host to a third-person view so the frozen
    /// avatar stays visible.
    fn activate<H: SessionHost>(&mut self, avatar: &AvatarState, host: &mut H) {
        // Freeze only horizontal position; Y stays free so gravity keeps
        // acting on the avatar
        self.frozen_x = avatar.position.x;
        self.frozen_z = avatar.position.z;
        self.frozen_yaw = avatar.yaw;
        self.frozen_pitch = avatar.pitch;

        self.camera = Some(FreeCamera::new(avatar.position, avatar.yaw, avatar.pitch));

        self.saved_view_mode = Some(host.view_mode());
        host.set_view_mode(ViewMode::ThirdPersonBack);
        host.notify(MSG_ENABLED);

        log::info!(
            "freecam enabled at x={:.2}, z={:.2}",
            self.frozen_x,
            self.frozen_z
        );
    }

    /// Ends a session: drops the camera and restores the saved perspective.
    fn deactivate<H: SessionHost>(&mut self, host: &mut H) {
        self.camera = None;

        if let Some(mode) = self.saved_view_mode.take() {
            host.set_view_mode(mode);
        }
        host.notify(MSG_DISABLED);

        log::info!("freecam disabled");
    }

    /// Advances the session by one simulation step.
    ///
    /// No-op while disabled. Otherwise re-imposes the frozen pose onto the
    /// avatar (horizontal position and rotation only; the vertical
    /// coordinate and vertical velocity stay live so the avatar keeps
    /// falling), then ticks the camera against the re-frozen avatar
    /// position as its tether anchor.
    pub fn tick<W>(
        &mut self,
        avatar: &mut AvatarState,
        keys: &FlightKeys,
        world: &W,
        config: &FreecamConfig,
    ) where
        W: CollisionWorld + ?Sized,
    {
        if !self.enabled {
            return;
        }
        let Some(camera) = self.camera.as_mut() else {
            return;
        };

        // Restore frozen X/Z, keep current Y
        avatar.position.x = self.frozen_x;
        avatar.position.z = self.frozen_z;

        // Cancel horizontal velocity, preserve vertical (gravity)
        avatar.velocity.x = 0.0;
        avatar.velocity.z = 0.0;

        // Freeze rotation
        avatar.yaw = self.frozen_yaw;
        avatar.pitch = self.frozen_pitch;

        camera.tick(keys, world, avatar.position, config);
    }

    /// Whether a session is active. Cheap, side-effect free.
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// The live camera, or `None` while disabled.
    #[inline]
    pub fn camera(&self) -> Option<&FreeCamera> {
        self.camera.as_ref()
    }

    /// Mutable access to the live camera, for the host's pointer-delta glue.
    #[inline]
    pub fn camera_mut(&mut self) -> Option<&mut FreeCamera> {
        self.camera.as_mut()
    }

    /// Status overlay text, or `None` when there is nothing to show.
    ///
    /// Produces the text only; drawing it is the host's concern. Disabled
    /// sessions and `show_overlay = false` both yield `None`.
    pub fn status_overlay(&self, avatar: &AvatarState, config: &FreecamConfig) -> Option<String> {
        if !self.enabled || !config.show_overlay {
            return None;
        }
        let camera = self.camera.as_ref()?;
        let distance = camera.get_position().distance(avatar.position);
        Some(format!("FREECAM ({distance:.1}m)"))
    }
}
