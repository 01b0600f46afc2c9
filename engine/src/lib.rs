//! Freecam Engine Library
//!
//! A free-flying virtual camera simulator that decouples the observer's
//! viewpoint from a physically simulated avatar. While a session is active
//! the avatar stays frozen (horizontally) and collidable in its world, and
//! the camera flies with inertial movement, solid-geometry collision, and a
//! soft distance tether back to the avatar.
//!
//! The crate is the simulation core only. Input devices, keybinding
//! registration, rendering, and whatever mechanism a host uses to intercept
//! its own input/render pipeline are external collaborators reached through
//! small contracts: [`world::CollisionWorld`] for geometry queries,
//! [`camera::SessionHost`] for session transitions, and the signal types in
//! [`input`] for per-tick directional input.
//!
//! # Modules
//!
//! - [`camera`] - The [`FreeCamera`] and the session toggle state machine
//! - [`config`] - Persisted JSON tunables with validation
//! - [`input`] - Host-agnostic flight-key and pointer-delta signals
//! - [`physics`] - Math types and axis-separated swept-AABB collision
//! - [`player`] - The avatar pose the host hands to the tick
//! - [`world`] - Collision query contract plus a block-grid reference world
//!
//! # Example
//!
//! ```rust,ignore
//! use freecam_engine::{AvatarState, BlockGrid, FreecamConfig, FreecamController};
//! use freecam_engine::input::FreecamInput;
//! use glam::DVec3;
//!
//! let mut controller = FreecamController::new();
//! let mut avatar = AvatarState::new(DVec3::new(0.0, 64.0, 0.0), 0.0, 0.0);
//! let mut input = FreecamInput::new();
//! let world = BlockGrid::new();
//! let config = FreecamConfig::default();
//!
//! controller.toggle(Some(&avatar), &mut host);
//!
//! // Once per simulation tick:
//! if let Some(camera) = controller.camera_mut() {
//!     let (dx, dy) = input.look.take();
//!     camera.change_look_direction(dx, dy, config.mouse_sensitivity);
//! }
//! controller.tick(&mut avatar, &input.keys, &world, &config);
//!
//! // At render frequency:
//! if let Some(camera) = controller.camera() {
//!     let pose = camera.get_interpolated_position(tick_fraction);
//! }
//! ```

pub mod camera;
pub mod config;
pub mod input;
pub mod physics;
pub mod player;
pub mod world;

// Re-export the commonly used types at crate level for convenience
pub use camera::{FreeCamera, FreecamController, SessionHost, ViewMode};
pub use config::{ConfigError, FreecamConfig};
pub use input::{FlightKey, FlightKeys, FreecamInput, LookDelta};
pub use physics::{resolve_movement, Aabb};
pub use player::AvatarState;
pub use world::{BlockGrid, CollisionWorld};
