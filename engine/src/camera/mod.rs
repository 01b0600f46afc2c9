//! Camera Module
//!
//! The free-flying camera and its session controller. This module is
//! host-agnostic - it only manages camera state, per-tick physics, and the
//! enable/disable state machine; rendering and input devices live outside.

pub mod controller;
pub mod free_camera;

pub use controller::{FreecamController, SessionHost, ViewMode, MSG_DISABLED, MSG_ENABLED};
pub use free_camera::FreeCamera;
