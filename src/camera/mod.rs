//! Camera system for the garage view.
//!
//! Provides a free orbit around a fixed pivot and a focus mode that locks
//! onto a selected part with bounded panning.

/// Orbit/focus camera controller.
pub mod controller;
/// Core camera struct and ray unprojection.
pub mod core;

pub use self::controller::{CameraMode, FocusCameraController};
pub use self::core::Camera;
