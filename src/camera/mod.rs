//! Camera system for the hero scene.
//!
//! The per-frame pipeline is pointer sampling → inertial smoothing → pose
//! mapping → exponential damping, tied together by [`CameraRig`].

/// Core camera struct and GPU uniform types.
pub mod core;
pub mod damping;
pub mod pointer;
/// Smoothed-pointer to camera-pose mapping.
pub mod pose;
pub mod rig;
pub mod smoothing;

pub use self::core::{Camera, CameraUniform};
pub use pointer::{PointerEvent, PointerSample, PointerSampler};
pub use pose::{CameraPose, PoseMapper};
pub use rig::{CameraRig, RigMode};
pub use smoothing::{InertialSmoother, SmoothingState};
