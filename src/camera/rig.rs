//! Hero camera rig: an establishing shot that hands over to pointer sway.

use glam::Vec3;

use super::core::Camera;
use super::damping::damp_vec3;
use super::pointer::PointerSample;
use super::pose::{CameraPose, PoseMapper};
use super::smoothing::{InertialSmoother, SmoothingState};
use crate::options::RigOptions;

/// Whether the rig is holding the establishing shot or following the
/// pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RigMode {
    /// Camera damped toward the fixed base pose; pointer ignored.
    #[default]
    Held,
    /// Pointer-driven sway. Terminal.
    Tracking,
}

/// Per-frame camera controller for the hero scene.
///
/// Starts in [`RigMode::Held`]. A single external signal
/// ([`activate`](Self::activate)) switches it to [`RigMode::Tracking`] for
/// the rest of its life.
#[derive(Debug, Clone)]
pub struct CameraRig {
    mode: RigMode,
    smoother: InertialSmoother,
    mapper: PoseMapper,
    held_damping_time: f32,
    position_damping_time: f32,
    look_damping_time: f32,
    /// Damped look-at point; lags the eye slightly while tracking.
    look_at: Vec3,
}

impl CameraRig {
    /// Create a rig in [`RigMode::Held`].
    #[must_use]
    pub fn new(options: &RigOptions) -> Self {
        let mapper = PoseMapper::from_options(options);
        let look_at = mapper.rest_pose().look_at;
        Self {
            mode: RigMode::Held,
            smoother: InertialSmoother::new(
                options.smoothing_gain,
                options.velocity_damping,
            ),
            mapper,
            held_damping_time: options.held_damping_time,
            position_damping_time: options.position_damping_time,
            look_damping_time: options.look_damping_time,
            look_at,
        }
    }

    /// Current mode.
    #[must_use]
    pub fn mode(&self) -> RigMode {
        self.mode
    }

    /// Whether pointer sway is engaged.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.mode == RigMode::Tracking
    }

    /// Engage pointer sway. Returns `true` only for the call that performed
    /// the transition; repeated signals are ignored.
    pub fn activate(&mut self) -> bool {
        match self.mode {
            RigMode::Held => {
                self.mode = RigMode::Tracking;
                log::info!("camera rig: pointer sway engaged");
                true
            }
            RigMode::Tracking => {
                log::debug!("camera rig: repeated activation ignored");
                false
            }
        }
    }

    /// Smoothed pointer state (zero until tracking starts).
    #[must_use]
    pub fn smoothing_state(&self) -> SmoothingState {
        self.smoother.state()
    }

    /// Damped look-at point the camera is currently aimed at.
    #[must_use]
    pub fn look_at(&self) -> Vec3 {
        self.look_at
    }

    /// Pose the rig is currently steering toward.
    #[must_use]
    pub fn target_pose(&self) -> CameraPose {
        match self.mode {
            RigMode::Held => self.mapper.rest_pose(),
            RigMode::Tracking => {
                self.mapper.map(self.smoother.state().position)
            }
        }
    }

    /// Re-seed the damped look-at point from the camera, e.g. after the host
    /// moved the camera itself.
    pub fn sync_from_camera(&mut self, camera: &Camera) {
        if camera.target.is_finite() {
            self.look_at = camera.target;
        }
    }

    /// Advance one rendered frame of `delta` seconds and write the result
    /// into `camera`.
    ///
    /// A zero, negative or non-finite `delta` (paused loop) is a no-op and
    /// returns `false`.
    pub fn update(
        &mut self,
        camera: &mut Camera,
        sample: PointerSample,
        delta: f32,
    ) -> bool {
        if !delta.is_finite() || delta <= 0.0 {
            return false;
        }

        match self.mode {
            RigMode::Held => {
                let rest = self.mapper.rest_pose();
                camera.eye = damp_vec3(
                    camera.eye,
                    rest.position,
                    self.held_damping_time,
                    delta,
                );
                self.look_at = rest.look_at;
            }
            RigMode::Tracking => {
                if !sample.is_finite() {
                    log::warn!(
                        "camera rig: non-finite pointer sample {sample:?}"
                    );
                }
                let smoothed = self.smoother.step(sample);
                let target = self.mapper.map(smoothed);
                camera.eye = damp_vec3(
                    camera.eye,
                    target.position,
                    self.position_damping_time,
                    delta,
                );
                self.look_at = damp_vec3(
                    self.look_at,
                    target.look_at,
                    self.look_damping_time,
                    delta,
                );
            }
        }

        camera.target = self.look_at;
        camera.up = Vec3::Y;
        true
    }
}
