use glam::{Vec2, Vec3};

use crate::options::RigOptions;

/// Camera eye position and look-at point for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// Eye position in world space.
    pub position: Vec3,
    /// Point the camera looks at.
    pub look_at: Vec3,
}

/// Maps smoothed pointer coordinates to a target [`CameraPose`] by fixed
/// per-axis scale factors around a base pose.
///
/// Depth sways with the horizontal coordinate, so moving the pointer
/// sideways also dollies the camera slightly.
#[derive(Debug, Clone, PartialEq)]
pub struct PoseMapper {
    base_position: Vec3,
    base_look_at: Vec3,
    sway: Vec3,
    look_sway: Vec2,
}

impl PoseMapper {
    /// Build a mapper from rig options.
    #[must_use]
    pub fn from_options(options: &RigOptions) -> Self {
        Self {
            base_position: Vec3::from_array(options.base_position),
            base_look_at: Vec3::from_array(options.look_target),
            sway: Vec3::from_array(options.sway_strength),
            look_sway: Vec2::from_array(options.look_sway),
        }
    }

    /// The establishing shot (pointer at rest).
    #[must_use]
    pub fn rest_pose(&self) -> CameraPose {
        CameraPose {
            position: self.base_position,
            look_at: self.base_look_at,
        }
    }

    /// Target pose for the given smoothed pointer coordinates.
    #[must_use]
    pub fn map(&self, smoothed: Vec2) -> CameraPose {
        let offset = Vec3::new(
            smoothed.x * self.sway.x,
            smoothed.y * self.sway.y,
            smoothed.x * self.sway.z,
        );
        let look_offset = Vec3::new(
            smoothed.x * self.look_sway.x,
            smoothed.y * self.look_sway.y,
            0.0,
        );
        CameraPose {
            position: self.base_position + offset,
            look_at: self.base_look_at + look_offset,
        }
    }
}
