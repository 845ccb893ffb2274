use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Tuning constants for the hero camera rig.
///
/// The defaults were tuned by eye; there is no deeper meaning to them than
/// "it looks right" at 60 fps.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera Sway", inline)]
#[serde(default)]
pub struct RigOptions {
    /// Eye position of the establishing shot.
    #[schemars(skip)]
    pub base_position: [f32; 3],
    /// Look-at point of the establishing shot.
    #[schemars(skip)]
    pub look_target: [f32; 3],
    /// Damping time (seconds) toward the establishing shot while held.
    #[schemars(title = "Hold Damping", range(min = 0.01, max = 2.0), extend("step" = 0.01))]
    pub held_damping_time: f32,
    /// Pull of the raw pointer on the smoothed velocity per frame.
    #[schemars(title = "Responsiveness", range(min = 0.001, max = 0.2), extend("step" = 0.001))]
    pub smoothing_gain: f32,
    /// Fraction of velocity kept each frame.
    #[schemars(title = "Inertia", range(min = 0.0, max = 0.99), extend("step" = 0.01))]
    pub velocity_damping: f32,
    /// Eye offset per unit of smoothed pointer: x from horizontal, y from
    /// vertical, z (depth) from horizontal.
    #[schemars(skip)]
    pub sway_strength: [f32; 3],
    /// Look-at offset per unit of smoothed pointer (x, y).
    #[schemars(skip)]
    pub look_sway: [f32; 2],
    /// Damping time (seconds) of the eye toward its sway target.
    #[schemars(title = "Position Damping", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub position_damping_time: f32,
    /// Damping time (seconds) of the look-at point; shorter than the eye's.
    #[schemars(title = "Look Damping", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub look_damping_time: f32,
}

impl Default for RigOptions {
    fn default() -> Self {
        Self {
            base_position: [-4.0, 3.0, -9.0],
            look_target: [0.0, 0.5, 0.0],
            held_damping_time: 0.2,
            smoothing_gain: 0.02,
            velocity_damping: 0.85,
            sway_strength: [0.1, 0.2, 0.2],
            look_sway: [0.1, 0.1],
            position_damping_time: 0.15,
            look_damping_time: 0.1,
        }
    }
}
