//! Shared utilities: easing curves and the frame clock.

pub mod easing;
/// Frame deltas, FPS estimate and frame limiting for host loops.
pub mod frame_timing;
