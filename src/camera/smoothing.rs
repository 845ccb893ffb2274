//! Inertial pointer smoothing.
//!
//! Each frame the velocity is pulled toward the raw pointer by a small gain,
//! then bled off by a friction factor, and the smoothed position integrates
//! the velocity:
//!
//! ```text
//! v = (v + (target - p) * gain) * damping
//! p = p + v
//! ```
//!
//! For `gain` in (0, 1] and `damping` in [0, 1) the error dynamics have a
//! spectral radius below one, so bounded input can never make the state
//! diverge. With the default gain of 0.02 and damping of 0.85 the loop is
//! slightly under-damped: it overshoots a step by roughly 10% before
//! settling.

use glam::Vec2;

use super::pointer::PointerSample;

/// Smoothed pointer position and its velocity, both in NDC units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SmoothingState {
    /// Smoothed pointer coordinates.
    pub position: Vec2,
    /// Per-frame change applied to `position`.
    pub velocity: Vec2,
}

impl SmoothingState {
    /// Whether every component is a finite number.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.velocity.is_finite()
    }
}

/// Per-frame spring-like smoother owning a [`SmoothingState`].
#[derive(Debug, Clone, PartialEq)]
pub struct InertialSmoother {
    gain: f32,
    damping: f32,
    state: SmoothingState,
}

impl InertialSmoother {
    /// Highest velocity damping accepted; 1.0 would never lose energy.
    const MAX_DAMPING: f32 = 0.999;

    /// Create a smoother at rest. `gain` is clamped into (0, 1] and
    /// `damping` into [0, 0.999] so the update stays contractive.
    #[must_use]
    pub fn new(gain: f32, damping: f32) -> Self {
        let gain = if gain.is_finite() {
            gain.clamp(f32::EPSILON, 1.0)
        } else {
            f32::EPSILON
        };
        let damping = if damping.is_finite() {
            damping.clamp(0.0, Self::MAX_DAMPING)
        } else {
            0.0
        };
        Self {
            gain,
            damping,
            state: SmoothingState::default(),
        }
    }

    /// Advance one frame toward `sample` and return the new smoothed
    /// position. The sample is sanitised first.
    pub fn step(&mut self, sample: PointerSample) -> Vec2 {
        let target = sample.sanitized().to_vec2();
        let state = &mut self.state;
        state.velocity += (target - state.position) * self.gain;
        state.velocity *= self.damping;
        state.position += state.velocity;
        state.position
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> SmoothingState {
        self.state
    }

    /// Smoothing gain in effect.
    #[must_use]
    pub fn gain(&self) -> f32 {
        self.gain
    }

    /// Velocity damping in effect.
    #[must_use]
    pub fn damping(&self) -> f32 {
        self.damping
    }

    /// Return to rest at the origin.
    pub fn reset(&mut self) {
        self.state = SmoothingState::default();
    }
}
