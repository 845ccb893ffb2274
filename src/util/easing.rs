//! Easing functions for keyframe interpolation.
//!
//! Curves match the named eases the section choreography was authored with:
//! quadratic ease-out is the default for tweens that name no ease,
//! `power2.inOut` is the cubic in-out curve, and `back.out(s)` overshoots the
//! target before settling.

/// Easing function variants for animation curves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EasingFunction {
    /// Linear interpolation (no easing).
    Linear,
    /// Quadratic ease-out (fast start, slow end).
    QuadraticOut,
    /// Cubic ease-in-out (slow start and end, symmetric around t=0.5).
    CubicInOut,
    /// Ease-out that overshoots past 1.0 before settling.
    /// Formula: 1 + (s+1)(t-1)³ + s(t-1)²
    BackOut {
        /// Overshoot amount; larger values swing further past the target.
        overshoot: f32,
    },
}

impl EasingFunction {
    /// Default easing function for tweens that do not name one.
    pub const DEFAULT: EasingFunction = EasingFunction::QuadraticOut;

    /// The `back.out(1.7)` curve used for the triangle keyframes.
    pub const BACK_OUT: EasingFunction =
        EasingFunction::BackOut { overshoot: 1.7 };

    /// Evaluate the easing function at time t.
    ///
    /// Input t is clamped to [0.0, 1.0]. Every curve maps 0 to 0 and 1 to 1;
    /// [`BackOut`](Self::BackOut) may exceed 1.0 in between.
    #[inline]
    #[must_use]
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match *self {
            EasingFunction::Linear => t,
            EasingFunction::QuadraticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            EasingFunction::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u * u / 2.0
                }
            }
            EasingFunction::BackOut { overshoot } => {
                let u = t - 1.0;
                1.0 + (overshoot + 1.0) * u * u * u + overshoot * u * u
            }
        }
    }
}

impl Default for EasingFunction {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [EasingFunction; 4] = [
        EasingFunction::Linear,
        EasingFunction::QuadraticOut,
        EasingFunction::CubicInOut,
        EasingFunction::BACK_OUT,
    ];

    #[test]
    fn test_endpoints() {
        for ease in ALL {
            assert!(ease.evaluate(0.0).abs() < 1e-6, "{ease:?} at 0");
            assert!((ease.evaluate(1.0) - 1.0).abs() < 1e-6, "{ease:?} at 1");
        }
    }

    #[test]
    fn test_input_clamping() {
        for ease in ALL {
            assert_eq!(ease.evaluate(-0.5), ease.evaluate(0.0));
            assert_eq!(ease.evaluate(1.5), ease.evaluate(1.0));
        }
    }

    #[test]
    fn test_quadratic_out() {
        let quad_out = EasingFunction::QuadraticOut;
        assert_eq!(quad_out.evaluate(0.5), 0.75); // 1 - (1-0.5)² = 0.75
    }

    #[test]
    fn test_cubic_in_out_is_symmetric() {
        let ease = EasingFunction::CubicInOut;
        assert_eq!(ease.evaluate(0.5), 0.5);
        assert_eq!(ease.evaluate(0.25), 0.0625); // 4 * 0.25³
        let a = ease.evaluate(0.2);
        let b = ease.evaluate(0.8);
        assert!((a + b - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_back_out_overshoots() {
        let ease = EasingFunction::BACK_OUT;
        let peak = (1..100)
            .map(|i| ease.evaluate(i as f32 / 100.0))
            .fold(0.0f32, f32::max);
        assert!(peak > 1.05, "back.out should overshoot, peak {peak}");
        assert!(peak < 1.2);
    }

    #[test]
    fn test_default_is_quadratic_out() {
        assert_eq!(EasingFunction::default(), EasingFunction::QuadraticOut);
    }
}
