//! Frame-rate independent exponential damping.
//!
//! `current += (target - current) * (1 - exp(-delta / damping_time))`
//!
//! Because the remaining error shrinks by `exp(-delta / damping_time)` per
//! step, splitting a frame into smaller steps composes to the same result.

use glam::Vec3;

/// Fraction of the remaining distance to cover over `delta` seconds.
///
/// Zero for a non-positive or non-finite `delta`; one (snap) for a
/// non-positive `damping_time`.
#[inline]
#[must_use]
pub fn damp_factor(damping_time: f32, delta: f32) -> f32 {
    if !delta.is_finite() || delta <= 0.0 {
        return 0.0;
    }
    if !damping_time.is_finite() || damping_time <= 0.0 {
        return 1.0;
    }
    1.0 - (-delta / damping_time).exp()
}

/// Damp a scalar toward `target`.
#[inline]
#[must_use]
pub fn damp(current: f32, target: f32, damping_time: f32, delta: f32) -> f32 {
    current + (target - current) * damp_factor(damping_time, delta)
}

/// Damp a point toward `target`.
#[inline]
#[must_use]
pub fn damp_vec3(
    current: Vec3,
    target: Vec3,
    damping_time: f32,
    delta: f32,
) -> Vec3 {
    current + (target - current) * damp_factor(damping_time, delta)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factor_is_zero_for_paused_frames() {
        assert_eq!(damp_factor(0.15, 0.0), 0.0);
        assert_eq!(damp_factor(0.15, -0.016), 0.0);
        assert_eq!(damp_factor(0.15, f32::NAN), 0.0);
        assert_eq!(damp_factor(0.15, f32::INFINITY), 0.0);
    }

    #[test]
    fn zero_damping_time_snaps() {
        assert_eq!(damp(2.0, 5.0, 0.0, 0.016), 5.0);
    }

    #[test]
    fn factor_stays_in_unit_range() {
        for delta in [1e-6, 0.001, 0.016, 0.1, 1.0, 100.0] {
            let k = damp_factor(0.1, delta);
            assert!((0.0..=1.0).contains(&k), "delta {delta} gave {k}");
        }
    }

    #[test]
    fn two_half_steps_match_one_full_step() {
        let start = Vec3::new(-4.0, 3.0, -9.0);
        let target = Vec3::new(-3.9, 3.2, -8.8);
        for delta in [0.008, 0.016, 0.033, 0.25] {
            let full = damp_vec3(start, target, 0.15, delta);
            let half = damp_vec3(start, target, 0.15, delta / 2.0);
            let half = damp_vec3(half, target, 0.15, delta / 2.0);
            assert!(
                full.distance(half) < 1e-5,
                "delta {delta}: {full} vs {half}"
            );
        }
    }

    #[test]
    fn differs_from_linear_blend() {
        // A naive `lerp(delta / damping_time)` would reach the target after
        // one damping time; the exponential covers 1 - 1/e of it.
        let v = damp(0.0, 1.0, 0.2, 0.2);
        assert!((v - (1.0 - (-1.0f32).exp())).abs() < 1e-6);
    }
}
