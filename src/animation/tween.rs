//! Element transforms and the tweens that animate them.

use crate::util::easing::EasingFunction;

/// Duration of a tween that does not set one, in seconds.
pub const DEFAULT_TWEEN_DURATION: f32 = 0.5;

/// 2D transform of one section element, in CSS pixel and degree units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform2D {
    /// Horizontal translation.
    pub x: f32,
    /// Vertical translation (down is positive).
    pub y: f32,
    /// Rotation in degrees, clockwise.
    pub rotation: f32,
    /// Uniform scale.
    pub scale: f32,
    /// Opacity in [0, 1].
    pub opacity: f32,
}

impl Transform2D {
    /// No translation, rotation or scaling; fully opaque.
    pub const IDENTITY: Self = Self {
        x: 0.0,
        y: 0.0,
        rotation: 0.0,
        scale: 1.0,
        opacity: 1.0,
    };

    /// Identity transform with zero opacity.
    pub const HIDDEN: Self = Self {
        opacity: 0.0,
        ..Self::IDENTITY
    };

    /// Transform at the given position, otherwise identity.
    #[must_use]
    pub const fn at(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            ..Self::IDENTITY
        }
    }

    /// Copy with a different rotation.
    #[must_use]
    pub const fn rotated(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }

    /// Copy with a different scale.
    #[must_use]
    pub const fn scaled(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Copy with a different opacity.
    #[must_use]
    pub const fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// The subset of [`Transform2D`] fields a tween animates. Unset fields keep
/// whatever value the element already has.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TransformPatch {
    /// Target horizontal translation.
    pub x: Option<f32>,
    /// Target vertical translation.
    pub y: Option<f32>,
    /// Target rotation in degrees.
    pub rotation: Option<f32>,
    /// Target scale.
    pub scale: Option<f32>,
    /// Target opacity.
    pub opacity: Option<f32>,
}

#[inline]
fn lerp_field(from: f32, to: Option<f32>, t: f32) -> f32 {
    to.map_or(from, |to| from + (to - from) * t)
}

impl TransformPatch {
    /// Patch that moves to `(x, y)`.
    #[must_use]
    pub const fn position(x: f32, y: f32) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            rotation: None,
            scale: None,
            opacity: None,
        }
    }

    /// Also animate rotation.
    #[must_use]
    pub const fn rotation(mut self, rotation: f32) -> Self {
        self.rotation = Some(rotation);
        self
    }

    /// Also animate scale.
    #[must_use]
    pub const fn scale(mut self, scale: f32) -> Self {
        self.scale = Some(scale);
        self
    }

    /// Also animate opacity.
    #[must_use]
    pub const fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity);
        self
    }

    /// Blend from `from` toward this patch by eased progress `t`. Values of
    /// `t` above 1 (overshooting eases) carry past the target.
    #[must_use]
    pub fn blend(&self, from: &Transform2D, t: f32) -> Transform2D {
        Transform2D {
            x: lerp_field(from.x, self.x, t),
            y: lerp_field(from.y, self.y, t),
            rotation: lerp_field(from.rotation, self.rotation, t),
            scale: lerp_field(from.scale, self.scale, t),
            opacity: lerp_field(from.opacity, self.opacity, t),
        }
    }

    /// `base` with every set field replaced.
    #[must_use]
    pub fn apply(&self, base: &Transform2D) -> Transform2D {
        Transform2D {
            x: self.x.unwrap_or(base.x),
            y: self.y.unwrap_or(base.y),
            rotation: self.rotation.unwrap_or(base.rotation),
            scale: self.scale.unwrap_or(base.scale),
            opacity: self.opacity.unwrap_or(base.opacity),
        }
    }
}

/// One keyframe animation: move `target` to `to` over `duration` seconds,
/// starting `start` seconds into the timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween<K> {
    /// Element being animated.
    pub target: K,
    /// Absolute start time on the timeline, delay included.
    pub start: f32,
    /// Length in seconds.
    pub duration: f32,
    /// End values.
    pub to: TransformPatch,
    /// Easing curve applied to progress.
    pub easing: EasingFunction,
}

impl<K> Tween<K> {
    /// Tween to `to` starting at 0 with the default duration and easing.
    #[must_use]
    pub fn to(target: K, to: TransformPatch) -> Self {
        Self {
            target,
            start: 0.0,
            duration: DEFAULT_TWEEN_DURATION,
            to,
            easing: EasingFunction::DEFAULT,
        }
    }

    /// Place the tween at an absolute timeline position.
    #[must_use]
    pub fn at(mut self, position: f32) -> Self {
        self.start = position.max(0.0);
        self
    }

    /// Push the start back by `delay` seconds.
    #[must_use]
    pub fn delayed(mut self, delay: f32) -> Self {
        self.start += delay.max(0.0);
        self
    }

    /// Set the duration in seconds.
    #[must_use]
    pub fn lasting(mut self, duration: f32) -> Self {
        self.duration = duration.max(0.0);
        self
    }

    /// Set the easing curve.
    #[must_use]
    pub fn eased(mut self, easing: EasingFunction) -> Self {
        self.easing = easing;
        self
    }

    /// Time the tween reaches its end values.
    #[must_use]
    pub fn end(&self) -> f32 {
        self.start + self.duration
    }

    /// Raw progress (0..=1) at timeline time `time`. Zero-length tweens jump
    /// straight to 1.
    #[must_use]
    pub fn progress(&self, time: f32) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        ((time - self.start) / self.duration).clamp(0.0, 1.0)
    }
}
