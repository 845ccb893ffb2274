//! Pointer sampling in normalized device coordinates.

use glam::Vec2;

/// Pointer position for one frame, normalized to [-1, 1] on both axes with
/// +y pointing up (the usual NDC convention).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerSample {
    /// Horizontal coordinate, -1 at the left edge.
    pub x: f32,
    /// Vertical coordinate, -1 at the bottom edge.
    pub y: f32,
}

impl PointerSample {
    /// Pointer at the viewport centre.
    pub const CENTER: Self = Self { x: 0.0, y: 0.0 };

    /// Create a sample from raw coordinates (not sanitised).
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Copy of the sample that is safe to feed into smoothing state:
    /// non-finite components become 0, the rest are clamped into [-1, 1].
    #[must_use]
    pub fn sanitized(self) -> Self {
        let clean = |v: f32| if v.is_finite() { v.clamp(-1.0, 1.0) } else { 0.0 };
        Self {
            x: clean(self.x),
            y: clean(self.y),
        }
    }

    /// Whether both components are finite numbers.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// The sample as a vector.
    #[must_use]
    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Platform-agnostic pointer events fed to a [`PointerSampler`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Cursor moved to an absolute position inside the viewport.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels, growing downward.
        y: f32,
    },
    /// Viewport changed size.
    Resized {
        /// New width in physical pixels.
        width: u32,
        /// New height in physical pixels.
        height: u32,
    },
    /// Cursor left the viewport. The last known position is kept.
    CursorLeft,
}

/// Tracks the latest cursor position and hands out one normalized sample per
/// rendered frame.
#[derive(Debug, Clone)]
pub struct PointerSampler {
    viewport: Vec2,
    cursor: Option<Vec2>,
}

impl PointerSampler {
    /// Create a sampler for a viewport of the given pixel size.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            viewport: Vec2::new(width as f32, height as f32),
            cursor: None,
        }
    }

    /// Feed a pointer event.
    pub fn handle_event(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::CursorMoved { x, y } => {
                if x.is_finite() && y.is_finite() {
                    self.cursor = Some(Vec2::new(x, y));
                }
            }
            PointerEvent::Resized { width, height } => {
                self.viewport = Vec2::new(width as f32, height as f32);
            }
            PointerEvent::CursorLeft => {}
        }
    }

    /// Current pointer position in normalized device coordinates.
    ///
    /// Returns the centre until the cursor has been seen, and while the
    /// viewport has no area.
    #[must_use]
    pub fn sample(&self) -> PointerSample {
        let Some(cursor) = self.cursor else {
            return PointerSample::CENTER;
        };
        if self.viewport.x <= 0.0 || self.viewport.y <= 0.0 {
            return PointerSample::CENTER;
        }
        PointerSample::new(
            cursor.x / self.viewport.x * 2.0 - 1.0,
            -(cursor.y / self.viewport.y * 2.0 - 1.0),
        )
        .sanitized()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_map_to_unit_square() {
        let mut sampler = PointerSampler::new(800, 600);
        sampler.handle_event(PointerEvent::CursorMoved { x: 0.0, y: 0.0 });
        assert_eq!(sampler.sample(), PointerSample::new(-1.0, 1.0));

        sampler.handle_event(PointerEvent::CursorMoved { x: 800.0, y: 600.0 });
        assert_eq!(sampler.sample(), PointerSample::new(1.0, -1.0));

        sampler.handle_event(PointerEvent::CursorMoved { x: 400.0, y: 300.0 });
        assert_eq!(sampler.sample(), PointerSample::CENTER);
    }

    #[test]
    fn unseen_cursor_samples_centre() {
        let sampler = PointerSampler::new(800, 600);
        assert_eq!(sampler.sample(), PointerSample::CENTER);
    }

    #[test]
    fn cursor_outside_viewport_is_clamped() {
        let mut sampler = PointerSampler::new(100, 100);
        sampler.handle_event(PointerEvent::CursorMoved { x: 250.0, y: -40.0 });
        assert_eq!(sampler.sample(), PointerSample::new(1.0, 1.0));
    }

    #[test]
    fn resize_renormalizes_and_leave_keeps_position() {
        let mut sampler = PointerSampler::new(100, 100);
        sampler.handle_event(PointerEvent::CursorMoved { x: 50.0, y: 50.0 });
        sampler.handle_event(PointerEvent::Resized { width: 200, height: 100 });
        assert_eq!(sampler.sample(), PointerSample::new(-0.5, 0.0));

        sampler.handle_event(PointerEvent::CursorLeft);
        assert_eq!(sampler.sample(), PointerSample::new(-0.5, 0.0));

        sampler.handle_event(PointerEvent::Resized { width: 0, height: 0 });
        assert_eq!(sampler.sample(), PointerSample::CENTER);
    }

    #[test]
    fn sanitized_replaces_non_finite() {
        let sample = PointerSample::new(f32::NAN, f32::NEG_INFINITY).sanitized();
        assert_eq!(sample, PointerSample::CENTER);
        let sample = PointerSample::new(3.0, -0.25).sanitized();
        assert_eq!(sample, PointerSample::new(1.0, -0.25));
    }
}
