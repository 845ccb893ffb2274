//! One-shot visibility trigger.
//!
//! Mirrors how a browser intersection observer decides an element is "in
//! view": the root (viewport) is shrunk by a margin on every side, and the
//! element counts as visible once the fraction of its area inside that root
//! reaches a threshold. The trigger latches: after firing once it stays
//! fired and ignores every later observation.

use crate::options::SectionOptions;

/// Axis-aligned rectangle in viewport pixels (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Width; negative values are treated as zero.
    pub width: f32,
    /// Height; negative values are treated as zero.
    pub height: f32,
}

impl Rect {
    /// Create a rectangle from its top-left corner and size.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Area, zero for degenerate rectangles.
    #[must_use]
    pub fn area(&self) -> f32 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    /// Rectangle shrunk by `margin` on every side (grown when negative).
    #[must_use]
    pub fn inset(&self, margin: f32) -> Self {
        Self {
            x: self.x + margin,
            y: self.y + margin,
            width: (self.width - 2.0 * margin).max(0.0),
            height: (self.height - 2.0 * margin).max(0.0),
        }
    }

    /// Overlapping region, if the rectangles overlap with positive area.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let left = self.x.max(other.x);
        let top = self.y.max(other.y);
        let right = (self.x + self.width.max(0.0)).min(other.x + other.width.max(0.0));
        let bottom =
            (self.y + self.height.max(0.0)).min(other.y + other.height.max(0.0));
        (right > left && bottom > top)
            .then(|| Self::new(left, top, right - left, bottom - top))
    }
}

/// Fraction of `target`'s area that lies inside `root`, in [0, 1].
#[must_use]
pub fn visible_fraction(target: &Rect, root: &Rect) -> f32 {
    let area = target.area();
    if area <= 0.0 || !area.is_finite() {
        return 0.0;
    }
    target
        .intersection(root)
        .map_or(0.0, |overlap| (overlap.area() / area).clamp(0.0, 1.0))
}

/// Latch that fires the first time an element becomes visible enough.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibilityTrigger {
    threshold: f32,
    root_margin: f32,
    fired: bool,
}

impl VisibilityTrigger {
    /// Create an armed trigger. `threshold` is clamped into [0, 1]; the
    /// element must always overlap the root with some area to fire.
    #[must_use]
    pub fn new(threshold: f32, root_margin: f32) -> Self {
        Self {
            threshold: if threshold.is_finite() {
                threshold.clamp(0.0, 1.0)
            } else {
                1.0
            },
            root_margin: if root_margin.is_finite() {
                root_margin
            } else {
                0.0
            },
            fired: false,
        }
    }

    /// Trigger configured from section options.
    #[must_use]
    pub fn from_options(options: &SectionOptions) -> Self {
        Self::new(options.visibility_threshold, options.root_margin)
    }

    /// Whether the trigger has fired.
    #[must_use]
    pub fn has_fired(&self) -> bool {
        self.fired
    }

    /// Observe the element's current bounds. Returns `true` only for the
    /// observation that fires the trigger.
    pub fn observe(&mut self, target: &Rect, viewport: &Rect) -> bool {
        if self.fired {
            return false;
        }
        let root = viewport.inset(self.root_margin);
        let fraction = visible_fraction(target, &root);
        if fraction > 0.0 && fraction >= self.threshold {
            self.fired = true;
            log::debug!(
                "visibility trigger fired at {:.0}% visible",
                fraction * 100.0
            );
            return true;
        }
        false
    }
}
