//! Circular progress ring drawn for each skill.

use std::f32::consts::TAU;

/// Radius of the ring's stroke, in SVG user units.
pub const RING_RADIUS: f32 = 45.0;

/// Stroke geometry and tint for one skill's progress ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressRing {
    percentage: u8,
}

/// When each part of a ring appears, in seconds after the group is shown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealDelays {
    /// The stroke starts drawing.
    pub stroke: f32,
    /// The skill name fades in.
    pub name: f32,
    /// The percentage label fades in.
    pub label: f32,
}

impl ProgressRing {
    /// Ring for `percentage`, clamped to 100.
    #[must_use]
    pub fn new(percentage: u8) -> Self {
        Self {
            percentage: percentage.min(100),
        }
    }

    /// The clamped percentage.
    #[must_use]
    pub const fn percentage(&self) -> u8 {
        self.percentage
    }

    /// Full stroke length, also the dash array.
    #[must_use]
    pub fn circumference() -> f32 {
        TAU * RING_RADIUS
    }

    /// Dash offset that leaves `percentage` of the stroke visible.
    #[must_use]
    pub fn dash_offset(&self) -> f32 {
        let c = Self::circumference();
        c - f32::from(self.percentage) / 100.0 * c
    }

    /// Grey level of the stroke and text, from 128 at 0% to 255 at 100%.
    #[must_use]
    pub fn grey_level(&self) -> u8 {
        let level = (128.0 + f32::from(self.percentage) / 100.0 * 127.0).round();
        level.clamp(0.0, 255.0) as u8
    }

    /// Stroke colour as an RGB triple.
    #[must_use]
    pub fn color(&self) -> [u8; 3] {
        let g = self.grey_level();
        [g, g, g]
    }

    /// Reveal schedule for the ring at position `index` within its group.
    #[must_use]
    pub fn reveal_delays(index: usize) -> RevealDelays {
        let base = 0.2 * index as f32;
        RevealDelays {
            stroke: base + 0.2,
            name: base + 0.5,
            label: base + 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circumference_matches_radius() {
        assert!((ProgressRing::circumference() - 282.743_34).abs() < 1e-3);
    }

    #[test]
    fn dash_offset_tracks_percentage() {
        let c = ProgressRing::circumference();
        assert!((ProgressRing::new(0).dash_offset() - c).abs() < 1e-4);
        assert!(ProgressRing::new(100).dash_offset().abs() < 1e-4);
        let quarter = ProgressRing::new(75).dash_offset();
        assert!((quarter - c * 0.25).abs() < 1e-3);
    }

    #[test]
    fn grey_level_spans_grey_to_white() {
        assert_eq!(ProgressRing::new(0).grey_level(), 128);
        assert_eq!(ProgressRing::new(100).grey_level(), 255);
        // 128 + 0.85 * 127 = 235.95
        assert_eq!(ProgressRing::new(85).grey_level(), 236);
        assert_eq!(ProgressRing::new(95).color(), [249, 249, 249]);
    }

    #[test]
    fn percentage_is_clamped() {
        let ring = ProgressRing::new(250);
        assert_eq!(ring.percentage(), 100);
        assert_eq!(ring.grey_level(), 255);
    }

    #[test]
    fn reveal_is_staggered_by_index() {
        let first = ProgressRing::reveal_delays(0);
        assert!((first.stroke - 0.2).abs() < 1e-6);
        assert!((first.name - 0.5).abs() < 1e-6);
        assert!((first.label - 1.0).abs() < 1e-6);
        let third = ProgressRing::reveal_delays(2);
        assert!((third.stroke - 0.6).abs() < 1e-6);
        assert!((third.label - 1.4).abs() < 1e-6);
    }
}
