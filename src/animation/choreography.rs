//! The skills-section triangle choreography.
//!
//! Three triangles fly in around a centre circle, nudge outward, and settle
//! into their final layout while the outer wrapper spins once.

use super::timeline::Timeline;
use super::tween::{Transform2D, TransformPatch, Tween};
use crate::util::easing::EasingFunction;

/// Elements animated by the choreography.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionElement {
    /// Wrapper holding the triangles and circle; slides in first.
    InnerWrapper,
    /// Wrapper around the whole figure; spins once near the end.
    OuterWrapper,
    /// Top triangle.
    Triangle0,
    /// Right triangle.
    Triangle1,
    /// Left triangle.
    Triangle2,
    /// Circle the triangles gather around.
    CenterCircle,
}

impl SectionElement {
    /// Every element, wrappers first.
    pub const ALL: [Self; 6] = [
        Self::InnerWrapper,
        Self::OuterWrapper,
        Self::Triangle0,
        Self::Triangle1,
        Self::Triangle2,
        Self::CenterCircle,
    ];

    /// The triangle at `index` (0..3).
    #[must_use]
    pub fn triangle(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Triangle0),
            1 => Some(Self::Triangle1),
            2 => Some(Self::Triangle2),
            _ => None,
        }
    }

    /// Transform the element holds before playback starts.
    #[must_use]
    pub const fn initial_transform(self) -> Transform2D {
        match self {
            Self::InnerWrapper | Self::OuterWrapper => Transform2D::IDENTITY,
            Self::Triangle0 => Transform2D::at(210.0, 150.0).with_opacity(0.0),
            Self::Triangle1 => Transform2D::at(333.0, 305.0)
                .rotated(125.0)
                .with_opacity(0.0),
            Self::Triangle2 => Transform2D::at(150.0, 340.0)
                .rotated(-125.0)
                .with_opacity(0.0),
            Self::CenterCircle => {
                Transform2D::at(320.0, 360.0).scaled(5.0).with_opacity(0.0)
            }
        }
    }
}

const BACK: EasingFunction = EasingFunction::BACK_OUT;
const CIRCLE: EasingFunction = EasingFunction::CubicInOut;

fn shown(x: f32, y: f32, scale: f32) -> TransformPatch {
    TransformPatch::position(x, y).scale(scale).opacity(1.0)
}

/// The keyframes in declaration order.
#[must_use]
pub fn keyframes() -> Vec<Tween<SectionElement>> {
    use SectionElement::{
        CenterCircle, InnerWrapper, OuterWrapper, Triangle0, Triangle1,
        Triangle2,
    };

    vec![
        Tween::to(InnerWrapper, TransformPatch::position(77.0, 25.0)),
        // Fly in.
        Tween::to(Triangle0, shown(206.0, 170.0, 0.7))
            .lasting(1.5)
            .eased(BACK),
        Tween::to(Triangle1, shown(314.0, 307.0, 0.7))
            .lasting(1.5)
            .delayed(0.3)
            .eased(BACK),
        Tween::to(Triangle2, shown(150.0, 335.0, 0.7))
            .lasting(1.5)
            .delayed(0.6)
            .eased(BACK),
        // Nudge outward, then settle.
        Tween::to(Triangle0, shown(206.0, 100.0, 0.9))
            .at(3.0)
            .lasting(0.3)
            .eased(BACK),
        Tween::to(Triangle0, shown(200.0, 80.0, 1.0))
            .at(3.3)
            .lasting(0.3)
            .delayed(1.2)
            .eased(BACK),
        Tween::to(Triangle1, shown(345.0, 307.0, 0.9))
            .at(3.0)
            .lasting(0.3)
            .eased(BACK),
        Tween::to(Triangle1, shown(395.0, 340.0, 1.0))
            .at(3.3)
            .lasting(0.3)
            .delayed(1.2)
            .eased(BACK),
        Tween::to(Triangle2, shown(135.0, 343.0, 0.9))
            .at(3.0)
            .lasting(0.3)
            .eased(BACK),
        Tween::to(Triangle2, shown(90.0, 385.0, 1.0))
            .at(3.3)
            .lasting(0.3)
            .delayed(1.2)
            .eased(BACK),
        Tween::to(
            OuterWrapper,
            TransformPatch::position(5.0, 5.0).rotation(360.0).scale(1.0),
        )
        .at(3.6)
        .lasting(0.3),
        Tween::to(CenterCircle, shown(400.0, 386.0, 5.0))
            .at(1.0)
            .eased(CIRCLE),
        Tween::to(CenterCircle, shown(401.0, 365.0, 3.0))
            .at(3.0)
            .lasting(0.3)
            .eased(CIRCLE),
        Tween::to(CenterCircle, shown(396.0, 380.0, 1.0))
            .at(4.5)
            .lasting(0.3)
            .eased(CIRCLE),
    ]
}

/// Timeline with every element at its initial transform and every keyframe
/// scheduled.
#[must_use]
pub fn build_timeline() -> Timeline<SectionElement> {
    let mut timeline = Timeline::new();
    for element in SectionElement::ALL {
        timeline.set(element, element.initial_transform());
    }
    for tween in keyframes() {
        let _ = timeline.add(tween);
    }
    timeline
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_end(timeline: &mut Timeline<SectionElement>) -> Vec<usize> {
        let mut order = Vec::new();
        let mut guard = 0;
        while !timeline.is_finished() {
            order.extend(timeline.advance(1.0 / 60.0).iter().map(|s| s.index));
            guard += 1;
            assert!(guard < 10_000, "timeline never finished");
        }
        order
    }

    #[test]
    fn table_has_fourteen_keyframes_and_ends_at_4_8() {
        let frames = keyframes();
        assert_eq!(frames.len(), 14);
        let timeline = build_timeline();
        assert!((timeline.duration() - 4.8).abs() < 1e-5);
    }

    #[test]
    fn delays_fold_into_start_times() {
        let starts: Vec<f32> = keyframes().iter().map(|t| t.start).collect();
        let expected = [
            0.0, 0.0, 0.3, 0.6, 3.0, 4.5, 3.0, 4.5, 3.0, 4.5, 3.6, 1.0, 3.0,
            4.5,
        ];
        for (got, want) in starts.iter().zip(expected) {
            assert!((got - want).abs() < 1e-5, "{got} != {want}");
        }
    }

    #[test]
    fn every_keyframe_starts_once_in_order() {
        let mut timeline = build_timeline();
        let order = run_to_end(&mut timeline);
        assert_eq!(order, vec![0, 1, 2, 3, 11, 4, 6, 8, 12, 10, 5, 7, 9, 13]);
    }

    #[test]
    fn elements_land_on_final_layout() {
        let mut timeline = build_timeline();
        let _ = run_to_end(&mut timeline);

        let get = |e| timeline.transform(e).unwrap();
        assert_eq!(
            get(SectionElement::InnerWrapper),
            Transform2D::at(77.0, 25.0)
        );
        assert_eq!(
            get(SectionElement::OuterWrapper),
            Transform2D::at(5.0, 5.0).rotated(360.0)
        );
        assert_eq!(
            get(SectionElement::Triangle0),
            Transform2D::at(200.0, 80.0)
        );
        assert_eq!(
            get(SectionElement::Triangle1),
            Transform2D::at(395.0, 340.0).rotated(125.0)
        );
        assert_eq!(
            get(SectionElement::Triangle2),
            Transform2D::at(90.0, 385.0).rotated(-125.0)
        );
        assert_eq!(
            get(SectionElement::CenterCircle),
            Transform2D::at(396.0, 380.0)
        );
    }

    #[test]
    fn fly_in_overshoots_before_settling() {
        let mut timeline = build_timeline();
        let mut min_scale: f32 = 1.0;
        while timeline.playhead() < 1.6 {
            let _ = timeline.advance(1.0 / 120.0);
            let t = timeline.transform(SectionElement::Triangle0).unwrap();
            min_scale = min_scale.min(t.scale);
            assert!(t.scale <= 1.0 + 1e-4);
        }
        // Scaling 1 -> 0.7 with back-out dips below 0.7 rather than above 1.
        assert!(min_scale < 0.69, "expected undershoot, got {min_scale}");
        let t = timeline.transform(SectionElement::Triangle0).unwrap();
        assert_eq!(t.scale, 0.7);
    }

    #[test]
    fn untouched_rotation_is_preserved_through_fly_in() {
        let mut timeline = build_timeline();
        let _ = timeline.advance(2.5);
        let t = timeline.transform(SectionElement::Triangle1).unwrap();
        assert_eq!(t.rotation, 125.0);
        assert_eq!(t.opacity, 1.0);
    }

    #[test]
    fn triangle_lookup() {
        assert_eq!(SectionElement::triangle(2), Some(SectionElement::Triangle2));
        assert_eq!(SectionElement::triangle(3), None);
    }
}
