//! Player that ties the visibility trigger to the choreography timeline.

use super::choreography::{build_timeline, SectionElement};
use super::timeline::{Timeline, TweenStart};
use super::trigger::{Rect, VisibilityTrigger};
use super::tween::Transform2D;
use crate::options::SectionOptions;

/// Plays the skills-section choreography once, the first time the section
/// scrolls into view.
#[derive(Debug)]
pub struct SectionChoreography {
    trigger: VisibilityTrigger,
    timeline: Timeline<SectionElement>,
    started: bool,
}

impl SectionChoreography {
    /// Armed player; nothing moves until the trigger fires.
    #[must_use]
    pub fn new(options: &SectionOptions) -> Self {
        Self {
            trigger: VisibilityTrigger::from_options(options),
            timeline: build_timeline(),
            started: false,
        }
    }

    /// Feed the section's current bounds. Starts playback when the section
    /// first becomes visible enough; returns whether this call started it.
    pub fn observe(&mut self, section: &Rect, viewport: &Rect) -> bool {
        if self.started {
            if self.trigger.observe(section, viewport) {
                log::debug!("section visible again; choreography not replayed");
            }
            return false;
        }
        self.trigger.observe(section, viewport) && self.start()
    }

    /// Start playback directly. Returns `false` (and changes nothing) if
    /// playback already started.
    pub fn start(&mut self) -> bool {
        if self.started {
            log::debug!("section choreography already started; ignoring");
            return false;
        }
        self.started = true;
        for element in SectionElement::ALL {
            self.timeline.set(element, element.initial_transform());
        }
        log::info!(
            "section choreography started ({} keyframes, {:.1}s)",
            self.timeline.tweens().len(),
            self.timeline.duration()
        );
        true
    }

    /// Advance playback. Does nothing before the start.
    pub fn tick(&mut self, delta: f32) -> Vec<TweenStart<SectionElement>> {
        if !self.started {
            return Vec::new();
        }
        let was_finished = self.timeline.is_finished();
        let started = self.timeline.advance(delta);
        if !was_finished && self.timeline.is_finished() {
            log::info!(
                "section choreography finished at {:.2}s",
                self.timeline.playhead()
            );
        }
        started
    }

    /// Current transform of `element`. Before playback starts every element
    /// holds its initial transform.
    #[must_use]
    pub fn transform(&self, element: SectionElement) -> Transform2D {
        self.timeline
            .transform(element)
            .unwrap_or_else(|| element.initial_transform())
    }

    /// Whether playback has started.
    #[must_use]
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Whether playback has started and every keyframe has completed.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.started && self.timeline.is_finished()
    }

    /// Seconds played since the start.
    #[must_use]
    pub fn elapsed(&self) -> f32 {
        self.timeline.playhead()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Rect = Rect::new(0.0, 0.0, 1280.0, 800.0);
    const FRAME: f32 = 1.0 / 60.0;

    fn section_at(top: f32) -> Rect {
        Rect::new(0.0, top, 1280.0, 800.0)
    }

    #[test]
    fn waits_for_visibility() {
        let mut player = SectionChoreography::new(&SectionOptions::default());
        assert!(!player.observe(&section_at(900.0), &VIEWPORT));
        assert!(player.tick(1.0).is_empty());
        assert!(!player.is_started());
        assert_eq!(player.elapsed(), 0.0);
        assert_eq!(
            player.transform(SectionElement::Triangle1),
            SectionElement::Triangle1.initial_transform()
        );
    }

    #[test]
    fn plays_every_keyframe_once_and_never_replays() {
        let mut player = SectionChoreography::new(&SectionOptions::default());
        assert!(player.observe(&section_at(300.0), &VIEWPORT));
        assert!(player.is_started());

        let mut count = 0;
        let mut top = 300.0;
        for _ in 0..600 {
            // Scroll away and back while playing.
            top = if top > 0.0 { -900.0 } else { 300.0 };
            assert!(!player.observe(&section_at(top), &VIEWPORT));
            count += player.tick(FRAME).len();
        }
        assert_eq!(count, 14);
        assert!(player.is_finished());

        // Further frames and observations change nothing.
        let settled = player.transform(SectionElement::Triangle0);
        assert!(!player.observe(&section_at(0.0), &VIEWPORT));
        assert!(player.tick(FRAME).is_empty());
        assert_eq!(player.transform(SectionElement::Triangle0), settled);
    }

    #[test]
    fn direct_start_is_one_shot() {
        let mut player = SectionChoreography::new(&SectionOptions::default());
        assert!(player.start());
        let _ = player.tick(1.0);
        let mid = player.transform(SectionElement::CenterCircle);
        assert!(!player.start());
        assert_eq!(player.transform(SectionElement::CenterCircle), mid);
        assert!(!player.observe(&section_at(0.0), &VIEWPORT));
    }

    #[test]
    fn inner_wrapper_slides_in_first() {
        let mut player = SectionChoreography::new(&SectionOptions::default());
        assert!(player.start());
        let first = player.tick(FRAME);
        let targets: Vec<_> = first.iter().map(|s| s.target).collect();
        assert_eq!(
            targets,
            vec![SectionElement::InnerWrapper, SectionElement::Triangle0]
        );
        let _ = player.tick(0.5);
        assert_eq!(
            player.transform(SectionElement::InnerWrapper),
            Transform2D::at(77.0, 25.0)
        );
    }
}
