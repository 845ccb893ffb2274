//! Keyframe timeline for one-shot choreography.
//!
//! Tweens are placed at absolute start times and played forward only. Each
//! tween starts exactly once, captures its "from" values from the element's
//! transform at that moment, and writes its exact end values when it
//! retires. Starts are processed in start-time order, ties broken by
//! declaration order, and a long frame is split at every start so a tween
//! always sees the values its predecessors left behind.

use std::fmt::Debug;
use std::hash::Hash;

use rustc_hash::FxHashMap;

use super::tween::{Transform2D, Tween};

/// Record of a tween starting, returned from [`Timeline::advance`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenStart<K> {
    /// Position of the tween in declaration order.
    pub index: usize,
    /// Element the tween animates.
    pub target: K,
    /// Scheduled start time.
    pub start: f32,
}

/// A started tween that has not yet reached its end.
#[derive(Debug, Clone, Copy)]
struct RunningTween {
    index: usize,
    from: Transform2D,
}

/// Forward-only timeline of [`Tween`]s over elements keyed by `K`.
pub struct Timeline<K> {
    /// Tweens in declaration order.
    tweens: Vec<Tween<K>>,
    /// Indices into `tweens`, sorted by start time (stable).
    schedule: Vec<usize>,
    /// Next entry of `schedule` to start.
    next: usize,
    /// Started tweens in start order.
    running: Vec<RunningTween>,
    /// Current transform of every element touched so far.
    transforms: FxHashMap<K, Transform2D>,
    playhead: f32,
}

impl<K: Copy + Eq + Hash + Debug> Default for Timeline<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Copy + Eq + Hash + Debug> Timeline<K> {
    /// Create an empty timeline with the playhead at 0.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tweens: Vec::with_capacity(16),
            schedule: Vec::with_capacity(16),
            next: 0,
            running: Vec::with_capacity(8),
            transforms: FxHashMap::default(),
            playhead: 0.0,
        }
    }

    /// Set an element's transform immediately, outside any tween.
    pub fn set(&mut self, target: K, transform: Transform2D) {
        let _ = self.transforms.insert(target, transform);
    }

    /// Schedule a tween. Tweens whose start time the playhead has already
    /// passed begin on the next [`advance`](Self::advance).
    pub fn add(&mut self, tween: Tween<K>) -> &mut Self {
        let index = self.tweens.len();
        self.tweens.push(tween);
        self.schedule.push(index);
        let tweens = &self.tweens;
        self.schedule[self.next..].sort_by(|&a, &b| {
            tweens[a]
                .start
                .total_cmp(&tweens[b].start)
                .then(a.cmp(&b))
        });
        self
    }

    /// Tweens in declaration order.
    #[must_use]
    pub fn tweens(&self) -> &[Tween<K>] {
        &self.tweens
    }

    /// Time at which the last tween ends.
    #[must_use]
    pub fn duration(&self) -> f32 {
        self.tweens.iter().map(Tween::end).fold(0.0, f32::max)
    }

    /// Seconds played so far.
    #[must_use]
    pub fn playhead(&self) -> f32 {
        self.playhead
    }

    /// Whether every tween has started and retired.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.next == self.schedule.len() && self.running.is_empty()
    }

    /// Current transform of `target`, if it has been set or animated.
    #[must_use]
    pub fn transform(&self, target: K) -> Option<Transform2D> {
        self.transforms.get(&target).copied()
    }

    /// Move the playhead forward by `delta` seconds and update every running
    /// tween. Returns the tweens that started during this step, in start
    /// order. Non-positive or non-finite deltas do nothing.
    pub fn advance(&mut self, delta: f32) -> Vec<TweenStart<K>> {
        let mut started = Vec::new();
        if !delta.is_finite() || delta <= 0.0 {
            return started;
        }
        let until = self.playhead + delta;

        while let Some(&index) = self.schedule.get(self.next) {
            let start = self.tweens[index].start;
            if start > until {
                break;
            }
            // Bring running tweens up to the start instant first so the new
            // tween captures the values they leave behind.
            self.render_running(start.max(self.playhead));
            self.next += 1;

            let tween = &self.tweens[index];
            let from = self
                .transforms
                .get(&tween.target)
                .copied()
                .unwrap_or(Transform2D::IDENTITY);
            self.running.push(RunningTween { index, from });
            log::debug!(
                "timeline: tween #{index} on {:?} started at {start:.2}s",
                tween.target
            );
            started.push(TweenStart {
                index,
                target: tween.target,
                start,
            });
        }

        self.render_running(until);
        self.playhead = until;
        started
    }

    /// Write every running tween's value at `time`, retiring the ones that
    /// have reached their end.
    fn render_running(&mut self, time: f32) {
        let tweens = &self.tweens;
        let transforms = &mut self.transforms;
        self.running.retain(|running| {
            let tween = &tweens[running.index];
            let t = tween.progress(time);
            let value = if t >= 1.0 {
                tween.to.apply(&running.from)
            } else {
                tween.to.blend(&running.from, tween.easing.evaluate(t))
            };
            let _ = transforms.insert(tween.target, value);
            t < 1.0
        });
    }
}

impl<K> Debug for Timeline<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Timeline")
            .field("tweens", &self.tweens.len())
            .field("started", &self.next)
            .field("running", &self.running.len())
            .field("playhead", &self.playhead)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::tween::TransformPatch;
    use crate::util::easing::EasingFunction;

    fn linear(target: u8, x: f32) -> Tween<u8> {
        Tween::to(target, TransformPatch::position(x, 0.0))
            .eased(EasingFunction::Linear)
    }

    #[test]
    fn test_timeline_new() {
        let timeline: Timeline<u8> = Timeline::new();
        assert!(timeline.is_finished());
        assert_eq!(timeline.duration(), 0.0);
        assert_eq!(timeline.transform(0), None);
    }

    #[test]
    fn test_interpolates_linearly() {
        let mut timeline = Timeline::new();
        let _ = timeline.add(linear(0, 100.0).lasting(1.0));

        let started = timeline.advance(0.25);
        assert_eq!(started.len(), 1);
        let t = timeline.transform(0).unwrap();
        assert!((t.x - 25.0).abs() < 1e-4);
        assert!(!timeline.is_finished());

        assert!(timeline.advance(2.0).is_empty());
        assert_eq!(timeline.transform(0).unwrap().x, 100.0);
        assert!(timeline.is_finished());
    }

    #[test]
    fn test_starts_in_time_order_with_stable_ties() {
        let mut timeline = Timeline::new();
        let _ = timeline
            .add(linear(0, 1.0).at(2.0))
            .add(linear(1, 1.0).at(0.0))
            .add(linear(2, 1.0).at(2.0))
            .add(linear(3, 1.0).at(1.0));

        let mut order = Vec::new();
        while !timeline.is_finished() {
            order.extend(timeline.advance(0.1).into_iter().map(|s| s.index));
        }
        assert_eq!(order, vec![1, 3, 0, 2]);
    }

    #[test]
    fn test_each_tween_starts_once() {
        let mut timeline = Timeline::new();
        for i in 0..5u8 {
            let _ = timeline.add(linear(i, 10.0).at(f32::from(i) * 0.3));
        }
        let mut count = 0;
        for _ in 0..1000 {
            count += timeline.advance(0.01).len();
        }
        assert_eq!(count, 5);
    }

    #[test]
    fn test_long_frame_chains_tweens_on_same_target() {
        let mut timeline = Timeline::new();
        timeline.set(0, Transform2D::at(0.0, 0.0));
        let _ = timeline
            .add(linear(0, 100.0).lasting(1.0))
            .add(linear(0, 50.0).at(2.0).lasting(1.0));

        // Jump past both starts in one step; the second tween must still
        // start from the first tween's end value.
        let started = timeline.advance(2.5);
        assert_eq!(started.len(), 2);
        let t = timeline.transform(0).unwrap();
        assert!((t.x - 75.0).abs() < 1e-4, "got {}", t.x);
    }

    #[test]
    fn test_from_values_captured_at_start() {
        let mut timeline = Timeline::new();
        timeline.set(7, Transform2D::at(10.0, 0.0).with_opacity(0.0));
        let _ = timeline.add(
            Tween::to(7, TransformPatch::position(20.0, 0.0).opacity(1.0))
                .at(1.0)
                .lasting(1.0)
                .eased(EasingFunction::Linear),
        );
        let _ = timeline.advance(0.5);
        // Not started yet: untouched.
        assert_eq!(timeline.transform(7).unwrap().x, 10.0);
        // Host moves the element before the tween starts.
        timeline.set(7, Transform2D::at(0.0, 0.0).with_opacity(0.0));
        let _ = timeline.advance(1.0);
        let t = timeline.transform(7).unwrap();
        assert!((t.x - 10.0).abs() < 1e-4);
        assert!((t.opacity - 0.5).abs() < 1e-4);
    }

    #[test]
    fn test_untouched_fields_survive() {
        let mut timeline = Timeline::new();
        timeline.set(0, Transform2D::at(5.0, 5.0).rotated(125.0));
        let _ = timeline.add(
            Tween::to(0, TransformPatch::default().scale(0.7)).lasting(0.1),
        );
        let _ = timeline.advance(1.0);
        let t = timeline.transform(0).unwrap();
        assert_eq!(t, Transform2D::at(5.0, 5.0).rotated(125.0).scaled(0.7));
    }

    #[test]
    fn test_paused_frames_do_nothing() {
        let mut timeline = Timeline::new();
        let _ = timeline.add(linear(0, 1.0));
        for delta in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            assert!(timeline.advance(delta).is_empty());
        }
        assert_eq!(timeline.playhead(), 0.0);
        assert_eq!(timeline.transform(0), None);
    }

    #[test]
    fn test_duration_is_latest_end() {
        let mut timeline = Timeline::new();
        let _ = timeline
            .add(linear(0, 1.0).at(1.0).lasting(2.0))
            .add(linear(1, 1.0).at(0.5).lasting(0.3));
        assert!((timeline.duration() - 3.0).abs() < 1e-6);
    }
}
