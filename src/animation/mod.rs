//! Keyframe animation for the skills section.
//!
//! [`Tween`]s move one element's [`Transform2D`] toward a target over time.
//! A [`Timeline`] schedules them, [`choreography`] holds the section's
//! keyframe table, and [`SectionChoreography`] plays it once when the
//! [`VisibilityTrigger`] fires.

pub mod choreography;
mod section;
mod timeline;
mod trigger;
mod tween;

pub use choreography::SectionElement;
pub use section::SectionChoreography;
pub use timeline::{Timeline, TweenStart};
pub use trigger::{visible_fraction, Rect, VisibilityTrigger};
pub use tween::{Transform2D, TransformPatch, Tween, DEFAULT_TWEEN_DURATION};
