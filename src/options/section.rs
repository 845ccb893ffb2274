use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Skills Section", inline)]
#[serde(default)]
/// When the skills-section choreography starts.
pub struct SectionOptions {
    /// Fraction of the section's height that must be visible.
    #[schemars(title = "Visibility Threshold", range(min = 0.0, max = 1.0), extend("step" = 0.05))]
    pub visibility_threshold: f32,
    /// Pixels trimmed from every side of the viewport before measuring
    /// visibility.
    #[schemars(skip)]
    pub root_margin: f32,
}

impl Default for SectionOptions {
    fn default() -> Self {
        Self {
            visibility_threshold: 0.3,
            root_margin: 50.0,
        }
    }
}
