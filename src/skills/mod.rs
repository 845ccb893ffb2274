//! Skills showcase data: the skill-group catalogue, the progress-ring
//! geometry for each skill, and where a group's tech icons sit inside its
//! triangle.

pub mod layout;
pub mod ring;

pub use layout::{icon_positions, IconPosition};
pub use ring::{ProgressRing, RevealDelays};

use crate::error::FolioError;

/// One skill and how confident the author is in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    /// Display name.
    pub name: &'static str,
    /// Proficiency in percent (0..=100).
    pub percentage: u8,
}

/// A triangle of the showcase: a titled group of related skills.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillGroup {
    /// Identifier, starting at 1.
    pub id: u32,
    /// Heading shown while the group is selected.
    pub title: &'static str,
    /// Icon asset names drawn inside the triangle.
    pub tech_icons: &'static [&'static str],
    /// Skills drawn as progress rings.
    pub skills: &'static [Skill],
}

impl SkillGroup {
    /// Progress ring for every skill, in display order.
    #[must_use]
    pub fn rings(&self) -> Vec<ProgressRing> {
        self.skills
            .iter()
            .map(|skill| ProgressRing::new(skill.percentage))
            .collect()
    }

    /// Positions of the tech icons inside the triangle.
    #[must_use]
    pub fn icon_positions(&self) -> Vec<IconPosition> {
        icon_positions(self.tech_icons.len())
    }
}

const fn skill(name: &'static str, percentage: u8) -> Skill {
    Skill { name, percentage }
}

/// The built-in catalogue.
pub static CATALOGUE: [SkillGroup; 3] = [
    SkillGroup {
        id: 1,
        title: "Full Stack Development",
        tech_icons: &["MongoDB", "ex", "React", "Node.js"],
        skills: &[
            skill("MongoDB", 85),
            skill("Express", 80),
            skill("React", 95),
            skill("Node.js", 88),
        ],
    },
    SkillGroup {
        id: 2,
        title: "Frontend Technologies",
        tech_icons: &["next", "Tailwind", "TypeScript"],
        skills: &[
            skill("Next.js", 90),
            skill("Tailwind", 92),
            skill("TypeScript", 87),
        ],
    },
    SkillGroup {
        id: 3,
        title: "Development Tools",
        tech_icons: &["gitt", "verc", "framer-motion"],
        skills: &[
            skill("Git", 93),
            skill("Vercel", 85),
            skill("Framer Motion", 78),
        ],
    },
];

/// Look up a group by id.
#[must_use]
pub fn group(id: u32) -> Option<&'static SkillGroup> {
    CATALOGUE.iter().find(|group| group.id == id)
}

/// The showcase state: which group is currently selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillShowcase {
    selected: u32,
}

impl Default for SkillShowcase {
    fn default() -> Self {
        Self::new()
    }
}

impl SkillShowcase {
    /// Showcase with the first group selected.
    #[must_use]
    pub const fn new() -> Self {
        Self { selected: 1 }
    }

    /// Id of the selected group.
    #[must_use]
    pub const fn selected_id(&self) -> u32 {
        self.selected
    }

    /// The selected group.
    #[must_use]
    pub fn selected(&self) -> &'static SkillGroup {
        group(self.selected).unwrap_or(&CATALOGUE[0])
    }

    /// Select a group (a click on its triangle). Unknown ids leave the
    /// selection unchanged.
    pub fn select(&mut self, id: u32) -> Result<&'static SkillGroup, FolioError> {
        let group = group(id).ok_or(FolioError::UnknownSkillGroup(id))?;
        if self.selected != id {
            log::debug!("skill group {id} selected: {}", group.title);
            self.selected = id;
        }
        Ok(group)
    }
}
