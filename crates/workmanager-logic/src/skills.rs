//! Skills, passions, and relevant-skill aggregation.
//!
//! Every colonist carries a level (0–20) and a passion for each of the
//! twelve skills. Work types name the skills relevant to them; the
//! pipeline only ever looks at those through two aggregates:
//!
//! - [`SkillSet::average_of_relevant`]: mean level across the relevant skills
//! - [`SkillSet::max_passion_of_relevant`]: strongest passion among them
//!
//! ```
//! use workmanager_logic::skills::{Passion, Skill, SkillSet};
//!
//! let mut skills = SkillSet::default();
//! skills.set_level(Skill::Crafting, 6.0);
//! skills.set_level(Skill::Artistic, 10.0);
//! skills.set_passion(Skill::Artistic, Passion::Minor);
//!
//! let relevant = [Skill::Crafting, Skill::Artistic];
//! assert_eq!(skills.average_of_relevant(&relevant), 8.0);
//! assert_eq!(skills.max_passion_of_relevant(&relevant), Passion::Minor);
//! ```

use serde::{Deserialize, Serialize};

/// Highest attainable skill level.
pub const MAX_SKILL_LEVEL: f32 = 20.0;

/// All skills a colonist can have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Skill {
    Shooting,
    Melee,
    Construction,
    Mining,
    Cooking,
    Plants,
    Animals,
    Crafting,
    Artistic,
    Medicine,
    Social,
    Intellectual,
}

impl Skill {
    /// All skills in order.
    pub const ALL: [Skill; 12] = [
        Skill::Shooting,
        Skill::Melee,
        Skill::Construction,
        Skill::Mining,
        Skill::Cooking,
        Skill::Plants,
        Skill::Animals,
        Skill::Crafting,
        Skill::Artistic,
        Skill::Medicine,
        Skill::Social,
        Skill::Intellectual,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

/// How much a colonist enjoys a skill.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Passion {
    #[default]
    None,
    Minor,
    Major,
}

/// Per-skill levels and passions for one colonist.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillSet {
    levels: [f32; 12],
    passions: [Passion; 12],
}

impl SkillSet {
    /// Current level of a skill (0.0–20.0).
    pub fn level(&self, skill: Skill) -> f32 {
        self.levels[skill.index()]
    }

    /// Passion for a skill.
    pub fn passion(&self, skill: Skill) -> Passion {
        self.passions[skill.index()]
    }

    /// Set a skill level (clamped to 0.0–20.0).
    pub fn set_level(&mut self, skill: Skill, level: f32) {
        self.levels[skill.index()] = level.clamp(0.0, MAX_SKILL_LEVEL);
    }

    pub fn set_passion(&mut self, skill: Skill, passion: Passion) {
        self.passions[skill.index()] = passion;
    }

    /// Builder-style variant of [`set_level`](Self::set_level) + [`set_passion`](Self::set_passion).
    pub fn with(mut self, skill: Skill, level: f32, passion: Passion) -> Self {
        self.set_level(skill, level);
        self.set_passion(skill, passion);
        self
    }

    /// Mean level over `relevant`. A work type with no relevant skills
    /// averages to 0.0.
    pub fn average_of_relevant(&self, relevant: &[Skill]) -> f32 {
        if relevant.is_empty() {
            return 0.0;
        }
        let total: f32 = relevant.iter().map(|&s| self.level(s)).sum();
        total / relevant.len() as f32
    }

    /// Strongest passion over `relevant`, `Passion::None` when empty.
    pub fn max_passion_of_relevant(&self, relevant: &[Skill]) -> Passion {
        relevant
            .iter()
            .map(|&s| self.passion(s))
            .max()
            .unwrap_or(Passion::None)
    }

    /// Whether this colonist leans toward ranged combat.
    ///
    /// True when shooting passion beats melee passion, or the passions tie
    /// and the shooting level is at least the melee level.
    pub fn prefers_ranged(&self) -> bool {
        let shooting = self.passion(Skill::Shooting);
        let melee = self.passion(Skill::Melee);
        shooting > melee
            || (shooting == melee && self.level(Skill::Shooting) >= self.level(Skill::Melee))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_of_relevant() {
        let skills = SkillSet::default()
            .with(Skill::Construction, 4.0, Passion::None)
            .with(Skill::Mining, 9.0, Passion::None);
        assert_eq!(
            skills.average_of_relevant(&[Skill::Construction, Skill::Mining]),
            6.5
        );
        assert_eq!(skills.average_of_relevant(&[Skill::Mining]), 9.0);
    }

    #[test]
    fn test_average_of_no_skills_is_zero() {
        let skills = SkillSet::default().with(Skill::Mining, 15.0, Passion::Major);
        assert_eq!(skills.average_of_relevant(&[]), 0.0);
    }

    #[test]
    fn test_level_clamped() {
        let mut skills = SkillSet::default();
        skills.set_level(Skill::Cooking, 35.0);
        assert_eq!(skills.level(Skill::Cooking), MAX_SKILL_LEVEL);
        skills.set_level(Skill::Cooking, -2.0);
        assert_eq!(skills.level(Skill::Cooking), 0.0);
    }

    #[test]
    fn test_max_passion() {
        let skills = SkillSet::default()
            .with(Skill::Plants, 3.0, Passion::Minor)
            .with(Skill::Animals, 3.0, Passion::Major);
        assert_eq!(
            skills.max_passion_of_relevant(&[Skill::Plants, Skill::Animals]),
            Passion::Major
        );
        assert_eq!(skills.max_passion_of_relevant(&[Skill::Plants]), Passion::Minor);
        assert_eq!(skills.max_passion_of_relevant(&[Skill::Social]), Passion::None);
        assert_eq!(skills.max_passion_of_relevant(&[]), Passion::None);
    }

    #[test]
    fn test_passion_ordering() {
        assert!(Passion::Major > Passion::Minor);
        assert!(Passion::Minor > Passion::None);
    }

    #[test]
    fn test_prefers_ranged() {
        // Passion wins regardless of level
        let s = SkillSet::default()
            .with(Skill::Shooting, 2.0, Passion::Minor)
            .with(Skill::Melee, 14.0, Passion::None);
        assert!(s.prefers_ranged());

        let s = SkillSet::default()
            .with(Skill::Shooting, 14.0, Passion::None)
            .with(Skill::Melee, 2.0, Passion::Minor);
        assert!(!s.prefers_ranged());

        // Equal passion falls back to level, ties go to shooting
        let s = SkillSet::default()
            .with(Skill::Shooting, 7.0, Passion::Major)
            .with(Skill::Melee, 7.0, Passion::Major);
        assert!(s.prefers_ranged());

        let s = SkillSet::default()
            .with(Skill::Shooting, 6.0, Passion::None)
            .with(Skill::Melee, 7.0, Passion::None);
        assert!(!s.prefers_ranged());
    }

    #[test]
    fn test_all_skills_distinct_indices() {
        for (i, skill) in Skill::ALL.iter().enumerate() {
            assert_eq!(skill.index(), i);
        }
    }
}
