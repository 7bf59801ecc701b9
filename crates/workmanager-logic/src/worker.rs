//! Read-only worker snapshot consumed by the pipeline.
//!
//! The engine builds one [`WorkerSnapshot`] per eligible colonist (free,
//! spawned) at the start of a run. The pipeline never mutates it.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::skills::SkillSet;
use crate::work_types::WorkTypeId;

/// Stable host identifier for a worker.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct WorkerId(pub u32);

/// Everything the pipeline needs to know about one worker.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkerSnapshot {
    pub id: WorkerId,
    /// Short display name, used only for logging.
    pub name: String,
    pub dead: bool,
    /// Downed: alive but unable to move or work.
    pub downed: bool,
    pub mental_break: bool,
    pub drafted: bool,
    /// No current job.
    pub idle: bool,
    /// Melee-focused trait; never assigned to hunting.
    pub brawler: bool,
    /// Work types the worker can never do.
    pub disabled: BTreeSet<WorkTypeId>,
    pub skills: SkillSet,
}

impl WorkerSnapshot {
    pub fn new(id: WorkerId, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            ..Default::default()
        }
    }

    pub fn with_skills(mut self, skills: SkillSet) -> Self {
        self.skills = skills;
        self
    }

    pub fn with_disabled(mut self, work_type: WorkTypeId) -> Self {
        self.disabled.insert(work_type);
        self
    }

    /// Dead or downed.
    pub fn is_incapacitated(&self) -> bool {
        self.dead || self.downed
    }

    /// Able to take normal assignments: not incapacitated, not in a mental break.
    pub fn is_active(&self) -> bool {
        !self.is_incapacitated() && !self.mental_break
    }

    /// Downed but alive, i.e. needs a doctor.
    pub fn is_patient(&self) -> bool {
        self.downed && !self.dead
    }

    pub fn is_disabled(&self, work_type: WorkTypeId) -> bool {
        self.disabled.contains(&work_type)
    }
}
