//! Work-related components: WorkSettings, PrioritiesChanged.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use workmanager_logic::constants::priorities;
use workmanager_logic::work_types::WorkTypeId;

/// A colonist's work priority table and hard-disabled work types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkSettings {
    priorities: Vec<u8>,
    disabled: BTreeSet<WorkTypeId>,
}

impl WorkSettings {
    /// Everything disabled, nothing hard-disabled.
    pub fn new(work_type_count: usize) -> Self {
        Self {
            priorities: vec![priorities::DISABLED; work_type_count],
            disabled: BTreeSet::new(),
        }
    }

    pub fn with_disabled(mut self, work_type: WorkTypeId) -> Self {
        self.disabled.insert(work_type);
        self
    }

    pub fn priority(&self, work_type: WorkTypeId) -> u8 {
        self.priorities
            .get(work_type.index())
            .copied()
            .unwrap_or(priorities::DISABLED)
    }

    pub fn priorities(&self) -> &[u8] {
        &self.priorities
    }

    /// Set one priority. Hard-disabled work types always stay at 0.
    pub fn set_priority(&mut self, work_type: WorkTypeId, priority: u8) {
        let value = if self.is_disabled(work_type) {
            priorities::DISABLED
        } else {
            priority.min(priorities::LOWEST)
        };
        if let Some(slot) = self.priorities.get_mut(work_type.index()) {
            *slot = value;
        }
    }

    /// Replace the whole table, e.g. with a pipeline row.
    pub fn replace_all(&mut self, new_priorities: &[u8]) {
        self.priorities.clear();
        self.priorities.extend_from_slice(new_priorities);
        for wt in &self.disabled {
            if let Some(slot) = self.priorities.get_mut(wt.index()) {
                *slot = priorities::DISABLED;
            }
        }
    }

    pub fn disable_all(&mut self) {
        self.priorities.fill(priorities::DISABLED);
    }

    pub fn is_disabled(&self, work_type: WorkTypeId) -> bool {
        self.disabled.contains(&work_type)
    }

    pub fn disabled(&self) -> &BTreeSet<WorkTypeId> {
        &self.disabled
    }
}

/// Marker: priorities were rewritten since the host last looked.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PrioritiesChanged;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_stays_zero() {
        let mut settings = WorkSettings::new(3).with_disabled(WorkTypeId(1));
        settings.set_priority(WorkTypeId(1), 2);
        settings.set_priority(WorkTypeId(2), 3);
        assert_eq!(settings.priority(WorkTypeId(1)), 0);
        assert_eq!(settings.priority(WorkTypeId(2)), 3);

        settings.replace_all(&[1, 1, 1]);
        assert_eq!(settings.priorities(), &[1, 0, 1]);
    }

    #[test]
    fn test_priority_clamped_and_out_of_range_ignored() {
        let mut settings = WorkSettings::new(2);
        settings.set_priority(WorkTypeId(0), 9);
        assert_eq!(settings.priority(WorkTypeId(0)), 4);
        settings.set_priority(WorkTypeId(5), 1);
        assert_eq!(settings.priority(WorkTypeId(5)), 0);
    }

    #[test]
    fn test_disable_all() {
        let mut settings = WorkSettings::new(2);
        settings.replace_all(&[2, 3]);
        settings.disable_all();
        assert_eq!(settings.priorities(), &[0, 0]);
    }
}
