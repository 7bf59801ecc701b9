//! Worker × work-type priority table.
//!
//! The pipeline's output. One row per worker in snapshot order, one `u8`
//! per work type in catalog order. 0 means disabled, 1 is the highest
//! priority and 4 the lowest.

use serde::{Deserialize, Serialize};

use crate::constants::priorities;
use crate::work_types::WorkTypeId;
use crate::worker::WorkerId;

/// Priorities for a single worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityRow {
    pub worker: WorkerId,
    priorities: Vec<u8>,
}

impl PriorityRow {
    fn new(worker: WorkerId, work_type_count: usize) -> Self {
        Self {
            worker,
            priorities: vec![priorities::DISABLED; work_type_count],
        }
    }

    pub fn get(&self, work_type: WorkTypeId) -> u8 {
        self.priorities[work_type.index()]
    }

    /// All priorities, indexed by work type id.
    pub fn as_slice(&self) -> &[u8] {
        &self.priorities
    }

    /// Number of work types in `domain` with a non-zero priority.
    pub fn assigned_count(&self, domain: &[WorkTypeId]) -> usize {
        domain
            .iter()
            .filter(|&&wt| self.get(wt) != priorities::DISABLED)
            .count()
    }
}

/// Full result of one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityTable {
    work_type_count: usize,
    rows: Vec<PriorityRow>,
}

impl PriorityTable {
    /// A table with every priority disabled.
    pub fn new(workers: impl IntoIterator<Item = WorkerId>, work_type_count: usize) -> Self {
        Self {
            work_type_count,
            rows: workers
                .into_iter()
                .map(|w| PriorityRow::new(w, work_type_count))
                .collect(),
        }
    }

    pub fn work_type_count(&self) -> usize {
        self.work_type_count
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[PriorityRow] {
        &self.rows
    }

    pub fn row(&self, worker: WorkerId) -> Option<&PriorityRow> {
        self.rows.iter().find(|r| r.worker == worker)
    }

    /// Priority of a worker for a work type, `None` for an unknown worker.
    pub fn get(&self, worker: WorkerId, work_type: WorkTypeId) -> Option<u8> {
        self.row(worker).map(|r| r.get(work_type))
    }

    /// Number of workers with a non-zero priority for `work_type`.
    pub fn workers_assigned(&self, work_type: WorkTypeId) -> usize {
        self.rows
            .iter()
            .filter(|r| r.get(work_type) != priorities::DISABLED)
            .count()
    }

    pub(crate) fn at(&self, row: usize, work_type: WorkTypeId) -> u8 {
        self.rows[row].get(work_type)
    }

    pub(crate) fn set(&mut self, row: usize, work_type: WorkTypeId, priority: u8) {
        debug_assert!(priorities::is_valid(priority));
        self.rows[row].priorities[work_type.index()] = priority;
    }

    pub(crate) fn row_at(&self, row: usize) -> &PriorityRow {
        &self.rows[row]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_table_is_disabled() {
        let table = PriorityTable::new([WorkerId(1), WorkerId(2)], 3);
        assert_eq!(table.len(), 2);
        assert_eq!(table.work_type_count(), 3);
        for row in table.rows() {
            assert!(row.as_slice().iter().all(|&p| p == 0));
        }
    }

    #[test]
    fn test_set_and_counts() {
        let mut table = PriorityTable::new([WorkerId(1), WorkerId(2)], 3);
        table.set(0, WorkTypeId(1), 2);
        table.set(1, WorkTypeId(1), 4);
        table.set(1, WorkTypeId(2), 1);

        assert_eq!(table.get(WorkerId(1), WorkTypeId(1)), Some(2));
        assert_eq!(table.get(WorkerId(9), WorkTypeId(1)), None);
        assert_eq!(table.workers_assigned(WorkTypeId(1)), 2);
        assert_eq!(table.workers_assigned(WorkTypeId(0)), 0);

        let row = table.row(WorkerId(2)).unwrap();
        assert_eq!(row.assigned_count(&[WorkTypeId(0), WorkTypeId(1), WorkTypeId(2)]), 2);
        assert_eq!(row.assigned_count(&[WorkTypeId(2)]), 1);
    }
}
