//! Work priority assignment pipeline.
//!
//! A deterministic sequence of rule passes over a snapshot of eligible
//! workers. Every pass after the reset only raises a worker from priority 0,
//! except the mental-break pass which overrides.
//!
//! | # | Pass | Priority |
//! |---|------|----------|
//! | 1 | Reset: disable everything, always-on types for non-incapacitated | 1 |
//! | 2 | Doctors: top medical skill (ties win), plus extra doctors per patient | 1 |
//! | 3 | Hunters: top hunting skill among ranged-leaning non-brawlers | 1 |
//! | 4 | Skill: top average relevant skill per skilled general type | 1 |
//! | 5 | Passion: major / minor passion for remaining general types | 2 / 3 |
//! | 6 | Leftover: cover unassigned general types (or all, by config) | 4 |
//! | 6b | Always-include hauling / cleaning | 4 |
//! | 7 | Idle: idle undrafted workers get every remaining general type | 4 |
//! | 8 | Mental break: fallback types 2, other non-medical types 3 | 2 / 3 |
//!
//! Publishing the table back to the host (notifying each worker) is the
//! engine's job; this module is a pure function of its inputs.
//!
//! Skill thresholds use `floor(max average)`, so everyone within the same
//! whole skill level as the best candidate wins: ties are inclusive.

use std::cmp::Ordering;

use crate::catalog::WorkCatalog;
use crate::config::AssignmentConfig;
use crate::constants::priorities;
use crate::priorities::PriorityTable;
use crate::skills::Passion;
use crate::work_types::WorkTypeId;
use crate::worker::WorkerSnapshot;

/// Run every pass over `workers` and return the resulting table.
///
/// Rows follow the order of `workers`; that order also breaks ties where a
/// single worker must be chosen. An empty slice yields an empty table.
pub fn assign_priorities(
    workers: &[WorkerSnapshot],
    catalog: &WorkCatalog,
    config: &AssignmentConfig,
) -> PriorityTable {
    let mut table = PriorityTable::new(workers.iter().map(|w| w.id), catalog.len());
    if workers.is_empty() {
        return table;
    }

    let mut run = Run {
        workers,
        catalog,
        table: &mut table,
    };
    run.reset();
    run.assign_doctors(config);
    run.assign_hunters();
    run.assign_by_skill();
    run.assign_by_passion();
    run.assign_leftovers(config);
    run.assign_haulers_and_cleaners(config);
    run.assign_idle();
    run.assign_mental_break();

    table
}

/// Shared state for one pipeline run.
struct Run<'a> {
    workers: &'a [WorkerSnapshot],
    catalog: &'a WorkCatalog,
    table: &'a mut PriorityTable,
}

impl Run<'_> {
    fn set(&mut self, row: usize, work_type: WorkTypeId, priority: u8, reason: &str) {
        log::debug!(
            "Setting {}'s priority of '{}' to {} ({})",
            self.workers[row].name,
            self.catalog.label(work_type),
            priority,
            reason
        );
        self.table.set(row, work_type, priority);
    }

    fn is_unassigned(&self, row: usize, work_type: WorkTypeId) -> bool {
        self.table.at(row, work_type) == priorities::DISABLED
    }

    /// Row indices of workers able to take normal assignments.
    fn active_rows(&self) -> Vec<usize> {
        self.workers
            .iter()
            .enumerate()
            .filter(|(_, w)| w.is_active())
            .map(|(row, _)| row)
            .collect()
    }

    /// Active workers not disabled for `work_type`, paired with their
    /// average relevant skill for it.
    fn skill_candidates(&self, work_type: WorkTypeId) -> Vec<(usize, f32)> {
        let relevant = &self.catalog.def(work_type).relevant_skills;
        self.workers
            .iter()
            .enumerate()
            .filter(|(_, w)| w.is_active() && !w.is_disabled(work_type))
            .map(|(row, w)| (row, w.skills.average_of_relevant(relevant)))
            .collect()
    }

    /// Give priority 1 to every candidate at or above the floored maximum.
    /// Returns how many were assigned. Callers must check emptiness first.
    fn assign_top_skilled(
        &mut self,
        work_type: WorkTypeId,
        candidates: &[(usize, f32)],
        reason: &str,
    ) -> usize {
        let max_skill = floored_max(candidates);
        log::trace!(
            "Max {} skill value = {}",
            self.catalog.label(work_type),
            max_skill
        );

        let mut assigned = 0;
        for &(row, skill) in candidates {
            if skill >= max_skill && self.is_unassigned(row, work_type) {
                self.set(row, work_type, priorities::HIGHEST, reason);
                assigned += 1;
            }
        }
        assigned
    }

    // ── 1. Reset ───────────────────────────────────────────────────────

    fn reset(&mut self) {
        for (row, worker) in self.workers.iter().enumerate() {
            log::trace!("Resetting work priorities for '{}'", worker.name);
            if worker.is_incapacitated() {
                continue;
            }
            for &work_type in self.catalog.always_on_types() {
                if !worker.is_disabled(work_type) {
                    self.table.set(row, work_type, priorities::HIGHEST);
                }
            }
        }
    }

    // ── 2. Doctors ─────────────────────────────────────────────────────

    fn assign_doctors(&mut self, config: &AssignmentConfig) {
        let Some(doctor) = self.catalog.medical() else {
            return;
        };
        let candidates = self.skill_candidates(doctor);
        if candidates.is_empty() {
            return;
        }

        let mut doctor_count = self.assign_top_skilled(doctor, &candidates, "doctor");
        if !config.assign_multiple_doctors {
            return;
        }

        let patient_count = self.workers.iter().filter(|w| w.is_patient()).count();
        log::trace!("Patient count = {}", patient_count);

        // Stable sort keeps snapshot order among equally skilled candidates.
        let mut by_skill = candidates;
        by_skill.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

        while doctor_count < patient_count {
            let Some(&(row, _)) = by_skill
                .iter()
                .find(|(row, _)| self.is_unassigned(*row, doctor))
            else {
                break;
            };
            self.set(row, doctor, priorities::HIGHEST, "extra doctor");
            doctor_count += 1;
        }
    }

    // ── 3. Hunters ─────────────────────────────────────────────────────

    fn assign_hunters(&mut self) {
        let Some(hunting) = self.catalog.hunting() else {
            return;
        };
        let candidates: Vec<(usize, f32)> = self
            .skill_candidates(hunting)
            .into_iter()
            .filter(|&(row, _)| {
                let worker = &self.workers[row];
                !worker.brawler && worker.skills.prefers_ranged()
            })
            .collect();
        if candidates.is_empty() {
            return;
        }

        self.assign_top_skilled(hunting, &candidates, "hunter");
    }

    // ── 4. Skill ───────────────────────────────────────────────────────

    fn assign_by_skill(&mut self) {
        if !self.workers.iter().any(|w| w.is_active()) {
            return;
        }
        let catalog = self.catalog;
        for &work_type in catalog.skilled_general_types() {
            let candidates = self.skill_candidates(work_type);
            if candidates.is_empty() {
                continue;
            }
            self.assign_top_skilled(work_type, &candidates, "skill");
        }
    }

    // ── 5. Passion ─────────────────────────────────────────────────────

    fn assign_by_passion(&mut self) {
        let (workers, catalog) = (self.workers, self.catalog);
        for row in self.active_rows() {
            let worker = &workers[row];
            for &work_type in catalog.general_types() {
                if worker.is_disabled(work_type) || !self.is_unassigned(row, work_type) {
                    continue;
                }
                let relevant = &catalog.def(work_type).relevant_skills;
                match worker.skills.max_passion_of_relevant(relevant) {
                    Passion::Major => {
                        self.set(row, work_type, priorities::MAJOR_PASSION, "major passion")
                    }
                    Passion::Minor => {
                        self.set(row, work_type, priorities::MINOR_PASSION, "minor passion")
                    }
                    Passion::None => {}
                }
            }
        }
    }

    // ── 6. Leftover ────────────────────────────────────────────────────

    fn assign_leftovers(&mut self, config: &AssignmentConfig) {
        let active = self.active_rows();
        if active.is_empty() {
            return;
        }
        let (workers, catalog) = (self.workers, self.catalog);
        let domain = catalog.general_types();

        if config.assign_all_work_types {
            for &row in &active {
                for &work_type in domain {
                    if !workers[row].is_disabled(work_type) && self.is_unassigned(row, work_type)
                    {
                        self.set(row, work_type, priorities::LOWEST, "assign all");
                    }
                }
            }
            return;
        }

        for &work_type in domain {
            let covered = active
                .iter()
                .any(|&row| !self.is_unassigned(row, work_type));
            if covered {
                continue;
            }
            // First minimum wins, so snapshot order breaks ties.
            let least_busy = active
                .iter()
                .copied()
                .filter(|&row| !workers[row].is_disabled(work_type))
                .min_by_key(|&row| self.table.row_at(row).assigned_count(domain));
            if let Some(row) = least_busy {
                self.set(row, work_type, priorities::LOWEST, "leftover");
            }
        }
    }

    // ── 6b. Always-include hauling / cleaning ──────────────────────────

    fn assign_haulers_and_cleaners(&mut self, config: &AssignmentConfig) {
        let toggles = [
            (config.all_haulers, self.catalog.hauling(), "all haulers"),
            (config.all_cleaners, self.catalog.cleaning(), "all cleaners"),
        ];
        for (enabled, work_type, reason) in toggles {
            let Some(work_type) = work_type.filter(|_| enabled) else {
                continue;
            };
            for row in self.active_rows() {
                if !self.workers[row].is_disabled(work_type) && self.is_unassigned(row, work_type)
                {
                    self.set(row, work_type, priorities::LOWEST, reason);
                }
            }
        }
    }

    // ── 7. Idle ────────────────────────────────────────────────────────

    fn assign_idle(&mut self) {
        let idle: Vec<usize> = self
            .active_rows()
            .into_iter()
            .filter(|&row| {
                let worker = &self.workers[row];
                worker.idle && !worker.drafted
            })
            .collect();

        let (workers, catalog) = (self.workers, self.catalog);
        for row in idle {
            for &work_type in catalog.general_types() {
                if !workers[row].is_disabled(work_type) && self.is_unassigned(row, work_type) {
                    self.set(row, work_type, priorities::LOWEST, "idle");
                }
            }
        }
    }

    // ── 8. Mental break ────────────────────────────────────────────────

    fn assign_mental_break(&mut self) {
        let (workers, catalog) = (self.workers, self.catalog);
        let medical = catalog.medical();
        for (row, worker) in workers.iter().enumerate() {
            if worker.is_incapacitated() || !worker.mental_break {
                continue;
            }
            for work_type in catalog.all() {
                if catalog.is_always_on(work_type)
                    || Some(work_type) == medical
                    || worker.is_disabled(work_type)
                {
                    continue;
                }
                let priority = if catalog.is_fallback(work_type) {
                    priorities::MENTAL_FALLBACK
                } else {
                    priorities::MENTAL_OTHER
                };
                self.set(row, work_type, priority, "mental break");
            }
        }
    }
}

/// `floor` of the highest skill among `candidates`.
fn floored_max(candidates: &[(usize, f32)]) -> f32 {
    candidates
        .iter()
        .map(|&(_, skill)| skill)
        .fold(f32::NEG_INFINITY, f32::max)
        .floor()
}
