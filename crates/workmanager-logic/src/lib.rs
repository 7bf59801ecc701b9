//! Pure work priority assignment logic for WorkManager.
//!
//! This crate contains the rule pipeline that recomputes every colonist's
//! work priorities, independent of any ECS, engine, or storage. Functions
//! take plain snapshots and return plain tables, making them unit-testable
//! and reusable from the hecs engine, the headless harness, and benchmarks.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`catalog`] | Classification of the work-type universe into named sets |
//! | [`config`] | Immutable per-run assignment configuration |
//! | [`constants`] | Priority levels and well-known work-type keys |
//! | [`pipeline`] | The ordered rule passes producing a [`PriorityTable`] |
//! | [`priorities`] | Worker × work-type priority table |
//! | [`schedule`] | Tick stagger and hour-change debounce |
//! | [`skills`] | Skills, passions, and relevant-skill aggregation |
//! | [`work_types`] | Host work-type definitions and dense ids |
//! | [`worker`] | Read-only worker snapshot consumed by the pipeline |
//!
//! # Example
//!
//! ```
//! use workmanager_logic::catalog::WorkCatalog;
//! use workmanager_logic::config::AssignmentConfig;
//! use workmanager_logic::pipeline::assign_priorities;
//! use workmanager_logic::skills::{Skill, SkillSet};
//! use workmanager_logic::work_types::WorkTypeDef;
//! use workmanager_logic::worker::{WorkerId, WorkerSnapshot};
//!
//! let catalog = WorkCatalog::new(vec![
//!     WorkTypeDef::new("Doctor", "doctor", &[Skill::Medicine]),
//!     WorkTypeDef::new("Cooking", "cook", &[Skill::Cooking]),
//! ])
//! .unwrap();
//!
//! let mut skills = SkillSet::default();
//! skills.set_level(Skill::Medicine, 8.0);
//! let worker = WorkerSnapshot::new(WorkerId(1), "Ada").with_skills(skills);
//!
//! let table = assign_priorities(&[worker], &catalog, &AssignmentConfig::default());
//! let doctor = catalog.medical().unwrap();
//! assert_eq!(table.get(WorkerId(1), doctor), Some(1));
//! ```

pub mod catalog;
pub mod config;
pub mod constants;
pub mod pipeline;
pub mod priorities;
pub mod schedule;
pub mod skills;
pub mod work_types;
pub mod worker;

pub use catalog::WorkCatalog;
pub use config::AssignmentConfig;
pub use priorities::PriorityTable;
