//! WorkManager Core - Colony Work Priority Engine
//!
//! Runs the work priority pipeline from `workmanager-logic` against colonies
//! stored as `hecs` worlds, one world per colony map.
//!
//! # Architecture
//!
//! - **Components**: Pure data attached to colonist entities (Colonist,
//!   Condition, SkillSet, WorkSettings, etc.)
//! - **Systems**: Snapshot colonists, run the pipeline, write priorities back
//!   and mark changed colonists with [`PrioritiesChanged`](components::PrioritiesChanged)
//! - **Engine**: Advances the simulation clock and decides when each map
//!   recomputes (staggered check tick + in-game hour change)
//!
//! # Example
//!
//! ```rust,no_run
//! use workmanager_core::prelude::*;
//! use workmanager_core::generation::generate_colonists;
//! use workmanager_core::universe::vanilla_catalog;
//!
//! let catalog = vanilla_catalog().unwrap();
//! let mut manager = WorkManager::new(catalog, WorkManagerSettings::default());
//! let map = manager.add_map("Home");
//!
//! let mut rng = rand::thread_rng();
//! let catalog = manager.catalog().clone();
//! generate_colonists(manager.map_mut(map).unwrap(), 8, &catalog, &mut rng);
//!
//! // Run simulation
//! loop {
//!     manager.update();
//! }
//! ```

pub mod clock;
pub mod components;
pub mod engine;
pub mod generation;
pub mod persistence;
pub mod settings;
pub mod systems;
pub mod universe;

/// Commonly used types for convenient importing
pub mod prelude {
    pub use crate::clock::SimClock;
    pub use crate::components::*;
    pub use crate::engine::{ColonyMap, WorkManager};
    pub use crate::settings::WorkManagerSettings;
    pub use workmanager_logic::{AssignmentConfig, PriorityTable, WorkCatalog};
}
