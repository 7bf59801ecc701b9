//! Component definitions for colony maps.
//!
//! Components are pure data structs attached to colonist entities.
//! They have no behavior - that lives in systems.

mod colonist;
mod work;

pub use colonist::*;
pub use work::*;

pub use workmanager_logic::skills::SkillSet;
