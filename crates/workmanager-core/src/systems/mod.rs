//! Systems - logic that operates on components

mod work_priorities;

pub use work_priorities::*;
