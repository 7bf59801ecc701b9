//! Generation - random colonists for tests, benchmarks and the harness.

mod colonists;
mod names;

pub use colonists::*;
pub use names::*;
