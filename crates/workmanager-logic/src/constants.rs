//! Assignment constants: priority levels and well-known work-type keys.
//!
//! These are plain `u8` / `&str` constants so the engine, the harness, and
//! saved data can all agree on them without extra types.

pub mod priorities {
    /// Work type switched off for the worker.
    pub const DISABLED: u8 = 0;
    pub const HIGHEST: u8 = 1;
    pub const MAJOR_PASSION: u8 = 2;
    pub const MINOR_PASSION: u8 = 3;
    /// Leftover coverage, idle fallback, always-include hauling/cleaning.
    pub const LOWEST: u8 = 4;
    /// Hauling/cleaning while in a mental break.
    pub const MENTAL_FALLBACK: u8 = 2;
    /// Every other general work type while in a mental break.
    pub const MENTAL_OTHER: u8 = 3;

    /// Whether a raw value is a legal priority.
    pub fn is_valid(priority: u8) -> bool {
        priority <= LOWEST
    }
}

pub mod work_type_keys {
    pub const FIREFIGHTER: &str = "Firefighter";
    pub const PATIENT: &str = "Patient";
    pub const PATIENT_BED_REST: &str = "PatientBedRest";
    pub const BASIC_WORKER: &str = "BasicWorker";
    pub const HAULING: &str = "Hauling";
    pub const CLEANING: &str = "Cleaning";
    pub const DOCTOR: &str = "Doctor";
    pub const HUNTING: &str = "Hunting";

    /// Emergency and self-care work every able colonist always does.
    pub const ALWAYS_ON: [&str; 4] = [FIREFIGHTER, PATIENT, PATIENT_BED_REST, BASIC_WORKER];

    /// Minimal work kept for colonists in a degraded state.
    pub const FALLBACK: [&str; 2] = [HAULING, CLEANING];
}
