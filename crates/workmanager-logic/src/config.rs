//! Per-run assignment configuration.
//!
//! An immutable value read once at the start of a pipeline run. The mutable
//! store with load/save lives at the engine boundary; changing it only
//! affects the next run.

use serde::{Deserialize, Serialize};

/// Lower bound of the update interval setting.
pub const MIN_UPDATE_INTERVAL: u32 = 1;
/// Upper bound of the update interval setting.
pub const MAX_UPDATE_INTERVAL: u32 = 120;

/// Toggles controlling pipeline behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssignmentConfig {
    /// Advisory recompute interval in in-game hours. Recomputation is
    /// gated on the hour changing, not on this value.
    pub update_interval: u32,
    /// Promote extra doctors until they cover every downed colonist.
    pub assign_multiple_doctors: bool,
    /// Give every able colonist every remaining general work type at
    /// priority 4 instead of covering each leftover type once.
    pub assign_all_work_types: bool,
    /// Every able colonist hauls.
    pub all_haulers: bool,
    /// Every able colonist cleans.
    pub all_cleaners: bool,
}

impl Default for AssignmentConfig {
    fn default() -> Self {
        Self {
            update_interval: 24,
            assign_multiple_doctors: true,
            assign_all_work_types: false,
            all_haulers: true,
            all_cleaners: true,
        }
    }
}

impl AssignmentConfig {
    /// Copy with the update interval clamped into its legal range.
    pub fn validated(mut self) -> Self {
        self.update_interval = self
            .update_interval
            .clamp(MIN_UPDATE_INTERVAL, MAX_UPDATE_INTERVAL);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AssignmentConfig::default();
        assert_eq!(config.update_interval, 24);
        assert!(config.assign_multiple_doctors);
        assert!(!config.assign_all_work_types);
        assert!(config.all_haulers);
        assert!(config.all_cleaners);
    }

    #[test]
    fn test_validated_clamps_interval() {
        let low = AssignmentConfig {
            update_interval: 0,
            ..Default::default()
        };
        assert_eq!(low.validated().update_interval, 1);

        let high = AssignmentConfig {
            update_interval: 500,
            ..Default::default()
        };
        assert_eq!(high.validated().update_interval, 120);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: AssignmentConfig =
            serde_json::from_str(r#"{ "assign_all_work_types": true }"#).unwrap();
        assert!(config.assign_all_work_types);
        assert!(config.assign_multiple_doctors);
        assert_eq!(config.update_interval, 24);
    }
}
