//! Mutable settings store for the work manager.
//!
//! Changes made here take effect on the next recompute: each run works on
//! the immutable [`AssignmentConfig`] returned by [`WorkManagerSettings::snapshot`].

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use workmanager_logic::config::AssignmentConfig;

/// User-facing settings, persisted as JSON.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkManagerSettings {
    config: AssignmentConfig,
}

impl WorkManagerSettings {
    pub fn new(config: AssignmentConfig) -> Self {
        Self { config }
    }

    /// Load settings from JSON. Missing fields keep their defaults.
    pub fn load<R: Read>(reader: R) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_reader(reader)?;
        Ok(settings)
    }

    pub fn save<W: Write>(&self, writer: W) -> Result<(), SettingsError> {
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    pub fn load_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let file = File::open(path)?;
        Self::load(BufReader::new(file))
    }

    pub fn save_file(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.save(&mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Validated copy of the current configuration for one run.
    pub fn snapshot(&self) -> AssignmentConfig {
        self.config.validated()
    }

    /// Raw stored configuration, as last set.
    pub fn config(&self) -> &AssignmentConfig {
        &self.config
    }

    pub fn replace(&mut self, config: AssignmentConfig) {
        self.config = config;
    }

    pub fn set_update_interval(&mut self, hours: u32) {
        self.config.update_interval = hours;
    }

    pub fn set_assign_multiple_doctors(&mut self, enabled: bool) {
        self.config.assign_multiple_doctors = enabled;
    }

    pub fn set_assign_all_work_types(&mut self, enabled: bool) {
        self.config.assign_all_work_types = enabled;
    }

    pub fn set_all_haulers(&mut self, enabled: bool) {
        self.config.all_haulers = enabled;
    }

    pub fn set_all_cleaners(&mut self, enabled: bool) {
        self.config.all_cleaners = enabled;
    }
}

/// Errors that can occur while loading or saving settings
#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        SettingsError::Io(e)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Json(e)
    }
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {}", e),
            SettingsError::Json(e) => write!(f, "Settings format error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = WorkManagerSettings::default();
        let config = settings.snapshot();
        assert_eq!(config.update_interval, 24);
        assert!(config.assign_multiple_doctors);
        assert!(!config.assign_all_work_types);
        assert!(config.all_haulers);
        assert!(config.all_cleaners);
    }

    #[test]
    fn test_save_load_roundtrip() {
        let mut settings = WorkManagerSettings::default();
        settings.set_update_interval(6);
        settings.set_all_cleaners(false);

        let mut buffer = Vec::new();
        settings.save(&mut buffer).unwrap();
        let loaded = WorkManagerSettings::load(&buffer[..]).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let loaded = WorkManagerSettings::load(r#"{ "assign_all_work_types": true }"#.as_bytes())
            .unwrap();
        let config = loaded.snapshot();
        assert!(config.assign_all_work_types);
        assert_eq!(config.update_interval, 24);
        assert!(config.all_haulers);
    }

    #[test]
    fn test_snapshot_clamps_interval() {
        let mut settings = WorkManagerSettings::default();
        settings.set_update_interval(500);
        assert_eq!(settings.config().update_interval, 500);
        assert_eq!(settings.snapshot().update_interval, 120);
        settings.set_update_interval(0);
        assert_eq!(settings.snapshot().update_interval, 1);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut settings = WorkManagerSettings::default();
        let before = settings.snapshot();
        settings.set_assign_multiple_doctors(false);
        assert!(before.assign_multiple_doctors);
        assert!(!settings.snapshot().assign_multiple_doctors);
    }

    #[test]
    fn test_bad_json_is_error() {
        let result = WorkManagerSettings::load("[1, 2".as_bytes());
        assert!(matches!(result, Err(SettingsError::Json(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = WorkManagerSettings::load_file("/nonexistent/workmanager/settings.json");
        assert!(matches!(result, Err(SettingsError::Io(_))));
    }

    #[test]
    fn test_replace_swaps_whole_config() {
        let mut settings = WorkManagerSettings::default();
        settings.replace(AssignmentConfig {
            update_interval: 12,
            assign_multiple_doctors: false,
            assign_all_work_types: true,
            all_haulers: false,
            all_cleaners: false,
        });
        let config = settings.snapshot();
        assert_eq!(config.update_interval, 12);
        assert!(!config.assign_multiple_doctors);
        assert!(config.assign_all_work_types);
        assert!(!config.all_haulers);
        assert!(!config.all_cleaners);
    }

    #[test]
    fn test_file_roundtrip() {
        let path = std::env::temp_dir().join(format!(
            "workmanager-settings-{}.json",
            std::process::id()
        ));
        let mut settings = WorkManagerSettings::default();
        settings.set_update_interval(48);
        settings.set_assign_multiple_doctors(false);

        settings.save_file(&path).unwrap();
        let loaded = WorkManagerSettings::load_file(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded.unwrap(), settings);
    }
}
