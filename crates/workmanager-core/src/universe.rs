//! Work-type universes loaded from JSON.
//!
//! The vanilla universe ships with the crate in `data/work_types.json`.
//! Hosts with modded work types load their own file with [`load_universe`].

use serde::{Deserialize, Serialize};
use std::io::Read;

use workmanager_logic::catalog::{CatalogError, WorkCatalog};
use workmanager_logic::work_types::WorkTypeDef;

static VANILLA_JSON: &str = include_str!("../../../data/work_types.json");

/// A named, ordered list of work type definitions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Universe {
    pub name: String,
    pub work_types: Vec<WorkTypeDef>,
}

impl Universe {
    /// Build the catalog for this universe.
    pub fn into_catalog(self) -> Result<WorkCatalog, UniverseError> {
        Ok(WorkCatalog::new(self.work_types)?)
    }
}

/// Parse a universe from a JSON reader.
pub fn load_universe<R: Read>(reader: R) -> Result<Universe, UniverseError> {
    Ok(serde_json::from_reader(reader)?)
}

/// The bundled vanilla universe.
pub fn vanilla_universe() -> Result<Universe, UniverseError> {
    Ok(serde_json::from_str(VANILLA_JSON)?)
}

/// Catalog for the bundled vanilla universe.
pub fn vanilla_catalog() -> Result<WorkCatalog, UniverseError> {
    vanilla_universe()?.into_catalog()
}

/// Errors that can occur while loading a universe
#[derive(Debug)]
pub enum UniverseError {
    Json(serde_json::Error),
    Catalog(CatalogError),
}

impl From<serde_json::Error> for UniverseError {
    fn from(e: serde_json::Error) -> Self {
        UniverseError::Json(e)
    }
}

impl From<CatalogError> for UniverseError {
    fn from(e: CatalogError) -> Self {
        UniverseError::Catalog(e)
    }
}

impl std::fmt::Display for UniverseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UniverseError::Json(e) => write!(f, "Universe parse error: {}", e),
            UniverseError::Catalog(e) => write!(f, "Invalid universe: {}", e),
        }
    }
}

impl std::error::Error for UniverseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vanilla_catalog_loads() {
        let catalog = vanilla_catalog().unwrap();
        assert_eq!(catalog.len(), 20);
        assert!(catalog.medical().is_some());
        assert!(catalog.hunting().is_some());
        assert_eq!(catalog.always_on_types().len(), 4);
        assert_eq!(catalog.fallback_types().len(), 2);
        // 20 minus 4 always-on, Doctor and Hunting
        assert_eq!(catalog.general_types().len(), 14);
    }

    #[test]
    fn test_load_custom_universe() {
        let json = r#"{
            "name": "Tiny",
            "work_types": [
                { "key": "Doctor", "label": "doctor", "relevant_skills": ["Medicine"] },
                { "key": "Hauling", "label": "haul" }
            ]
        }"#;
        let universe = load_universe(json.as_bytes()).unwrap();
        assert_eq!(universe.name, "Tiny");
        let catalog = universe.into_catalog().unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(catalog.hunting().is_none());
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let json = r#"{
            "name": "Broken",
            "work_types": [
                { "key": "Hauling", "label": "haul" },
                { "key": "Hauling", "label": "haul again" }
            ]
        }"#;
        let result = load_universe(json.as_bytes()).unwrap().into_catalog();
        assert!(matches!(result, Err(UniverseError::Catalog(_))));
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(matches!(
            load_universe("{ not json".as_bytes()),
            Err(UniverseError::Json(_))
        ));
    }
}
