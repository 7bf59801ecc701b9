//! Work catalog: static classification of the work-type universe.
//!
//! Built once from the host's universe and read-only afterwards:
//!
//! - **always-on**: firefighting, patient self-care, basic labor
//! - **fallback**: hauling and cleaning, kept for colonists in a mental break
//! - **medical** / **hunting**: individually special-cased types
//! - **general**: everything else
//!
//! Keys absent from the universe are simply left out of their set. A
//! universe without a `Doctor` or `Hunting` type turns the corresponding
//! pipeline pass into a no-op.

use std::collections::HashMap;
use std::fmt;

use crate::constants::work_type_keys;
use crate::work_types::{WorkTypeDef, WorkTypeId};

/// Classified, immutable view of the host's work types.
#[derive(Debug, Clone)]
pub struct WorkCatalog {
    defs: Vec<WorkTypeDef>,
    by_key: HashMap<String, WorkTypeId>,
    always_on: Vec<WorkTypeId>,
    fallback: Vec<WorkTypeId>,
    general: Vec<WorkTypeId>,
    skilled_general: Vec<WorkTypeId>,
    medical: Option<WorkTypeId>,
    hunting: Option<WorkTypeId>,
}

impl WorkCatalog {
    /// Classify a universe. Ids are assigned in universe order.
    pub fn new(universe: Vec<WorkTypeDef>) -> Result<Self, CatalogError> {
        if universe.len() > u16::MAX as usize {
            return Err(CatalogError::TooManyWorkTypes(universe.len()));
        }

        let mut by_key = HashMap::with_capacity(universe.len());
        for (idx, def) in universe.iter().enumerate() {
            if def.key.is_empty() {
                return Err(CatalogError::EmptyKey { index: idx });
            }
            if by_key
                .insert(def.key.clone(), WorkTypeId(idx as u16))
                .is_some()
            {
                return Err(CatalogError::DuplicateKey(def.key.clone()));
            }
        }

        let lookup = |key: &str| by_key.get(key).copied();
        let always_on: Vec<WorkTypeId> = work_type_keys::ALWAYS_ON
            .iter()
            .filter_map(|k| lookup(*k))
            .collect();
        let fallback: Vec<WorkTypeId> = work_type_keys::FALLBACK
            .iter()
            .filter_map(|k| lookup(*k))
            .collect();
        let medical = lookup(work_type_keys::DOCTOR);
        let hunting = lookup(work_type_keys::HUNTING);

        if medical.is_none() {
            log::warn!("Work catalog has no '{}' work type", work_type_keys::DOCTOR);
        }
        if hunting.is_none() {
            log::warn!("Work catalog has no '{}' work type", work_type_keys::HUNTING);
        }

        let general: Vec<WorkTypeId> = (0..universe.len())
            .map(|i| WorkTypeId(i as u16))
            .filter(|id| !always_on.contains(id) && Some(*id) != medical && Some(*id) != hunting)
            .collect();
        let skilled_general = general
            .iter()
            .copied()
            .filter(|id| universe[id.index()].has_relevant_skills())
            .collect();

        Ok(Self {
            defs: universe,
            by_key,
            always_on,
            fallback,
            general,
            skilled_general,
            medical,
            hunting,
        })
    }

    /// Number of work types in the universe.
    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    /// Every work type id in universe order.
    pub fn all(&self) -> impl Iterator<Item = WorkTypeId> + '_ {
        (0..self.defs.len()).map(|i| WorkTypeId(i as u16))
    }

    /// Definition for an id. Panics on an id from another catalog.
    pub fn def(&self, id: WorkTypeId) -> &WorkTypeDef {
        &self.defs[id.index()]
    }

    pub fn id_of(&self, key: &str) -> Option<WorkTypeId> {
        self.by_key.get(key).copied()
    }

    pub fn always_on_types(&self) -> &[WorkTypeId] {
        &self.always_on
    }

    pub fn fallback_types(&self) -> &[WorkTypeId] {
        &self.fallback
    }

    /// Universe minus always-on, medical, and hunting.
    pub fn general_types(&self) -> &[WorkTypeId] {
        &self.general
    }

    /// General types with at least one relevant skill.
    pub fn skilled_general_types(&self) -> &[WorkTypeId] {
        &self.skilled_general
    }

    pub fn medical(&self) -> Option<WorkTypeId> {
        self.medical
    }

    pub fn hunting(&self) -> Option<WorkTypeId> {
        self.hunting
    }

    pub fn hauling(&self) -> Option<WorkTypeId> {
        self.id_of(work_type_keys::HAULING)
    }

    pub fn cleaning(&self) -> Option<WorkTypeId> {
        self.id_of(work_type_keys::CLEANING)
    }

    pub fn is_always_on(&self, id: WorkTypeId) -> bool {
        self.always_on.contains(&id)
    }

    pub fn is_fallback(&self, id: WorkTypeId) -> bool {
        self.fallback.contains(&id)
    }

    /// Short label for log lines.
    pub fn label(&self, id: WorkTypeId) -> &str {
        &self.def(id).label
    }
}

/// Errors building a [`WorkCatalog`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    DuplicateKey(String),
    EmptyKey { index: usize },
    TooManyWorkTypes(usize),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::DuplicateKey(key) => write!(f, "Duplicate work type key '{}'", key),
            CatalogError::EmptyKey { index } => {
                write!(f, "Work type at index {} has an empty key", index)
            }
            CatalogError::TooManyWorkTypes(n) => {
                write!(f, "Work type universe too large: {} entries", n)
            }
        }
    }
}

impl std::error::Error for CatalogError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skills::Skill;

    fn universe() -> Vec<WorkTypeDef> {
        vec![
            WorkTypeDef::new("Firefighter", "fight fires", &[]),
            WorkTypeDef::new("Patient", "patient", &[]),
            WorkTypeDef::new("Doctor", "doctor", &[Skill::Medicine]),
            WorkTypeDef::new("PatientBedRest", "bed rest", &[]),
            WorkTypeDef::new("BasicWorker", "basic", &[]),
            WorkTypeDef::new("Hunting", "hunt", &[Skill::Shooting]),
            WorkTypeDef::new("Cooking", "cook", &[Skill::Cooking]),
            WorkTypeDef::new("Hauling", "haul", &[]),
            WorkTypeDef::new("Cleaning", "clean", &[]),
        ]
    }

    #[test]
    fn test_classification() {
        let catalog = WorkCatalog::new(universe()).unwrap();
        assert_eq!(catalog.len(), 9);
        assert_eq!(catalog.always_on_types().len(), 4);
        assert_eq!(catalog.medical(), Some(WorkTypeId(2)));
        assert_eq!(catalog.hunting(), Some(WorkTypeId(5)));
        assert_eq!(
            catalog.general_types(),
            &[WorkTypeId(6), WorkTypeId(7), WorkTypeId(8)]
        );
        assert_eq!(catalog.skilled_general_types(), &[WorkTypeId(6)]);
        assert_eq!(catalog.fallback_types(), &[WorkTypeId(7), WorkTypeId(8)]);
        assert!(catalog.is_fallback(WorkTypeId(7)));
        assert!(!catalog.is_fallback(WorkTypeId(6)));
        assert!(catalog.is_always_on(WorkTypeId(3)));
    }

    #[test]
    fn test_missing_special_types() {
        let catalog = WorkCatalog::new(vec![
            WorkTypeDef::new("Cooking", "cook", &[Skill::Cooking]),
            WorkTypeDef::new("Mining", "mine", &[Skill::Mining]),
        ])
        .unwrap();
        assert_eq!(catalog.medical(), None);
        assert_eq!(catalog.hunting(), None);
        assert_eq!(catalog.hauling(), None);
        assert!(catalog.always_on_types().is_empty());
        assert_eq!(catalog.general_types().len(), 2);
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let mut defs = universe();
        defs.push(WorkTypeDef::new("Cooking", "cook again", &[]));
        assert_eq!(
            WorkCatalog::new(defs).unwrap_err(),
            CatalogError::DuplicateKey("Cooking".into())
        );
    }

    #[test]
    fn test_empty_key_rejected() {
        let defs = vec![WorkTypeDef::new("", "nothing", &[])];
        assert_eq!(
            WorkCatalog::new(defs).unwrap_err(),
            CatalogError::EmptyKey { index: 0 }
        );
    }

    #[test]
    fn test_lookup_by_key() {
        let catalog = WorkCatalog::new(universe()).unwrap();
        let cooking = catalog.id_of("Cooking").unwrap();
        assert_eq!(catalog.def(cooking).label, "cook");
        assert_eq!(catalog.id_of("Smithing"), None);
        assert_eq!(catalog.all().count(), 9);
    }
}
