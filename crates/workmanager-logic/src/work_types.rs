//! Host work-type definitions.
//!
//! The host owns the universe of work types; this crate only refers to them
//! through the dense [`WorkTypeId`] handed out by
//! [`WorkCatalog`](crate::catalog::WorkCatalog) in universe order.

use serde::{Deserialize, Serialize};

use crate::skills::Skill;

/// Dense index of a work type within its catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WorkTypeId(pub u16);

impl WorkTypeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A category of labor as defined by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkTypeDef {
    /// Unique key (e.g. `"Doctor"`).
    pub key: String,
    /// Short display label (e.g. `"doctor"`).
    pub label: String,
    /// Skills whose levels and passions drive assignment. May be empty.
    #[serde(default)]
    pub relevant_skills: Vec<Skill>,
}

impl WorkTypeDef {
    pub fn new(key: &str, label: &str, relevant_skills: &[Skill]) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            relevant_skills: relevant_skills.to_vec(),
        }
    }

    pub fn has_relevant_skills(&self) -> bool {
        !self.relevant_skills.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_without_skills() {
        let def: WorkTypeDef =
            serde_json::from_str(r#"{ "key": "Hauling", "label": "haul" }"#).unwrap();
        assert_eq!(def.key, "Hauling");
        assert!(!def.has_relevant_skills());
    }

    #[test]
    fn test_deserialize_with_skills() {
        let def: WorkTypeDef = serde_json::from_str(
            r#"{ "key": "Smithing", "label": "smith", "relevant_skills": ["Crafting"] }"#,
        )
        .unwrap();
        assert_eq!(def.relevant_skills, vec![Skill::Crafting]);
    }
}
