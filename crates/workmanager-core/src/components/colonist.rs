//! Colonist components: Colonist, Name, Condition, Traits, Spawned.

use serde::{Deserialize, Serialize};
use workmanager_logic::worker::WorkerId;

/// Identifies an entity as a colonist and records its standing in the colony.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Colonist {
    pub id: WorkerId,
    pub standing: Standing,
}

impl Colonist {
    pub fn free(id: WorkerId) -> Self {
        Self {
            id,
            standing: Standing::Free,
        }
    }

    /// Free colonists are the only ones whose work is managed.
    pub fn is_free(&self) -> bool {
        self.standing == Standing::Free
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Standing {
    Free,
    Prisoner,
    Guest,
}

/// Marker: the colonist is physically present on this map.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Spawned;

/// Colonist name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Name {
    pub given: String,
    pub family: String,
    pub nickname: Option<String>,
}

impl Name {
    pub fn new(given: impl Into<String>, family: impl Into<String>) -> Self {
        Self {
            given: given.into(),
            family: family.into(),
            nickname: None,
        }
    }

    pub fn with_nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = Some(nickname.into());
        self
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.given, self.family)
    }

    /// Short label used in logs and notifications.
    pub fn display_name(&self) -> &str {
        self.nickname.as_deref().unwrap_or(&self.given)
    }
}

/// Health and behavior state relevant to work assignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    pub dead: bool,
    pub downed: bool,
    pub mental_break: bool,
    pub drafted: bool,
    /// Has no job right now
    pub idle: bool,
}

impl Condition {
    pub fn healthy() -> Self {
        Self::default()
    }

    pub fn idle() -> Self {
        Self {
            idle: true,
            ..Self::default()
        }
    }
}

/// Traits affecting assignment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Traits {
    /// Prefers melee; never hunts
    pub brawler: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_prefers_nickname() {
        let name = Name::new("Rosalind", "Vega");
        assert_eq!(name.display_name(), "Rosalind");
        assert_eq!(name.full_name(), "Rosalind Vega");

        let name = name.with_nickname("Roz");
        assert_eq!(name.display_name(), "Roz");
    }

    #[test]
    fn test_standing() {
        assert!(Colonist::free(WorkerId(1)).is_free());
        let prisoner = Colonist {
            id: WorkerId(2),
            standing: Standing::Prisoner,
        };
        assert!(!prisoner.is_free());
    }
}
